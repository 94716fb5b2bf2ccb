pub mod request;
pub mod response;

pub use request::{SaveQuizRequest, SubmitQuizRequest};
pub use response::{QuizDto, QuizResultDto, SubmitQuizResponse};
