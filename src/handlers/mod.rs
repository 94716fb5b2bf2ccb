pub mod health_handler;
pub mod quiz_handler;
pub mod result_handler;

pub use health_handler::health_check;
pub use quiz_handler::{create_quiz, get_quiz, list_quizzes, update_quiz};
pub use result_handler::{list_results, submit_quiz};
