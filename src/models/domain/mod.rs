pub mod quiz;
pub mod quiz_result;

pub use quiz::{AnswerOption, Question, Quiz, StoredQuiz};
pub use quiz_result::{QuizResult, StoredQuizResult, UserAnswer};
