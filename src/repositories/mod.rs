pub mod quiz_repository;
pub mod result_repository;

pub use quiz_repository::{HttpQuizRepository, QuizRepository};
pub use result_repository::{HttpResultRepository, ResultRepository};

#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
#[cfg(test)]
pub use result_repository::MockResultRepository;
