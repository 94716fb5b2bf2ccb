use serde::Serialize;

use crate::models::domain::{Question, QuizResult, StoredQuiz, StoredQuizResult, UserAnswer};

#[derive(Debug, Clone, Serialize)]
pub struct QuizDto {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

impl From<StoredQuiz> for QuizDto {
    fn from(stored: StoredQuiz) -> Self {
        QuizDto {
            id: stored.id,
            title: stored.quiz.title,
            questions: stored.quiz.questions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResultDto {
    pub id: String,
    #[serde(flatten)]
    pub result: QuizResult,
}

impl From<StoredQuizResult> for QuizResultDto {
    fn from(stored: StoredQuizResult) -> Self {
        QuizResultDto {
            id: stored.id,
            result: stored.result,
        }
    }
}

/// What the respondent sees after submitting: their graded run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizResponse {
    pub id: String,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: f64,
    pub passed: bool,
    pub answers: Vec<UserAnswer>,
}
