use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{Question, Quiz};

/// Body for both quiz creation and quiz replacement.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveQuizRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "quiz must have at least one question"))]
    pub questions: Vec<Question>,
}

impl From<SaveQuizRequest> for Quiz {
    fn from(request: SaveQuizRequest) -> Self {
        Quiz {
            title: request.title,
            questions: request.questions,
        }
    }
}

/// A respondent's completed run: one selected option index per question,
/// in quiz order. The server grades it; clients never report scores.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    #[validate(length(min = 1, message = "quizId must not be empty"))]
    pub quiz_id: String,

    #[validate(length(min = 1, max = 200, message = "userName must be 1-200 characters"))]
    pub user_name: String,

    pub selections: Vec<usize>,
}
