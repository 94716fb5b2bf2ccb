use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One respondent's completed run through a quiz.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_id: String,
    /// Title snapshot, so results stay readable if the quiz is edited later.
    pub quiz_title: String,
    pub user_name: String,
    pub score: u32,
    pub total_questions: u32,
    pub answers: Vec<UserAnswer>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub question_index: usize,
    pub question: String,
    pub selected_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// A result paired with the id the document store assigned to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredQuizResult {
    pub id: String,
    pub result: QuizResult,
}
