use serde::{Deserialize, Serialize};

/// A quiz as authored in the admin screen and persisted in the document
/// store. Field names follow the wire format the browser client speaks.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub answer_options: Vec<AnswerOption>,
    /// Helper text shown on request while taking the quiz. May be empty.
    #[serde(default)]
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub text: String,
    /// Shown to the respondent after answering, right or wrong.
    pub rationale: String,
    pub is_correct: bool,
}

/// A quiz paired with the id the document store assigned to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredQuiz {
    pub id: String,
    pub quiz: Quiz,
}

impl Question {
    /// Text of the first option flagged correct, used when recording what
    /// the respondent should have answered. Questions are validated to have
    /// a correct option before storage, but stored data is not trusted.
    pub fn correct_answer_text(&self) -> &str {
        self.answer_options
            .iter()
            .find(|opt| opt.is_correct)
            .map(|opt| opt.text.as_str())
            .unwrap_or("N/A")
    }
}
