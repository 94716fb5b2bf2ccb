use crate::models::domain::{AnswerOption, Question, Quiz};
use crate::models::dto::SaveQuizRequest;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub fn option(text: &str, rationale: &str, is_correct: bool) -> AnswerOption {
        AnswerOption {
            text: text.to_string(),
            rationale: rationale.to_string(),
            is_correct,
        }
    }

    /// Three-question quiz; the correct options are 0, 1, 0.
    pub fn sample_quiz() -> Quiz {
        Quiz {
            title: "Basic arithmetic".to_string(),
            questions: vec![
                Question {
                    question: "2 + 2?".to_string(),
                    answer_options: vec![
                        option("4", "Two plus two is four.", true),
                        option("5", "Off by one.", false),
                    ],
                    hint: "count on your fingers".to_string(),
                },
                Question {
                    question: "3 * 3?".to_string(),
                    answer_options: vec![
                        option("6", "That is 3 + 3.", false),
                        option("9", "Three times three.", true),
                        option("12", "That is 3 * 4.", false),
                    ],
                    hint: String::new(),
                },
                Question {
                    question: "10 / 2?".to_string(),
                    answer_options: vec![
                        option("5", "Half of ten.", true),
                        option("2", "That is 10 / 5.", false),
                    ],
                    hint: String::new(),
                },
            ],
        }
    }

    /// A valid creation request matching [`sample_quiz`].
    pub fn save_request() -> SaveQuizRequest {
        let quiz = sample_quiz();
        SaveQuizRequest {
            title: quiz.title,
            questions: quiz.questions,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_sample_quiz_is_valid_shape() {
        let quiz = sample_quiz();

        assert_eq!(quiz.questions.len(), 3);
        for question in &quiz.questions {
            assert!(question.answer_options.len() >= 2);
            assert!(question.answer_options.iter().any(|o| o.is_correct));
        }
    }

    #[test]
    fn test_save_request_matches_sample_quiz() {
        let request = save_request();
        assert_eq!(request.title, sample_quiz().title);
        assert_eq!(request.questions.len(), 3);
    }
}
