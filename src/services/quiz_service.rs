use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Quiz,
        dto::{QuizDto, SaveQuizRequest},
    },
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<QuizDto> {
        let stored = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(stored.into())
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<QuizDto>> {
        let quizzes = self.repository.list().await?;
        Ok(quizzes.into_iter().map(QuizDto::from).collect())
    }

    pub async fn create_quiz(&self, request: SaveQuizRequest) -> AppResult<QuizDto> {
        request.validate()?;
        let quiz: Quiz = request.into();
        Self::validate_questions(&quiz)?;

        let stored = self.repository.create(quiz).await?;
        log::info!("created quiz '{}' ({})", stored.quiz.title, stored.id);
        Ok(stored.into())
    }

    pub async fn update_quiz(&self, id: &str, request: SaveQuizRequest) -> AppResult<QuizDto> {
        request.validate()?;
        let quiz: Quiz = request.into();
        Self::validate_questions(&quiz)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        let stored = self.repository.update(id, quiz).await?;
        log::info!("updated quiz '{}' ({})", stored.quiz.title, stored.id);
        Ok(stored.into())
    }

    /// Invariants the validator derive cannot express: each question needs a
    /// non-blank prompt, at least two options, and at least one correct one.
    fn validate_questions(quiz: &Quiz) -> AppResult<()> {
        for (index, question) in quiz.questions.iter().enumerate() {
            if question.question.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "question {} has no prompt text",
                    index + 1
                )));
            }
            if question.answer_options.len() < 2 {
                return Err(AppError::ValidationError(format!(
                    "question {} needs at least two answer options",
                    index + 1
                )));
            }
            if !question.answer_options.iter().any(|opt| opt.is_correct) {
                return Err(AppError::ValidationError(format!(
                    "question {} has no correct answer option",
                    index + 1
                )));
            }
        }
        Ok(())
    }
}
