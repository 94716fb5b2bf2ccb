use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::QuizResult,
        dto::{QuizResultDto, SubmitQuizRequest, SubmitQuizResponse},
    },
    repositories::{QuizRepository, ResultRepository},
    services::grading::GradingService,
};

pub struct ResultService {
    quiz_repository: Arc<dyn QuizRepository>,
    result_repository: Arc<dyn ResultRepository>,
}

impl ResultService {
    pub fn new(
        quiz_repository: Arc<dyn QuizRepository>,
        result_repository: Arc<dyn ResultRepository>,
    ) -> Self {
        Self {
            quiz_repository,
            result_repository,
        }
    }

    /// Grade a submitted run and record the result. The score is computed
    /// here from the stored quiz, never taken from the client.
    pub async fn submit(&self, request: SubmitQuizRequest) -> AppResult<SubmitQuizResponse> {
        request.validate()?;
        if request.user_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "userName must not be blank".to_string(),
            ));
        }

        let stored = self
            .quiz_repository
            .find_by_id(&request.quiz_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Quiz with id '{}' not found", request.quiz_id))
            })?;

        let (score, answers) = GradingService::grade(&stored.quiz, &request.selections)?;
        let total_questions = stored.quiz.questions.len() as u32;

        let result = QuizResult {
            quiz_id: stored.id,
            quiz_title: stored.quiz.title,
            user_name: request.user_name.trim().to_string(),
            score,
            total_questions,
            answers,
            submitted_at: Utc::now(),
        };

        let recorded = self.result_repository.create(result).await?;
        log::info!(
            "recorded result {} for '{}': {}/{}",
            recorded.id,
            recorded.result.user_name,
            score,
            total_questions
        );

        Ok(SubmitQuizResponse {
            id: recorded.id,
            score,
            total_questions,
            percentage: GradingService::percentage(score, total_questions),
            passed: GradingService::passed(score, total_questions),
            answers: recorded.result.answers,
        })
    }

    pub async fn list_results(&self) -> AppResult<Vec<QuizResultDto>> {
        let results = self.result_repository.list().await?;
        Ok(results.into_iter().map(QuizResultDto::from).collect())
    }
}
