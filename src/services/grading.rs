use crate::errors::{AppError, AppResult};
use crate::models::domain::{Quiz, UserAnswer};

/// Stateless grading of a completed quiz run. A selection is correct iff
/// the chosen option carries the correct flag; the score is the count of
/// correct selections.
pub struct GradingService;

impl GradingService {
    /// Grade one selected option index per question, in quiz order.
    pub fn grade(quiz: &Quiz, selections: &[usize]) -> AppResult<(u32, Vec<UserAnswer>)> {
        if selections.len() != quiz.questions.len() {
            return Err(AppError::BadRequest(format!(
                "expected {} selections, got {}",
                quiz.questions.len(),
                selections.len()
            )));
        }

        let mut score: u32 = 0;
        let mut answers = Vec::with_capacity(selections.len());

        for (index, (question, &selected)) in
            quiz.questions.iter().zip(selections.iter()).enumerate()
        {
            let option = question.answer_options.get(selected).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "selection {} out of range for question {} ({} options)",
                    selected,
                    index,
                    question.answer_options.len()
                ))
            })?;

            if option.is_correct {
                score += 1;
            }

            answers.push(UserAnswer {
                question_index: index,
                question: question.question.clone(),
                selected_answer: option.text.clone(),
                correct_answer: question.correct_answer_text().to_string(),
                is_correct: option.is_correct,
            });
        }

        Ok((score, answers))
    }

    /// The pass mark is 50 percent; an exact half score passes.
    pub fn passed(score: u32, total_questions: u32) -> bool {
        score * 2 >= total_questions
    }

    pub fn percentage(score: u32, total_questions: u32) -> f64 {
        if total_questions == 0 {
            return 0.0;
        }
        (score as f64 / total_questions as f64) * 100.0
    }
}
