#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use quizlink_server::{
    config::Config,
    errors::AppResult,
    models::domain::{AnswerOption, Question, Quiz, QuizResult, StoredQuiz, StoredQuizResult},
    repositories::{QuizRepository, ResultRepository},
};

pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
    next_id: Arc<RwLock<u64>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    async fn assign_id(&self) -> String {
        let mut next = self.next_id.write().await;
        let id = format!("quiz-{}", *next);
        *next += 1;
        id
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<StoredQuiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned().map(|quiz| StoredQuiz {
            id: id.to_string(),
            quiz,
        }))
    }

    async fn list(&self) -> AppResult<Vec<StoredQuiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<StoredQuiz> = quizzes
            .iter()
            .map(|(id, quiz)| StoredQuiz {
                id: id.clone(),
                quiz: quiz.clone(),
            })
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    async fn create(&self, quiz: Quiz) -> AppResult<StoredQuiz> {
        let id = self.assign_id().await;
        let mut quizzes = self.quizzes.write().await;
        quizzes.insert(id.clone(), quiz.clone());
        Ok(StoredQuiz { id, quiz })
    }

    async fn update(&self, id: &str, quiz: Quiz) -> AppResult<StoredQuiz> {
        let mut quizzes = self.quizzes.write().await;
        quizzes.insert(id.to_string(), quiz.clone());
        Ok(StoredQuiz {
            id: id.to_string(),
            quiz,
        })
    }
}

pub struct InMemoryResultRepository {
    results: Arc<RwLock<Vec<StoredQuizResult>>>,
}

impl InMemoryResultRepository {
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultRepository {
    async fn create(&self, result: QuizResult) -> AppResult<StoredQuizResult> {
        let mut results = self.results.write().await;
        let stored = StoredQuizResult {
            id: format!("result-{}", results.len() + 1),
            result,
        };
        results.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> AppResult<Vec<StoredQuizResult>> {
        let results = self.results.read().await;
        Ok(results.clone())
    }
}

pub fn option(text: &str, correct: bool) -> AnswerOption {
    AnswerOption {
        text: text.to_string(),
        rationale: String::new(),
        is_correct: correct,
    }
}

/// Two-question quiz; the correct options are 0 and 1.
pub fn two_question_quiz(title: &str) -> Quiz {
    Quiz {
        title: title.to_string(),
        questions: vec![
            Question {
                question: "First?".to_string(),
                answer_options: vec![option("yes", true), option("no", false)],
                hint: String::new(),
            },
            Question {
                question: "Second?".to_string(),
                answer_options: vec![option("yes", false), option("no", true)],
                hint: String::new(),
            },
        ],
    }
}

pub fn test_config() -> Config {
    Config {
        store_base_url: "http://localhost:3030".to_string(),
        store_bearer_token: SecretString::from("test_token".to_string()),
        quiz_data_type: "quizlink_quiz_test".to_string(),
        result_data_type: "quizlink_result_test".to_string(),
        app_identifier: "quizlink-test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        cors_allowed_origin: None,
    }
}
