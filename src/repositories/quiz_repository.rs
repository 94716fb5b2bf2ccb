use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::domain::{Quiz, StoredQuiz},
    store::DataStore,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<StoredQuiz>>;
    async fn list(&self) -> AppResult<Vec<StoredQuiz>>;
    async fn create(&self, quiz: Quiz) -> AppResult<StoredQuiz>;
    async fn update(&self, id: &str, quiz: Quiz) -> AppResult<StoredQuiz>;
}

pub struct HttpQuizRepository {
    store: Arc<DataStore>,
    data_type: String,
}

impl HttpQuizRepository {
    pub fn new(store: Arc<DataStore>, data_type: String) -> Self {
        Self { store, data_type }
    }

    fn description(quiz: &Quiz) -> String {
        format!("Quiz: {}", quiz.title)
    }
}

#[async_trait]
impl QuizRepository for HttpQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<StoredQuiz>> {
        let record = self.store.fetch_one::<Quiz>(&self.data_type, id).await?;
        Ok(record.map(|r| StoredQuiz {
            id: r.id,
            quiz: r.json_data,
        }))
    }

    async fn list(&self) -> AppResult<Vec<StoredQuiz>> {
        let records = self.store.list_owned::<Quiz>(&self.data_type).await?;
        Ok(records
            .into_iter()
            .map(|r| StoredQuiz {
                id: r.id,
                quiz: r.json_data,
            })
            .collect())
    }

    async fn create(&self, quiz: Quiz) -> AppResult<StoredQuiz> {
        let id = self
            .store
            .insert(&self.data_type, &Self::description(&quiz), &quiz)
            .await?;
        Ok(StoredQuiz { id, quiz })
    }

    async fn update(&self, id: &str, quiz: Quiz) -> AppResult<StoredQuiz> {
        self.store
            .replace(&self.data_type, id, &Self::description(&quiz), &quiz)
            .await?;
        Ok(StoredQuiz {
            id: id.to_string(),
            quiz,
        })
    }
}
