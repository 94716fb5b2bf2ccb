use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::domain::{QuizResult, StoredQuizResult},
    store::DataStore,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn create(&self, result: QuizResult) -> AppResult<StoredQuizResult>;
    async fn list(&self) -> AppResult<Vec<StoredQuizResult>>;
}

pub struct HttpResultRepository {
    store: Arc<DataStore>,
    data_type: String,
}

impl HttpResultRepository {
    pub fn new(store: Arc<DataStore>, data_type: String) -> Self {
        Self { store, data_type }
    }

    fn description(result: &QuizResult) -> String {
        format!(
            "Result for {} on quiz {}",
            result.user_name, result.quiz_title
        )
    }
}

#[async_trait]
impl ResultRepository for HttpResultRepository {
    async fn create(&self, result: QuizResult) -> AppResult<StoredQuizResult> {
        let id = self
            .store
            .insert(&self.data_type, &Self::description(&result), &result)
            .await?;
        Ok(StoredQuizResult { id, result })
    }

    async fn list(&self) -> AppResult<Vec<StoredQuizResult>> {
        let records = self.store.list_owned::<QuizResult>(&self.data_type).await?;
        Ok(records
            .into_iter()
            .map(|r| StoredQuizResult {
                id: r.id,
                result: r.json_data,
            })
            .collect())
    }
}
