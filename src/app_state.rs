use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{HttpQuizRepository, HttpResultRepository, QuizRepository, ResultRepository},
    services::{QuizService, ResultService},
    store::DataStore,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub result_service: Arc<ResultService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = Arc::new(DataStore::new(&config));

        let quiz_repository: Arc<dyn QuizRepository> = Arc::new(HttpQuizRepository::new(
            Arc::clone(&store),
            config.quiz_data_type.clone(),
        ));
        let result_repository: Arc<dyn ResultRepository> = Arc::new(HttpResultRepository::new(
            Arc::clone(&store),
            config.result_data_type.clone(),
        ));

        Self::with_repositories(config, quiz_repository, result_repository)
    }

    /// Wire the state from explicit repositories. Tests use this to swap in
    /// in-memory repositories.
    pub fn with_repositories(
        config: Config,
        quiz_repository: Arc<dyn QuizRepository>,
        result_repository: Arc<dyn ResultRepository>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(Arc::clone(&quiz_repository)));
        let result_service = Arc::new(ResultService::new(quiz_repository, result_repository));

        Self {
            quiz_service,
            result_service,
            config: Arc::new(config),
        }
    }
}
