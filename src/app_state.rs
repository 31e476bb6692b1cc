use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    models::domain::TopicCatalog,
    repositories::{FileQuestionRepository, MongoQuestionRepository, QuestionRepository},
    services::{
        generator_service::{OpenAiQuestionGenerator, QuestionGenerator},
        question_service::QuestionService,
        session_service::SessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<TopicCatalog>,
    pub question_service: Arc<QuestionService>,
    pub session_service: Arc<SessionService>,
    pub database: Option<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires storage and generation from configuration. MongoDB is used
    /// unless file storage is requested or the server cannot be reached.
    pub async fn new(config: Config) -> Self {
        let catalog = Arc::new(TopicCatalog::builtin());
        let generator: Arc<dyn QuestionGenerator> =
            Arc::new(OpenAiQuestionGenerator::new(&config, catalog.clone()));
        let file_store: Arc<dyn QuestionRepository> =
            Arc::new(FileQuestionRepository::new(&config.questions_file));

        if config.use_file_storage {
            log::info!("Using file storage at {}", config.questions_file);
            let service = QuestionService::new(catalog.clone(), file_store, generator);
            return Self::from_parts(config, catalog, service, None);
        }

        match Database::connect(&config).await {
            Ok(db) => {
                let mongo_store = MongoQuestionRepository::new(&db, &config.questions_collection);
                if let Err(e) = mongo_store.ensure_indexes().await {
                    log::warn!("Could not create question indexes: {}", e);
                }
                let service = QuestionService::new(catalog.clone(), Arc::new(mongo_store), generator)
                    .with_fallback(file_store);
                Self::from_parts(config, catalog, service, Some(db))
            }
            Err(e) => {
                log::warn!(
                    "MongoDB unavailable ({}), using file storage at {}",
                    e,
                    config.questions_file
                );
                let service = QuestionService::new(catalog.clone(), file_store, generator);
                Self::from_parts(config, catalog, service, None)
            }
        }
    }

    pub fn from_parts(
        config: Config,
        catalog: Arc<TopicCatalog>,
        question_service: QuestionService,
        database: Option<Database>,
    ) -> Self {
        let question_service = Arc::new(question_service);
        let session_service = Arc::new(SessionService::new(question_service.clone()));

        Self {
            catalog,
            question_service,
            session_service,
            database,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_file_storage_skips_database() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::test_config();
        config.questions_file = dir.path().join("q.json").display().to_string();

        let state = AppState::new(config).await;

        assert!(state.database.is_none());
        assert_eq!(
            state.question_service.repository().source(),
            crate::models::domain::QuestionSource::File
        );
    }
}
