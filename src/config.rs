use std::env;
use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub questions_collection: String,
    pub use_file_storage: bool,
    pub questions_file: String,
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub openai_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017/funquiz".to_string()),
            mongo_db_name: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "funquiz".to_string()),
            questions_collection: env::var("QUESTIONS_COLLECTION")
                .unwrap_or_else(|_| "questions".to_string()),
            use_file_storage: env::var("USE_FILE_STORAGE")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            questions_file: env::var("QUESTIONS_FILE")
                .unwrap_or_else(|_| "questions.json".to_string()),
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE").ok().filter(|b| !b.is_empty()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Checks the settings needed before any call to the text generation service.
    pub fn validate_for_generation(&self) -> AppResult<()> {
        if self.openai_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError(
                "OPENAI_API_KEY is not set; question generation is unavailable".to_string(),
            ));
        }
        if self.openai_model.trim().is_empty() {
            return Err(AppError::ConfigError("OPENAI_MODEL must not be empty".to_string()));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "funquiz-test".to_string(),
            questions_collection: "questions".to_string(),
            use_file_storage: true,
            questions_file: "questions-test.json".to_string(),
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_api_base: None,
            openai_model: "gpt-4.1-mini".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!(!config.questions_file.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_db_name, "funquiz-test");
        assert_eq!(config.questions_collection, "questions");
        assert!(config.use_file_storage);
    }

    #[test]
    fn test_validate_for_generation_requires_api_key() {
        let mut config = Config::test_config();
        assert!(config.validate_for_generation().is_ok());

        config.openai_api_key = SecretString::from(String::new());
        let err = config.validate_for_generation().unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
