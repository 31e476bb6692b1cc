use std::sync::Arc;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::{
    config::Config,
    constants::quiz_prompt::{build_instructions, build_user_prompt, GENERATOR_NAME},
    errors::{AppError, AppResult},
    models::{
        domain::{Question, TopicCatalog},
        dto::{generated::GeneratedBatch, request::GenerationRequest},
    },
};

/// Produces fresh questions for a topic. Records that fail validation never
/// leave the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<Vec<Question>>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionEnvelope {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

pub struct OpenAiQuestionGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    catalog: Arc<TopicCatalog>,
}

impl OpenAiQuestionGenerator {
    pub fn new(config: &Config, catalog: Arc<TopicCatalog>) -> Self {
        let mut openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());
        if let Some(base) = &config.openai_api_base {
            openai_config = openai_config.with_api_base(base);
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
            catalog,
        }
    }

    fn response_format() -> AppResult<serde_json::Value> {
        let mut schema = serde_json::to_value(schemars::schema_for!(GeneratedBatch))
            .map_err(|e| AppError::InternalError(format!("Failed to build response schema: {}", e)))?;
        if let Some(obj) = schema.as_object_mut() {
            obj.remove("$schema");
        }
        Ok(json!({
            "type": "json_schema",
            "json_schema": {
                "name": "question_batch",
                "schema": schema,
            }
        }))
    }
}

/// Parses model output and keeps only records that pass validation.
pub fn accept_batch(content: &str) -> AppResult<Vec<Question>> {
    let batch: GeneratedBatch = serde_json::from_str(content)
        .map_err(|e| AppError::GenerationError(format!("Unparseable model output: {}", e)))?;

    let received = batch.questions.len();
    let mut accepted = Vec::with_capacity(received);
    for record in batch.questions {
        match record.into_question() {
            Ok(question) => accepted.push(question),
            Err(e) => log::warn!("Dropping generated question that failed validation: {}", e),
        }
    }

    if accepted.is_empty() {
        return Err(AppError::GenerationError(format!(
            "None of the {} generated questions were valid",
            received
        )));
    }
    Ok(accepted)
}

#[async_trait]
impl QuestionGenerator for OpenAiQuestionGenerator {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<Vec<Question>> {
        request.validate()?;

        let topic = self.catalog.get(&request.topic).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Invalid topic: {}. Valid topics: {}",
                request.topic,
                self.catalog.ids().join(", ")
            ))
        })?;

        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "name": GENERATOR_NAME,
                    "content": build_instructions(topic, request, &self.catalog.ids()),
                },
                { "role": "user", "content": build_user_prompt(topic, request) },
            ],
            "response_format": Self::response_format()?,
        });

        log::debug!(
            "Requesting {} {} questions for topic {}",
            request.count,
            request.difficulty,
            request.topic
        );
        let response: ChatCompletionEnvelope = self.client.chat().create_byot(body).await?;

        let message = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or_else(|| AppError::GenerationError("Model returned no choices".to_string()))?;

        if let Some(refusal) = message.refusal {
            return Err(AppError::GenerationError(format!("Model refused: {}", refusal)));
        }
        let content = message
            .content
            .ok_or_else(|| AppError::GenerationError("Model returned empty content".to_string()))?;

        let questions = accept_batch(&content)?;
        log::info!(
            "Generated {} {} questions for topic {}",
            questions.len(),
            request.difficulty,
            request.topic
        );
        Ok(questions)
    }
}
