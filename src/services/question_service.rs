use std::{collections::BTreeMap, sync::Arc};

use crate::{
    errors::AppResult,
    models::{
        domain::{Difficulty, Question, TopicCatalog},
        dto::{
            request::GenerationRequest,
            response::{GenerateResponse, QuestionStats, SeedSummary},
        },
    },
    repositories::QuestionRepository,
    services::generator_service::QuestionGenerator,
};

pub struct QuestionService {
    catalog: Arc<TopicCatalog>,
    repository: Arc<dyn QuestionRepository>,
    fallback: Option<Arc<dyn QuestionRepository>>,
    generator: Arc<dyn QuestionGenerator>,
}

impl QuestionService {
    pub fn new(
        catalog: Arc<TopicCatalog>,
        repository: Arc<dyn QuestionRepository>,
        generator: Arc<dyn QuestionGenerator>,
    ) -> Self {
        Self {
            catalog,
            repository,
            fallback: None,
            generator,
        }
    }

    /// Store that receives writes when the primary store rejects them.
    pub fn with_fallback(mut self, fallback: Arc<dyn QuestionRepository>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn catalog(&self) -> &TopicCatalog {
        &self.catalog
    }

    pub fn repository(&self) -> &Arc<dyn QuestionRepository> {
        &self.repository
    }

    pub fn generator(&self) -> &Arc<dyn QuestionGenerator> {
        &self.generator
    }

    /// Rewrites every question's topic to its canonical id.
    pub fn canonicalize_topics(&self, questions: &mut [Question]) {
        for question in questions.iter_mut() {
            let canonical = self.catalog.canonicalize(&question.topic);
            if canonical != question.topic {
                log::debug!("Normalized topic '{}' to '{}'", question.topic, canonical);
                question.topic = canonical;
            }
        }
    }

    /// Canonicalizes topics and persists the questions, returning how many were saved.
    pub async fn save_questions(&self, questions: &mut [Question]) -> AppResult<usize> {
        self.canonicalize_topics(questions);

        match self.repository.insert_many(questions).await {
            Ok(saved) => Ok(saved),
            Err(primary_err) => match &self.fallback {
                Some(fallback) => {
                    log::error!(
                        "Saving to {} storage failed, falling back to {} storage: {}",
                        self.repository.source().as_str(),
                        fallback.source().as_str(),
                        primary_err
                    );
                    fallback.insert_many(questions).await
                }
                None => Err(primary_err),
            },
        }
    }

    pub async fn generate_questions(&self, request: &GenerationRequest) -> AppResult<Vec<Question>> {
        let mut request = request.clone();
        request.topic = self.catalog.canonicalize(&request.topic);
        self.generator.generate(&request).await
    }

    pub async fn generate_and_save(&self, request: &GenerationRequest) -> AppResult<GenerateResponse> {
        let mut questions = self.generate_questions(request).await?;
        let saved = self.save_questions(&mut questions).await?;

        Ok(GenerateResponse::success(
            self.catalog.canonicalize(&request.topic),
            request.difficulty,
            questions,
            saved,
        ))
    }

    pub async fn stats(&self) -> AppResult<QuestionStats> {
        let mut by_topic = BTreeMap::new();
        for id in self.catalog.ids() {
            by_topic.insert(id.to_string(), self.repository.count_by_topic(id).await?);
        }

        let mut by_difficulty = BTreeMap::new();
        for difficulty in Difficulty::ALL {
            by_difficulty.insert(
                difficulty,
                self.repository.count_by_difficulty(difficulty).await?,
            );
        }

        Ok(QuestionStats {
            total_questions: self.repository.count_all().await?,
            storage: self.repository.source(),
            by_topic,
            by_difficulty,
        })
    }

    /// Generates `per_pair` questions for every topic and difficulty,
    /// continuing past individual failures.
    pub async fn seed(&self, per_pair: u32) -> SeedSummary {
        let mut summary = SeedSummary {
            attempted: 0,
            failed: 0,
            total_saved: 0,
        };

        let topics: Vec<String> = self.catalog.ids().into_iter().map(str::to_string).collect();
        for topic in &topics {
            for difficulty in Difficulty::ALL {
                summary.attempted += 1;
                log::info!("Generating {} {} questions for {}", per_pair, difficulty, topic);

                let request = GenerationRequest::for_difficulty(topic, difficulty, per_pair);
                match self.generate_and_save(&request).await {
                    Ok(result) => {
                        log::info!("Saved {} questions for {} ({})", result.saved, topic, difficulty);
                        summary.total_saved += result.saved;
                    }
                    Err(e) => {
                        log::error!("Seeding {} ({}) failed: {}", topic, difficulty, e);
                        summary.failed += 1;
                    }
                }
            }
        }

        log::info!("Total questions seeded: {}", summary.total_saved);
        summary
    }
}
