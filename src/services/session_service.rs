use std::{collections::HashSet, sync::Arc};

use rand::seq::SliceRandom;

use crate::{
    errors::AppResult,
    models::{
        domain::{Difficulty, Question, QuestionSource},
        dto::{request::GenerationRequest, response::SessionOutcome},
    },
    services::question_service::QuestionService,
};

/// Topics drawn from the catalog when stored questions fall short.
pub const TOPICS_PER_SESSION: usize = 5;
/// Questions requested from the generator for each drawn topic.
pub const QUESTIONS_PER_TOPIC: u32 = 3;

pub struct SessionService {
    questions: Arc<QuestionService>,
}

impl SessionService {
    pub fn new(questions: Arc<QuestionService>) -> Self {
        Self { questions }
    }

    /// Builds a batch of `count` questions for a player of `age`, preferring
    /// stored questions and generating new ones only when storage cannot
    /// cover the request.
    pub async fn assemble(
        &self,
        age: u8,
        excluded: &HashSet<String>,
        count: usize,
    ) -> AppResult<SessionOutcome> {
        let difficulty = Difficulty::for_age(age);
        let repository = self.questions.repository();

        match repository.sample_eligible(age, excluded, count).await {
            Ok(mut stored) if stored.len() >= count => {
                stored.truncate(count);
                log::info!(
                    "Serving {} stored questions from {} for age {}",
                    stored.len(),
                    repository.source().as_str(),
                    age
                );
                self.record_served(&stored).await;
                return Ok(SessionOutcome::Success {
                    source: repository.source(),
                    questions: stored,
                });
            }
            Ok(stored) => log::info!(
                "Only {} of {} stored questions suit age {}, generating more",
                stored.len(),
                count,
                age
            ),
            Err(e) => log::error!("Reading stored questions failed, generating instead: {}", e),
        }

        let mut generated = self.generate_for(difficulty, count).await;
        if generated.is_empty() {
            log::error!("Could not generate any questions for age {}", age);
            return Ok(SessionOutcome::unavailable());
        }

        self.questions.save_questions(&mut generated).await?;
        generated.truncate(count);

        Ok(SessionOutcome::Success {
            source: QuestionSource::Generated,
            questions: generated,
        })
    }

    async fn generate_for(&self, difficulty: Difficulty, count: usize) -> Vec<Question> {
        let topics: Vec<String> = self
            .questions
            .catalog()
            .ids()
            .choose_multiple(&mut rand::thread_rng(), TOPICS_PER_SESSION)
            .map(|id| id.to_string())
            .collect();

        let mut accumulated = Vec::new();
        for topic in topics {
            if accumulated.len() >= count {
                break;
            }

            let request = GenerationRequest::for_difficulty(&topic, difficulty, QUESTIONS_PER_TOPIC);
            match self.questions.generator().generate(&request).await {
                Ok(questions) => accumulated.extend(questions),
                Err(e) => log::warn!("Error generating questions for topic {}: {}", topic, e),
            }
        }
        accumulated
    }

    async fn record_served(&self, questions: &[Question]) {
        let ids: Vec<String> = questions.iter().map(|q| q.id.clone()).collect();
        if let Err(e) = self.questions.repository().mark_served(&ids).await {
            log::warn!("Could not record usage for {} questions: {}", ids.len(), e);
        }
    }
}
