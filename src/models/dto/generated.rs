use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::errors::AppResult;
use crate::models::domain::{Difficulty, Question};

/// Lowest and highest player ages the generator may target.
pub const MIN_AGE: u8 = 8;
pub const MAX_AGE: u8 = 16;

/// A question record as returned by the text generation service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
#[validate(schema(function = "validate_generated_question"))]
pub struct GeneratedQuestion {
    /// The quiz question text
    #[validate(length(min = 1, max = 500))]
    pub question: String,

    /// Exactly 4 answer options
    #[validate(length(equal = 4))]
    pub options: Vec<String>,

    /// Index of the correct answer (0-3)
    #[validate(range(max = 3))]
    pub correct: u8,

    /// Brief explanation of the correct answer
    #[validate(length(min = 1))]
    pub explanation: String,

    /// Difficulty level: easy, medium, or hard
    pub difficulty: Difficulty,

    /// Topic slug from the predefined list
    pub topic: String,

    /// Minimum recommended age
    #[validate(range(min = 8))]
    pub age_min: u8,

    /// Maximum recommended age
    #[validate(range(max = 16))]
    pub age_max: u8,
}

/// Envelope the generator is asked to fill.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedBatch {
    /// List of generated questions
    pub questions: Vec<GeneratedQuestion>,
}

fn validate_generated_question(q: &GeneratedQuestion) -> Result<(), ValidationError> {
    if q.age_min > q.age_max {
        return Err(ValidationError::new("age_min_exceeds_age_max"));
    }
    if q.options.iter().any(|o| o.trim().is_empty()) {
        return Err(ValidationError::new("blank_option"));
    }
    if q.question.trim().is_empty() {
        return Err(ValidationError::new("blank_question"));
    }
    Ok(())
}

impl GeneratedQuestion {
    /// Validates the record and stamps it as a new stored question.
    pub fn into_question(self) -> AppResult<Question> {
        self.validate()?;

        Ok(Question {
            id: Uuid::new_v4().to_string(),
            question: self.question,
            options: self.options,
            correct: self.correct,
            explanation: self.explanation,
            difficulty: self.difficulty,
            topic: self.topic,
            age_min: self.age_min,
            age_max: self.age_max,
            created_at: Utc::now(),
            used_count: 0,
        })
    }
}
