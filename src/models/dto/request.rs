use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::Difficulty;
use crate::models::dto::generated::{MAX_AGE, MIN_AGE};

/// Parameters for one call to the text generation service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_generation_band"))]
pub struct GenerationRequest {
    #[validate(length(min = 1, max = 64))]
    pub topic: String,

    pub difficulty: Difficulty,

    #[validate(range(min = 1, max = 50))]
    pub count: u32,

    pub age_min: u8,
    pub age_max: u8,
}

impl GenerationRequest {
    /// Request sized to the age band of the given difficulty.
    pub fn for_difficulty(topic: &str, difficulty: Difficulty, count: u32) -> Self {
        let (age_min, age_max) = difficulty.age_band();
        Self {
            topic: topic.to_string(),
            difficulty,
            count,
            age_min,
            age_max,
        }
    }
}

fn validate_generation_band(request: &GenerationRequest) -> Result<(), ValidationError> {
    if request.age_min < MIN_AGE || request.age_max > MAX_AGE {
        return Err(ValidationError::new("age_band_out_of_range"));
    }
    if request.age_min > request.age_max {
        return Err(ValidationError::new("age_min_exceeds_age_max"));
    }
    Ok(())
}

fn default_session_count() -> u32 {
    10
}

fn default_generate_count() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizSessionRequest {
    #[validate(range(min = 1, max = 120))]
    pub age: u8,

    #[serde(default = "default_session_count")]
    #[validate(range(min = 1, max = 20))]
    pub count: u32,

    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuestionsRequest {
    #[validate(length(min = 1, max = 64))]
    pub topic: String,

    #[serde(default = "default_generate_count")]
    #[validate(range(min = 1, max = 20))]
    pub count: u32,

    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_uses_difficulty_band() {
        let request = GenerationRequest::for_difficulty("sports", Difficulty::Hard, 3);
        assert_eq!((request.age_min, request.age_max), (14, 16));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn generation_request_rejects_bad_band() {
        let mut request = GenerationRequest::for_difficulty("sports", Difficulty::Easy, 3);
        request.age_min = 12;
        assert!(request.validate().is_err());

        let mut request = GenerationRequest::for_difficulty("sports", Difficulty::Easy, 3);
        request.age_max = 30;
        assert!(request.validate().is_err());
    }

    #[test]
    fn generation_request_rejects_zero_count() {
        let request = GenerationRequest::for_difficulty("sports", Difficulty::Easy, 0);
        assert!(request.validate().is_err());
    }

    #[test]
    fn session_request_defaults() {
        let request: QuizSessionRequest =
            serde_json::from_str(r#"{"age": 9}"#).expect("should parse");
        assert_eq!(request.count, 10);
        assert!(request.exclude.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn session_request_caps_count() {
        let request: QuizSessionRequest =
            serde_json::from_str(r#"{"age": 9, "count": 50}"#).expect("should parse");
        assert!(request.validate().is_err());
    }

    #[test]
    fn generate_request_defaults() {
        let request: GenerateQuestionsRequest =
            serde_json::from_str(r#"{"topic": "cricket"}"#).expect("should parse");
        assert_eq!(request.count, 5);
        assert_eq!(request.difficulty, None);
    }
}
