use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::domain::{Difficulty, Question, QuestionSource};

pub const SESSION_UNAVAILABLE_MESSAGE: &str = "Could not generate questions";

/// Result of assembling a quiz session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SessionOutcome {
    Success {
        source: QuestionSource,
        questions: Vec<Question>,
    },
    Error {
        message: String,
    },
}

impl SessionOutcome {
    pub fn unavailable() -> Self {
        SessionOutcome::Error {
            message: SESSION_UNAVAILABLE_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SessionOutcome::Success { .. })
    }

    pub fn questions(&self) -> &[Question] {
        match self {
            SessionOutcome::Success { questions, .. } => questions,
            SessionOutcome::Error { .. } => &[],
        }
    }

    pub fn source(&self) -> Option<QuestionSource> {
        match self {
            SessionOutcome::Success { source, .. } => Some(*source),
            SessionOutcome::Error { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub status: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub generated: usize,
    pub saved: usize,
    pub questions: Vec<Question>,
}

impl GenerateResponse {
    pub fn success(topic: String, difficulty: Difficulty, questions: Vec<Question>, saved: usize) -> Self {
        Self {
            status: "success".to_string(),
            topic,
            difficulty,
            generated: questions.len(),
            saved,
            questions,
        }
    }
}

/// First question printed ahead of persistence by `generate --stream-first`.
#[derive(Debug, Clone, Serialize)]
pub struct StreamingPreview<'a> {
    pub first_question: &'a Question,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionStats {
    pub total_questions: u64,
    pub storage: QuestionSource,
    pub by_topic: BTreeMap<String, u64>,
    pub by_difficulty: BTreeMap<Difficulty, u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedSummary {
    pub attempted: usize,
    pub failed: usize,
    pub total_saved: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_outcome_serializes_with_status() {
        let json = serde_json::to_value(SessionOutcome::unavailable()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "error", "message": "Could not generate questions"})
        );
    }

    #[test]
    fn success_outcome_serializes_with_source() {
        let outcome = SessionOutcome::Success {
            source: QuestionSource::File,
            questions: vec![],
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["source"], "file");
        assert!(outcome.is_success());
        assert_eq!(outcome.source(), Some(QuestionSource::File));
    }
}
