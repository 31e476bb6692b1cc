use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, Copy, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Difficulty tier for a player of the given age.
    pub fn for_age(age: u8) -> Self {
        match age {
            0..=10 => Difficulty::Easy,
            11..=13 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    /// Inclusive age band questions of this tier are generated for.
    pub fn age_band(self) -> (u8, u8) {
        match self {
            Difficulty::Easy => (8, 10),
            Difficulty::Medium => (11, 13),
            Difficulty::Hard => (14, 16),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// A stored multiple-choice question. Built only from a validated
/// `GeneratedQuestion` or read back from storage.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct: u8,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub topic: String,
    pub age_min: u8,
    pub age_max: u8,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub used_count: u32,
}

impl Question {
    pub fn suits_age(&self, age: u8) -> bool {
        self.age_min <= age && age <= self.age_max
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct as usize).map(String::as_str)
    }
}

/// Where the questions of a session came from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSource {
    File,
    Database,
    Generated,
}

impl QuestionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionSource::File => "file",
            QuestionSource::Database => "database",
            QuestionSource::Generated => "generated",
        }
    }
}
