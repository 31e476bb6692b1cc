#[cfg(test)]
pub mod fixtures {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::models::domain::{Difficulty, Question};

    /// A valid question on `topic` for the given age band.
    pub fn question_for(topic: &str, age_min: u8, age_max: u8) -> Question {
        Question {
            id: Uuid::new_v4().to_string(),
            question: format!("Sample question about {}?", topic),
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            correct: 2,
            explanation: "Option C is correct.".to_string(),
            difficulty: Difficulty::for_age(age_min),
            topic: topic.to_string(),
            age_min,
            age_max,
            created_at: Utc::now(),
            used_count: 0,
        }
    }

    /// `count` distinct questions sharing one age band.
    pub fn questions_for_age(count: usize, age_min: u8, age_max: u8) -> Vec<Question> {
        (0..count)
            .map(|_| question_for("science_nature", age_min, age_max))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_question_for() {
        let question = question_for("animals", 8, 10);
        assert_eq!(question.topic, "animals");
        assert_eq!(question.options.len(), 4);
        assert!(question.suits_age(9));
    }

    #[test]
    fn test_fixtures_questions_have_unique_ids() {
        let questions = questions_for_age(5, 11, 13);
        let mut ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
