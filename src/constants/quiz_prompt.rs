use crate::models::{domain::Topic, dto::request::GenerationRequest};

pub const GENERATOR_NAME: &str = "QuizQuestionGenerator";

const GUIDELINES: &str = "IMPORTANT GUIDELINES:
1. Questions must be appropriate for kids in the stated age range
2. Focus on general knowledge that Indian children would find interesting
3. Include facts about India, Tamil Nadu, and world knowledge
4. Make questions fun and educational, not too hard
5. Avoid controversial, religious conflicts, or sensitive topics
6. Use simple language that kids can understand
7. Each question must have exactly 4 options
8. Only ONE option should be correct, and \"correct\" is its 0-based index
9. Provide a brief, kid-friendly explanation for each answer
10. Questions should be interesting and make kids curious to learn more

DIFFICULTY LEVELS:
- easy (age 8-10): Very simple facts, basic knowledge
- medium (age 11-13): Moderate complexity, some reasoning
- hard (age 14-16): More detailed knowledge, critical thinking";

/// System instructions for one generation call.
pub fn build_instructions(topic: &Topic, request: &GenerationRequest, valid_topics: &[&str]) -> String {
    format!(
        "You are a quiz question generator for Indian Tamil kids aged {age_min}-{age_max}.

TOPIC: {name}
TOPIC SLUG: {slug}
DESCRIPTION: {description}
EXAMPLES: {examples}
DIFFICULTY: {difficulty}
GENERATE: {count} questions

CRITICAL - TOPIC FIELD:
The \"topic\" field in each question MUST be EXACTLY: \"{slug}\"
Do NOT use variations like \"cricket\", \"football\", \"space\", etc.
Use ONLY the exact slug provided above.

VALID TOPIC SLUGS: {valid}

{guidelines}

Generate {count} unique, interesting questions about {name}.
Ensure variety - don't repeat similar questions.",
        age_min = request.age_min,
        age_max = request.age_max,
        name = topic.name,
        slug = topic.id,
        description = topic.description,
        examples = topic.examples,
        difficulty = request.difficulty,
        count = request.count,
        valid = valid_topics.join(", "),
        guidelines = GUIDELINES,
    )
}

pub fn build_user_prompt(topic: &Topic, request: &GenerationRequest) -> String {
    format!(
        "Generate {} {} difficulty quiz questions about {} for kids aged {}-{}.",
        request.count, request.difficulty, topic.name, request.age_min, request.age_max
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Difficulty, TopicCatalog};

    #[test]
    fn instructions_pin_the_topic_slug() {
        let catalog = TopicCatalog::builtin();
        let topic = catalog.get("sports").unwrap();
        let request = GenerationRequest::for_difficulty("sports", Difficulty::Medium, 3);

        let instructions = build_instructions(topic, &request, &catalog.ids());

        assert!(instructions.contains("MUST be EXACTLY: \"sports\""));
        assert!(instructions.contains("aged 11-13"));
        assert!(instructions.contains("DIFFICULTY: medium"));
        assert!(instructions.contains("space_astronomy"));
    }

    #[test]
    fn user_prompt_names_count_and_band() {
        let catalog = TopicCatalog::builtin();
        let topic = catalog.get("animals").unwrap();
        let request = GenerationRequest::for_difficulty("animals", Difficulty::Easy, 3);

        assert_eq!(
            build_user_prompt(topic, &request),
            "Generate 3 easy difficulty quiz questions about Animals for kids aged 8-10."
        );
    }
}
