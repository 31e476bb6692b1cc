use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::constants::topics::{BUILTIN_TOPICS, TOPIC_ALIASES};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Topic {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub examples: String,
}

/// The fixed topic catalog together with its alias table. Built once at
/// startup and shared read-only.
#[derive(Clone, Debug)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
    aliases: HashMap<String, String>,
}

impl TopicCatalog {
    pub fn new(topics: Vec<Topic>, aliases: HashMap<String, String>) -> Self {
        Self { topics, aliases }
    }

    pub fn builtin() -> Self {
        let topics = BUILTIN_TOPICS
            .iter()
            .map(|t| Topic {
                id: t.id.to_string(),
                name: t.name.to_string(),
                description: t.description.to_string(),
                icon: t.icon.to_string(),
                examples: t.examples.to_string(),
            })
            .collect();

        let aliases = TOPIC_ALIASES
            .iter()
            .map(|(alias, id)| (alias.to_string(), id.to_string()))
            .collect();

        Self::new(topics, aliases)
    }

    /// Maps a free-form topic label to a catalog id.
    ///
    /// Lookup order: the lower-cased, hyphen-to-underscore form in the alias
    /// table, then the lower-cased form as given, then the catalog itself.
    /// Labels that match nothing come back normalized but otherwise
    /// unchanged, so callers must cope with ids outside the catalog.
    pub fn canonicalize(&self, topic: &str) -> String {
        let lowered = topic.to_lowercase();
        let normalized = lowered.replace('-', "_");

        if let Some(id) = self.aliases.get(&normalized) {
            return id.clone();
        }
        if let Some(id) = self.aliases.get(&lowered) {
            return id.clone();
        }
        normalized
    }

    pub fn contains(&self, id: &str) -> bool {
        self.topics.iter().any(|t| t.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn ids(&self) -> Vec<&str> {
        self.topics.iter().map(|t| t.id.as_str()).collect()
    }

    /// The catalog keyed by id, the shape clients list topics in.
    pub fn by_id(&self) -> BTreeMap<&str, &Topic> {
        self.topics.iter().map(|t| (t.id.as_str(), t)).collect()
    }

    pub fn aliases(&self) -> &HashMap<String, String> {
        &self.aliases
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
