use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tokio::sync::RwLock;

use crate::{
    errors::AppResult,
    models::domain::{Difficulty, Question, QuestionSource},
    repositories::QuestionRepository,
};

/// Questions kept as a pretty-printed JSON array in a single file.
///
/// Readers share the lock; read-modify-write cycles hold it exclusively.
/// Saves go to a sibling temp file that is renamed over the target, so the
/// file on disk is always a complete array.
pub struct FileQuestionRepository {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileQuestionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load_all(&self) -> AppResult<Vec<Question>> {
        let _guard = self.lock.read().await;
        self.read_file().await
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "questions.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_file(&self) -> AppResult<Vec<Question>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    async fn save_all(&self, questions: &[Question]) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_string_pretty(questions)?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, body).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for FileQuestionRepository {
    fn source(&self) -> QuestionSource {
        QuestionSource::File
    }

    async fn sample_eligible(
        &self,
        age: u8,
        excluded: &HashSet<String>,
        count: usize,
    ) -> AppResult<Vec<Question>> {
        let mut eligible: Vec<Question> = self
            .load_all()
            .await?
            .into_iter()
            .filter(|q| q.suits_age(age) && !excluded.contains(&q.id))
            .collect();

        eligible.shuffle(&mut rand::thread_rng());
        eligible.truncate(count);
        Ok(eligible)
    }

    async fn insert_many(&self, questions: &[Question]) -> AppResult<usize> {
        if questions.is_empty() {
            return Ok(0);
        }
        let _guard = self.lock.write().await;

        let mut existing = self.read_file().await?;
        existing.extend_from_slice(questions);
        self.save_all(&existing).await?;

        log::debug!(
            "Appended {} questions to {}",
            questions.len(),
            self.path.display()
        );
        Ok(questions.len())
    }

    async fn mark_served(&self, ids: &[String]) -> AppResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        let _guard = self.lock.write().await;

        let mut existing = self.read_file().await?;
        for question in existing.iter_mut().filter(|q| ids.contains(&q.id)) {
            question.used_count += 1;
        }
        self.save_all(&existing).await
    }

    async fn count_all(&self) -> AppResult<u64> {
        Ok(self.load_all().await?.len() as u64)
    }

    async fn count_by_topic(&self, topic: &str) -> AppResult<u64> {
        let questions = self.load_all().await?;
        Ok(questions.iter().filter(|q| q.topic == topic).count() as u64)
    }

    async fn count_by_difficulty(&self, difficulty: Difficulty) -> AppResult<u64> {
        let questions = self.load_all().await?;
        Ok(questions.iter().filter(|q| q.difficulty == difficulty).count() as u64)
    }
}
