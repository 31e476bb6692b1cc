use std::collections::HashSet;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Difficulty, Question, QuestionSource},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Label reported as the session source when this store satisfies a request.
    fn source(&self) -> QuestionSource;

    /// Up to `count` random questions suitable for `age` whose ids are not in `excluded`.
    async fn sample_eligible(
        &self,
        age: u8,
        excluded: &HashSet<String>,
        count: usize,
    ) -> AppResult<Vec<Question>>;

    async fn insert_many(&self, questions: &[Question]) -> AppResult<usize>;

    async fn mark_served(&self, ids: &[String]) -> AppResult<()>;

    async fn count_all(&self) -> AppResult<u64>;
    async fn count_by_topic(&self, topic: &str) -> AppResult<u64>;
    async fn count_by_difficulty(&self, difficulty: Difficulty) -> AppResult<u64>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let age_index = IndexModel::builder()
            .keys(doc! { "age_min": 1, "age_max": 1 })
            .options(
                IndexOptions::builder()
                    .name("age_band".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(age_index).await?;

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }

    fn eligibility_filter(age: u8, excluded: &HashSet<String>) -> Document {
        let age = age as i32;
        let mut filter = doc! {
            "age_min": { "$lte": age },
            "age_max": { "$gte": age },
        };
        if !excluded.is_empty() {
            let ids: Vec<String> = excluded.iter().cloned().collect();
            filter.insert("id", doc! { "$nin": ids });
        }
        filter
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    fn source(&self) -> QuestionSource {
        QuestionSource::Database
    }

    async fn sample_eligible(
        &self,
        age: u8,
        excluded: &HashSet<String>,
        count: usize,
    ) -> AppResult<Vec<Question>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let pipeline = vec![
            doc! { "$match": Self::eligibility_filter(age, excluded) },
            doc! { "$sample": { "size": count as i64 } },
        ];

        let cursor = self.collection.aggregate(pipeline).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        documents
            .into_iter()
            .map(|d| {
                mongodb::bson::from_document::<Question>(d)
                    .map_err(|e| AppError::DatabaseError(format!("Malformed question document: {}", e)))
            })
            .collect()
    }

    async fn insert_many(&self, questions: &[Question]) -> AppResult<usize> {
        if questions.is_empty() {
            return Ok(0);
        }
        let result = self.collection.insert_many(questions).await?;
        Ok(result.inserted_ids.len())
    }

    async fn mark_served(&self, ids: &[String]) -> AppResult<()> {
        if ids.is_empty() {
            return Ok(());
        }
        self.collection
            .update_many(
                doc! { "id": { "$in": ids.to_vec() } },
                doc! { "$inc": { "used_count": 1 } },
            )
            .await?;
        Ok(())
    }

    async fn count_all(&self) -> AppResult<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn count_by_topic(&self, topic: &str) -> AppResult<u64> {
        Ok(self.collection.count_documents(doc! { "topic": topic }).await?)
    }

    async fn count_by_difficulty(&self, difficulty: Difficulty) -> AppResult<u64> {
        Ok(self
            .collection
            .count_documents(doc! { "difficulty": difficulty.as_str() })
            .await?)
    }
}
