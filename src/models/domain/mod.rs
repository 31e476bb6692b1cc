pub mod question;
pub mod topic;
pub use question::{Difficulty, Question, QuestionSource};
pub use topic::{Topic, TopicCatalog};
