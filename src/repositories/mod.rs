pub mod file_question_repository;
pub mod question_repository;

pub use file_question_repository::FileQuestionRepository;
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
