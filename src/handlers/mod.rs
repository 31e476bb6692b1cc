pub mod quiz_handler;

pub use quiz_handler::{
    configure, generate_questions, get_stats, health_check, list_topics, quiz_session,
};
