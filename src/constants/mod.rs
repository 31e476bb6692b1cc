pub mod quiz_prompt;
pub mod topics;
