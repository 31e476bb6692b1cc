pub mod generator_service;
pub mod question_service;
pub mod session_service;
