use std::collections::HashSet;

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::Difficulty,
        dto::{
            request::{GenerateQuestionsRequest, GenerationRequest, QuizSessionRequest},
            response::SessionOutcome,
        },
    },
};

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match &state.database {
        Some(db) => match db.health_check().await {
            Ok(()) => "connected",
            Err(_) => "unreachable",
        },
        None => "not configured",
    };

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "storage": state.question_service.repository().source(),
        "database": database,
    }))
}

#[get("/api/topics")]
async fn list_topics(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.catalog.by_id())
}

#[get("/api/stats")]
async fn get_stats(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = state.question_service.stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}

#[post("/api/quiz/session")]
async fn quiz_session(
    state: web::Data<AppState>,
    request: web::Json<QuizSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let excluded: HashSet<String> = request.exclude.into_iter().collect();
    let outcome = state
        .session_service
        .assemble(request.age, &excluded, request.count as usize)
        .await?;

    Ok(match outcome {
        SessionOutcome::Success { .. } => HttpResponse::Ok().json(outcome),
        SessionOutcome::Error { .. } => HttpResponse::ServiceUnavailable().json(outcome),
    })
}

#[post("/api/questions/generate")]
async fn generate_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    state.config.validate_for_generation()?;

    let difficulty = request.difficulty.unwrap_or(Difficulty::Medium);
    let generation = GenerationRequest::for_difficulty(&request.topic, difficulty, request.count);
    let response = state.question_service.generate_and_save(&generation).await?;

    Ok(HttpResponse::Created().json(response))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(list_topics)
        .service(get_stats)
        .service(quiz_session)
        .service(generate_questions);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};

    use super::*;
    use crate::{
        config::Config,
        errors::AppError,
        models::domain::TopicCatalog,
        repositories::{FileQuestionRepository, QuestionRepository},
        services::{
            generator_service::MockQuestionGenerator, question_service::QuestionService,
        },
        test_utils::fixtures::{question_for, questions_for_age},
    };

    async fn state_with(
        dir: &tempfile::TempDir,
        stored: Vec<crate::models::domain::Question>,
        generator: MockQuestionGenerator,
    ) -> AppState {
        let store = FileQuestionRepository::new(dir.path().join("questions.json"));
        store.insert_many(&stored).await.unwrap();

        let catalog = Arc::new(TopicCatalog::builtin());
        let service = QuestionService::new(catalog.clone(), Arc::new(store), Arc::new(generator));
        AppState::from_parts(Config::test_config(), catalog, service, None)
    }

    #[actix_web::test]
    async fn test_topics_endpoint_lists_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(&dir, vec![], MockQuestionGenerator::new()).await;
        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/topics").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.as_object().unwrap().len(), 20);
        assert_eq!(body["space_astronomy"]["name"], "Space & Astronomy");
    }

    #[actix_web::test]
    async fn test_session_served_from_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let stored = questions_for_age(6, 8, 10);
        let excluded = stored[0].id.clone();
        let mut generator = MockQuestionGenerator::new();
        generator.expect_generate().never();

        let state = state_with(&dir, stored, generator).await;
        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/session")
            .set_json(serde_json::json!({ "age": 9, "count": 5, "exclude": [excluded] }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "success");
        assert_eq!(body["source"], "file");
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q["id"] != excluded.as_str()));
    }

    #[actix_web::test]
    async fn test_session_unavailable_returns_503() {
        let dir = tempfile::tempdir().unwrap();
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(AppError::GenerationError("offline".into())));

        let state = state_with(&dir, vec![], generator).await;
        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/session")
            .set_json(serde_json::json!({ "age": 12 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_session_rejects_invalid_count() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(&dir, vec![], MockQuestionGenerator::new()).await;
        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/quiz/session")
            .set_json(serde_json::json!({ "age": 12, "count": 0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_generate_saves_canonical_topic() {
        let dir = tempfile::tempdir().unwrap();
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .withf(|r| r.topic == "sports" && r.difficulty == Difficulty::Hard)
            .returning(|r| Ok(vec![question_for("cricket", r.age_min, r.age_max)]));

        let state = state_with(&dir, vec![], generator).await;
        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/questions/generate")
            .set_json(serde_json::json!({ "topic": "Cricket", "count": 1, "difficulty": "hard" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["topic"], "sports");
        assert_eq!(body["saved"], 1);
        assert_eq!(body["questions"][0]["topic"], "sports");
    }

    #[actix_web::test]
    async fn test_stats_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(&dir, questions_for_age(2, 8, 10), MockQuestionGenerator::new()).await;
        let app = test::init_service(App::new().app_data(web::Data::new(state)).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total_questions"], 2);
        assert_eq!(body["storage"], "file");
        assert_eq!(body["by_topic"]["science_nature"], 2);
        assert_eq!(body["by_difficulty"]["easy"], 2);
    }
}
