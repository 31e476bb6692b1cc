use std::collections::HashSet;

use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use serde::Serialize;

use fun_quiz::{
    app_state::AppState,
    cli::{Cli, Command},
    config::Config,
    errors::{AppError, AppResult},
    handlers,
    models::{
        domain::TopicCatalog,
        dto::{
            request::GenerationRequest,
            response::{GenerateResponse, StreamingPreview},
        },
    },
};

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::InternalError(format!("Failed to encode output: {}", e)))?;
    println!("{}", body);
    Ok(())
}

#[actix_web::main]
async fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let command = match cli.command {
        Command::Topics => {
            let catalog = TopicCatalog::builtin();
            return print_json(&catalog.by_id());
        }
        command => command,
    };

    let state = AppState::new(config.clone()).await;

    match command {
        Command::Generate {
            topic,
            count,
            difficulty,
            age_min,
            age_max,
            stream_first,
        } => {
            config.validate_for_generation()?;
            let request = GenerationRequest {
                topic,
                difficulty,
                count,
                age_min,
                age_max,
            };

            let service = &state.question_service;
            let mut questions = service.generate_questions(&request).await?;
            if let Some(first_question) = questions.first().filter(|_| stream_first) {
                let preview = StreamingPreview {
                    first_question,
                    status: "streaming",
                };
                let line = serde_json::to_string(&preview)
                    .map_err(|e| AppError::InternalError(e.to_string()))?;
                println!("{}", line);
            }
            let saved = service.save_questions(&mut questions).await?;

            let topic = service.catalog().canonicalize(&request.topic);
            print_json(&GenerateResponse::success(topic, difficulty, questions, saved))
        }
        Command::Quiz {
            age,
            count,
            exclude,
        } => {
            let excluded: HashSet<String> = exclude.into_iter().collect();
            let outcome = state.session_service.assemble(age, &excluded, count).await?;
            print_json(&outcome)
        }
        Command::Stats => print_json(&state.question_service.stats().await?),
        Command::Seed { count } => {
            config.validate_for_generation()?;
            let summary = state.question_service.seed(count).await;
            print_json(&summary)
        }
        Command::Serve => {
            let host = config.web_server_host.clone();
            let port = config.web_server_port;
            log::info!("Starting HTTP server on {}:{}", host, port);

            HttpServer::new(move || {
                App::new()
                    .app_data(web::Data::new(state.clone()))
                    .wrap(Logger::default())
                    .configure(handlers::configure)
            })
            .bind((host.as_str(), port))
            .map_err(|e| AppError::InternalError(format!("Failed to bind {}:{}: {}", host, port, e)))?
            .run()
            .await
            .map_err(|e| AppError::InternalError(format!("HTTP server error: {}", e)))
        }
        Command::Topics => print_json(&state.catalog.by_id()),
    }
}
