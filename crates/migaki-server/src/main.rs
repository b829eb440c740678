use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;

use adapters::OpenAiGenerator;
use application::PolishService;
use migaki::TextGenerator;

/// Application service with the concrete generator implementation
pub type AppPolishService = PolishService<OpenAiGenerator>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub polish_service: Arc<AppPolishService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Migaki API is running - rough drafts in, polished emails out".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Migaki API initializing...");

    // The generation service credential is mandatory. Without it no request
    // could ever succeed, so startup stops here instead of serving a broken
    // form.
    let api_key = secrets
        .get("OPENAI_API_KEY")
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!("No OPENAI_API_KEY set - configure it in Secrets.toml")
        })?;

    let generator = OpenAiGenerator::new(api_key);
    tracing::info!("Text generator initialized ({})", generator.model_id());

    let polish_service = Arc::new(PolishService::new(Arc::new(generator)));

    // Create application state
    let state = AppState { polish_service };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::ui::router())
        .merge(routes::polish::router())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Migaki API ready");

    Ok(router.into())
}
