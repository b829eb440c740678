//! Polish Routes - Draft rewrite invocation

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::models::{PolishRequest, PolishResponse};
use crate::AppState;

/// Rewrite a draft into a professional email
#[utoipa::path(
    post,
    path = "/migaki/polish",
    request_body = PolishRequest,
    responses(
        (status = 200, description = "Polished email", body = PolishResponse),
        (status = 400, description = "Empty draft"),
        (status = 422, description = "Malformed body or unknown tone"),
        (status = 502, description = "Generation service failure")
    ),
    tag = "Polish"
)]
pub async fn polish_draft(
    State(state): State<AppState>,
    Json(payload): Json<PolishRequest>,
) -> Result<Json<PolishResponse>, (StatusCode, String)> {
    let response = state
        .polish_service
        .polish(&payload.draft, payload.tone)
        .await
        .map_err(|e| {
            let status = match &e {
                migaki::DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                migaki::DomainError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            };
            (status, e.to_string())
        })?;

    Ok(Json(PolishResponse {
        email: response.content,
        model: response.model,
        usage: response.usage,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/migaki/polish", post(polish_draft))
}
