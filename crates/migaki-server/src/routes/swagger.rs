//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{PolishRequest, PolishResponse};

#[derive(OpenApi)]
#[openapi(
    paths(super::polish::polish_draft),
    components(schemas(PolishRequest, PolishResponse)),
    tags(
        (name = "Polish", description = "Draft-to-email rewriting")
    ),
    info(
        title = "Migaki API",
        description = "Turn rough drafts into professional emails"
    )
)]
pub struct ApiDoc;
