//! Liveness endpoint for the pantry JSON API.

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok` while the server accepts requests
    pub status: String,

    /// Running build of the pantry server
    pub version: String,
}

/// Healthcheck handler
#[endpoint(tags("health"), summary = "Report that the pantry server is up")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
