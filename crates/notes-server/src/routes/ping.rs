//! Liveness endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Ping response.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub ping: &'static str,
}

/// GET /ping - Liveness check.
async fn pong() -> Json<PingResponse> {
    Json(PingResponse { ping: "pong!" })
}

/// Build ping routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/ping", get(pong))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pong() {
        let response = pong().await;
        assert_eq!(response.ping, "pong!");
    }
}
