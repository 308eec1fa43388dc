use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use sqlx::{ConnectOptions, Connection};

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
    pub timestamp: String,
}

/// Liveness plus a quick check that the booking database can be opened.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let database = match state.db.connect().await {
        Ok(conn) => {
            if let Err(e) = conn.close().await {
                tracing::warn!("Failed to close health check connection: {:?}", e);
            }
            "ok"
        }
        Err(e) => {
            tracing::warn!("Booking database unavailable: {:?}", e);
            "unavailable"
        }
    };

    let (status, code) = if database == "ok" {
        ("healthy", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    let response = HealthResponse {
        status: status.to_string(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    (code, Json(response))
}
