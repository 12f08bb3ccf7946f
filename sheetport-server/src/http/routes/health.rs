//! Liveness and storage reachability

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Storage half of the health report
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub backend: &'static str,
    pub reachable: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreHealth,
}

/// GET /health - 200 when the record store answers a ping, 503 otherwise
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store = state.store();
    let reachable = match store.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(backend = store.backend(), error = %err, "record store unreachable");
            false
        }
    };

    let (code, status) = if reachable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store: StoreHealth {
            backend: store.backend(),
            reachable,
        },
    };
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
