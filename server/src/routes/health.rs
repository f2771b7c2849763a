//! Liveness endpoint.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
    pub products: usize,
}

/// `GET /healthz`: report liveness and the size of the loaded catalog.
pub async fn healthz(State(state): State<AppState>) -> Json<Health> {
    Json(Health { status: "ok", products: state.catalog.len() })
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
