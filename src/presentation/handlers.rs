// HTTP request handlers
use crate::domain::covid::Scope;
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_dashboard;
use crate::presentation::view::ViewSnapshot;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route("/api/view", get(view_snapshot))
        .route("/api/scope/:code", post(select_scope))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Response {
    match render_dashboard(&state.view.snapshot()) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::error!("Dashboard template error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn view_snapshot(State(state): State<Arc<AppState>>) -> Json<ViewSnapshot> {
    Json(state.view.snapshot())
}

/// Selector change: run one scope-load cycle and return the resulting view.
///
/// Only codes offered by the selector are accepted.
pub async fn select_scope(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    if !state.view.has_option(&code) {
        tracing::warn!(scope = %code, "Rejected selection of unknown scope");
        let body = ErrorBody {
            error: format!("Unknown scope '{}'", code),
        };
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    }

    state.view.select(&code);
    let outcome = state.controller.load_scope(Scope::from_code(&code)).await;
    tracing::info!(scope = %code, ?outcome, "Scope selection finished");

    Json(state.view.snapshot()).into_response()
}
