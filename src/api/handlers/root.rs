/*
 * Responsibility
 * - GET /, GET /health, GET /favicon.ico
 * - Router fallback (404)
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::dto::samples::MessageResponse;
use crate::error::AppError;

pub async fn index() -> impl IntoResponse {
    Json(MessageResponse {
        message: "Rust API Starter Application".to_string(),
    })
}

// Always 200 while the process is serving.
pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
