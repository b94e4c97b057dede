use axum::{Json, http::StatusCode};

use crate::api::dto::samples::SampleResponse;

pub async fn sample_public_route() -> (StatusCode, Json<SampleResponse>) {
    (StatusCode::OK, Json(SampleResponse::ok("Sample Public Route")))
}
