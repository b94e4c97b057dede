/*
 * Responsibility
 * - sample handlers of the private zone
 * - Authentication and permission checks already ran as middleware;
 *   handlers only see the verified Claims
 */
use axum::{Json, http::StatusCode};

use crate::api::dto::samples::{SamplePostRequest, SampleResponse, SuccessResponse};
use crate::api::extractors::{AuthClaims, JsonBody};

pub async fn sample_private_route(
    AuthClaims(claims): AuthClaims,
) -> (StatusCode, Json<SampleResponse>) {
    tracing::debug!(sub = ?claims.subject(), "sample private route");

    (StatusCode::OK, Json(SampleResponse::ok("Sample Private Route")))
}

pub async fn sample_guard_route() -> (StatusCode, Json<SampleResponse>) {
    (
        StatusCode::OK,
        Json(SampleResponse::ok("Sample Permissions Check Route")),
    )
}

pub async fn sample_post_route(
    AuthClaims(claims): AuthClaims,
    JsonBody(req): JsonBody<SamplePostRequest>,
) -> (StatusCode, Json<SuccessResponse>) {
    // `name` is logged, not echoed.
    tracing::debug!(
        sub = ?claims.subject(),
        name = ?req.name,
        "sample permissions POST"
    );

    (StatusCode::OK, Json(SuccessResponse { success: true }))
}
