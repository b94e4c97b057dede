/*
 * Responsibility
 * - Route table for the three zones:
 *   - root: `/`, `/health`, `/favicon.ico`
 *   - public (nested under /public): never authenticated
 *   - private (nested under /private): authenticated by app.rs, guarded per route here
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    private::{sample_guard_route, sample_post_route, sample_private_route},
    public::sample_public_route,
    root::{favicon, health, index},
};
use crate::middleware::auth::guard;
use crate::services::auth::Requirement;
use crate::state::AppState;

pub fn root_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/favicon.ico", get(favicon))
}

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/samplepublicroute", get(sample_public_route))
}

/// Routes that expect `Claims` in the request extensions.
///
/// Must be wrapped by `middleware::auth::access::apply` before being served.
pub fn private_routes() -> Router<AppState> {
    Router::new()
        .route("/sampleprivateroute", get(sample_private_route))
        // NOTE: the embedded space is part of the permission name, "read:data" does not match.
        .route(
            "/sampleguardroute",
            guard::apply(get(sample_guard_route), Requirement::all(["read: data"])),
        )
        .route(
            "/samepostroute",
            guard::apply(
                post(sample_post_route),
                Requirement::any_of([["read:data"], ["write:data"]]),
            ),
        )
}
