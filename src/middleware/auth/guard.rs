//! Permission guard for individual routes.
//!
//! The guard is built once, when the route is registered, from a fixed
//! [`Requirement`]. At request time it reads the `Claims` the access middleware
//! left in the extensions, so it must sit *inside* `access::apply`.
//!
//! - no Claims → 401 (authentication did not run)
//! - malformed `permissions` claim → 403
//! - requirement not met → 403

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};

use crate::error::AppError;
use crate::services::auth::{Claims, Requirement};

#[derive(Debug, Clone)]
pub struct PermissionGuard {
    requirement: Arc<Requirement>,
}

impl PermissionGuard {
    pub fn new(requirement: Requirement) -> Self {
        Self {
            requirement: Arc::new(requirement),
        }
    }

    /// `Ok(())` lets the request continue; `Err` is the response to send instead.
    pub fn check(&self, claims: Option<&Claims>) -> Result<(), AppError> {
        let claims = claims.ok_or(AppError::Unauthorized)?;

        let held = claims.permission_set().map_err(|_| {
            tracing::warn!(sub = ?claims.subject(), "permissions claim has an unexpected shape");
            AppError::Forbidden
        })?;

        if self.requirement.is_satisfied_by(&held) {
            Ok(())
        } else {
            tracing::info!(
                sub = ?claims.subject(),
                required = %self.requirement,
                "permission denied"
            );
            Err(AppError::Forbidden)
        }
    }
}

/// Guard a single route with `requirement`.
///
/// ```ignore
/// .route("/reports", guard::apply(get(list_reports), Requirement::all(["read:reports"])))
/// ```
pub fn apply<S>(route: MethodRouter<S>, requirement: Requirement) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    let guard = PermissionGuard::new(requirement);
    route.route_layer(middleware::from_fn_with_state(guard, guard_middleware))
}

async fn guard_middleware(
    State(guard): State<PermissionGuard>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    guard.check(req.extensions().get::<Claims>())?;

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn claims_with(permissions: serde_json::Value) -> Claims {
        serde_json::from_value(json!({ "sub": "user-1", "permissions": permissions })).unwrap()
    }

    #[test]
    fn missing_claims_is_unauthenticated() {
        let guard = PermissionGuard::new(Requirement::all(["read:data"]));
        assert!(matches!(guard.check(None), Err(AppError::Unauthorized)));
    }

    #[test]
    fn missing_claims_is_unauthenticated_even_without_requirement() {
        let guard = PermissionGuard::new(Requirement::none());
        assert!(matches!(guard.check(None), Err(AppError::Unauthorized)));
    }

    #[test]
    fn satisfied_requirement_continues() {
        let guard = PermissionGuard::new(Requirement::any_of([["read:data"], ["write:data"]]));
        assert!(guard.check(Some(&claims_with(json!(["write:data"])))).is_ok());
    }

    #[test]
    fn unsatisfied_requirement_is_forbidden() {
        let guard = PermissionGuard::new(Requirement::all(["read: data"]));
        let result = guard.check(Some(&claims_with(json!(["read:data"]))));
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[test]
    fn absent_permissions_claim_counts_as_empty() {
        let guard = PermissionGuard::new(Requirement::all(["read:data"]));
        let claims: Claims = serde_json::from_value(json!({ "sub": "user-1" })).unwrap();
        assert!(matches!(guard.check(Some(&claims)), Err(AppError::Forbidden)));

        let open = PermissionGuard::new(Requirement::none());
        assert!(open.check(Some(&claims)).is_ok());
    }

    #[test]
    fn malformed_permissions_claim_is_forbidden() {
        let guard = PermissionGuard::new(Requirement::none());
        let result = guard.check(Some(&claims_with(json!(42))));
        assert!(matches!(result, Err(AppError::Forbidden)));
    }
}
