/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Built once at startup from Config and never mutated afterwards
 * - Clone is cheap (Arc inside)
 */
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::AuthService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self { auth }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(AuthService::from_config(config)))
    }
}
