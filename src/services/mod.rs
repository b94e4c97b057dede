/*
 * Responsibility
 * - Process-level services injected into AppState
 */
pub mod auth;
