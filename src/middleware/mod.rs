/*
 * Responsibility
 * - Middleware entry points; each module exposes an `apply(...)`
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
