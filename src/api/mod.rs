/*
 * Responsibility
 * - URL structure (routes) and the handlers / DTOs / extractors behind it
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::{private_routes, public_routes, root_routes};
