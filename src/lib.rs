//! JSON API starter: public and JWT-protected routes with permission guards.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
