/*
 * Responsibility
 * - Config → tracing → shared state → Router
 * - Middleware wiring: authentication for /private, then CORS / HTTP-level / security headers
 * - axum::serve() with graceful shutdown
 */
use std::net::SocketAddr;
use std::panic;

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::{AppEnv, Config};
use crate::middleware;
use crate::state::AppState;

fn init_tracing(app_env: AppEnv) {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,api_starter=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(!app_env.is_production()))
        .init();
}

fn init_panic_hook() {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Handler panics are turned into 500s by CatchPanicLayer; surface them via tracing too.
        tracing::error!(%info, "panic");
        default_hook(info);
    }))
}

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;

    init_tracing(config.app_env);
    init_panic_hook();

    if config.jwt_secret.is_none() {
        tracing::warn!("JWT_SECRET is not set: every /private route will answer 401");
    }

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = AppState::from_config(&config);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Assemble the full application: routes, authentication and every global layer.
///
/// - `/`, `/health`, `/favicon.ico`, `/public/*`: no authentication
/// - `/private/*`: access middleware first, then per-route guards
pub fn build_router(state: AppState, config: &Config) -> Router {
    let private = middleware::auth::access::apply(api::private_routes(), state.clone());

    let router = Router::new()
        .merge(api::root_routes())
        .nest("/public", api::public_routes())
        .nest("/private", private)
        .fallback(api::handlers::root::not_found)
        .with_state(state);

    let router = middleware::cors::apply(router, config);
    let router = middleware::http::apply(router, config);
    middleware::security_headers::apply(router)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received, draining connections");
}
