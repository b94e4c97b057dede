/*
 * Responsibility
 * - Load settings from the environment (.env is honoured via dotenvy)
 * - Validate settings once at startup; the resulting Config is never mutated
 * - JWT_SECRET is optional: without it every private route fails closed
 */
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_PORT: u16 = 9999;
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
// body-parser's json() default ("100kb")
const DEFAULT_BODY_LIMIT_BYTES: usize = 100 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub jwt_secret: Option<String>,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,
    pub jwt_leeway_seconds: u64,

    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build a Config from an arbitrary key lookup.
    ///
    /// `from_env` is the production entry point; tests pass a map-backed closure.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port: u16 = non_empty("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = AppEnv::parse(non_empty("APP_ENV"));

        let cors_allowed_origins = non_empty("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let jwt_secret = non_empty("JWT_SECRET");
        let jwt_issuer = non_empty("JWT_ISSUER");
        let jwt_audience = non_empty("JWT_AUDIENCE");

        let jwt_leeway_seconds = non_empty("JWT_LEEWAY_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);

        let timeout_seconds = non_empty("REQUEST_TIMEOUT_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        if timeout_seconds == 0 {
            return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"));
        }

        let body_limit_bytes = non_empty("BODY_LIMIT_BYTES")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_BODY_LIMIT_BYTES);
        if body_limit_bytes == 0 {
            return Err(ConfigError::Invalid("BODY_LIMIT_BYTES"));
        }

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            jwt_secret,
            jwt_issuer,
            jwt_audience,
            jwt_leeway_seconds,
            request_timeout: Duration::from_secs(timeout_seconds),
            body_limit_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr.port(), 9999);
        assert_eq!(config.app_env, AppEnv::Development);
        assert!(config.jwt_secret.is_none());
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.body_limit_bytes, 100 * 1024);
    }

    #[test]
    fn unparseable_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "not-a-port")]).unwrap();
        assert_eq!(config.addr.port(), 9999);

        let config = config_from(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.addr.port(), 8080);
    }

    #[test]
    fn blank_secret_counts_as_missing() {
        let config = config_from(&[("JWT_SECRET", "   ")]).unwrap();
        assert!(config.jwt_secret.is_none());

        let config = config_from(&[("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(config.jwt_secret.as_deref(), Some("s3cret"));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://a.example, https://b.example,,",
        )])
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn production_aliases_are_recognised() {
        for raw in ["production", "PROD"] {
            let config = config_from(&[("APP_ENV", raw)]).unwrap();
            assert!(config.app_env.is_production());
        }
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = config_from(&[("REQUEST_TIMEOUT_SECONDS", "0")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS")
        ));
    }
}
