// src/config.rs

use std::env;
use dotenvy::dotenv;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Shared secret for the admin reporting endpoints, compared verbatim.
    pub admin_password: String,
    pub static_dir: String,
    pub log_dir: String,
    pub rust_log: String,
    /// Raw `PORT` value that failed to parse; `port` fell back to the default.
    pub invalid_port: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://quiz.db".to_string());

        let (port, invalid_port) = match parse_port(env::var("PORT").ok().as_deref()) {
            Ok(port) => (port, None),
            Err(raw) => (DEFAULT_PORT, Some(raw)),
        };

        let admin_password = env::var("ADMIN_PASSWORD")
            .unwrap_or_else(|_| "admin".to_string());

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "public".to_string());

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            port,
            admin_password,
            static_dir,
            log_dir,
            rust_log,
            invalid_port,
        }
    }
}

/// Unset means the default; an unparsable value is returned as `Err` so the caller can
/// report it once logging is up.
fn parse_port(raw: Option<&str>) -> Result<u16, String> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.trim().parse().map_err(|_| value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None), Ok(3000));
    }

    #[test]
    fn port_is_parsed() {
        assert_eq!(parse_port(Some("8080")), Ok(8080));
        assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
    }

    #[test]
    fn invalid_port_is_reported() {
        assert_eq!(parse_port(Some("not-a-port")), Err("not-a-port".to_string()));
        assert_eq!(parse_port(Some("70000")), Err("70000".to_string()));
    }
}
