// src/utils/gate.rs

use axum::{
    body::Body,
    extract::{Query, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::{config::Config, error::AppError};

#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub password: Option<String>,
}

/// Literal comparison against the configured secret.
///
/// Not constant-time and not hashed: the admin gate is a shared password, nothing more.
pub fn password_matches(supplied: Option<&str>, secret: &str) -> bool {
    supplied == Some(secret)
}

/// Axum Middleware: Admin gate.
///
/// Reads `?password=` from the query string and rejects the request with
/// `401 {"error": "unauthorized"}` unless it equals `Config::admin_password`.
pub async fn admin_gate(
    State(config): State<Config>,
    Query(query): Query<AdminQuery>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !password_matches(query.password.as_deref(), &config.admin_password) {
        tracing::warn!("Rejected admin request to {}", req.uri().path());
        return Err(AppError::AuthError("unauthorized".to_string()));
    }

    Ok(next.run(req).await)
}
