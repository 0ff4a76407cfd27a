// src/handlers/candidate.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::candidate::{ScoreSummary, StartRequest, StartResponse},
    store::Store,
};

const INVALID_DATA: &str = "Dados inválidos";

/// Registers a candidate and starts their quiz.
///
/// Returns 400 `{"error": "Dados inválidos"}` when `name` or `email` is missing or empty,
/// including when the body is not JSON at all.
pub async fn start(
    State(store): State<Store>,
    payload: Result<Json<StartRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::BadRequest(INVALID_DATA.to_string()))?;

    if payload.validate().is_err() {
        return Err(AppError::BadRequest(INVALID_DATA.to_string()));
    }

    let name = payload.name.unwrap_or_default();
    let email = payload.email.unwrap_or_default();

    let candidate_id = store.create_candidate(&name, &email).await.map_err(|e| {
        tracing::error!("Failed to create candidate: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!("Candidate {} started the quiz", candidate_id);

    Ok(Json(StartResponse { candidate_id }))
}

/// Returns the derived `{score, total}` of a candidate.
/// Unknown or non-numeric ids yield `{0, 0}`.
pub async fn get_result(
    State(store): State<Store>,
    Path(candidate_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let summary = match candidate_id.trim().parse::<i64>() {
        Ok(id) => store.candidate_score(id).await?,
        Err(_) => ScoreSummary::default(),
    };

    Ok(Json(summary))
}
