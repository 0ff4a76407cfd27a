// src/handlers/admin.rs

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::{error::AppError, store::Store, utils::export::candidates_to_csv};

/// Lists all candidates with their derived scores, newest first.
/// Behind the admin gate.
pub async fn list_candidates(State(store): State<Store>) -> Result<impl IntoResponse, AppError> {
    let candidates = store.candidates_with_scores().await.map_err(|e| {
        tracing::error!("Failed to list candidates: {:?}", e);
        AppError::from(e)
    })?;

    Ok(Json(candidates))
}

/// Same listing as `list_candidates`, as a `candidates.csv` download.
/// Behind the admin gate.
pub async fn export_csv(State(store): State<Store>) -> Result<impl IntoResponse, AppError> {
    let candidates = store.candidates_with_scores().await.map_err(|e| {
        tracing::error!("Failed to list candidates for export: {:?}", e);
        AppError::from(e)
    })?;

    let body = candidates_to_csv(&candidates)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"candidates.csv\"",
            ),
        ],
        body,
    ))
}
