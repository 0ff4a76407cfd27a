// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::question::{PublicQuestion, QuestionSlot},
    store::Store,
};

/// Serves the question at a zero-based position.
///
/// Past the end, or for an index that is not a non-negative integer, responds `{"done": true}`.
pub async fn get_question(
    State(store): State<Store>,
    Path(index): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let Ok(index) = index.trim().parse::<i64>() else {
        return Ok(Json(QuestionSlot::done()));
    };

    let slot = match store.question_at(index).await? {
        Some(question) => QuestionSlot::Question(PublicQuestion::from(question)),
        None => QuestionSlot::done(),
    };

    Ok(Json(slot))
}
