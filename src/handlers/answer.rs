// src/handlers/answer.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::answer::{AnswerResult, SubmitAnswerRequest},
    store::Store,
    utils::scoring::is_correct,
};

/// Records a candidate's answer and reports whether it was correct.
///
/// Missing or unknown ids are not an error: the answer is still stored and scored 0.
/// A body without a JSON content type, or JSON that is not an object, counts as empty.
/// Only unparsable JSON is rejected with 400.
pub async fn submit_answer(
    State(store): State<Store>,
    payload: Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) | Err(JsonRejection::JsonDataError(_)) => {
            SubmitAnswerRequest::default()
        }
        Err(rejection) => return Err(AppError::BadRequest(rejection.body_text())),
    };

    let expected = match req.question_id {
        Some(id) => store.correct_answer(id).await?,
        None => None,
    };

    let correct = is_correct(expected.as_deref(), req.answer.as_deref());

    store
        .record_answer(req.candidate_id, req.question_id, req.answer.as_deref(), correct)
        .await
        .map_err(|e| {
            tracing::error!("Failed to record answer: {:?}", e);
            AppError::from(e)
        })?;

    tracing::debug!(
        candidate_id = ?req.candidate_id,
        question_id = ?req.question_id,
        correct,
        "Answer recorded"
    );

    Ok(Json(AnswerResult {
        correct: i64::from(correct),
    }))
}
