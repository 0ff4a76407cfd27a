// src/models/candidate.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A candidate joined with the aggregate of their answers.
/// Row shape of the admin listing and the CSV export.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CandidateSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub start_time: Option<chrono::NaiveDateTime>,
    pub score: i64,
    pub total: i64,
}

/// Derived score of one candidate. Never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct ScoreSummary {
    pub score: i64,
    pub total: i64,
}

/// DTO for `POST /api/start`.
/// Both fields are optional at the serde level so that a missing field is a validation error
/// rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct StartRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub candidate_id: i64,
}
