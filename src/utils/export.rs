// src/utils/export.rs

use serde::Serialize;

use crate::{error::AppError, models::candidate::CandidateSummary};

pub const CSV_HEADER: [&str; 5] = ["name", "email", "start_time", "score", "total"];

#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    email: &'a str,
    start_time: Option<chrono::NaiveDateTime>,
    score: i64,
    total: i64,
}

/// Renders the admin listing as CSV.
///
/// The header row is always present, even with no candidates. `start_time` goes through the
/// same serde impl as the JSON listing so both exports show identical values.
pub fn candidates_to_csv(rows: &[CandidateSummary]) -> Result<String, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.serialize(CsvRow {
            name: &row.name,
            email: &row.email,
            start_time: row.start_time,
            score: row.score,
            total: row.total,
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| AppError::InternalServerError(e.to_string()))
}
