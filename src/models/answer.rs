// src/models/answer.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// DTO for `POST /api/answer`.
///
/// Every field is lenient: ids may arrive as numbers or numeric strings, and anything that
/// cannot be read is treated as absent. An absent field never fails the request, it only
/// makes the answer incorrect.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub candidate_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub question_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnswerResult {
    /// 1 when the submitted label matches, 0 otherwise.
    pub correct: i64,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_numeric_ids() {
        let req: SubmitAnswerRequest =
            serde_json::from_value(json!({ "candidateId": 1, "questionId": 2, "answer": "c" }))
                .unwrap();
        assert_eq!(req.candidate_id, Some(1));
        assert_eq!(req.question_id, Some(2));
        assert_eq!(req.answer.as_deref(), Some("c"));
    }

    #[test]
    fn reads_string_ids() {
        let req: SubmitAnswerRequest =
            serde_json::from_value(json!({ "candidateId": "3", "questionId": " 4 " })).unwrap();
        assert_eq!(req.candidate_id, Some(3));
        assert_eq!(req.question_id, Some(4));
        assert_eq!(req.answer, None);
    }

    #[test]
    fn unreadable_fields_become_absent() {
        let req: SubmitAnswerRequest = serde_json::from_value(
            json!({ "candidateId": "abc", "questionId": null, "answer": 5 }),
        )
        .unwrap();
        assert_eq!(req.candidate_id, None);
        assert_eq!(req.question_id, None);
        assert_eq!(req.answer, None);
    }

    #[test]
    fn empty_body_is_accepted() {
        let req: SubmitAnswerRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.candidate_id.is_none() && req.question_id.is_none() && req.answer.is_none());
    }
}
