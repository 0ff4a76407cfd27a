// src/utils/scoring.rs

/// Decides whether a submission is correct.
///
/// Exact, case-sensitive comparison of labels. A missing question (`expected == None`) or a
/// missing submission is never correct.
pub fn is_correct(expected: Option<&str>, submitted: Option<&str>) -> bool {
    match (expected, submitted) {
        (Some(expected), Some(submitted)) => expected == submitted,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_label_is_correct() {
        assert!(is_correct(Some("c"), Some("c")));
    }

    #[test]
    fn other_label_is_wrong() {
        assert!(!is_correct(Some("c"), Some("a")));
        assert!(!is_correct(Some("c"), Some("")));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert!(!is_correct(Some("c"), Some("C")));
        assert!(!is_correct(Some("c"), Some(" c")));
    }

    #[test]
    fn unknown_question_or_missing_answer_is_wrong() {
        assert!(!is_correct(None, Some("c")));
        assert!(!is_correct(Some("c"), None));
        assert!(!is_correct(None, None));
    }
}
