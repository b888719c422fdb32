//! Precondition checks that run before the costly completion call.

use crate::error::{FeedbackError, Result};
use crate::sanitize::AnswerSet;
use crate::worksheet::{self, Field, Section};

/// Minimum number of answered fields for whole-worksheet feedback.
pub const MIN_OVERALL_ANSWERS: usize = 3;

/// Resolve a section id, failing with invalid-argument for unknown ids.
pub fn require_section(id: &str) -> Result<&'static Section> {
    worksheet::section(id)
        .ok_or_else(|| FeedbackError::InvalidArgument("無効なセクションです".to_string()))
}

/// Count fields with a non-blank (post-trim) answer.
pub fn filled_count<'a>(
    fields: impl IntoIterator<Item = &'a Field>,
    answers: &AnswerSet,
) -> usize {
    fields
        .into_iter()
        .filter(|f| answers.get(f.id).is_some_and(|a| !a.trim().is_empty()))
        .count()
}

/// A section needs at least one answered field before we ask for feedback.
pub fn ensure_section_answered(section: &Section, answers: &AnswerSet) -> Result<()> {
    if filled_count(section.fields, answers) == 0 {
        return Err(FeedbackError::FailedPrecondition(format!(
            "セクション「{}」にはまだ回答がありません。",
            section.label
        )));
    }
    Ok(())
}

/// Whole-worksheet feedback needs at least [`MIN_OVERALL_ANSWERS`] answered
/// fields across all sections.
pub fn ensure_overall_answered(answers: &AnswerSet) -> Result<()> {
    let filled = filled_count(worksheet::fields(), answers);
    let total = worksheet::total_field_count();
    if filled < MIN_OVERALL_ANSWERS {
        return Err(FeedbackError::FailedPrecondition(format!(
            "総合フィードバックには最低{MIN_OVERALL_ANSWERS}つ以上の記入が必要です（現在{filled}/{total}）。"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_unknown_section_is_invalid_argument() {
        let err = require_section("not_a_section").unwrap_err();
        assert_eq!(err.kind(), "invalid-argument");
    }

    #[test]
    fn test_known_section_resolves() {
        assert_eq!(require_section("git_basics").unwrap().id, "git_basics");
    }

    #[test]
    fn test_blank_section_fails_precondition() {
        let section = require_section("git_basics").unwrap();
        // Whitespace-only answers do not count as filled.
        let set = answers(&[("ws_repo_structure", "   \n\t")]);
        let err = ensure_section_answered(section, &set).unwrap_err();
        assert_eq!(err.kind(), "failed-precondition");
        assert!(err.to_string().contains("Git基礎設計"));
    }

    #[test]
    fn test_single_answer_satisfies_section_gate() {
        let section = require_section("git_basics").unwrap();
        let set = answers(&[("ws_branch_strategy", "GitHub Flow")]);
        assert!(ensure_section_answered(section, &set).is_ok());
    }

    #[test]
    fn test_overall_gate_reports_filled_over_total() {
        let set = answers(&[("ws_team", "alpha"), ("ws_goal", "history")]);
        let err = ensure_overall_answered(&set).unwrap_err();
        assert_eq!(err.kind(), "failed-precondition");
        assert!(err.to_string().contains("2/14"), "message: {err}");
    }

    #[test]
    fn test_overall_gate_passes_at_three_answers() {
        let set = answers(&[
            ("ws_team", "alpha"),
            ("ws_goal", "history"),
            ("ws_pr_flow", "one approval"),
        ]);
        assert!(ensure_overall_answered(&set).is_ok());
    }

    #[test]
    fn test_filled_count_ignores_unknown_keys() {
        // Keys outside the worksheet never reach the gate in practice, but
        // the count must only consider declared fields either way.
        let set = answers(&[("ws_bogus", "x"), ("ws_team", "alpha")]);
        assert_eq!(filled_count(worksheet::fields(), &set), 1);
    }
}
