//! Request bodies for the feedback API

use serde::Deserialize;
use serde_json::Value;

/// Body for POST /v1/feedback/section
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionFeedbackRequest {
    /// Section identifier, e.g. "git_basics"
    #[serde(default)]
    pub section: Option<String>,

    /// Raw learner answers; sanitized server-side
    #[serde(default)]
    pub answers: Option<Value>,

    /// Opaque rate-limit partition key
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Body for POST /v1/feedback/overall
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallFeedbackRequest {
    #[serde(default)]
    pub answers: Option<Value>,

    #[serde(default)]
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_request_accepts_camel_case_user_id() {
        let req: SectionFeedbackRequest = serde_json::from_str(
            r#"{"section":"git_basics","answers":{"ws_team":"alpha"},"userId":"u-1"}"#,
        )
        .unwrap();
        assert_eq!(req.section.as_deref(), Some("git_basics"));
        assert_eq!(req.user_id.as_deref(), Some("u-1"));
        assert!(req.answers.is_some());
    }

    #[test]
    fn test_all_fields_are_optional_at_parse_time() {
        // Presence checks happen in the pipeline, not the codec.
        let req: SectionFeedbackRequest = serde_json::from_str("{}").unwrap();
        assert!(req.section.is_none());
        assert!(req.answers.is_none());
        assert!(req.user_id.is_none());

        let req: OverallFeedbackRequest = serde_json::from_str("{}").unwrap();
        assert!(req.answers.is_none());
    }
}
