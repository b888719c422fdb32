//! Input sanitization for caller-supplied answer payloads.

use serde_json::Value;
use std::collections::HashMap;

use crate::worksheet::FIELD_PREFIX;

/// Sanitized mapping of field id to answer text.
pub type AnswerSet = HashMap<String, String>;

/// Upper bound on a single answer, in code points. Bounds prompt size and
/// downstream cost.
pub const MAX_ANSWER_CHARS: usize = 2000;

/// Clamp arbitrary caller input to a safe answer set.
///
/// Total function, pure: anything that is not a JSON object yields an empty
/// set, keys without the `ws_` prefix are dropped silently, non-string
/// values become empty strings, and every kept value is truncated to
/// [`MAX_ANSWER_CHARS`] code points.
pub fn sanitize_answers(raw: Option<&Value>) -> AnswerSet {
    let Some(Value::Object(map)) = raw else {
        return AnswerSet::new();
    };
    map.iter()
        .filter(|(key, _)| key.starts_with(FIELD_PREFIX))
        .map(|(key, value)| (key.clone(), sanitize_text(value)))
        .collect()
}

fn sanitize_text(value: &Value) -> String {
    match value.as_str() {
        Some(text) => truncate_chars(text, MAX_ANSWER_CHARS),
        None => String::new(),
    }
}

/// Truncate to at most `max` code points, never splitting a character.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
