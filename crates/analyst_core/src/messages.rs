//! Message normalization: a JSON array passed through, or one user turn.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AnalystError, Result};

/// One conversation turn, in the shape the Analyst API expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
}

impl Message {
    /// A single user turn with one text block.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }
}

/// Normalize the two input channels into a non-empty message list.
///
/// A non-blank `messages` JSON array wins over the single `message` string
/// and is passed through element-for-element untouched; the server is the
/// authority on individual message shape. Otherwise the single string
/// becomes one trimmed user turn.
pub fn build_messages(
    raw_messages: Option<&str>,
    single_message: Option<&str>,
) -> Result<Vec<Value>> {
    if let Some(raw) = raw_messages {
        let raw = raw.trim();
        if !raw.is_empty() {
            let parsed: Value = serde_json::from_str(raw)
                .map_err(|e| AnalystError::Parse(format!("invalid messages JSON: {e}")))?;
            return match parsed {
                Value::Array(list) => Ok(list),
                _ => Err(AnalystError::Validation(
                    "messages must be a JSON array".to_string(),
                )),
            };
        }
    }

    let message = single_message.unwrap_or_default().trim();
    if message.is_empty() {
        return Err(AnalystError::Validation(
            "missing analyst message - provide `message`, ANALYST_MESSAGE, or a messages array"
                .to_string(),
        ));
    }

    Ok(vec![serde_json::to_value(Message::user(message))?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_array_is_passed_through_unchanged() {
        let raw = r#"[{"role":"user","content":[{"type":"text","text":"hi"}]},{"custom":1}]"#;
        let messages = build_messages(Some(raw), None).unwrap();
        assert_eq!(
            messages,
            vec![
                json!({"role":"user","content":[{"type":"text","text":"hi"}]}),
                json!({"custom":1}),
            ]
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = build_messages(Some("[{not json"), Some("fallback")).unwrap_err();
        assert!(matches!(err, AnalystError::Parse(_)));
        assert!(err.to_string().contains("invalid messages JSON"));
    }

    #[test]
    fn non_array_json_is_a_validation_error() {
        for raw in [r#"{"role":"user"}"#, "42", r#""hello""#] {
            let err = build_messages(Some(raw), None).unwrap_err();
            assert!(matches!(err, AnalystError::Validation(_)), "input: {raw}");
            assert!(err.to_string().contains("must be a JSON array"));
        }
    }

    #[test]
    fn blank_messages_falls_back_to_single_message() {
        let messages = build_messages(Some("   "), Some("Show me Q1 revenue")).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
    }

    #[test]
    fn single_message_is_trimmed_into_one_user_turn() {
        let messages = build_messages(None, Some("  Show me Q1 revenue  ")).unwrap();
        assert_eq!(
            messages,
            vec![json!({
                "role": "user",
                "content": [{"type": "text", "text": "Show me Q1 revenue"}],
            })]
        );
    }

    #[test]
    fn missing_both_channels_is_a_validation_error() {
        for single in [None, Some(""), Some("   ")] {
            let err = build_messages(None, single).unwrap_err();
            assert!(matches!(err, AnalystError::Validation(_)));
            assert!(err.to_string().contains("missing analyst message"));
        }
    }

    #[test]
    fn empty_array_is_passed_through() {
        // Pass-through trust model: the server rejects an empty conversation.
        let messages = build_messages(Some("[]"), Some("unused")).unwrap();
        assert!(messages.is_empty());
    }
}
