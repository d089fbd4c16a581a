//! The resolved query payload handed to the client.

use serde_json::Value;

use crate::target::SemanticTarget;

/// Optional pass-through tuning values. Forwarded verbatim when present; the
/// server is the authority on their meaning and ranges.
#[derive(Debug, Clone, Default)]
pub struct Tuning {
    pub include_sql: Option<String>,
    pub result_format: Option<String>,
    pub temperature: Option<String>,
    pub max_output_tokens: Option<String>,
}

/// A fully resolved single-shot query: one target, a non-empty conversation,
/// optional tuning. Built once per invocation and never mutated.
#[derive(Debug, Clone)]
pub struct AnalystRequest {
    pub target: SemanticTarget,
    pub messages: Vec<Value>,
    pub tuning: Tuning,
}
