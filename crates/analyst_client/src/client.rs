use analyst_core::{AnalystRequest, Result};
use serde_json::Value;

/// A capability that runs one analyst query to completion.
///
/// The response JSON is opaque to the caller; it is reported and stored
/// without interpretation.
#[async_trait::async_trait]
pub trait AnalystClient: Send + Sync {
    async fn query(&self, request: &AnalystRequest) -> Result<Value>;
}
