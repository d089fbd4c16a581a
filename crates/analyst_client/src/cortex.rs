//! Snowflake Cortex Analyst REST client.

use std::time::Duration;

use analyst_core::{AnalystError, AnalystRequest, Result, SemanticTarget};
use serde_json::{json, Value};
use tokio::time::timeout;

use crate::client::AnalystClient;

/// Connection settings, normally read from the environment.
#[derive(Debug, Clone)]
pub struct CortexConfig {
    /// Account base URL, e.g. `https://myorg-myaccount.snowflakecomputing.com`.
    pub account_url: String,
    /// Programmatic access token or OAuth token, sent as a bearer.
    pub token: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl CortexConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Read settings from `SNOWFLAKE_ACCOUNT_URL`, `SNOWFLAKE_TOKEN` and
    /// the optional `ANALYST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let account_url = std::env::var("SNOWFLAKE_ACCOUNT_URL")
            .map_err(|_| AnalystError::Config("SNOWFLAKE_ACCOUNT_URL is not set".to_string()))?;
        let token = std::env::var("SNOWFLAKE_TOKEN")
            .map_err(|_| AnalystError::Config("SNOWFLAKE_TOKEN is not set".to_string()))?;
        let timeout_secs = std::env::var("ANALYST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            account_url: account_url.trim().trim_end_matches('/').to_string(),
            token,
            timeout_secs,
        })
    }
}

/// HTTP client for the Cortex Analyst message endpoint. One request per
/// process run, no retries.
pub struct CortexClient {
    config: CortexConfig,
    client: reqwest::Client,
}

impl CortexClient {
    pub fn new(config: CortexConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(CortexConfig::from_env()?))
    }

    /// Wire body for the message endpoint. The target selects between
    /// `semantic_model_file` and `semantic_view`; tuning values are forwarded
    /// verbatim when present.
    fn build_body(request: &AnalystRequest) -> Value {
        let mut body = json!({ "messages": request.messages });
        match &request.target {
            SemanticTarget::Model(path) => body["semantic_model_file"] = json!(path),
            SemanticTarget::View(name) => body["semantic_view"] = json!(name),
        }

        let tuning = &request.tuning;
        if let Some(v) = &tuning.include_sql {
            body["include_sql"] = json!(v);
        }
        if let Some(v) = &tuning.result_format {
            body["result_format"] = json!(v);
        }
        if let Some(v) = &tuning.temperature {
            body["temperature"] = json!(v);
        }
        if let Some(v) = &tuning.max_output_tokens {
            body["max_output_tokens"] = json!(v);
        }
        body
    }

    async fn post(&self, url: &str, body: &Value) -> anyhow::Result<Value> {
        let duration = Duration::from_secs(self.config.timeout_secs);
        let res = timeout(duration, async {
            self.client
                .post(url)
                .bearer_auth(&self.config.token)
                .json(body)
                .send()
                .await
        })
        .await
        .map_err(|_| anyhow::anyhow!("request timed out after {}s", self.config.timeout_secs))??;

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            anyhow::bail!("analyst API error {}: {}", status, text);
        }
        let parsed: Value = serde_json::from_str(&text)
            .map_err(|e| anyhow::anyhow!("analyst API returned invalid JSON: {e}"))?;
        Ok(parsed)
    }
}

#[async_trait::async_trait]
impl AnalystClient for CortexClient {
    async fn query(&self, request: &AnalystRequest) -> Result<Value> {
        let url = format!("{}/api/v2/cortex/analyst/message", self.config.account_url);
        let body = Self::build_body(request);
        tracing::debug!(
            url = %url,
            timeout_secs = self.config.timeout_secs,
            "sending analyst request"
        );

        self.post(&url, &body).await.map_err(AnalystError::Request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyst_core::Tuning;

    fn request(target: SemanticTarget, tuning: Tuning) -> AnalystRequest {
        AnalystRequest {
            target,
            messages: vec![json!({"role":"user","content":[{"type":"text","text":"hi"}]})],
            tuning,
        }
    }

    #[test]
    fn model_target_sets_semantic_model_file() {
        let body = CortexClient::build_body(&request(
            SemanticTarget::Model("models/sales.yaml".to_string()),
            Tuning::default(),
        ));
        assert_eq!(body["semantic_model_file"], "models/sales.yaml");
        assert!(body.get("semantic_view").is_none());
    }

    #[test]
    fn view_target_sets_semantic_view() {
        let body = CortexClient::build_body(&request(
            SemanticTarget::View("SALES_VIEW".to_string()),
            Tuning::default(),
        ));
        assert_eq!(body["semantic_view"], "SALES_VIEW");
        assert!(body.get("semantic_model_file").is_none());
    }

    #[test]
    fn tuning_values_are_forwarded_verbatim() {
        let tuning = Tuning {
            include_sql: Some("true".to_string()),
            result_format: None,
            temperature: Some("0.2".to_string()),
            max_output_tokens: Some("512".to_string()),
        };
        let body = CortexClient::build_body(&request(
            SemanticTarget::Model("models/sales.yaml".to_string()),
            tuning,
        ));
        assert_eq!(body["include_sql"], "true");
        assert_eq!(body["temperature"], "0.2");
        assert_eq!(body["max_output_tokens"], "512");
        assert!(body.get("result_format").is_none());
    }

    #[test]
    fn messages_are_embedded_as_given() {
        let body = CortexClient::build_body(&request(
            SemanticTarget::Model("models/sales.yaml".to_string()),
            Tuning::default(),
        ));
        assert!(body["messages"].is_array());
        assert_eq!(body["messages"][0]["role"], "user");
    }
}
