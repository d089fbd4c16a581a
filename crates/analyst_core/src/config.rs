//! Tiered configuration lookup.
//!
//! Inputs arrive through up to three channels: CLI flags, GitHub Actions
//! inputs (`INPUT_*` variables), and plain environment-variable fallbacks.
//! A [`ConfigSource`] queries its providers in priority order and returns the
//! first value that is non-blank after trimming; blank or absent values fall
//! through to the next tier.

use std::collections::HashMap;

/// Canonical input names, shared by every tier.
pub mod keys {
    pub const SEMANTIC_MODEL_PATH: &str = "semantic-model-path";
    pub const SEMANTIC_VIEW_PATH: &str = "semantic-view-path";
    pub const MESSAGES: &str = "messages";
    pub const MESSAGE: &str = "message";
    pub const INCLUDE_SQL: &str = "include-sql";
    pub const RESULT_FORMAT: &str = "result-format";
    pub const TEMPERATURE: &str = "temperature";
    pub const MAX_OUTPUT_TOKENS: &str = "max-output-tokens";
}

/// One configuration tier: raw value for an input name, or `None`.
pub trait ConfigProvider: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory values. Used for CLI flags and as the test provider.
#[derive(Debug, Default)]
pub struct StaticValues {
    values: HashMap<String, String>,
}

impl StaticValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value. Returns `self` for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Set a value only when present. `None` leaves the key unset so lookup
    /// falls through to the next tier.
    pub fn set_opt(self, key: impl Into<String>, value: Option<String>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }
}

impl ConfigProvider for StaticValues {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// GitHub Actions structured inputs: input `name` is read from the
/// `INPUT_<NAME>` variable (spaces to underscores, uppercased, dashes kept),
/// which is how the runner exposes `with:` values to a step.
pub struct ActionInputs;

impl ConfigProvider for ActionInputs {
    fn get(&self, key: &str) -> Option<String> {
        let var = format!("INPUT_{}", key.replace(' ', "_").to_uppercase());
        std::env::var(var).ok()
    }
}

/// Plain environment variables, using the fixed fallback names the action
/// documents. Unknown keys have no fallback.
pub struct EnvFallback;

impl EnvFallback {
    fn var_for(key: &str) -> Option<&'static str> {
        Some(match key {
            keys::SEMANTIC_MODEL_PATH => "SEMANTIC_MODEL_PATH",
            keys::SEMANTIC_VIEW_PATH => "SEMANTIC_VIEW_PATH",
            keys::MESSAGES => "ANALYST_MESSAGES",
            keys::MESSAGE => "ANALYST_MESSAGE",
            keys::INCLUDE_SQL => "ANALYST_INCLUDE_SQL",
            keys::RESULT_FORMAT => "ANALYST_RESULT_FORMAT",
            keys::TEMPERATURE => "ANALYST_TEMPERATURE",
            keys::MAX_OUTPUT_TOKENS => "ANALYST_MAX_OUTPUT_TOKENS",
            _ => return None,
        })
    }
}

impl ConfigProvider for EnvFallback {
    fn get(&self, key: &str) -> Option<String> {
        Self::var_for(key).and_then(|var| std::env::var(var).ok())
    }
}

/// Ordered list of providers, highest priority first.
#[derive(Default)]
pub struct ConfigSource {
    providers: Vec<Box<dyn ConfigProvider>>,
}

impl ConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tier. Returns `self` for chaining.
    pub fn with(mut self, provider: impl ConfigProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Trimmed value from the highest-priority tier that has a non-blank one.
    pub fn get(&self, key: &str) -> Option<String> {
        self.providers.iter().find_map(|provider| {
            provider
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tier_wins() {
        let source = ConfigSource::new()
            .with(StaticValues::new().set(keys::MESSAGE, "from flags"))
            .with(StaticValues::new().set(keys::MESSAGE, "from env"));
        assert_eq!(source.get(keys::MESSAGE).as_deref(), Some("from flags"));
    }

    #[test]
    fn blank_value_falls_through() {
        let source = ConfigSource::new()
            .with(StaticValues::new().set(keys::MESSAGE, "   "))
            .with(StaticValues::new().set(keys::MESSAGE, "from env"));
        assert_eq!(source.get(keys::MESSAGE).as_deref(), Some("from env"));
    }

    #[test]
    fn values_are_trimmed() {
        let source =
            ConfigSource::new().with(StaticValues::new().set(keys::MESSAGE, "  padded  "));
        assert_eq!(source.get(keys::MESSAGE).as_deref(), Some("padded"));
    }

    #[test]
    fn absent_everywhere_is_none() {
        let source = ConfigSource::new().with(StaticValues::new());
        assert_eq!(source.get(keys::MESSAGE), None);
    }

    #[test]
    fn set_opt_none_leaves_key_unset() {
        let source = ConfigSource::new()
            .with(StaticValues::new().set_opt(keys::MESSAGE, None))
            .with(StaticValues::new().set(keys::MESSAGE, "fallback"));
        assert_eq!(source.get(keys::MESSAGE).as_deref(), Some("fallback"));
    }

    #[test]
    fn action_inputs_read_input_variables() {
        std::env::set_var("INPUT_RESULT-FORMAT", "table");
        let source = ConfigSource::new().with(ActionInputs);
        assert_eq!(source.get(keys::RESULT_FORMAT).as_deref(), Some("table"));
        std::env::remove_var("INPUT_RESULT-FORMAT");
    }

    #[test]
    fn env_fallback_uses_documented_names() {
        std::env::set_var("ANALYST_TEMPERATURE", "0.2");
        let source = ConfigSource::new().with(EnvFallback);
        assert_eq!(source.get(keys::TEMPERATURE).as_deref(), Some("0.2"));
        std::env::remove_var("ANALYST_TEMPERATURE");
    }

    #[test]
    fn env_fallback_ignores_unknown_keys() {
        assert_eq!(EnvFallback.get("no-such-input"), None);
    }
}
