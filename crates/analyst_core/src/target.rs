//! Semantic-target resolution: exactly one of model or view.

use crate::error::{AnalystError, Result};

/// The model-or-view reference that scopes a query to one data schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticTarget {
    /// Stage path of a semantic model YAML file.
    Model(String),
    /// Name of a server-side semantic view.
    View(String),
}

impl SemanticTarget {
    /// Pick exactly one target from the two raw candidates.
    ///
    /// Candidates are trimmed before the emptiness checks, so a
    /// whitespace-only value counts as unset. Supplying neither or both
    /// candidates is a config error.
    pub fn resolve(model: &str, view: &str) -> Result<Self> {
        let model = model.trim();
        let view = view.trim();

        match (model.is_empty(), view.is_empty()) {
            (true, true) => Err(AnalystError::Config(
                "provide `semantic-model-path` or `semantic-view-path` \
                 (or set SEMANTIC_MODEL_PATH / SEMANTIC_VIEW_PATH)"
                    .to_string(),
            )),
            (false, false) => Err(AnalystError::Config(
                "provide only one of `semantic-model-path` and `semantic-view-path`, not both"
                    .to_string(),
            )),
            (false, true) => Ok(SemanticTarget::Model(model.to_string())),
            (true, false) => Ok(SemanticTarget::View(view.to_string())),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Model(path) | Self::View(path) => path,
        }
    }

    /// Human label for reporting which target kind was used.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Model(_) => "Semantic model",
            Self::View(_) => "Semantic view",
        }
    }
}
