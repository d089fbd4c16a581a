//! analyst-core — pure input resolution and request construction.
//!
//! Everything here is deterministic logic over raw configuration strings:
//! tiered lookup, semantic-target resolution, message normalization, and the
//! request type handed to the client. The HTTP call itself lives in
//! `analyst-client`; reporting lives in the CLI.

pub mod config;
pub mod error;
pub mod messages;
pub mod request;
pub mod target;

pub use error::{AnalystError, Result};
pub use request::{AnalystRequest, Tuning};
pub use target::SemanticTarget;
