//! analyst-client — the external query capability.
//!
//! [`AnalystClient`] is the single seam the runner delegates to;
//! [`CortexClient`] implements it against the Snowflake Cortex Analyst
//! message API.

mod client;
mod cortex;

pub use client::AnalystClient;
pub use cortex::{CortexClient, CortexConfig};
