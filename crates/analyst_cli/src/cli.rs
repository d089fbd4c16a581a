//! CLI argument definitions using clap derive macros.

use clap::{Parser, ValueEnum};

/// Run one Snowflake Cortex Analyst query and report the result.
///
/// Every input flag can also arrive as a GitHub Actions input (`INPUT_*`
/// variable) or through the documented environment-variable fallbacks;
/// flags win, action inputs are next, plain env vars last.
#[derive(Parser)]
#[command(name = "cortex-analyst", about, version)]
pub struct Cli {
    /// Stage path of the semantic model YAML (exclusive with --semantic-view-path)
    #[arg(long)]
    pub semantic_model_path: Option<String>,

    /// Name of the semantic view (exclusive with --semantic-model-path)
    #[arg(long)]
    pub semantic_view_path: Option<String>,

    /// JSON array of conversation messages; takes priority over --message
    #[arg(long)]
    pub messages: Option<String>,

    /// Single free-text question, sent as one user turn
    #[arg(short, long)]
    pub message: Option<String>,

    /// Ask the server to include generated SQL in the response (pass-through)
    #[arg(long)]
    pub include_sql: Option<String>,

    /// Response result format (pass-through)
    #[arg(long)]
    pub result_format: Option<String>,

    /// Sampling temperature (pass-through)
    #[arg(long)]
    pub temperature: Option<String>,

    /// Output token cap (pass-through)
    #[arg(long)]
    pub max_output_tokens: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}
