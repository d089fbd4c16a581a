//! GitHub Actions reporting sink: step outputs and failure annotations.
//!
//! Both are no-ops outside of Actions; local runs already print the
//! response and signal failure through the exit code.

use std::fs::OpenOptions;
use std::io::Write;

/// Append a step output to the file named by `GITHUB_OUTPUT`, using the
/// heredoc form so multi-line JSON survives intact.
pub fn set_output(name: &str, value: &str) -> std::io::Result<()> {
    let Ok(path) = std::env::var("GITHUB_OUTPUT") else {
        return Ok(());
    };
    if path.is_empty() {
        return Ok(());
    }
    write_output(&path, name, value)
}

fn write_output(path: &str, name: &str, value: &str) -> std::io::Result<()> {
    // Randomized delimiter so a value containing the literal marker can't
    // terminate the heredoc early.
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{name}<<{delimiter}")?;
    writeln!(file, "{value}")?;
    writeln!(file, "{delimiter}")?;
    Ok(())
}

/// Emit an `::error::` workflow command so the failed step carries the
/// error message in the run summary.
pub fn set_failed(message: &str) {
    if std::env::var("GITHUB_ACTIONS").as_deref() == Ok("true") {
        println!("::error::{}", escape_data(message));
    }
}

/// Workflow-command data escaping: `%`, CR and LF must be percent-encoded.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
