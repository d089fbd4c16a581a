//! CLI entry point for the Cortex Analyst runner.

mod cli;
mod github;
mod output;
mod run;

use clap::Parser;

use crate::cli::Cli;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    // Project .env, if any; already-set variables win.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::init(cli.output);
    init_logging(cli.verbose);

    if let Err(e) = run::handle(cli).await {
        output::error(&format!("Cortex Analyst query failed: {e}"));
        github::set_failed(&e.to_string());
        std::process::exit(1);
    }
}
