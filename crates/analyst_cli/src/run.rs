//! Single-shot orchestration: resolve inputs, build the request, query, report.

use analyst_client::{AnalystClient, CortexClient};
use analyst_core::config::{ActionInputs, ConfigSource, EnvFallback, StaticValues, keys};
use analyst_core::messages::build_messages;
use analyst_core::{AnalystRequest, Result, SemanticTarget, Tuning};
use serde_json::Value;

use crate::cli::Cli;
use crate::github;
use crate::output;

/// Config tiers, highest priority first: CLI flags, action inputs, env vars.
fn config_source(cli: &Cli) -> ConfigSource {
    let flags = StaticValues::new()
        .set_opt(keys::SEMANTIC_MODEL_PATH, cli.semantic_model_path.clone())
        .set_opt(keys::SEMANTIC_VIEW_PATH, cli.semantic_view_path.clone())
        .set_opt(keys::MESSAGES, cli.messages.clone())
        .set_opt(keys::MESSAGE, cli.message.clone())
        .set_opt(keys::INCLUDE_SQL, cli.include_sql.clone())
        .set_opt(keys::RESULT_FORMAT, cli.result_format.clone())
        .set_opt(keys::TEMPERATURE, cli.temperature.clone())
        .set_opt(keys::MAX_OUTPUT_TOKENS, cli.max_output_tokens.clone());

    ConfigSource::new()
        .with(flags)
        .with(ActionInputs)
        .with(EnvFallback)
}

/// Resolve the inputs, run the query, return the target used and the raw
/// response. First failure is terminal; nothing is retried.
pub async fn execute(
    source: &ConfigSource,
    client: &dyn AnalystClient,
) -> Result<(SemanticTarget, Value)> {
    let model = source.get(keys::SEMANTIC_MODEL_PATH).unwrap_or_default();
    let view = source.get(keys::SEMANTIC_VIEW_PATH).unwrap_or_default();
    let target = SemanticTarget::resolve(&model, &view)?;

    let messages = build_messages(
        source.get(keys::MESSAGES).as_deref(),
        source.get(keys::MESSAGE).as_deref(),
    )?;

    let request = AnalystRequest {
        target: target.clone(),
        messages,
        tuning: Tuning {
            include_sql: source.get(keys::INCLUDE_SQL),
            result_format: source.get(keys::RESULT_FORMAT),
            temperature: source.get(keys::TEMPERATURE),
            max_output_tokens: source.get(keys::MAX_OUTPUT_TOKENS),
        },
    };

    let result = client.query(&request).await?;
    Ok((target, result))
}

pub async fn handle(cli: Cli) -> Result<()> {
    let source = config_source(&cli);
    let client = CortexClient::from_env()?;

    let spinner = output::spinner("Querying Cortex Analyst...");
    match execute(&source, &client).await {
        Ok((target, result)) => {
            output::spinner_success(&spinner, "Cortex Analyst query succeeded");
            output::kv(target.label(), target.path());
            output::json_pretty(&result);
            github::set_output("result-json", &serde_json::to_string(&result)?)?;
            Ok(())
        }
        Err(e) => {
            // main prints the error and emits the failure annotation.
            spinner.finish_and_clear();
            Err(e)
        }
    }
}
