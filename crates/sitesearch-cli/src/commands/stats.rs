use crate::commands::common::{format_stats_lines, index_stats, SearchContext};
use crate::error::CliError;

pub async fn run_stats(as_json: bool, context: &SearchContext) -> Result<(), CliError> {
    let index = context
        .loader
        .load(&context.location)
        .await
        .map_err(|error| {
            tracing::error!("{error}");
            CliError::IndexUnavailable(context.loader.describe(&context.location))
        })?;
    let stats = index_stats(&index);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        for line in format_stats_lines(&stats) {
            println!("{line}");
        }
    }

    Ok(())
}
