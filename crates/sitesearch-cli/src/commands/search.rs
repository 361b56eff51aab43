use sitesearch_core::panel::ResultsPanel;
use sitesearch_core::render::render_panel;
use sitesearch_core::search::Query;

use crate::commands::common::{format_result_lines, SearchContext};
use crate::error::CliError;

pub async fn run_search(
    query_parts: &[String],
    as_json: bool,
    as_html: bool,
    context: &SearchContext,
) -> Result<(), CliError> {
    let raw_query = query_parts.join(" ");
    let Some(query) = Query::parse(&raw_query) else {
        tracing::debug!("Query {raw_query:?} is too short to search");
        return Ok(());
    };

    let engine = context.loaded_engine().await;
    let results = engine.search_query(&query);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if as_html {
        let mut panel = ResultsPanel::new();
        panel.show_results(query, results);
        println!("{}", render_panel(&panel));
    } else if results.is_empty() {
        println!("No results found for \"{}\"", query.text());
    } else {
        for line in format_result_lines(&results) {
            println!("{line}");
        }
    }

    Ok(())
}
