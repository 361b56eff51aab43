//! HTML markup for the results panel.
//!
//! Everything that originates from the index or the query is escaped. Query
//! highlighting wraps matches in `<mark>` and escapes both the match and the
//! text around it.

use std::fmt::Write as _;

use regex::RegexBuilder;

use crate::models::{ResultCandidate, ResultKind};
use crate::panel::{PanelState, ResultsPanel};
use crate::search::Query;

/// Keyword tags shown per row.
pub const MAX_TAGS: usize = 5;

/// Escape text for use in element content and quoted attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escape `text` and wrap case-insensitive occurrences of the query in
/// `<mark>`.
#[must_use]
pub fn highlight(text: &str, query: &Query) -> String {
    let Ok(pattern) = RegexBuilder::new(&regex::escape(query.normalized()))
        .case_insensitive(true)
        .build()
    else {
        return escape_html(text);
    };

    let mut output = String::with_capacity(text.len());
    let mut last = 0;
    for found in pattern.find_iter(text) {
        output.push_str(&escape_html(&text[last..found.start()]));
        output.push_str("<mark>");
        output.push_str(&escape_html(found.as_str()));
        output.push_str("</mark>");
        last = found.end();
    }
    output.push_str(&escape_html(&text[last..]));
    output
}

/// Render the panel's current state. Hidden panels render nothing.
#[must_use]
pub fn render_panel(panel: &ResultsPanel) -> String {
    match panel.state() {
        PanelState::Hidden => String::new(),
        PanelState::NoResults { query } => format!(
            "<div class=\"search-no-results\">No results found for \"{}\"</div>",
            escape_html(query.text())
        ),
        PanelState::Showing { query, rows } => {
            let mut output = String::new();
            for (index, row) in rows.iter().enumerate() {
                output.push_str(&render_row(row, index, panel.focus() == Some(index), query));
            }
            output
        }
    }
}

/// Render one result row.
#[must_use]
pub fn render_row(row: &ResultCandidate, index: usize, focused: bool, query: &Query) -> String {
    let mut output = String::new();
    let class = if focused {
        "search-result focused"
    } else {
        "search-result"
    };

    let _ = write!(
        output,
        "<div class=\"{class}\" data-index=\"{index}\" data-url=\"{}\">",
        escape_html(&row.url)
    );
    let _ = write!(
        output,
        "<span class=\"search-result-category\">{}</span>",
        escape_html(&row.category)
    );
    if let Some(difficulty) = &row.difficulty {
        let _ = write!(
            output,
            "<span class=\"search-result-difficulty\">{}</span>",
            escape_html(difficulty)
        );
    }
    let _ = write!(
        output,
        "<div class=\"search-result-title\">{}</div>",
        highlight(&row.display_title(), query)
    );

    if row.kind == ResultKind::Page {
        if let Some(description) = &row.description {
            let _ = write!(
                output,
                "<div class=\"search-result-desc\">{}</div>",
                highlight(description, query)
            );
        }
    }

    if !row.matched_keywords.is_empty() {
        output.push_str("<div class=\"search-result-tags\">");
        for keyword in row.matched_keywords.iter().take(MAX_TAGS) {
            let _ = write!(
                output,
                "<span class=\"search-tag\">{}</span>",
                escape_html(keyword)
            );
        }
        output.push_str("</div>");
    }

    output.push_str("</div>");
    output
}
