use pretty_assertions::assert_eq;
use sitesearch_core::config::SiteConfig;
use sitesearch_core::panel::{PanelKey, ResultsPanel};
use sitesearch_core::search::Query;
use sitesearch_core::{
    IndexEntry, ResultCandidate, ResultKind, SearchIndex, SearchSession, Section,
};

use crate::cli::CompletionShell;
use crate::commands::common::{
    format_panel_lines, format_result_lines, format_stats_lines, index_stats, SearchContext,
};
use crate::commands::completions::completion_script;
use crate::commands::interactive::{apply_command, finish_input, parse_command, InteractiveCommand};
use crate::error::CliError;
use crate::site_config::load_from_path;

const INDEX: &str = r#"[
    {
        "title": "404-Bank",
        "url": "HackSmarter/404bank.html",
        "category": "HackSmarter Labs",
        "description": "Active Directory walkthrough",
        "keywords": ["kerberoasting", "bloodhound"],
        "sections": [
            {"heading": "Nmap Scan", "anchor": "HackSmarter/404bank.html#nmap-scan", "keywords": ["nmap"]}
        ]
    },
    {
        "title": "Nmap Cheatsheet",
        "url": "writeups/nmap.html",
        "category": "Writeups",
        "keywords": ["nmap", "port scanning"]
    }
]"#;

fn site_with_index() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("search-index.json"), INDEX).unwrap();
    dir
}

fn context_for(site: &tempfile::TempDir, page: &str) -> SearchContext {
    SearchContext::new(
        SiteConfig::default(),
        site.path().to_str().unwrap(),
        page,
    )
    .unwrap()
}

fn candidate(kind: ResultKind, heading: Option<&str>, keywords: &[&str]) -> ResultCandidate {
    ResultCandidate {
        kind,
        title: "404-Bank".to_string(),
        section_heading: heading.map(ToString::to_string),
        url: "HackSmarter/404bank.html".to_string(),
        category: "HackSmarter Labs".to_string(),
        description: None,
        difficulty: None,
        score: 185,
        matched_keywords: keywords.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn parse_command_treats_plain_lines_as_input() {
    assert_eq!(
        parse_command("nmap scan"),
        InteractiveCommand::Input("nmap scan".to_string())
    );
    assert_eq!(parse_command(""), InteractiveCommand::Input(String::new()));
}

#[test]
fn parse_command_recognizes_panel_commands() {
    assert_eq!(parse_command(":down"), InteractiveCommand::Key(PanelKey::ArrowDown));
    assert_eq!(parse_command(" :up "), InteractiveCommand::Key(PanelKey::ArrowUp));
    assert_eq!(parse_command(":enter"), InteractiveCommand::Key(PanelKey::Enter));
    assert_eq!(parse_command(":esc"), InteractiveCommand::Key(PanelKey::Escape));
    assert_eq!(parse_command(":click 3"), InteractiveCommand::Click(3));
    assert_eq!(parse_command(":outside"), InteractiveCommand::Outside);
    assert_eq!(parse_command(":q"), InteractiveCommand::Quit);
}

#[test]
fn parse_command_rejects_malformed_commands() {
    assert_eq!(
        parse_command(":click two"),
        InteractiveCommand::Unknown(":click two".to_string())
    );
    assert_eq!(
        parse_command(":down 2"),
        InteractiveCommand::Unknown(":down 2".to_string())
    );
}

#[test]
fn format_result_lines_include_key_fields() {
    let lines = format_result_lines(&[
        candidate(ResultKind::Page, None, &[]),
        candidate(ResultKind::Section, Some("Nmap Scan"), &["nmap"]),
    ]);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(" 185  page"));
    assert!(!lines[0].contains('['));
    assert!(lines[1].contains("section"));
    assert!(lines[1].contains("404-Bank › Nmap Scan"));
    assert!(lines[1].ends_with("[nmap]"));
}

#[test]
fn format_panel_lines_mark_focus() {
    let mut panel = ResultsPanel::new();
    assert_eq!(format_panel_lines(&panel), vec!["(results hidden)"]);

    panel.show_results(Query::parse("Kerberos").unwrap(), Vec::new());
    assert_eq!(
        format_panel_lines(&panel),
        vec!["No results found for \"Kerberos\""]
    );

    panel.show_results(
        Query::parse("404").unwrap(),
        vec![
            candidate(ResultKind::Page, None, &[]),
            candidate(ResultKind::Section, Some("Nmap Scan"), &[]),
        ],
    );
    panel.handle_key(PanelKey::ArrowUp);
    let lines = format_panel_lines(&panel);
    assert!(lines[0].starts_with("   0."));
    assert!(lines[1].starts_with(">  1."));
}

#[test]
fn index_stats_counts_entries_sections_and_keywords() {
    let index = SearchIndex::new(vec![
        IndexEntry {
            category: "Writeups".to_string(),
            keywords: vec!["a".to_string(), "b".to_string()],
            sections: vec![Section {
                keywords: vec!["c".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        },
        IndexEntry::default(),
    ]);

    let stats = index_stats(&index);
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.sections, 1);
    assert_eq!(stats.keywords, 3);
    assert_eq!(stats.categories.get("Writeups"), Some(&1));
    assert_eq!(stats.categories.get("(uncategorized)"), Some(&1));

    let lines = format_stats_lines(&stats);
    assert_eq!(lines[0], "entries:   2");
}

#[tokio::test(flavor = "current_thread")]
async fn loaded_engine_searches_site_index() {
    let site = site_with_index();
    let context = context_for(&site, "index.html");

    let results = context.loaded_engine().await.search("nmap");
    let urls: Vec<&str> = results.iter().map(|result| result.url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["writeups/nmap.html", "HackSmarter/404bank.html#nmap-scan"]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn nested_page_gets_prefixed_links() {
    let site = site_with_index();
    let context = context_for(&site, "HackSmarter/404bank.html");

    let results = context.loaded_engine().await.search("cheatsheet");
    assert_eq!(results[0].url, "../writeups/nmap.html");
}

#[tokio::test(flavor = "current_thread")]
async fn missing_index_yields_empty_engine() {
    let site = tempfile::tempdir().unwrap();
    let context = context_for(&site, "index.html");

    let engine = context.loaded_engine().await;
    assert!(engine.index().is_empty());
    assert!(engine.search("nmap").is_empty());
}

#[test]
fn load_from_path_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "debounce_ms": "fast" }"#).unwrap();

    match load_from_path(&path) {
        Err(CliError::Config(message)) => assert!(message.contains("Failed to parse config")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn load_from_path_reads_site() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "site": "https://z3rotrace.live" }"#).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.site.as_deref(), Some("https://z3rotrace.live"));
}

#[test]
fn completion_script_names_binary() {
    let script = String::from_utf8(completion_script(CompletionShell::Bash)).unwrap();
    assert!(script.contains("sitesearch"));
}

async fn scripted_session(site: &tempfile::TempDir) -> SearchSession {
    let context = context_for(site, "index.html");
    let engine = context.loaded_engine().await;
    SearchSession::new(engine, context.config.debounce()).0
}

fn run_script(session: &mut SearchSession, script: &str) {
    for line in script.lines() {
        assert!(apply_command(session, parse_command(line), true));
    }
}

#[tokio::test(flavor = "current_thread")]
async fn scripted_panel_commands_see_pending_input() {
    let site = site_with_index();
    let mut session = scripted_session(&site).await;

    run_script(&mut session, "nmap\n:down\n:down");
    assert_eq!(session.panel().rows().len(), 2);
    assert_eq!(session.panel().focus(), Some(1));
    assert_eq!(
        session.panel().rows()[1].url,
        "HackSmarter/404bank.html#nmap-scan"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn scripted_input_is_searched_at_end_of_input() {
    let site = site_with_index();
    let mut session = scripted_session(&site).await;

    run_script(&mut session, "nm\nnmap");
    assert!(!session.panel().is_visible());

    finish_input(&mut session);
    assert_eq!(session.panel().rows()[0].url, "writeups/nmap.html");
}

#[tokio::test(flavor = "current_thread")]
async fn scripted_quit_stops_the_session() {
    let site = site_with_index();
    let mut session = scripted_session(&site).await;

    run_script(&mut session, "cheatsheet");
    assert!(!apply_command(&mut session, parse_command(":quit"), true));
    assert_eq!(session.panel().rows()[0].url, "writeups/nmap.html");
}
