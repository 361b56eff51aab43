//! Line-driven search box session.
//!
//! Each stdin line either replaces the input text (and is searched once typing
//! pauses) or, when it starts with `:`, acts on the results panel.
//!
//! Piped scripts arrive faster than the quiet period, so when stdin is not a
//! terminal pending input is searched before each panel command and at end of
//! input.

use std::io::IsTerminal;

use sitesearch_core::panel::{KeyOutcome, Navigation, PanelKey};
use sitesearch_core::{SearchEngine, SearchSession};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::common::{format_panel_lines, SearchContext};
use crate::error::CliError;

const HELP: &str = "Type to search. Commands: :down :up :enter :esc :focus :click N :outside :html :help :quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveCommand {
    Input(String),
    Key(PanelKey),
    Focus,
    Click(usize),
    Outside,
    Html,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> InteractiveCommand {
    let Some(command) = line.trim().strip_prefix(':') else {
        return InteractiveCommand::Input(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("down"), None) => InteractiveCommand::Key(PanelKey::ArrowDown),
        (Some("up"), None) => InteractiveCommand::Key(PanelKey::ArrowUp),
        (Some("enter"), None) => InteractiveCommand::Key(PanelKey::Enter),
        (Some("esc" | "escape"), None) => InteractiveCommand::Key(PanelKey::Escape),
        (Some("focus"), None) => InteractiveCommand::Focus,
        (Some("click"), Some(index)) => index.parse().map_or_else(
            |_| InteractiveCommand::Unknown(line.to_string()),
            InteractiveCommand::Click,
        ),
        (Some("outside"), None) => InteractiveCommand::Outside,
        (Some("html"), None) => InteractiveCommand::Html,
        (Some("help"), None) => InteractiveCommand::Help,
        (Some("quit" | "q"), None) => InteractiveCommand::Quit,
        _ => InteractiveCommand::Unknown(line.to_string()),
    }
}

pub async fn run_interactive(context: &SearchContext) -> Result<(), CliError> {
    let engine = SearchEngine::new(context.location.clone());
    let scripted = !std::io::stdin().is_terminal();
    // At a terminal early queries search the empty index, like a page still loading.
    let _load = if scripted {
        engine.load_index(&context.loader).await;
        None
    } else {
        Some(engine.spawn_load_index(context.loader.clone()))
    };

    let (mut session, mut settled) = SearchSession::new(engine, context.config.debounce());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    eprintln!("{HELP}");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    finish_input(&mut session);
                    break;
                };
                if !apply_command(&mut session, parse_command(&line), scripted) {
                    break;
                }
            }
            Some(text) = settled.recv() => {
                if session.apply_settled(&text) {
                    print_panel(&session);
                }
            }
        }
    }

    Ok(())
}

/// Returns `false` when the session should end.
pub fn apply_command(
    session: &mut SearchSession,
    command: InteractiveCommand,
    scripted: bool,
) -> bool {
    if scripted && !matches!(command, InteractiveCommand::Input(_)) {
        finish_input(session);
    }

    match command {
        InteractiveCommand::Input(text) => session.on_input(text),
        InteractiveCommand::Key(key) => match session.on_key(key) {
            KeyOutcome::FocusMoved(_) => print_panel(session),
            KeyOutcome::Navigate(navigation) => print_navigation(&navigation),
            KeyOutcome::Dismissed => println!("(results hidden, input blurred)"),
            KeyOutcome::Ignored => {}
        },
        InteractiveCommand::Focus => {
            session.on_focus();
            print_panel(session);
        }
        InteractiveCommand::Click(index) => match session.on_click_row(index) {
            Some(navigation) => print_navigation(&navigation),
            None => eprintln!("No result row {index}"),
        },
        InteractiveCommand::Outside => {
            session.on_click_outside();
            print_panel(session);
        }
        InteractiveCommand::Html => println!("{}", session.render()),
        InteractiveCommand::Help => eprintln!("{HELP}"),
        InteractiveCommand::Quit => return false,
        InteractiveCommand::Unknown(line) => eprintln!("Unknown command: {}", line.trim()),
    }
    true
}

/// Search input still inside its quiet period.
pub fn finish_input(session: &mut SearchSession) {
    if session.flush() {
        print_panel(session);
    }
}

fn print_panel(session: &SearchSession) {
    for line in format_panel_lines(session.panel()) {
        println!("{line}");
    }
}

fn print_navigation(navigation: &Navigation) {
    println!("navigate: {}", navigation.url);
}
