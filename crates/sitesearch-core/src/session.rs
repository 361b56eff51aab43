//! Search box session: input text, debounced searches, and the results panel.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::debounce::{Debouncer, Settled};
use crate::engine::SearchEngine;
use crate::panel::{KeyOutcome, Navigation, PanelKey, ResultsPanel};
use crate::render::render_panel;
use crate::search::Query;

/// Receiver of settled input texts, to be fed back into
/// [`SearchSession::apply_settled`].
pub type SettledInput = mpsc::UnboundedReceiver<Settled<String>>;

/// One search box on one page.
#[derive(Debug)]
pub struct SearchSession {
    engine: SearchEngine,
    panel: ResultsPanel,
    input: String,
    input_focused: bool,
    debouncer: Debouncer<String>,
}

impl SearchSession {
    pub fn new(engine: SearchEngine, debounce: Duration) -> (Self, SettledInput) {
        let (debouncer, settled) = Debouncer::new(debounce);
        (
            Self {
                engine,
                panel: ResultsPanel::new(),
                input: String::new(),
                input_focused: false,
                debouncer,
            },
            settled,
        )
    }

    #[must_use]
    pub const fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    #[must_use]
    pub const fn panel(&self) -> &ResultsPanel {
        &self.panel
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    /// The input text changed. The search runs once typing pauses.
    pub fn on_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.input_focused = true;
        self.debouncer.schedule(self.input.clone());
    }

    /// A debounced input settled. Values from superseded or already consumed
    /// schedules are ignored.
    pub fn apply_settled(&mut self, settled: &Settled<String>) -> bool {
        if !self.debouncer.is_latest(settled) || settled.value != self.input {
            return false;
        }
        self.debouncer.consume();
        self.run_search();
        true
    }

    /// Search any input still waiting on its quiet period right away.
    ///
    /// Used when no further input can arrive. Returns whether a search ran.
    pub fn flush(&mut self) -> bool {
        if !self.debouncer.consume() {
            return false;
        }
        self.run_search();
        true
    }

    /// Search the current input immediately.
    pub fn run_search(&mut self) {
        match Query::parse(&self.input) {
            Some(query) => {
                let results = self.engine.search_query(&query);
                self.panel.show_results(query, results);
            }
            None => self.panel.hide(),
        }
    }

    /// The input regained focus; non-empty text is searched again.
    pub fn on_focus(&mut self) {
        self.input_focused = true;
        if !self.input.trim().is_empty() {
            self.run_search();
        }
    }

    pub fn on_key(&mut self, key: PanelKey) -> KeyOutcome {
        let outcome = self.panel.handle_key(key);
        if outcome == KeyOutcome::Dismissed {
            self.input_focused = false;
        }
        outcome
    }

    pub fn on_click_row(&self, index: usize) -> Option<Navigation> {
        self.panel.click_row(index)
    }

    pub fn on_click_outside(&mut self) {
        self.panel.click_outside();
    }

    /// Markup for the current panel state.
    #[must_use]
    pub fn render(&self) -> String {
        render_panel(&self.panel)
    }
}
