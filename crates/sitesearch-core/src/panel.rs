//! Results panel state and keyboard navigation.

use crate::models::ResultCandidate;
use crate::search::Query;

/// What the results panel currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Hidden,
    /// A valid query matched nothing
    NoResults { query: Query },
    /// At least one result row
    Showing {
        query: Query,
        rows: Vec<ResultCandidate>,
    },
}

/// Keys the panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// Full-page navigation requested by the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
}

/// Result of a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Focus moved to this row; it should be scrolled into view
    FocusMoved(usize),
    Navigate(Navigation),
    /// Panel hidden and the input should lose focus
    Dismissed,
    Ignored,
}

/// Results panel with a focus pointer over its rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsPanel {
    state: PanelState,
    focus: Option<usize>,
}

impl ResultsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &PanelState {
        &self.state
    }

    /// Index of the focused row, if any.
    #[must_use]
    pub const fn focus(&self) -> Option<usize> {
        self.focus
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !matches!(self.state, PanelState::Hidden)
    }

    #[must_use]
    pub fn rows(&self) -> &[ResultCandidate] {
        match &self.state {
            PanelState::Showing { rows, .. } => rows,
            _ => &[],
        }
    }

    /// Display the results of a query. Focus is reset.
    pub fn show_results(&mut self, query: Query, rows: Vec<ResultCandidate>) {
        self.focus = None;
        self.state = if rows.is_empty() {
            PanelState::NoResults { query }
        } else {
            PanelState::Showing { query, rows }
        };
    }

    pub fn hide(&mut self) {
        self.state = PanelState::Hidden;
        self.focus = None;
    }

    pub fn handle_key(&mut self, key: PanelKey) -> KeyOutcome {
        match key {
            PanelKey::ArrowDown => self.move_focus(true),
            PanelKey::ArrowUp => self.move_focus(false),
            PanelKey::Enter => {
                let target = self.focus.unwrap_or(0);
                self.navigation_for(target)
                    .map_or(KeyOutcome::Ignored, KeyOutcome::Navigate)
            }
            PanelKey::Escape => {
                self.hide();
                KeyOutcome::Dismissed
            }
        }
    }

    /// A click on a result row.
    pub fn click_row(&self, index: usize) -> Option<Navigation> {
        self.navigation_for(index)
    }

    /// A click anywhere outside the input and the panel.
    pub fn click_outside(&mut self) {
        self.hide();
    }

    fn move_focus(&mut self, forward: bool) -> KeyOutcome {
        let count = self.rows().len();
        if count == 0 {
            return KeyOutcome::Ignored;
        }

        let next = match (self.focus, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(current), true) => (current + 1) % count,
            (Some(current), false) => (current + count - 1) % count,
        };
        self.focus = Some(next);
        KeyOutcome::FocusMoved(next)
    }

    fn navigation_for(&self, index: usize) -> Option<Navigation> {
        self.rows().get(index).map(|row| Navigation {
            url: row.url.clone(),
        })
    }
}
