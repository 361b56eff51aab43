//! Cancellable quiet-period timer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delay between the last keystroke and the search it triggers.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// A value whose quiet period elapsed, tagged with the schedule it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled<T> {
    pub generation: u64,
    pub value: T,
}

/// Delivers the most recent scheduled value once no new value has been
/// scheduled for the configured delay.
///
/// Each call to [`Debouncer::schedule`] aborts the pending timer, bumps the
/// generation and starts a new timer. Settled values arrive on the receiver
/// returned by [`Debouncer::new`]; a value already sent can still sit in the
/// channel after a newer schedule, so consumers check
/// [`Debouncer::is_latest`] before acting on it. Must be used from within a
/// Tokio runtime.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    settled: mpsc::UnboundedSender<Settled<T>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<Settled<T>>) {
        let (settled, receiver) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                generation: 0,
                pending: None,
                settled,
            },
            receiver,
        )
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Restart the timer with a new value. Returns the value's generation.
    pub fn schedule(&mut self, value: T) -> u64 {
        self.cancel();

        let generation = self.generation;
        let delay = self.delay;
        let settled = self.settled.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session ended.
            let _ = settled.send(Settled { generation, value });
        }));
        generation
    }

    /// Drop the pending value, if any. Values already sent become stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a settled value belongs to the most recent schedule.
    #[must_use]
    pub const fn is_latest(&self, settled: &Settled<T>) -> bool {
        settled.generation == self.generation
    }

    /// Mark the latest schedule as consumed so its value is not acted on
    /// twice. Returns whether a schedule was outstanding.
    pub fn consume(&mut self) -> bool {
        let outstanding = self.pending.is_some();
        self.cancel();
        outstanding
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
