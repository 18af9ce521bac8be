//! Debounced search input.
//!
//! [`SearchDebouncer`] is a cancellable timer with a single "latest pending" slot.
//! Every [`submit`](SearchDebouncer::submit) overwrites the slot and pushes the
//! deadline out by the quiet interval, so only the last text typed within a quiet
//! window is ever handed out. Blank text bypasses the timer: it clears the slot and
//! asks the caller to restore the default collection right away.
//!
//! The debouncer never sleeps itself. Callers pass `now` in and wait for
//! [`deadline`](SearchDebouncer::deadline) however their runtime does; the engine
//! driver uses `tokio::time::sleep_until`.

use tokio::time::{Duration, Instant};

/// Production quiet interval.
pub const DEFAULT_QUIET_INTERVAL: Duration = Duration::from_millis(300);

/// What the caller should do after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Query parked until `deadline`.
    Scheduled { deadline: Instant },
    /// Input was blank; reload the default listing now.
    RestoreDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    query: String,
    deadline: Instant,
}

/// Single-slot search debouncer.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    quiet: Duration,
    pending: Option<Pending>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_INTERVAL)
    }
}

impl SearchDebouncer {
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self { quiet, pending: None }
    }

    #[must_use]
    pub const fn quiet_interval(&self) -> Duration {
        self.quiet
    }

    /// Records `text` as the latest input at `now`, superseding any pending query.
    pub fn submit(&mut self, text: &str, now: Instant) -> SubmitOutcome {
        let query = text.trim();
        if query.is_empty() {
            if self.pending.take().is_some() {
                tracing::debug!("blank input cancelled pending search");
            }
            return SubmitOutcome::RestoreDefault;
        }

        let deadline = now + self.quiet;
        if let Some(previous) = self.pending.replace(Pending { query: query.to_string(), deadline }) {
            tracing::trace!(superseded = %previous.query, "pending search superseded");
        }
        tracing::trace!(query = %query, "search scheduled");

        SubmitOutcome::Scheduled { deadline }
    }

    /// When the pending query becomes due, if there is one.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Hands out the pending query once its deadline has passed.
    ///
    /// The slot is emptied, so each query is dispatched at most once.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }

    /// Drops the pending query without dispatching it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
