//! Per-category debounce state machine.
//!
//! Each category is either `Idle` or `Pending` with a deadline. A qualifying
//! event moves it to `Pending { now + window }`, replacing any earlier
//! deadline. Once the deadline passes the category is due and returns to
//! `Idle`. Categories never affect each other.

use super::classify::WatchCategory;
use std::time::Duration;
use tokio::time::Instant;

/// Debounce state of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    Pending { deadline: Instant },
}

/// Two independent debounce timers, one per [`WatchCategory`].
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    states: [DebounceState; 2],
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            states: [DebounceState::Idle; 2],
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn state(&self, category: WatchCategory) -> DebounceState {
        self.states[category.index()]
    }

    /// Record a qualifying event at `now`.
    ///
    /// Returns true when a pending run was pushed back rather than newly scheduled.
    pub fn record(&mut self, category: WatchCategory, now: Instant) -> bool {
        let state = &mut self.states[category.index()];
        let restarted = matches!(state, DebounceState::Pending { .. });
        *state = DebounceState::Pending {
            deadline: now + self.window,
        };
        restarted
    }

    /// Earliest pending deadline across categories.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.states
            .iter()
            .filter_map(|state| match state {
                DebounceState::Pending { deadline } => Some(*deadline),
                DebounceState::Idle => None,
            })
            .min()
    }

    /// Categories whose deadline has passed at `now`; they return to `Idle`.
    pub fn take_due(&mut self, now: Instant) -> Vec<WatchCategory> {
        let mut due = Vec::new();
        for category in WatchCategory::ALL {
            let state = &mut self.states[category.index()];
            if let DebounceState::Pending { deadline } = *state {
                if deadline <= now {
                    *state = DebounceState::Idle;
                    due.push(category);
                }
            }
        }
        due
    }
}
