//! Spin wheel state machine
//!
//! State layout: `current_index` is what the UI highlights while spinning;
//! `chosen_index` is the outcome. The two are distinct fields on purpose.
//! The draw happens only at settlement and is uniform over the whole list,
//! independent of where the cycling happened to stop. Deriving one from the
//! other would either bias the outcome or leak it before settlement.

use rand::Rng;

use crate::suggestion::Suggestion;

/// Milliseconds between ticks while spinning
pub const TICK_INTERVAL_MS: u64 = 50;

/// Total spin duration in milliseconds (exactly 60 ticks)
pub const SPIN_DURATION_MS: u64 = 3000;

/// Lifecycle phase of a spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinPhase {
    /// No spin in progress
    #[default]
    Idle,
    /// Cycling through candidates on the tick cadence
    Spinning,
    /// Outcome drawn; `chosen_index` is fixed
    Settled,
}

/// A spin over a fixed, non-empty list of suggestions
///
/// The wheel is the only writer of its own state; ticks arrive from a
/// [`Ticker`](super::Ticker) polled by the event loop. The completion value
/// is returned from the settling tick exactly once per started spin.
#[derive(Debug, Clone)]
pub struct SpinWheel {
    /// Candidates, fixed for the lifetime of the wheel; index space of the run
    suggestions: Vec<Suggestion>,
    /// Visible cycling position, always a valid index
    current_index: usize,
    /// Time accumulated by ticks since `start()`
    elapsed_ms: u64,
    phase: SpinPhase,
    /// The outcome; `Some` if and only if the phase is `Settled`
    chosen_index: Option<usize>,
}

impl SpinWheel {
    /// Create a wheel over `suggestions`
    ///
    /// Returns `None` when the list is empty: a spin over nothing is a
    /// silent no-op, and the UI only offers the action for 2+ suggestions.
    pub fn new(suggestions: Vec<Suggestion>) -> Option<Self> {
        if suggestions.is_empty() {
            return None;
        }
        Some(Self {
            suggestions,
            current_index: 0,
            elapsed_ms: 0,
            phase: SpinPhase::Idle,
            chosen_index: None,
        })
    }

    /// Begin spinning
    ///
    /// Only valid from `Idle`; returns whether the transition happened.
    /// A settled wheel must be closed before it can spin again.
    pub fn start(&mut self) -> bool {
        if self.phase != SpinPhase::Idle {
            return false;
        }
        self.elapsed_ms = 0;
        self.chosen_index = None;
        self.phase = SpinPhase::Spinning;
        true
    }

    /// Advance the wheel by one tick using the thread RNG
    pub fn tick(&mut self) -> Option<&Suggestion> {
        self.tick_with(&mut rand::thread_rng())
    }

    /// Advance the wheel by one tick
    ///
    /// While spinning, moves the visible position one step and accumulates
    /// [`TICK_INTERVAL_MS`]. On the tick that reaches [`SPIN_DURATION_MS`],
    /// draws the outcome uniformly, snaps the visible position onto it,
    /// settles, and returns the chosen suggestion. Every other call returns
    /// `None`; ticks outside the `Spinning` phase are ignored entirely.
    pub fn tick_with<R: Rng>(&mut self, rng: &mut R) -> Option<&Suggestion> {
        if self.phase != SpinPhase::Spinning {
            return None;
        }

        self.current_index = (self.current_index + 1) % self.suggestions.len();
        self.elapsed_ms += TICK_INTERVAL_MS;

        if self.elapsed_ms < SPIN_DURATION_MS {
            return None;
        }

        // The draw ignores where the cycling stopped.
        let chosen = rng.gen_range(0..self.suggestions.len());
        self.current_index = chosen;
        self.chosen_index = Some(chosen);
        self.phase = SpinPhase::Settled;
        Some(&self.suggestions[chosen])
    }

    /// Reset to `Idle`, discarding any outcome
    ///
    /// Callable from any phase. A closed wheel ignores ticks, so a tick
    /// already queued by the scheduler cannot settle it.
    pub fn close(&mut self) {
        self.phase = SpinPhase::Idle;
        self.chosen_index = None;
        self.elapsed_ms = 0;
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn chosen_index(&self) -> Option<usize> {
        self.chosen_index
    }

    /// The settled suggestion, if any
    pub fn chosen(&self) -> Option<&Suggestion> {
        self.chosen_index.map(|i| &self.suggestions[i])
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// Number of ticks a full spin takes
    pub fn ticks_per_spin() -> u64 {
        SPIN_DURATION_MS / TICK_INTERVAL_MS
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
