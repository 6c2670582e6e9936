//! Spin-the-wheel selection
//!
//! The wheel cycles through candidate suggestions on a fixed tick cadence
//! and settles on one chosen uniformly at random. The visible cycling and
//! the actual draw are deliberately separate: the displayed path only gives
//! the appearance of a wheel landing on the result.

pub mod state;
pub mod ticker;

pub use state::{SPIN_DURATION_MS, SpinPhase, SpinWheel, TICK_INTERVAL_MS};
pub use ticker::Ticker;
