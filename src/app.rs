//! Application state, event handling, and rendering

mod events;
mod render;
mod state;

pub use state::{App, FormFocus, SpinSession};
