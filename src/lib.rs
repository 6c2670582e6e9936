//! LunchSpin: a terminal lunch-decision helper
//!
//! Fill in where you are and what you're craving (or what's in your
//! kitchen), fetch suggestions from Gemini, and when you still can't
//! decide, spin the wheel and let it pick for you.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod notification;
pub mod provider;
pub mod share;
pub mod spin;
pub mod suggestion;
pub mod widgets;
