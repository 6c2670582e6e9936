//! Shared widget helpers

pub mod popup;
