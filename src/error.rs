use thiserror::Error;

/// Startup error types for lunchspin
///
/// Provider failures are not here: they are per-request, carried by
/// [`ProviderError`](crate::provider::ProviderError) and recovered in the UI.
#[derive(Debug, Error)]
pub enum LunchspinError {
    #[error("Invalid config file: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
