//! Suggestion provider abstraction
//!
//! Defines the provider error type, the request/response messages exchanged
//! with the background worker, and the Gemini client implementation.

use thiserror::Error;

use crate::suggestion::{Suggestion, SuggestionRequest};

pub mod gemini;
pub mod worker;

pub use gemini::GeminiClient;
pub use worker::spawn_worker;

/// Errors that can occur while fetching suggestions
///
/// Every variant is recoverable: the UI surfaces the message with a retry
/// hint and clears the suggestion list. Nothing here is fatal.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider is not configured (missing API key or model)
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Network error during the API request
    #[error("Network error: {0}")]
    Network(String),

    /// API returned a non-2xx response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body or payload did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Provider answered with an empty suggestion array
    #[error("The provider returned no suggestions. Try rephrasing your input.")]
    EmptyResponse,

    /// Request was cancelled before completing
    #[error("Request cancelled")]
    Cancelled,
}

/// Request messages sent to the provider worker thread
#[derive(Debug)]
pub enum FetchRequest {
    /// Fetch suggestions for the given form input
    Fetch {
        request: SuggestionRequest,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Cancel the request with the given ID
    Cancel { request_id: u64 },
}

/// Response messages received from the provider worker thread
#[derive(Debug)]
pub enum FetchResponse {
    /// Suggestions arrived, in provider order
    Suggestions {
        suggestions: Vec<Suggestion>,
        request_id: u64,
    },
    /// The request failed; message is user-presentable
    Error { message: String, request_id: u64 },
    /// The request was cancelled
    Cancelled { request_id: u64 },
}
