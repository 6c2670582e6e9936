//! Google Gemini API client
//!
//! One non-streaming `generateContent` call per suggestion request. The
//! request carries the mode's prompt and a structured-output schema so the
//! reply payload is a JSON array matching the mode's field set.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::ProviderError;
use crate::config::ProviderConfig;
use crate::suggestion::{Suggestion, SuggestionRequest, build_prompt, parse_suggestions, response_schema};

/// Gemini API endpoint base
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Whole-request timeout; anything slower is treated as provider failure
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Google Gemini API client
#[derive(Debug)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    temperature: f64,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(api_key: String, model: String, temperature: f64) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self {
            api_key,
            model,
            temperature,
            http,
        })
    }

    /// Create a client from configuration
    ///
    /// Returns an error if the configuration is invalid (e.g., missing API key)
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .as_ref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                ProviderError::NotConfigured(
                    "Missing or empty API key in [provider] config".to_string(),
                )
            })?;

        if config.model.trim().is_empty() {
            return Err(ProviderError::NotConfigured(
                "Missing or empty model in [provider] config".to_string(),
            ));
        }

        Self::new(api_key.clone(), config.model.clone(), config.temperature)
    }

    /// API key accessor (used by tests)
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Model accessor (used by tests)
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the generateContent URL for the configured model
    pub fn build_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        )
    }

    /// Build the JSON request body for a suggestion request
    ///
    /// A single user turn plus a generation config that pins the response
    /// to JSON conforming to the mode's schema.
    pub fn build_request_body(
        &self,
        request: &SuggestionRequest,
    ) -> Result<String, ProviderError> {
        let body = serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": build_prompt(request) }]
                }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(request.mode()),
                "temperature": self.temperature,
            }
        });

        serde_json::to_string(&body).map_err(|e| ProviderError::Parse(e.to_string()))
    }

    /// Fetch suggestions for a request
    pub async fn fetch(
        &self,
        request: &SuggestionRequest,
    ) -> Result<Vec<Suggestion>, ProviderError> {
        let body = self.build_request_body(request)?;

        let response = self
            .http
            .post(self.build_url())
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        let payload = Self::extract_payload_text(&value)?;
        parse_suggestions(request.mode(), payload)
    }

    /// Fetch suggestions, aborting early if the token is cancelled
    pub async fn fetch_with_cancel(
        &self,
        request: &SuggestionRequest,
        cancel: CancellationToken,
    ) -> Result<Vec<Suggestion>, ProviderError> {
        if cancel.is_cancelled() {
            return Err(ProviderError::Cancelled);
        }

        tokio::select! {
            _ = cancel.cancelled() => Err(ProviderError::Cancelled),
            result = self.fetch(request) => result,
        }
    }

    /// Extract the generated text payload from a generateContent response
    ///
    /// The suggestions live at `candidates[0].content.parts[0].text`; a
    /// response without that path is malformed.
    fn extract_payload_text(value: &serde_json::Value) -> Result<&str, ProviderError> {
        value
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.get(0))
            .and_then(|p| p.get("text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                ProviderError::Parse(
                    "response has no candidates[0].content.parts[0].text".to_string(),
                )
            })
    }
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod gemini_tests;
