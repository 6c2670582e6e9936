//! Payload parsing for provider responses
//!
//! The provider returns a JSON array of 0-3 records whose field set depends
//! on the active mode. Records are deserialized strictly: a record missing a
//! required field (or carrying the other mode's fields instead) is a parse
//! error, never a half-filled suggestion.

use serde::Deserialize;

use super::prompt::MAX_SUGGESTIONS;
use super::{Mode, Suggestion, SuggestionDetails};
use crate::provider::ProviderError;

/// Wire record for eat-out mode
#[derive(Debug, Deserialize)]
struct EatOutRecord {
    name: String,
    commentary: String,
    #[serde(rename = "mapsQuery")]
    maps_query: String,
}

/// Wire record for cook-at-home mode
#[derive(Debug, Deserialize)]
struct CookHomeRecord {
    #[serde(rename = "recipeName")]
    recipe_name: String,
    commentary: String,
    #[serde(rename = "ingredientsNeeded")]
    ingredients_needed: Vec<String>,
    #[serde(rename = "basicSteps")]
    basic_steps: String,
}

/// Parse a provider payload into suggestions for the given mode
///
/// The payload must be a JSON array. Anything past [`MAX_SUGGESTIONS`]
/// entries is dropped; order is preserved and becomes the index space of
/// the spin wheel. An empty array is reported as [`ProviderError::EmptyResponse`]
/// so the caller surfaces a retry instead of rendering nothing.
pub fn parse_suggestions(mode: Mode, payload: &str) -> Result<Vec<Suggestion>, ProviderError> {
    let stamp = chrono::Utc::now().timestamp_millis();
    parse_with_stamp(mode, payload, stamp)
}

/// Parse with an explicit id stamp (separated out for deterministic tests)
fn parse_with_stamp(
    mode: Mode,
    payload: &str,
    stamp: i64,
) -> Result<Vec<Suggestion>, ProviderError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(payload)
        .map_err(|e| ProviderError::Parse(format!("payload is not a JSON array: {e}")))?;

    if records.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    records
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .enumerate()
        .map(|(index, record)| {
            let details = parse_record(mode, record)?;
            Ok(Suggestion {
                id: format!("{}-{}-{}", mode.tag(), index, stamp),
                details,
            })
        })
        .collect()
}

fn parse_record(mode: Mode, record: serde_json::Value) -> Result<SuggestionDetails, ProviderError> {
    match mode {
        Mode::EatOut => {
            let record: EatOutRecord = serde_json::from_value(record)
                .map_err(|e| ProviderError::Parse(format!("bad eat-out record: {e}")))?;
            Ok(SuggestionDetails::EatOut {
                name: record.name,
                maps_query: record.maps_query,
                commentary: record.commentary,
            })
        }
        Mode::CookHome => {
            let record: CookHomeRecord = serde_json::from_value(record)
                .map_err(|e| ProviderError::Parse(format!("bad cook-home record: {e}")))?;
            Ok(SuggestionDetails::CookHome {
                recipe_name: record.recipe_name,
                ingredients_needed: record.ingredients_needed,
                basic_steps: record.basic_steps,
                commentary: record.commentary,
            })
        }
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
