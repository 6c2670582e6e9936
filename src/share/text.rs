//! Share text construction

use crate::suggestion::{Suggestion, SuggestionDetails};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// One-line shareable sentence for a suggestion
///
/// Eat-out suggestions carry a Google Maps link so the recipient can find
/// the place; recipes list the key ingredients instead.
pub fn share_text(suggestion: &Suggestion) -> String {
    match &suggestion.details {
        SuggestionDetails::EatOut {
            name,
            maps_query,
            commentary,
        } => {
            let mut text = format!("LunchSpin suggested I eat: {name}! {commentary}");
            if let Some(link) = maps_link(maps_query) {
                text.push_str(&format!(" Find it here: {link}"));
            }
            text
        }
        SuggestionDetails::CookHome {
            recipe_name,
            ingredients_needed,
            commentary,
            ..
        } => {
            format!(
                "LunchSpin suggested I cook: {recipe_name}! {commentary}. Ingredients: {}.",
                ingredients_needed.join(", ")
            )
        }
    }
}

/// Google Maps search link for a query, with proper URL encoding
///
/// An empty query yields no link rather than a link to nowhere.
pub fn maps_link(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }
    reqwest::Url::parse_with_params(MAPS_SEARCH_URL, [("api", "1"), ("query", query)])
        .ok()
        .map(String::from)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod text_tests;
