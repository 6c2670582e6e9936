//! Prompt and response-schema construction
//!
//! Each mode sends a different prompt and constrains the provider's reply
//! with a matching response schema, so the payload comes back as a JSON
//! array of at most 3 records with exactly the fields that mode needs.

use serde_json::{Value, json};

use super::{Mode, SuggestionRequest};

/// Maximum number of suggestions requested per fetch
pub const MAX_SUGGESTIONS: usize = 3;

/// Build the user prompt for a request
pub fn build_prompt(request: &SuggestionRequest) -> String {
    match request {
        SuggestionRequest::EatOut {
            location,
            preferences,
        } => format!(
            "I'm in {location}. I'm looking for food that is {preferences}. \
             Give me 3 diverse and interesting restaurant or dish suggestions. \
             For each suggestion, provide a name, some fun and quirky commentary \
             (2-3 sentences), and a concise Google Maps search query to find \
             places serving it."
        ),
        SuggestionRequest::CookHome { ingredients } => format!(
            "I have these ingredients at home: {ingredients}. Suggest 3 simple \
             and creative recipes I can make. For each recipe, provide a \
             recipeName, fun commentary (2-3 sentences), a list of key \
             ingredients (you can include common pantry staples if needed \
             beyond what I listed), and very brief basic cooking steps."
        ),
    }
}

/// Build the structured-output schema for a mode
///
/// The schema uses the provider's uppercase type names and caps the array
/// at [`MAX_SUGGESTIONS`] items.
pub fn response_schema(mode: Mode) -> Value {
    match mode {
        Mode::EatOut => json!({
            "type": "ARRAY",
            "maxItems": MAX_SUGGESTIONS,
            "items": {
                "type": "OBJECT",
                "properties": {
                    "name": {
                        "type": "STRING",
                        "description": "Name of the dish or cuisine type (e.g., 'Spicy Paneer Tikka Masala', 'Authentic Chole Bhature')",
                    },
                    "commentary": {
                        "type": "STRING",
                        "description": "Fun, brief, and quirky commentary about the suggestion",
                    },
                    "mapsQuery": {
                        "type": "STRING",
                        "description": "A specific Google Maps search query (e.g., 'best spicy paneer tikka masala near Connaught Place, Delhi')",
                    },
                },
                "required": ["name", "commentary", "mapsQuery"],
            },
        }),
        Mode::CookHome => json!({
            "type": "ARRAY",
            "maxItems": MAX_SUGGESTIONS,
            "items": {
                "type": "OBJECT",
                "properties": {
                    "recipeName": {
                        "type": "STRING",
                        "description": "Catchy name of the recipe (e.g., 'Quick Garlic Herb Pasta')",
                    },
                    "commentary": {
                        "type": "STRING",
                        "description": "Fun and encouraging commentary about the recipe",
                    },
                    "ingredientsNeeded": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "List of key ingredients needed for the recipe.",
                    },
                    "basicSteps": {
                        "type": "STRING",
                        "description": "A brief summary of the cooking steps (e.g., 'Saute veggies, add sauce, simmer. Serve hot.')",
                    },
                },
                "required": ["recipeName", "commentary", "ingredientsNeeded", "basicSteps"],
            },
        }),
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
