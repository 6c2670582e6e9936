//! Suggestion data model
//!
//! A suggestion is one candidate result returned by the provider: either a
//! restaurant/dish idea (eat-out mode) or a recipe (cook-at-home mode). The
//! two flavors carry disjoint field sets, so they are modeled as a tagged
//! variant rather than one record full of optional fields.

pub mod parser;
pub mod prompt;

pub use parser::parse_suggestions;
pub use prompt::{build_prompt, response_schema};

/// Which suggestion flavor is active
///
/// The mode determines both the prompt sent to the provider and the
/// suggestion variant expected back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Restaurant/dish suggestions for a location
    EatOut,
    /// Recipe suggestions from on-hand ingredients
    CookHome,
}

impl Mode {
    /// Stable tag used in synthesized suggestion ids
    pub fn tag(&self) -> &'static str {
        match self {
            Mode::EatOut => "eatout",
            Mode::CookHome => "cookhome",
        }
    }

    /// Human-readable mode label for the UI
    pub fn label(&self) -> &'static str {
        match self {
            Mode::EatOut => "Eat Out",
            Mode::CookHome => "Cook at Home",
        }
    }

    /// The other mode (mode toggle)
    pub fn toggled(&self) -> Mode {
        match self {
            Mode::EatOut => Mode::CookHome,
            Mode::CookHome => Mode::EatOut,
        }
    }
}

/// Free-text input collected from the form, tagged by mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionRequest {
    /// Location plus cravings
    EatOut { location: String, preferences: String },
    /// Comma-separated on-hand ingredients
    CookHome { ingredients: String },
}

impl SuggestionRequest {
    pub fn mode(&self) -> Mode {
        match self {
            SuggestionRequest::EatOut { .. } => Mode::EatOut,
            SuggestionRequest::CookHome { .. } => Mode::CookHome,
        }
    }
}

/// Mode-specific fields of a suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionDetails {
    EatOut {
        /// Name of the dish or cuisine type
        name: String,
        /// Google Maps search query for places serving it
        maps_query: String,
        /// Fun, quirky commentary about the suggestion
        commentary: String,
    },
    CookHome {
        /// Catchy name of the recipe
        recipe_name: String,
        /// Key ingredients needed for the recipe
        ingredients_needed: Vec<String>,
        /// Brief summary of the cooking steps
        basic_steps: String,
        /// Fun, encouraging commentary about the recipe
        commentary: String,
    },
}

/// One candidate result returned by the provider
///
/// Identity is by `id`; all other fields are immutable once parsed. The
/// whole list is replaced wholesale on the next fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Stable unique identifier, synthesized at parse time
    pub id: String,
    pub details: SuggestionDetails,
}

impl Suggestion {
    /// Display label: dish name or recipe name depending on the variant
    pub fn label(&self) -> &str {
        match &self.details {
            SuggestionDetails::EatOut { name, .. } => name,
            SuggestionDetails::CookHome { recipe_name, .. } => recipe_name,
        }
    }

    pub fn commentary(&self) -> &str {
        match &self.details {
            SuggestionDetails::EatOut { commentary, .. } => commentary,
            SuggestionDetails::CookHome { commentary, .. } => commentary,
        }
    }

    pub fn mode(&self) -> Mode {
        match &self.details {
            SuggestionDetails::EatOut { .. } => Mode::EatOut,
            SuggestionDetails::CookHome { .. } => Mode::CookHome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eat_out(name: &str) -> Suggestion {
        Suggestion {
            id: "eatout-0-1".to_string(),
            details: SuggestionDetails::EatOut {
                name: name.to_string(),
                maps_query: format!("best {name} near me"),
                commentary: "A flavor explosion.".to_string(),
            },
        }
    }

    fn cook_home(recipe: &str) -> Suggestion {
        Suggestion {
            id: "cookhome-0-1".to_string(),
            details: SuggestionDetails::CookHome {
                recipe_name: recipe.to_string(),
                ingredients_needed: vec!["pasta".to_string(), "garlic".to_string()],
                basic_steps: "Boil, toss, serve.".to_string(),
                commentary: "Impress yourself.".to_string(),
            },
        }
    }

    #[test]
    fn test_label_uses_name_for_eat_out() {
        assert_eq!(eat_out("Chole Bhature").label(), "Chole Bhature");
    }

    #[test]
    fn test_label_uses_recipe_name_for_cook_home() {
        assert_eq!(cook_home("Garlic Pasta").label(), "Garlic Pasta");
    }

    #[test]
    fn test_commentary_accessor() {
        assert_eq!(eat_out("x").commentary(), "A flavor explosion.");
        assert_eq!(cook_home("x").commentary(), "Impress yourself.");
    }

    #[test]
    fn test_mode_roundtrip() {
        assert_eq!(eat_out("x").mode(), Mode::EatOut);
        assert_eq!(cook_home("x").mode(), Mode::CookHome);
    }

    #[test]
    fn test_mode_toggled() {
        assert_eq!(Mode::EatOut.toggled(), Mode::CookHome);
        assert_eq!(Mode::CookHome.toggled(), Mode::EatOut);
        assert_eq!(Mode::EatOut.toggled().toggled(), Mode::EatOut);
    }

    #[test]
    fn test_request_mode() {
        let req = SuggestionRequest::EatOut {
            location: "Delhi".to_string(),
            preferences: "spicy".to_string(),
        };
        assert_eq!(req.mode(), Mode::EatOut);

        let req = SuggestionRequest::CookHome {
            ingredients: "rice, beans".to_string(),
        };
        assert_eq!(req.mode(), Mode::CookHome);
    }
}
