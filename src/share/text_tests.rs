use super::*;

fn eat_out(name: &str, maps_query: &str) -> Suggestion {
    Suggestion {
        id: "eatout-0-1".to_string(),
        details: SuggestionDetails::EatOut {
            name: name.to_string(),
            maps_query: maps_query.to_string(),
            commentary: "So good it should be illegal.".to_string(),
        },
    }
}

fn cook_home(recipe: &str, ingredients: &[&str]) -> Suggestion {
    Suggestion {
        id: "cookhome-0-1".to_string(),
        details: SuggestionDetails::CookHome {
            recipe_name: recipe.to_string(),
            ingredients_needed: ingredients.iter().map(|s| s.to_string()).collect(),
            basic_steps: "Chop, fry, eat.".to_string(),
            commentary: "Weeknight hero.".to_string(),
        },
    }
}

#[test]
fn test_eat_out_text_includes_name_and_commentary() {
    let text = share_text(&eat_out("Chole Bhature", "chole bhature near me"));

    assert!(text.starts_with("LunchSpin suggested I eat: Chole Bhature!"));
    assert!(text.contains("So good it should be illegal."));
}

#[test]
fn test_eat_out_text_includes_maps_link() {
    let text = share_text(&eat_out("Momos", "momos in Delhi"));

    assert!(text.contains("Find it here: https://www.google.com/maps/search/?api=1&query="));
}

#[test]
fn test_eat_out_text_without_query_has_no_link() {
    let text = share_text(&eat_out("Momos", "  "));

    assert!(!text.contains("Find it here"));
}

#[test]
fn test_cook_home_text_lists_ingredients() {
    let text = share_text(&cook_home("Garlic Pasta", &["pasta", "garlic", "olive oil"]));

    assert!(text.starts_with("LunchSpin suggested I cook: Garlic Pasta!"));
    assert!(text.contains("Ingredients: pasta, garlic, olive oil."));
}

#[test]
fn test_maps_link_encodes_query() {
    let link = maps_link("best momos & dumplings").unwrap();

    assert!(link.starts_with("https://www.google.com/maps/search/?api=1&query="));
    // The literal ampersand in the query must be escaped, not a separator
    assert!(link.contains("%26"));
    assert!(!link.contains("& dumplings"));
}

#[test]
fn test_maps_link_empty_query_is_none() {
    assert!(maps_link("").is_none());
    assert!(maps_link("   ").is_none());
}
