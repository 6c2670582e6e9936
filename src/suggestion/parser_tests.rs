//! Tests for provider payload parsing

use proptest::prelude::*;

use super::*;

const EAT_OUT_PAYLOAD: &str = r#"[
    {"name": "Chole Bhature", "commentary": "Carb heaven.", "mapsQuery": "best chole bhature Chandni Chowk"},
    {"name": "Paneer Tikka", "commentary": "Smoky cubes of joy.", "mapsQuery": "top rated paneer tikka Delhi"}
]"#;

const COOK_HOME_PAYLOAD: &str = r#"[
    {"recipeName": "Garlic Pasta", "commentary": "Minutes to glory.", "ingredientsNeeded": ["pasta", "garlic", "olive oil"], "basicSteps": "Boil, toss, serve."}
]"#;

#[test]
fn test_parse_eat_out_payload() {
    let suggestions = parse_with_stamp(Mode::EatOut, EAT_OUT_PAYLOAD, 42).unwrap();

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].label(), "Chole Bhature");
    assert_eq!(suggestions[1].label(), "Paneer Tikka");
    match &suggestions[0].details {
        SuggestionDetails::EatOut { maps_query, .. } => {
            assert_eq!(maps_query, "best chole bhature Chandni Chowk");
        }
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn test_parse_cook_home_payload() {
    let suggestions = parse_with_stamp(Mode::CookHome, COOK_HOME_PAYLOAD, 42).unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].label(), "Garlic Pasta");
    match &suggestions[0].details {
        SuggestionDetails::CookHome {
            ingredients_needed,
            basic_steps,
            ..
        } => {
            assert_eq!(ingredients_needed.len(), 3);
            assert_eq!(basic_steps, "Boil, toss, serve.");
        }
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn test_ids_are_unique_and_ordered() {
    let suggestions = parse_with_stamp(Mode::EatOut, EAT_OUT_PAYLOAD, 1700000000000).unwrap();

    assert_eq!(suggestions[0].id, "eatout-0-1700000000000");
    assert_eq!(suggestions[1].id, "eatout-1-1700000000000");
}

#[test]
fn test_order_is_preserved() {
    let payload = r#"[
        {"name": "A", "commentary": "a", "mapsQuery": "qa"},
        {"name": "B", "commentary": "b", "mapsQuery": "qb"},
        {"name": "C", "commentary": "c", "mapsQuery": "qc"}
    ]"#;
    let suggestions = parse_with_stamp(Mode::EatOut, payload, 1).unwrap();
    let labels: Vec<&str> = suggestions.iter().map(|s| s.label()).collect();

    assert_eq!(labels, vec!["A", "B", "C"]);
}

#[test]
fn test_extra_records_are_truncated() {
    let payload = r#"[
        {"name": "A", "commentary": "a", "mapsQuery": "qa"},
        {"name": "B", "commentary": "b", "mapsQuery": "qb"},
        {"name": "C", "commentary": "c", "mapsQuery": "qc"},
        {"name": "D", "commentary": "d", "mapsQuery": "qd"}
    ]"#;
    let suggestions = parse_with_stamp(Mode::EatOut, payload, 1).unwrap();

    assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
}

#[test]
fn test_empty_array_is_an_error() {
    let result = parse_with_stamp(Mode::EatOut, "[]", 1);
    assert!(matches!(result, Err(ProviderError::EmptyResponse)));
}

#[test]
fn test_non_array_payload_is_a_parse_error() {
    let result = parse_with_stamp(Mode::EatOut, r#"{"name": "x"}"#, 1);
    assert!(matches!(result, Err(ProviderError::Parse(_))));
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let result = parse_with_stamp(Mode::EatOut, "not json at all", 1);
    assert!(matches!(result, Err(ProviderError::Parse(_))));
}

#[test]
fn test_wrong_mode_fields_rejected() {
    // A cook-home record cannot satisfy eat-out mode
    let result = parse_with_stamp(Mode::EatOut, COOK_HOME_PAYLOAD, 1);
    assert!(matches!(result, Err(ProviderError::Parse(_))));

    // And vice versa
    let result = parse_with_stamp(Mode::CookHome, EAT_OUT_PAYLOAD, 1);
    assert!(matches!(result, Err(ProviderError::Parse(_))));
}

#[test]
fn test_missing_required_field_rejected() {
    let payload = r#"[{"name": "A", "commentary": "a"}]"#;
    let result = parse_with_stamp(Mode::EatOut, payload, 1);
    assert!(matches!(result, Err(ProviderError::Parse(_))));
}

// **Property: parsed suggestions mirror the wire records**
// *For any* well-formed eat-out array, parsing should keep every record's
// name in order and produce the matching variant for each suggestion.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_parse_preserves_names_in_order(
        names in proptest::collection::vec("[a-zA-Z ]{1,20}", 1..=3),
        stamp in 0i64..=i64::MAX / 2,
    ) {
        let records: Vec<serde_json::Value> = names
            .iter()
            .map(|name| serde_json::json!({
                "name": name,
                "commentary": "tasty",
                "mapsQuery": format!("best {name}"),
            }))
            .collect();
        let payload = serde_json::to_string(&records).unwrap();

        let suggestions = parse_with_stamp(Mode::EatOut, &payload, stamp).unwrap();

        prop_assert_eq!(suggestions.len(), names.len());
        for (suggestion, name) in suggestions.iter().zip(&names) {
            prop_assert_eq!(suggestion.label(), name.as_str());
            let is_eat_out = matches!(suggestion.details, SuggestionDetails::EatOut { .. });
            prop_assert!(is_eat_out);
        }
    }
}
