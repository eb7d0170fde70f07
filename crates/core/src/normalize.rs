//! Normalization of raw, untrusted generator output.
//!
//! The text generator is asked to return a JSON object, but the shape it
//! actually produces drifts: field names show up in either casing, fields go
//! missing, abilities arrive as arrays, and sometimes the whole payload is
//! not an object at all. [`normalize`] reconciles all of that into a
//! canonical map. It is total (never fails) and idempotent.

use serde_json::{Map, Value};

/// Capitalized aliases the generator is known to emit, paired with the
/// canonical lowercase key each one maps to.
pub const FIELD_ALIASES: [(&str, &str); 8] = [
    ("Name", "name"),
    ("ManaCost", "manaCost"),
    ("Type", "type"),
    ("Color", "color"),
    ("Abilities", "abilities"),
    ("FlavorText", "flavorText"),
    ("Rarity", "rarity"),
    ("PowerToughness", "powerToughness"),
];

/// Fields that must be present and non-empty after normalization.
/// `powerToughness` is deliberately absent: non-creatures have none.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "manaCost",
    "type",
    "color",
    "abilities",
    "flavorText",
    "rarity",
];

/// Fixed default for a missing or falsy card field.
pub fn default_for_field(field: &str) -> &'static str {
    match field {
        "name" => "Unnamed Card",
        "manaCost" => "{0}",
        "type" => "Unknown Type",
        "color" => "Colorless",
        "abilities" => "No abilities",
        "flavorText" => "No flavor text",
        "rarity" => "Common",
        "powerToughness" => "N/A",
        _ => "Unknown",
    }
}

/// Normalize a raw generation result into the canonical field map.
///
/// - Values under capitalized aliases are moved to the canonical key when
///   the canonical key is absent or falsy.
/// - Array-valued fields are joined with `", "`; scalar values are
///   stringified.
/// - Required fields that are still absent or falsy are filled with the
///   fixed defaults.
///
/// Non-object input (the generator returned a bare string, array, etc.)
/// yields the all-defaults map.
pub fn normalize(raw: Value) -> Map<String, Value> {
    let mut data = match raw {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    for (alias, canonical) in FIELD_ALIASES {
        if let Some(value) = data.remove(alias) {
            if !is_present(data.get(canonical)) {
                data.insert(canonical.to_string(), value);
            }
        }
    }

    for (_, canonical) in FIELD_ALIASES {
        if let Some(value) = data.remove(canonical) {
            if let Some(coerced) = coerce(value) {
                data.insert(canonical.to_string(), coerced);
            }
        }
    }

    for field in REQUIRED_FIELDS {
        if !is_present(data.get(field)) {
            data.insert(
                field.to_string(),
                Value::String(default_for_field(field).to_string()),
            );
        }
    }

    data
}

/// Collapse the brace-doubling the generator sometimes copies back out of
/// its own prompt (`{{2}}{{W}}`), and squeeze whitespace runs.
pub fn clean_mana_cost(mana_cost: &str) -> String {
    mana_cost
        .replace("{{", "")
        .replace("}}", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A field counts as present when it is neither absent, null, an empty
/// string, nor an empty array.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

/// Coerce a field value to a string where that has an obvious meaning.
/// Returns `None` for falsy values so the caller drops them.
fn coerce(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(Value::String(s)),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => {
            let joined = items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            Some(Value::String(joined))
        }
        Value::Number(n) => Some(Value::String(n.to_string())),
        Value::Bool(b) => Some(Value::String(b.to_string())),
        // Objects pass through untouched; typed extraction deals with them.
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn moves_capitalized_aliases_to_canonical_keys() {
        let out = normalize(json!({
            "Name": "Storm Adept",
            "ManaCost": "{1}{U}",
            "Type": "Creature - Wizard",
            "Rarity": "Uncommon",
        }));
        assert_eq!(out["name"], "Storm Adept");
        assert_eq!(out["manaCost"], "{1}{U}");
        assert_eq!(out["type"], "Creature - Wizard");
        assert_eq!(out["rarity"], "Uncommon");
        assert!(!out.contains_key("Name"));
    }

    #[test]
    fn canonical_key_wins_over_alias() {
        let out = normalize(json!({
            "name": "Lowercase Wins",
            "Name": "Uppercase Loses",
        }));
        assert_eq!(out["name"], "Lowercase Wins");
    }

    #[test]
    fn alias_fills_falsy_canonical_key() {
        let out = normalize(json!({
            "name": "",
            "Name": "Recovered Name",
        }));
        assert_eq!(out["name"], "Recovered Name");
    }

    #[test]
    fn fills_defaults_for_missing_fields() {
        let out = normalize(json!({}));
        assert_eq!(out["name"], "Unnamed Card");
        assert_eq!(out["manaCost"], "{0}");
        assert_eq!(out["type"], "Unknown Type");
        assert_eq!(out["color"], "Colorless");
        assert_eq!(out["abilities"], "No abilities");
        assert_eq!(out["flavorText"], "No flavor text");
        assert_eq!(out["rarity"], "Common");
        assert!(!out.contains_key("powerToughness"));
    }

    #[test]
    fn null_and_empty_values_get_defaults() {
        let out = normalize(json!({
            "name": null,
            "color": "",
            "abilities": [],
        }));
        assert_eq!(out["name"], "Unnamed Card");
        assert_eq!(out["color"], "Colorless");
        assert_eq!(out["abilities"], "No abilities");
    }

    #[test]
    fn joins_array_abilities() {
        let out = normalize(json!({
            "abilities": ["Flying", "Haste"],
        }));
        assert_eq!(out["abilities"], "Flying, Haste");
    }

    #[test]
    fn stringifies_scalar_values() {
        let out = normalize(json!({ "powerToughness": 3 }));
        assert_eq!(out["powerToughness"], "3");
    }

    #[test]
    fn non_object_input_yields_all_defaults() {
        let out = normalize(json!("not an object"));
        for field in REQUIRED_FIELDS {
            assert_eq!(out[field], default_for_field(field));
        }
    }

    #[test]
    fn required_fields_always_present_and_non_empty() {
        let inputs = [
            json!({}),
            json!(null),
            json!([1, 2, 3]),
            json!({"Name": "X", "rarity": "", "Abilities": ["a"]}),
            json!({"name": 7, "flavorText": null}),
        ];
        for input in inputs {
            let out = normalize(input);
            for field in REQUIRED_FIELDS {
                let value = out[field].as_str().expect("required field is a string");
                assert!(!value.is_empty());
            }
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            json!({}),
            json!({"Name": "Storm Adept", "abilities": ["Flying", "Haste"]}),
            json!({"name": "", "Rarity": "Rare", "powerToughness": 3}),
            json!("garbage"),
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(Value::Object(once.clone()));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn clean_mana_cost_strips_doubled_braces() {
        assert_eq!(clean_mana_cost("{{2}}{{W}}{{U}}"), "2WU");
        assert_eq!(clean_mana_cost("{2}{W}"), "{2}{W}");
        assert_eq!(clean_mana_cost("  {0}   "), "{0}");
    }
}
