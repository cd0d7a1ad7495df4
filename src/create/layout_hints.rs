//! Layout sizing hints
//!
//! `layout` describes how a container arranges its children and `layoutItem`
//! how a child sizes itself. Both are translated into BEM classes the
//! stylesheet understands:
//!
//! ```text
//! layout: { type: "grid", gap: 4, columns: 3 }
//!   -> mtrl-layout--grid mtrl-layout--grid-gap-4 mtrl-layout--grid-cols-3
//! layoutItem: { width: 6, grow: true }
//!   -> mtrl-layout__item mtrl-layout__item--6 mtrl-layout__item--grow
//! ```

use serde_json::{Map, Value};

const DEFAULT_LAYOUT_TYPE: &str = "stack";

/// Classes for a container's `layout` hint
pub fn layout_classes(layout: &Map<String, Value>, prefix: &str) -> Vec<String> {
    let kind = layout
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_LAYOUT_TYPE);
    let base = format!("{}layout--{}", lead(prefix), kind);

    let mut classes = vec![base.clone()];
    for (key, suffix) in [
        ("gap", "gap"),
        ("columns", "cols"),
        ("align", "align"),
        ("justify", "justify"),
    ] {
        if let Some(value) = layout.get(key).and_then(token) {
            classes.push(format!("{}-{}-{}", base, suffix, value));
        }
    }
    for flag in ["wrap", "dense", "equal"] {
        if layout.get(flag).and_then(Value::as_bool) == Some(true) {
            classes.push(format!("{}-{}", base, flag));
        }
    }
    if let Some(extra) = layout.get("class").and_then(Value::as_str) {
        classes.extend(extra.split_whitespace().map(str::to_string));
    }
    classes
}

/// Classes for a child's `layoutItem` hint
pub fn layout_item_classes(item: &Map<String, Value>, prefix: &str) -> Vec<String> {
    let base = format!("{}layout__item", lead(prefix));

    let mut classes = vec![base.clone()];
    if let Some(width) = item.get("width").and_then(token) {
        classes.push(format!("{}--{}", base, width));
    }
    for (key, suffix) in [("span", "span"), ("order", "order"), ("align", "self")] {
        if let Some(value) = item.get(key).and_then(token) {
            classes.push(format!("{}--{}-{}", base, suffix, value));
        }
    }
    if item.get("grow").and_then(Value::as_bool) == Some(true) {
        classes.push(format!("{}--grow", base));
    }
    classes
}

fn lead(prefix: &str) -> String {
    if prefix.is_empty() {
        String::new()
    } else {
        format!("{}-", prefix)
    }
}

fn token(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_grid_layout_classes() {
        let classes = layout_classes(
            &map(json!({"type": "grid", "gap": 4, "columns": 3, "dense": true})),
            "mtrl",
        );
        assert_eq!(
            classes,
            vec![
                "mtrl-layout--grid",
                "mtrl-layout--grid-gap-4",
                "mtrl-layout--grid-cols-3",
                "mtrl-layout--grid-dense",
            ]
        );
    }

    #[test]
    fn test_layout_type_defaults_to_stack() {
        let classes = layout_classes(&map(json!({"align": "center"})), "mtrl");
        assert_eq!(classes, vec!["mtrl-layout--stack", "mtrl-layout--stack-align-center"]);
    }

    #[test]
    fn test_layout_item_classes() {
        let classes = layout_item_classes(
            &map(json!({"width": 6, "span": 2, "align": "end", "grow": true})),
            "mtrl",
        );
        assert_eq!(
            classes,
            vec![
                "mtrl-layout__item",
                "mtrl-layout__item--6",
                "mtrl-layout__item--span-2",
                "mtrl-layout__item--self-end",
                "mtrl-layout__item--grow",
            ]
        );
    }

    #[test]
    fn test_empty_prefix() {
        let classes = layout_item_classes(&Map::new(), "");
        assert_eq!(classes, vec!["layout__item"]);
    }
}
