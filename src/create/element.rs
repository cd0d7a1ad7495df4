//! Element creation from options
//!
//! Recognized options:
//!
//! * `tag` - element tag (default `div`); `svg` or `namespace: "svg"` selects the SVG namespace
//! * `id`, `text`, `html`
//! * `class` - already-processed class string; `rawClass` - added verbatim
//! * `attrs` / `attributes`, `data` (as `data-*`), `aria` (as `aria-*`)
//! * common attributes (`role`, `title`, `type`, `href`, ...) as top-level keys
//! * `layout` / `layoutItem` sizing hints, see [`super::layout_hints`]

use serde_json::{Map, Value};

use super::layout_hints::{layout_classes, layout_item_classes};
use crate::classes::DEFAULT_PREFIX;
use crate::dom::Element;
use crate::node::ComponentError;
use crate::options::{attribute_value, Options};

/// Top-level option keys written straight through as attributes
const PASSTHROUGH_ATTRIBUTES: &[&str] = &[
    "role",
    "title",
    "type",
    "href",
    "src",
    "alt",
    "name",
    "value",
    "placeholder",
    "disabled",
    "hidden",
    "tabindex",
    "for",
];

/// Build an element described by `options`
pub fn create_element(options: &Options) -> Result<Element, ComponentError> {
    let tag = options.get_str("tag").unwrap_or("div");
    let svg = tag.eq_ignore_ascii_case("svg") || options.get_str("namespace") == Some("svg");
    let element = if svg {
        Element::new_svg(tag)
    } else {
        Element::new(tag)
    };
    populate(&element, options)?;
    Ok(element)
}

/// Build an SVG element with a fixed tag
pub fn create_svg_element(tag: &str, options: &Options) -> Result<Element, ComponentError> {
    let element = Element::new_svg(tag);
    populate(&element, options)?;
    Ok(element)
}

fn populate(element: &Element, options: &Options) -> Result<(), ComponentError> {
    if let Some(id) = options.id() {
        element.set_attribute("id", id);
    }

    if let Some(class) = options.get_str("class") {
        for token in class.split_whitespace() {
            element.add_class(token);
        }
    }
    match options.get("rawClass") {
        Some(Value::String(raw)) => raw.split_whitespace().for_each(|t| element.add_class(t)),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .for_each(|t| element.add_class(t)),
        _ => {}
    }

    let prefix = options.get_str("prefix").unwrap_or(DEFAULT_PREFIX);
    if let Some(layout) = options.get_object("layout") {
        for class in layout_classes(layout, prefix) {
            element.add_class(&class);
        }
    }
    if let Some(item) = options.get_object("layoutItem") {
        for class in layout_item_classes(item, prefix) {
            element.add_class(&class);
        }
    }

    for key in PASSTHROUGH_ATTRIBUTES {
        if let Some(value) = options.get(key).and_then(attribute_value) {
            element.set_attribute(key, &value);
        }
    }
    for key in ["attrs", "attributes"] {
        if let Some(attrs) = options.get_object(key) {
            apply_attributes(element, attrs, "");
        }
    }
    if let Some(data) = options.get_object("data") {
        apply_attributes(element, data, "data-");
    }
    if let Some(aria) = options.get_object("aria") {
        apply_attributes(element, aria, "aria-");
    }

    if let Some(html) = options.get_str("html") {
        element.set_inner_html(html);
    }
    if let Some(text) = options.text() {
        element.set_text_content(text);
    }
    Ok(())
}

fn apply_attributes(element: &Element, attrs: &Map<String, Value>, prefix: &str) {
    for (name, value) in attrs {
        if let Some(value) = attribute_value(value) {
            element.set_attribute(&format!("{}{}", prefix, name), &value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_to_div() {
        let el = create_element(&Options::new()).unwrap();
        assert_eq!(el.tag_name(), "DIV");
        assert!(el.attributes().is_empty());
    }

    #[test]
    fn test_text_id_and_class() {
        let opts = Options::new()
            .with("tag", "span")
            .with("id", "greeting")
            .with("class", "mtrl-label mtrl-label")
            .with("rawClass", "js-hook")
            .with("text", "Hi");
        let el = create_element(&opts).unwrap();

        assert_eq!(el.tag_name(), "SPAN");
        assert_eq!(el.id().as_deref(), Some("greeting"));
        assert_eq!(el.class_name(), "mtrl-label js-hook");
        assert_eq!(el.text_content(), "Hi");
    }

    #[test]
    fn test_attribute_families() {
        let opts = Options::new()
            .with("role", "dialog")
            .with("disabled", true)
            .with("hidden", false)
            .with("attrs", json!({"tabindex": 0}))
            .with("data", json!({"id": "42"}))
            .with("aria", json!({"label": "Close", "hidden": false}));
        let el = create_element(&opts).unwrap();

        assert_eq!(el.get_attribute("role").as_deref(), Some("dialog"));
        assert_eq!(el.get_attribute("disabled").as_deref(), Some(""));
        assert!(!el.has_attribute("hidden"));
        assert_eq!(el.get_attribute("tabindex").as_deref(), Some("0"));
        assert_eq!(el.get_attribute("data-id").as_deref(), Some("42"));
        assert_eq!(el.get_attribute("aria-label").as_deref(), Some("Close"));
        assert!(!el.has_attribute("aria-hidden"));
    }

    #[test]
    fn test_html_option_parses_children() {
        let el = create_element(&Options::new().with("html", "<b>bold</b> text")).unwrap();
        assert_eq!(el.children().len(), 1);
        assert_eq!(el.text_content(), "bold text");
    }

    #[test]
    fn test_html_option_closes_open_tags() {
        let el = create_element(&Options::new().with("html", "<b>bold")).unwrap();
        assert_eq!(el.children().len(), 1);
        assert_eq!(el.children()[0].tag_name(), "B");
        assert_eq!(el.inner_html(), "<b>bold</b>");
    }

    #[test]
    fn test_html_option_accepts_void_elements_entities_and_boolean_attributes() {
        let opts = Options::new().with(
            "html",
            "<img src='a.png'><br><p>a&nbsp;b</p><button disabled>x</button>",
        );
        let el = create_element(&opts).unwrap();

        let tags: Vec<String> = el.children().iter().map(Element::tag_name).collect();
        assert_eq!(tags, vec!["IMG", "BR", "P", "BUTTON"]);
        assert_eq!(el.children()[0].get_attribute("src").as_deref(), Some("a.png"));
        assert_eq!(el.children()[2].text_content(), "a\u{a0}b");
        assert_eq!(el.children()[3].get_attribute("disabled").as_deref(), Some(""));
    }

    #[test]
    fn test_svg_namespace() {
        let el = create_element(&Options::new().with("tag", "svg")).unwrap();
        assert!(el.is_svg());

        let path = create_svg_element("path", &Options::new().with("attrs", json!({"d": "M0 0"})))
            .unwrap();
        assert!(path.is_svg());
        assert_eq!(path.get_attribute("d").as_deref(), Some("M0 0"));
    }

    #[test]
    fn test_layout_hints_use_prefix_option() {
        let opts = Options::new()
            .with("prefix", "app")
            .with("layout", json!({"type": "row", "gap": 4}));
        let el = create_element(&opts).unwrap();

        assert!(el.has_class("app-layout--row"));
        assert!(el.has_class("app-layout--row-gap-4"));
    }
}
