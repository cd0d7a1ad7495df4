//! HTML fragment parsing and serialization
//!
//! Markup is parsed with an HTML5 tree builder in fragment mode, the way a
//! browser's template element holds it: void elements, named entities and
//! boolean attributes are accepted, and unclosed tags are closed
//! automatically. Parsing never fails.

use scraper::{ElementRef, Html};

use super::element::{DomChild, Element};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Parse an HTML fragment into detached nodes
pub fn parse_fragment(markup: &str) -> Vec<DomChild> {
    parse_fragment_in(markup, false)
}

/// Parse an HTML fragment; `in_svg` creates top-level elements in the SVG namespace
pub(crate) fn parse_fragment_in(markup: &str, in_svg: bool) -> Vec<DomChild> {
    let fragment = Html::parse_fragment(markup);

    let mut nodes = Vec::new();
    for child in fragment.root_element().children() {
        if let Some(el) = ElementRef::wrap(child) {
            nodes.push(DomChild::Element(convert(el, in_svg)));
        } else if let Some(text) = child.value().as_text() {
            nodes.push(DomChild::Text(text.to_string()));
        }
    }
    nodes
}

fn convert(node: ElementRef<'_>, in_svg: bool) -> Element {
    let value = node.value();
    let name = value.name();
    let svg = in_svg || &*value.name.ns == SVG_NAMESPACE || name.eq_ignore_ascii_case("svg");
    let element = if svg {
        Element::new_svg(name)
    } else {
        Element::new(name)
    };

    for (attr, attr_value) in value.attrs() {
        element.set_attribute(attr, attr_value);
    }

    for child in node.children() {
        if let Some(el) = ElementRef::wrap(child) {
            element.adopt(&convert(el, svg));
        } else if let Some(text) = child.value().as_text() {
            element.append_text(text);
        }
    }
    element
}

pub(crate) fn write_element(element: &Element, out: &mut String) {
    let tag = element.local_name();
    out.push('<');
    out.push_str(tag);
    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(&name);
        out.push_str("=\"");
        out.push_str(&escape(&value, true));
        out.push('"');
    }
    out.push('>');

    if !element.is_svg() && VOID_ELEMENTS.contains(&tag) {
        return;
    }

    for child in element.child_nodes() {
        write_child(&child, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

pub(crate) fn write_child(child: &DomChild, out: &mut String) {
    match child {
        DomChild::Element(el) => write_element(el, out),
        DomChild::Text(text) => out.push_str(&escape(text, false)),
    }
}

fn escape(value: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
