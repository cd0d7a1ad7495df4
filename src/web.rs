//! Browser bridge
//!
//! Mirrors an in-memory tree into a real document. Each level's children are
//! staged in a `DocumentFragment` and inserted with a single `appendChild`.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element as WebElement};

use crate::config::LayoutOptions;
use crate::dom::{DomChild, Element, Namespace};
use crate::engine::create_layout;
use crate::result::LayoutResult;
use crate::schema::json::{schema_from_str, FactoryRegistry};
use crate::schema::Schema;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Build a browser element mirroring `element` and its subtree
pub fn mount(element: &Element, document: &Document) -> Result<WebElement, JsValue> {
    let target = match element.namespace() {
        Namespace::Html => document.create_element(element.local_name())?,
        Namespace::Svg => document.create_element_ns(Some(SVG_NAMESPACE), element.local_name())?,
    };
    for (name, value) in element.attributes() {
        target.set_attribute(&name, &value)?;
    }

    let fragment = document.create_document_fragment();
    for child in element.child_nodes() {
        match child {
            DomChild::Element(el) => {
                fragment.append_child(&mount(&el, document)?)?;
            }
            DomChild::Text(text) => {
                fragment.append_child(&document.create_text_node(&text))?;
            }
        }
    }
    target.append_child(&fragment)?;
    Ok(target)
}

/// Mount the root of `result` into `container`
pub fn mount_into(
    result: &LayoutResult,
    container: &WebElement,
) -> Result<Option<WebElement>, JsValue> {
    let Some(root) = result.root_element() else {
        return Ok(None);
    };
    let document = container
        .owner_document()
        .ok_or_else(|| js_error("container is not attached to a document"))?;
    let mounted = mount(root, &document)?;
    container.append_child(&mounted)?;
    Ok(Some(mounted))
}

/// Render an HTML-string layout into `container`
#[wasm_bindgen(js_name = renderHtmlLayout)]
pub fn render_html_layout(markup: &str, container: &WebElement) -> Result<JsValue, JsValue> {
    render(&Schema::html(markup), container, &LayoutOptions::default())
}

/// Render a JSON object schema into `container`; `options` follows `LayoutOptions`
#[wasm_bindgen(js_name = renderJsonLayout)]
pub fn render_json_layout(
    source: &str,
    container: &WebElement,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let options: LayoutOptions = if options.is_undefined() || options.is_null() {
        LayoutOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| js_error(&format!("invalid layout options: {}", e)))?
    };
    let schema = schema_from_str(source, &FactoryRegistry::with_defaults())
        .map_err(|e| js_error(&e.to_string()))?;
    render(&schema, container, &options)
}

fn render(
    schema: &Schema,
    container: &WebElement,
    options: &LayoutOptions,
) -> Result<JsValue, JsValue> {
    let result = create_layout(schema, None, options).map_err(|e| {
        log::error!("layout failed: {}", e);
        js_error(&e.to_string())
    })?;
    Ok(mount_into(&result, container)?.map(JsValue::from).unwrap_or(JsValue::NULL))
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}
