//! Schema dispatch and the public entry point

use super::array::process_array;
use super::object::process_object;
use super::{Context, NameMap};
use crate::config::LayoutOptions;
use crate::dom::{html, DomChild, Element};
use crate::errors::LayoutError;
use crate::result::LayoutResult;
use crate::schema::{Schema, ROOT_KEY};

/// Materialize `schema`, appending top-level nodes to `parent` when given
///
/// # Example
///
/// ```ignore
/// let schema = layout_array![Factory::tag("button"), "submit", Options::new().with("text", "OK")];
/// let layout = create_layout(&schema.into(), None, &LayoutOptions::default())?;
/// assert_eq!(layout.get_element("submit").unwrap().text_content(), "OK");
/// ```
pub fn create_layout(
    schema: &Schema,
    parent: Option<&Element>,
    options: &LayoutOptions,
) -> Result<LayoutResult, LayoutError> {
    let ctx = Context::new(options);
    let map = process(schema, parent, 0, &ctx)?;
    log::debug!("layout created with {} named nodes", map.len());
    Ok(LayoutResult::new(map))
}

/// Interpret any schema variant at `level`
pub(crate) fn process(
    schema: &Schema,
    parent: Option<&Element>,
    level: usize,
    ctx: &Context,
) -> Result<NameMap, LayoutError> {
    match schema {
        Schema::Array(items) => process_array(items, parent, level, ctx),
        Schema::Object(entries) => process_object(entries, parent, level, ctx),
        Schema::Html(markup) => process_html(markup, parent, ctx),
        Schema::Deferred(_) => {
            let resolved = resolve_deferred(schema, ctx)?;
            process(&resolved, parent, level, ctx)
        }
    }
}

/// Invoke deferred builders until a concrete schema comes out
fn resolve_deferred(schema: &Schema, ctx: &Context) -> Result<Schema, LayoutError> {
    let mut current = schema.clone();
    let mut hops = 0;
    while let Schema::Deferred(build) = &current {
        hops += 1;
        ctx.check_depth(hops)?;
        current = build();
    }
    Ok(current)
}

/// Parse markup and bind its first element as the root; nothing below it is named
fn process_html(
    markup: &str,
    parent: Option<&Element>,
    ctx: &Context,
) -> Result<NameMap, LayoutError> {
    let root = html::parse_fragment(markup)
        .into_iter()
        .find_map(|node| match node {
            DomChild::Element(el) => Some(el),
            DomChild::Text(_) => None,
        });

    let mut map = NameMap::new();
    let Some(root) = root else {
        if ctx.options.strict {
            return Err(LayoutError::EmptyHtml);
        }
        log::warn!("HTML schema contains no element; layout is empty");
        return Ok(map);
    };

    if let Some(parent) = parent {
        parent.append_child(&root)?;
    }
    map.insert(ROOT_KEY.to_string(), root.into());
    Ok(map)
}
