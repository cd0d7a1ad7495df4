//! Array schema interpreter
//!
//! ```text
//! [Factory, "name"?, Options?, [children...]?, Factory, ...]
//! ```
//!
//! A factory takes the name and options from the (at most two) slots that
//! follow it, in either order. Without an explicit name, the `id` option is
//! used. A nested array becomes the children of the node created just before
//! it, or of the current parent when it opens the frame. The first node
//! created on the top level is bound as `element`.

use super::{bind, merge, Context, NameMap};
use crate::dom::{DocumentFragment, Element};
use crate::errors::LayoutError;
use crate::node::Node;
use crate::options::Options;
use crate::schema::{ArrayItem, ROOT_KEY};

/// Name and options attached to the factory at some index
#[derive(Debug, Default)]
struct Call<'s> {
    name: Option<&'s str>,
    options: Option<&'s Options>,
    consumed: usize,
}

fn read_call(schema: &[ArrayItem], at: usize) -> Call<'_> {
    let mut call = Call::default();
    for item in schema.iter().skip(at + 1).take(2) {
        match item {
            ArrayItem::Name(name) if call.name.is_none() => call.name = Some(name.as_str()),
            ArrayItem::Options(options) if call.options.is_none() => call.options = Some(options),
            _ => break,
        }
        call.consumed += 1;
    }
    call
}

pub(crate) fn process_array(
    schema: &[ArrayItem],
    parent: Option<&Element>,
    level: usize,
    ctx: &Context,
) -> Result<NameMap, LayoutError> {
    let level = level + 1;
    ctx.check_depth(level)?;
    log::debug!("array level {}: {} entries", level, schema.len());

    let mut map = NameMap::new();
    let fragment = DocumentFragment::new();
    let empty = Options::new();
    let mut last: Option<Node> = None;

    let mut index = 0;
    while index < schema.len() {
        match &schema[index] {
            ArrayItem::Nested(nested) => {
                let target = last.as_ref().map(Node::element).or(parent);
                let nested_map = process_array(nested, target, level, ctx)?;
                merge(&mut map, nested_map);
                index += 1;
            }
            ArrayItem::Factory(factory) => {
                let call = read_call(schema, index);
                let options = call.options.unwrap_or(&empty);
                let name = call.name.or_else(|| options.id());

                let node = factory
                    .create(&ctx.array_options(options))
                    .map_err(|source| LayoutError::Factory {
                        name: name.unwrap_or(factory.kind()).to_string(),
                        source,
                    })?;

                if let Some(name) = name {
                    bind(&mut map, name, &node);
                }
                if level == 1 {
                    bind(&mut map, ROOT_KEY, &node);
                }
                fragment.append_child(node.element());
                last = Some(node);
                index += 1 + call.consumed;
            }
            stray @ (ArrayItem::Name(_) | ArrayItem::Options(_)) => {
                let kind = match stray {
                    ArrayItem::Name(_) => "name",
                    _ => "options",
                };
                if ctx.options.strict {
                    return Err(LayoutError::OrphanEntry { kind, level, index });
                }
                log::warn!(
                    "skipping {} at index {} on level {}: no factory before it",
                    kind,
                    index,
                    level
                );
                index += 1;
            }
        }
    }

    if let Some(parent) = parent {
        parent.append_fragment(&fragment)?;
    }
    Ok(map)
}
