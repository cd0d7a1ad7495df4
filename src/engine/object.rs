//! Object schema interpreter
//!
//! Each key of an object schema creates one node. The node is bound under its
//! key and, when given, under `def.name`; its `children` are built directly
//! into it before the level's fragment reaches the parent.
//!
//! Without a parent, an `element` key designates the root: it is created
//! first, its children are built into it, and any other top-level keys are
//! appended to it after those children.
//!
//! Names found below an SVG node are bound together with the SVG node's own
//! level, ahead of names from later siblings' subtrees.
//!
//! Nodes under an SVG parent that fall back to the default creator are made in
//! the SVG namespace. Nodes with an explicit creator get whatever it builds, so
//! SVG shapes given their own creator need [`Factory::svg`](crate::Factory::svg).

use super::dispatch::process;
use super::{bind, merge, Context, NameMap};
use crate::dom::{DocumentFragment, Element};
use crate::errors::LayoutError;
use crate::node::Node;
use crate::schema::{ElementDef, ObjectSchema, ROOT_KEY};

pub(crate) fn process_object(
    schema: &ObjectSchema,
    parent: Option<&Element>,
    level: usize,
    ctx: &Context,
) -> Result<NameMap, LayoutError> {
    let level = level + 1;
    ctx.check_depth(level)?;
    log::debug!("object level {}: {} keys", level, schema.len());

    if parent.is_none() {
        if let Some(root_def) = schema.get(ROOT_KEY) {
            return process_rooted(schema, root_def, level, ctx);
        }
    }
    process_level(schema.iter(), parent, level, ctx)
}

fn process_rooted(
    schema: &ObjectSchema,
    root_def: &ElementDef,
    level: usize,
    ctx: &Context,
) -> Result<NameMap, LayoutError> {
    let root = instantiate(ROOT_KEY, root_def, false, ctx)?;

    let mut map = NameMap::new();
    bind(&mut map, ROOT_KEY, &root);
    if let Some(name) = root_def.name.as_deref() {
        bind(&mut map, name, &root);
    }

    if let Some(children) = &root_def.children {
        let child_map = process(children, Some(root.element()), level, ctx)?;
        merge(&mut map, child_map);
    }

    let mut siblings = schema.iter().filter(|(key, _)| key.as_str() != ROOT_KEY).peekable();
    if siblings.peek().is_some() {
        let sibling_map = process_level(siblings, Some(root.element()), level, ctx)?;
        merge(&mut map, sibling_map);
    }
    Ok(map)
}

fn process_level<'s>(
    entries: impl Iterator<Item = (&'s String, &'s ElementDef)>,
    parent: Option<&Element>,
    level: usize,
    ctx: &Context,
) -> Result<NameMap, LayoutError> {
    let mut map = NameMap::new();
    let mut descendants = Vec::new();
    let fragment = DocumentFragment::new();
    let in_svg = parent.is_some_and(Element::is_svg);

    for (key, def) in entries {
        let node = instantiate(key, def, in_svg, ctx)?;
        bind(&mut map, key, &node);
        if let Some(name) = def.name.as_deref().filter(|name| *name != key.as_str()) {
            bind(&mut map, name, &node);
        }
        fragment.append_child(node.element());

        if let Some(children) = &def.children {
            let child_map = process(children, Some(node.element()), level, ctx)?;
            if node.is_svg() {
                merge(&mut map, child_map);
            } else {
                descendants.push(child_map);
            }
        }
    }

    if let Some(parent) = parent {
        parent.append_fragment(&fragment)?;
    }
    for child_map in descendants {
        merge(&mut map, child_map);
    }
    Ok(map)
}

fn instantiate(
    key: &str,
    def: &ElementDef,
    in_svg: bool,
    ctx: &Context,
) -> Result<Node, LayoutError> {
    let creator = def
        .creator
        .as_ref()
        .or(ctx.options.default_creator.as_ref())
        .ok_or_else(|| LayoutError::MissingCreator {
            key: key.to_string(),
        })?;

    let mut options = ctx.object_options(&def.options, def.skip_prefix);
    if in_svg && def.creator.is_none() && !options.contains_key("namespace") {
        options.set("namespace", "svg");
    }
    creator
        .create(&options)
        .map_err(|source| LayoutError::Factory {
            name: key.to_string(),
            source,
        })
}
