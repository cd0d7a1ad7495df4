//! Layout results
//!
//! A [`LayoutResult`] owns the flat name map produced by the engine. Every
//! entry is a [`Node`], so the component view is the layout map itself; it is
//! built once and never changes afterwards.

use std::cell::Cell;

use crate::dom::Element;
use crate::engine::NameMap;
use crate::errors::DestroyError;
use crate::node::Node;
use crate::schema::ROOT_KEY;

/// Named nodes created by one `create_layout` call
#[derive(Debug)]
pub struct LayoutResult {
    layout: NameMap,
    destroyed: Cell<bool>,
}

impl LayoutResult {
    pub(crate) fn new(layout: NameMap) -> Self {
        Self {
            layout,
            destroyed: Cell::new(false),
        }
    }

    /// The raw name map
    pub fn layout(&self) -> &NameMap {
        &self.layout
    }

    /// The flattened component lookup
    pub fn component(&self) -> &NameMap {
        &self.layout
    }

    /// The layout root, if one was bound
    pub fn element(&self) -> Option<&Node> {
        self.layout.get(ROOT_KEY)
    }

    /// DOM element of the layout root
    pub fn root_element(&self) -> Option<&Element> {
        self.element().map(Node::element)
    }

    /// Node bound under `name`; `None` for unknown names
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.layout.get(name)
    }

    /// DOM element of the node bound under `name`
    pub fn get_element(&self, name: &str) -> Option<&Element> {
        self.get(name).map(Node::element)
    }

    pub fn get_all(&self) -> &NameMap {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.layout.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }

    /// Tear down every node of the layout
    ///
    /// The root goes first, then the other entries in binding order. Each
    /// distinct node is handled once even when bound under several names.
    /// Components run their own `destroy`; bare elements are detached unless
    /// they already left the document along with the root. A failing
    /// component does not stop the walk: all failures are returned together.
    /// Calling `destroy` again is a no-op.
    pub fn destroy(&self) -> Result<(), DestroyError> {
        if self.destroyed.replace(true) {
            log::debug!("layout already destroyed");
            return Ok(());
        }

        let root = self.root_element().cloned();
        let ordered = self
            .layout
            .get_key_value(ROOT_KEY)
            .into_iter()
            .chain(self.layout.iter().filter(|(name, _)| name.as_str() != ROOT_KEY));

        let mut handled: Vec<&Node> = Vec::new();
        let mut failures = Vec::new();

        for (name, node) in ordered {
            if handled.iter().any(|seen| seen.same(node)) {
                continue;
            }
            handled.push(node);

            if let (Node::Element(el), Some(root)) = (node, &root) {
                if !el.ptr_eq(root) && root.contains(el) {
                    continue;
                }
            }

            if let Err(err) = node.destroy() {
                log::error!("failed to destroy '{}': {}", name, err);
                failures.push((name.clone(), err));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DestroyError { failures })
        }
    }
}
