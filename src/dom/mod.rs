//! In-memory document model
//!
//! A small DOM that the layout engine builds into. It mirrors the parts of the
//! browser API the engine relies on (elements, text nodes, attributes, class
//! lists, fragments, detachment) so that schemas can be materialized and tested
//! without a browser. On `wasm32` the tree is mirrored into a real document by
//! [`crate::web`].

pub mod element;
pub mod fragment;
pub mod html;

pub use element::{DomChild, Element, Namespace};
pub use fragment::DocumentFragment;

use thiserror::Error;

/// Errors raised by DOM operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomError {
    /// Insertion would make a node its own ancestor
    #[error("cannot insert <{child}> into <{parent}>: the new child is an ancestor of the parent")]
    HierarchyRequest { parent: String, child: String },
}
