//! Generic element factory
//!
//! The default creator used by object schemas when a node names no creator.

pub mod element;
pub mod layout_hints;

pub use element::{create_element, create_svg_element};
pub use layout_hints::{layout_classes, layout_item_classes};
