//! mtrl layout engine
//!
//! Materializes declarative schemas (arrays of factories, keyed object trees,
//! HTML strings) into a DOM tree of elements and components, and hands back a
//! flat name lookup with unified teardown.

pub mod classes;
pub mod config;
pub mod create;
pub mod dom;
pub mod engine;
pub mod errors;
pub mod node;
pub mod options;
pub mod result;
pub mod schema;

#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export commonly used types
pub use config::LayoutOptions;
pub use dom::{DocumentFragment, Element};
pub use engine::{create_layout, NameMap};
pub use errors::{DestroyError, LayoutError};
pub use node::{Component, ComponentError, Factory, Node};
pub use options::Options;
pub use result::LayoutResult;
pub use schema::{object_schema, ArrayItem, ArraySchemaBuilder, ElementDef, ObjectSchema, Schema};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second init only fails because a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("mtrl layout module initialized");
}
