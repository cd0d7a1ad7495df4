//! JSON schemas
//!
//! Object and HTML schemas can be described in JSON so they can cross the
//! wasm boundary. Creators are referenced by name and resolved through a
//! [`FactoryRegistry`]:
//!
//! ```json
//! {
//!   "element": {
//!     "options": { "tag": "section", "class": "card" },
//!     "children": {
//!       "title": { "creator": "heading", "options": { "text": "Hello" } }
//!     }
//!   }
//! }
//! ```
//!
//! Array schemas reference factories positionally and have no JSON form.

use std::collections::HashMap;

use serde_json::Value;

use super::{ElementDef, ObjectSchema, Schema};
use crate::errors::LayoutError;
use crate::node::Factory;
use crate::options::Options;

/// Named factories available to JSON schemas
#[derive(Clone, Debug, Default)]
pub struct FactoryRegistry {
    factories: HashMap<String, Factory>,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with `element` and `svg`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("element", Factory::element());
        registry.register("svg", Factory::svg("svg"));
        registry
    }

    pub fn register(&mut self, name: &str, factory: Factory) {
        self.factories.insert(name.to_string(), factory);
    }

    pub fn get(&self, name: &str) -> Option<&Factory> {
        self.factories.get(name)
    }
}

/// Parse a JSON document into a schema
pub fn schema_from_str(source: &str, registry: &FactoryRegistry) -> Result<Schema, LayoutError> {
    let value: Value = serde_json::from_str(source)?;
    schema_from_value(&value, registry)
}

/// Convert a JSON value into a schema: strings are HTML, objects are keyed schemas
pub fn schema_from_value(value: &Value, registry: &FactoryRegistry) -> Result<Schema, LayoutError> {
    match value {
        Value::String(markup) => Ok(Schema::Html(markup.clone())),
        Value::Object(_) => object_from_value(value, registry).map(Schema::Object),
        Value::Array(_) => Err(LayoutError::InvalidSchema(
            "array schemas reference factories directly and have no JSON form".to_string(),
        )),
        other => Err(LayoutError::InvalidSchema(format!(
            "expected an object or an HTML string, found {}",
            other
        ))),
    }
}

fn object_from_value(
    value: &Value,
    registry: &FactoryRegistry,
) -> Result<ObjectSchema, LayoutError> {
    let Some(entries) = value.as_object() else {
        return Err(LayoutError::InvalidSchema(format!(
            "expected an object schema, found {}",
            value
        )));
    };

    let mut schema = ObjectSchema::new();
    for (key, raw) in entries {
        schema.insert(key.clone(), def_from_value(key, raw, registry)?);
    }
    Ok(schema)
}

fn def_from_value(
    key: &str,
    raw: &Value,
    registry: &FactoryRegistry,
) -> Result<ElementDef, LayoutError> {
    let Some(fields) = raw.as_object() else {
        return Err(LayoutError::InvalidSchema(format!(
            "definition of '{}' must be an object",
            key
        )));
    };

    let mut def = ElementDef::new();
    if let Some(name) = fields.get("name").and_then(Value::as_str) {
        def.name = Some(name.to_string());
    }
    if let Some(creator) = fields.get("creator") {
        let Some(creator) = creator.as_str() else {
            return Err(LayoutError::InvalidSchema(format!(
                "creator of '{}' must be a registered factory name",
                key
            )));
        };
        let factory = registry.get(creator).ok_or_else(|| LayoutError::UnknownCreator {
            key: key.to_string(),
            creator: creator.to_string(),
        })?;
        def.creator = Some(factory.clone());
    }
    if let Some(options) = fields.get("options") {
        def.options = Options::from_value(options.clone()).ok_or_else(|| {
            LayoutError::InvalidSchema(format!("options of '{}' must be an object", key))
        })?;
    }
    if let Some(children) = fields.get("children") {
        def.children = Some(schema_from_value(children, registry)?);
    }
    def.skip_prefix = fields
        .get("skipPrefix")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    Ok(def)
}
