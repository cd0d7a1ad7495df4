//! Schema dialects
//!
//! A schema describes a tree of nodes to materialize:
//!
//! * **array** - a flat sequence of factories, each optionally followed by a
//!   name and/or options, with nested arrays for children
//! * **object** - keyed [`ElementDef`]s with explicit `creator`, `options`
//!   and `children`; the reserved key `element` marks the root
//! * **html** - a markup string; only the root is bound
//! * **deferred** - a closure producing the real schema when the layout is built
//!
//! Schemas are only ever borrowed by the engine. Nothing is written back into
//! them, so one schema can be materialized any number of times.

pub mod json;

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::node::Factory;
use crate::options::Options;

/// Reserved key of the layout root
pub const ROOT_KEY: &str = "element";

pub type ArraySchema = Vec<ArrayItem>;
pub type ObjectSchema = IndexMap<String, ElementDef>;

/// One slot of an array schema
#[derive(Clone, Debug)]
pub enum ArrayItem {
    Nested(ArraySchema),
    Factory(Factory),
    Name(String),
    Options(Options),
}

impl From<Factory> for ArrayItem {
    fn from(factory: Factory) -> Self {
        ArrayItem::Factory(factory)
    }
}

impl From<&str> for ArrayItem {
    fn from(name: &str) -> Self {
        ArrayItem::Name(name.to_string())
    }
}

impl From<String> for ArrayItem {
    fn from(name: String) -> Self {
        ArrayItem::Name(name)
    }
}

impl From<Options> for ArrayItem {
    fn from(options: Options) -> Self {
        ArrayItem::Options(options)
    }
}

impl From<ArraySchema> for ArrayItem {
    fn from(nested: ArraySchema) -> Self {
        ArrayItem::Nested(nested)
    }
}

/// Build an array schema from heterogeneous items
///
/// ```ignore
/// let schema = layout_array![
///     Factory::tag("nav"), "nav", Options::new().with("class", "rail"),
///     layout_array![Factory::tag("a"), "home"],
/// ];
/// ```
#[macro_export]
macro_rules! layout_array {
    ($($item:expr),* $(,)?) => {
        vec![$($crate::schema::ArrayItem::from($item)),*]
    };
}

/// Chained construction of an array schema
///
/// ```ignore
/// let schema = ArraySchemaBuilder::new()
///     .factory(Factory::tag("nav"))
///     .name("nav")
///     .nested(ArraySchemaBuilder::new().factory(Factory::tag("a")).name("home"))
///     .build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArraySchemaBuilder {
    items: ArraySchema,
}

impl ArraySchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factory(mut self, factory: Factory) -> Self {
        self.items.push(ArrayItem::Factory(factory));
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.items.push(ArrayItem::Name(name.to_string()));
        self
    }

    pub fn options(mut self, options: impl Into<Options>) -> Self {
        self.items.push(ArrayItem::Options(options.into()));
        self
    }

    /// Children of the preceding factory
    pub fn nested(mut self, children: impl Into<ArraySchema>) -> Self {
        self.items.push(ArrayItem::Nested(children.into()));
        self
    }

    pub fn build(self) -> ArraySchema {
        self.items
    }
}

impl From<ArraySchemaBuilder> for ArraySchema {
    fn from(builder: ArraySchemaBuilder) -> Self {
        builder.items
    }
}

/// Definition of one node in an object schema
#[derive(Clone, Debug, Default)]
pub struct ElementDef {
    /// Extra name the node is bound under, besides its key
    pub name: Option<String>,
    /// Factory; falls back to the layout's default creator
    pub creator: Option<Factory>,
    pub options: Options,
    pub children: Option<Schema>,
    /// Pass classes through without the prefix
    pub skip_prefix: bool,
}

impl ElementDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn creator(mut self, creator: Factory) -> Self {
        self.creator = Some(creator);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn children(mut self, children: impl Into<Schema>) -> Self {
        self.children = Some(children.into());
        self
    }

    pub fn skip_prefix(mut self, skip: bool) -> Self {
        self.skip_prefix = skip;
        self
    }
}

/// Build an object schema from `(key, definition)` pairs, keeping their order
pub fn object_schema<K: Into<String>>(
    entries: impl IntoIterator<Item = (K, ElementDef)>,
) -> ObjectSchema {
    entries.into_iter().map(|(k, def)| (k.into(), def)).collect()
}

/// Any schema the engine accepts
#[derive(Clone)]
pub enum Schema {
    Array(ArraySchema),
    Object(ObjectSchema),
    Html(String),
    Deferred(Rc<dyn Fn() -> Schema>),
}

impl Schema {
    /// Lazily built schema
    pub fn deferred<F>(build: F) -> Self
    where
        F: Fn() -> Schema + 'static,
    {
        Schema::Deferred(Rc::new(build))
    }

    pub fn html(markup: &str) -> Self {
        Schema::Html(markup.to_string())
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Schema::Object(map) => f.debug_tuple("Object").field(map).finish(),
            Schema::Html(markup) => f.debug_tuple("Html").field(markup).finish(),
            Schema::Deferred(_) => write!(f, "Deferred(..)"),
        }
    }
}

impl From<ArraySchema> for Schema {
    fn from(items: ArraySchema) -> Self {
        Schema::Array(items)
    }
}

impl From<ArraySchemaBuilder> for Schema {
    fn from(builder: ArraySchemaBuilder) -> Self {
        Schema::Array(builder.build())
    }
}

impl From<ObjectSchema> for Schema {
    fn from(map: ObjectSchema) -> Self {
        Schema::Object(map)
    }
}

impl From<&str> for Schema {
    fn from(markup: &str) -> Self {
        Schema::Html(markup.to_string())
    }
}
