//! Schema engine
//!
//! Walks a schema, instantiates its factories, wires the created elements into
//! their parents (one fragment per level) and collects every named node into a
//! single flat map.
//!
//! Name policy: the first binding of a name wins and is never replaced. Within
//! an object level the level's own keys bind before anything from its
//! children; an array binds in document order.

mod array;
mod dispatch;
mod object;

pub use dispatch::create_layout;

use indexmap::IndexMap;

use crate::classes::ClassNames;
use crate::config::LayoutOptions;
use crate::errors::LayoutError;
use crate::node::Node;
use crate::options::Options;

/// Flat name -> node lookup
pub type NameMap = IndexMap<String, Node>;

/// Per-call state shared by the interpreters
pub(crate) struct Context<'a> {
    pub options: &'a LayoutOptions,
    pub classes: ClassNames,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a LayoutOptions) -> Self {
        Self {
            options,
            classes: options.class_names(),
        }
    }

    pub fn check_depth(&self, level: usize) -> Result<(), LayoutError> {
        if level > self.options.max_depth {
            return Err(LayoutError::DepthExceeded {
                max: self.options.max_depth,
            });
        }
        Ok(())
    }

    /// Options for an object-schema node: classes processed, prefixed unless
    /// the node or the call opts out
    pub fn object_options(&self, options: &Options, skip_prefix: bool) -> Options {
        let processed = if skip_prefix || self.options.skip_prefix {
            self.classes.process_with(options, false)
        } else {
            self.classes.process(options)
        };
        self.with_hint_prefix(processed)
    }

    /// Options for an array-schema factory: passed through as written
    pub fn array_options(&self, options: &Options) -> Options {
        self.with_hint_prefix(options.clone())
    }

    fn with_hint_prefix(&self, mut options: Options) -> Options {
        let has_hints = options.contains_key("layout") || options.contains_key("layoutItem");
        if has_hints && !options.contains_key("prefix") {
            options.set("prefix", self.options.prefix.as_str());
        }
        options
    }
}

/// Bind `name` unless it is already taken
pub(crate) fn bind(map: &mut NameMap, name: &str, node: &Node) {
    if map.contains_key(name) {
        log::debug!("name '{}' already bound, keeping the first node", name);
        return;
    }
    map.insert(name.to_string(), node.clone());
}

pub(crate) fn merge(map: &mut NameMap, other: NameMap) {
    for (name, node) in other {
        bind(map, &name, &node);
    }
}
