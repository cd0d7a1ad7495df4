//! Layout configuration
//!
//! Every setting the engine needs is threaded through [`LayoutOptions`]; there
//! is no process-wide prefix or mode. The serializable part can be read from
//! JSON (camelCase keys), which is how JavaScript callers configure layouts.

use serde::{Deserialize, Serialize};

use crate::classes::{ClassNames, DEFAULT_PREFIX};
use crate::errors::LayoutError;
use crate::node::Factory;

/// Default recursion limit; UI trees are shallow
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Configuration for one `create_layout` call
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Class prefix, without the trailing dash
    pub prefix: String,

    /// BEM-aware class prefixing
    pub bem: bool,

    /// Fail on malformed entries instead of skipping them
    pub strict: bool,

    /// Do not prefix classes of object-schema nodes
    pub skip_prefix: bool,

    /// Maximum schema nesting depth
    pub max_depth: usize,

    /// Creator for object-schema nodes that name none
    #[serde(skip, default = "default_creator")]
    pub default_creator: Option<Factory>,
}

fn default_creator() -> Option<Factory> {
    Some(Factory::element())
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            bem: true,
            strict: true,
            skip_prefix: false,
            max_depth: DEFAULT_MAX_DEPTH,
            default_creator: default_creator(),
        }
    }
}

impl LayoutOptions {
    pub fn from_json(source: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Builder-style prefix override
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    pub fn with_default_creator(mut self, creator: Option<Factory>) -> Self {
        self.default_creator = creator;
        self
    }

    pub fn class_names(&self) -> ClassNames {
        ClassNames::new(self.prefix.clone()).bem(self.bem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = LayoutOptions::default();
        assert_eq!(opts.prefix, "mtrl");
        assert!(opts.bem);
        assert!(opts.strict);
        assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
        assert!(opts.default_creator.is_some());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let opts = LayoutOptions::from_json(r#"{"prefix": "app", "strict": false}"#).unwrap();
        assert_eq!(opts.prefix, "app");
        assert!(!opts.strict);
        assert!(opts.bem, "unspecified fields keep their defaults");
        assert!(opts.default_creator.is_some());
    }

    #[test]
    fn test_from_json_camel_case() {
        let opts = LayoutOptions::from_json(r#"{"skipPrefix": true, "maxDepth": 4}"#).unwrap();
        assert!(opts.skip_prefix);
        assert_eq!(opts.max_depth, 4);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            LayoutOptions::from_json("[1, 2]"),
            Err(LayoutError::Json(_))
        ));
    }
}
