//! Error types for layout creation and teardown
//!
//! Factory failures are carried unchanged inside [`LayoutError::Factory`]; the
//! engine adds the node name but never retries or swallows them.

use thiserror::Error;

use crate::dom::DomError;
use crate::node::ComponentError;

/// Errors raised while materializing a schema
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Node has no creator and the layout has no default creator
    #[error("no creator for '{key}' and no default creator configured")]
    MissingCreator { key: String },

    /// JSON schema names a creator that is not registered
    #[error("unknown creator '{creator}' for '{key}'")]
    UnknownCreator { key: String, creator: String },

    /// A factory failed to build its node
    #[error("failed to create '{name}': {source}")]
    Factory {
        name: String,
        #[source]
        source: ComponentError,
    },

    /// Name or options entry not attached to any factory (strict mode)
    #[error("{kind} at index {index} on level {level} does not follow a factory")]
    OrphanEntry {
        kind: &'static str,
        level: usize,
        index: usize,
    },

    /// Schema nesting deeper than the configured maximum
    #[error("schema nesting exceeds the maximum depth of {max}")]
    DepthExceeded { max: usize },

    /// HTML schema without any element (strict mode)
    #[error("HTML schema contains no element")]
    EmptyHtml,

    /// Schema could not be understood
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures collected while destroying a layout
#[derive(Debug, Error)]
#[error("{} node(s) failed to destroy: {}", .failures.len(), summary(.failures))]
pub struct DestroyError {
    pub failures: Vec<(String, ComponentError)>,
}

fn summary(failures: &[(String, ComponentError)]) -> String {
    failures
        .iter()
        .map(|(name, err)| format!("'{}' ({})", name, err))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destroy_error_message_lists_failures() {
        let err = DestroyError {
            failures: vec![
                ("a".to_string(), ComponentError::Destroy("busy".to_string())),
                ("b".to_string(), ComponentError::Destroy("gone".to_string())),
            ],
        };
        assert_eq!(
            err.to_string(),
            "2 node(s) failed to destroy: 'a' (destroy failed: busy), 'b' (destroy failed: gone)"
        );
    }

    #[test]
    fn test_factory_error_keeps_source() {
        use std::error::Error as _;

        let err = LayoutError::Factory {
            name: "submit".to_string(),
            source: ComponentError::Build("no label".to_string()),
        };
        assert_eq!(err.to_string(), "failed to create 'submit': build failed: no label");
        assert!(err.source().is_some());
    }
}
