//! Error types

use hooters_dom::{DomError, NodeId};

/// Result alias for region operations
pub type Result<T> = std::result::Result<T, HooterError>;

/// Region errors
#[derive(Debug, thiserror::Error)]
pub enum HooterError {
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    /// A sticky header or footer is configured but the body selector matched
    /// nothing inside the container, so there is no geometry to read.
    #[error("Body element not found for selector `{selector}`")]
    MissingBody { selector: String },

    #[error("Unknown container node {0:?}")]
    UnknownNode(NodeId),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
