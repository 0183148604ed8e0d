//! Error types for the catalog layer.

use hallkeep_model::ModelError;

/// Errors that can occur while configuring the catalog or building rooms
/// through it.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog configuration could not be parsed.
    #[error("invalid catalog config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    /// A room failed validation while being built.
    #[error(transparent)]
    Model(#[from] ModelError),
}
