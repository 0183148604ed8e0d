//! Unified error type for Hallkeep.

use hallkeep_catalog::CatalogError;
use hallkeep_model::ModelError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `hallkeep` facade you deal with this single error type
/// instead of importing errors from each sub-crate. The `#[from]`
/// attributes let `?` convert sub-crate errors automatically.
///
/// Lifecycle and registry operations never fail, so they have no variant
/// here: a rejected transition is a `false`, not an error.
#[derive(Debug, thiserror::Error)]
pub enum HallkeepError {
    /// A room identity failed validation.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Catalog configuration or construction failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_model_error() {
        let err = ModelError::InvalidRoomNumber(0);
        let hall_err: HallkeepError = err.into();
        assert!(matches!(hall_err, HallkeepError::Model(_)));
        assert!(hall_err.to_string().contains("positive"));
    }

    #[test]
    fn test_from_catalog_error() {
        let err = hallkeep_catalog::CatalogConfig::from_json_str("not json").unwrap_err();
        let hall_err: HallkeepError = err.into();
        assert!(matches!(hall_err, HallkeepError::Catalog(_)));
        assert!(hall_err.to_string().starts_with("invalid catalog config"));
    }
}
