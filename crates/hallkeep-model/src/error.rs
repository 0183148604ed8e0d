//! Error types for identity construction.

/// Errors raised while building a [`Room`](crate::Room).
///
/// These are construction-time failures: a value that fails validation is
/// never handed out, so there is no such thing as a half-built room.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Room numbers start at 1.
    #[error("room number must be positive, got {0}")]
    InvalidRoomNumber(u32),

    /// The builder was asked to build without a category.
    #[error("room category is required")]
    MissingCategory,

    /// The builder was asked to build without a price.
    #[error("monthly price is required")]
    MissingPrice,
}
