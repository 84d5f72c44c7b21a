/// Convenience result type used across delicacy.
pub type DelicacyResult<T> = Result<T, DelicacyError>;

/// Top-level error taxonomy used by the generation pipeline.
///
/// Every operation in the pipeline is pure and deterministic, so none of these are retried:
/// calling again with the same input fails the same way.
#[derive(thiserror::Error, Debug)]
pub enum DelicacyError {
    /// Rejected caller input: phrase too long, unknown maker/palette, out-of-range parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Two rasters that must share pixel dimensions did not.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A required resource (e.g. the assets of a collection layer) is missing.
    #[error("not found: {0}")]
    NotFound(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DelicacyError {
    /// Build a [`DelicacyError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`DelicacyError::DimensionMismatch`] value.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Build a [`DelicacyError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
