/// Convenience result type used across feedgrid.
pub type GridResult<T> = Result<T, GridError>;

/// Top-level error taxonomy for the boundaries of the crate.
///
/// The packing core itself never fails; errors only come from loading feeds, validating
/// configuration, and setting up the media measurement stage.
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    /// Invalid user-provided feed or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while setting up or running media measurement.
    #[error("measure error: {0}")]
    Measure(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridError {
    /// Build a [`GridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GridError::Measure`] value.
    pub fn measure(msg: impl Into<String>) -> Self {
        Self::Measure(msg.into())
    }

    /// Build a [`GridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
