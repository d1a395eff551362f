/// Convenience result type used across Penumbra.
pub type PenumbraResult<T> = Result<T, PenumbraError>;

/// Top-level error taxonomy used by the curve engine and its render boundary.
#[derive(thiserror::Error, Debug)]
pub enum PenumbraError {
    /// Constants that would make the geometry or timing math ill-defined.
    ///
    /// Raised at startup; there is no partial-success state for a cycle.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Errors while serializing or rasterizing a cycle for a surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PenumbraError {
    /// Build a [`PenumbraError::InvalidConfiguration`] value.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`PenumbraError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PenumbraError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
