/// Convenience result type used across cellscan.
pub type CellscanResult<T> = Result<T, CellscanError>;

/// Top-level error taxonomy used by the crate's APIs.
#[derive(thiserror::Error, Debug)]
pub enum CellscanError {
    /// Invalid user-provided settings or parameter data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rebuilding the point field.
    #[error("regeneration error: {0}")]
    Regeneration(String),

    /// Errors while producing a frame raster.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while capturing frames into a sink.
    #[error("capture error: {0}")]
    Capture(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CellscanError {
    /// Build a [`CellscanError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CellscanError::Regeneration`] value.
    pub fn regeneration(msg: impl Into<String>) -> Self {
        Self::Regeneration(msg.into())
    }

    /// Build a [`CellscanError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CellscanError::Capture`] value.
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
