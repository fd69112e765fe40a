use std::path::PathBuf;

/// Convenience result type used across the icon renderer.
pub type IconResult<T> = Result<T, IconError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// Invalid caller-provided input (target size, config values).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or encoding an icon.
    #[error("render error: {0}")]
    Render(String),

    /// A font resource could not be used. Only surfaced by explicit font APIs;
    /// rendering absorbs these and falls back to the next candidate.
    #[error("font error: {0}")]
    Font(String),

    /// Filesystem failure tied to a concrete path.
    #[error("io error at '{}': {source}", .path.display())]
    Io {
        /// Path that was being read or written.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    /// Build a [`IconError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`IconError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`IconError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`IconError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
