//! Error types for the fractal core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FractalError {
    #[error("Unknown fractal kind: {0}")]
    UnknownFractalKind(String),

    #[error("Unknown color scheme: {0}")]
    UnknownColorScheme(String),

    #[error("Unknown export format: {0}")]
    UnknownExportFormat(String),

    #[error("Unsupported saved state version {0}")]
    UnsupportedStateVersion(u32),

    #[error("Invalid saved state: {0}")]
    InvalidState(#[from] serde_json::Error),
}
