//! Naming for exported images. Encoding is left to the exporter.

use crate::config::FractalKind;
use crate::error::FractalError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn from_id(id: &str) -> Result<Self, FractalError> {
        match id {
            "png" => Ok(ExportFormat::Png),
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            other => Err(FractalError::UnknownExportFormat(other.to_string())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
        }
    }
}

/// `fractal-<kind>-<timestamp>.<ext>`
pub fn export_file_name(kind: FractalKind, format: ExportFormat, timestamp_ms: u64) -> String {
    format!("fractal-{}-{}.{}", kind.id(), timestamp_ms, format.extension())
}
