//! Error types for chart rendering.

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors that can occur while drawing a chart or writing it to disk.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The plotting backend rejected a drawing operation (layout, font, etc).
    #[error("Drawing failed: {0}")]
    Drawing(String),

    /// Figure size or DPI produced an image with a zero dimension.
    #[error("Invalid figure size: {width}x{height} pixels")]
    InvalidSize { width: u32, height: u32 },

    /// The heatmap matrix has no rows or no columns.
    #[error("Cannot render heatmap: matrix is empty ({rows} rows x {columns} columns)")]
    EmptyHeatmap { rows: usize, columns: usize },

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode PNG {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(err.to_string())
    }
}
