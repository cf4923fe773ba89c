//! Rendering error types.

use thiserror::Error;

/// A specialized Result type for rendering and export.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised while labelling or exporting a lattice.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An edge refers to a node the pricing run did not produce.
    #[error("Node {index} is not in the node table")]
    MissingNode {
        /// The unknown node index.
        index: usize,
    },

    /// Workbook writer failure.
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
