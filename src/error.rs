// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Everything that can abort a single hemisphere/date conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Hemisphere selector outside {north, south}
    #[error("invalid hemisphere {0:?}, expected north|south|n|s")]
    InvalidHemisphere(String),

    /// Binary input file absent from the input tree
    #[error("missing input file {filename} under {}", .search_dir.display())]
    MissingInputFile {
        filename: String,
        search_dir: PathBuf,
    },

    /// Binary input length disagrees with the declared grid dimensions
    #[error(
        "grid size mismatch for {}: {actual} bytes, expected {expected} ({rows}x{columns})",
        .path.display()
    )]
    GridSizeMismatch {
        path: PathBuf,
        actual: u64,
        expected: u64,
        rows: usize,
        columns: usize,
    },

    /// EPSG code unknown to the projection library
    #[error("cannot resolve EPSG:{epsg}: {source}")]
    CrsResolution {
        epsg: u32,
        source: gdal::errors::GdalError,
    },

    /// Template references a placeholder the context does not supply
    #[error("unresolved template placeholder ${{{0}}}")]
    UnresolvedPlaceholder(String),

    /// `${` with no closing brace
    #[error("malformed template placeholder near {0:?}")]
    MalformedPlaceholder(String),

    /// ncgen missing from PATH or exited nonzero; carries its stderr
    #[error("ncgen failed for {}: {stderr}", .output.display())]
    Compile { output: PathBuf, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
