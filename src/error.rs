use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, LookupError>;

/// Error type covering the different failure cases that can occur while a
/// search request is validated, its sources are loaded, or its report is
/// produced.
///
/// Row-level data problems (an unparsable price or quantity) are never
/// reported here; they degrade to a zero value inside the indexes.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Raised when the input text contains no 6- or 10-digit part numbers.
    #[error("no part numbers found in input; enter at least one 6- or 10-digit part number")]
    EmptyInput,

    /// Raised when the catalog or inventory table is absent or has no rows.
    #[error("source data unavailable: {0}")]
    MissingSourceData(String),

    /// Raised when no workbook in a directory matches the expected prefix.
    #[error("no workbook starting with '{prefix}' found in {}", .dir.display())]
    SourceNotFound { dir: PathBuf, prefix: String },

    /// Raised when a file is not a spreadsheet format the loader understands.
    #[error("unsupported workbook format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Raised when a workbook contains no worksheet to read.
    #[error("workbook has no worksheets: {}", .0.display())]
    MissingSheet(PathBuf),

    /// Wrapper for IO failures such as reading files or directory listings.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON parsing or serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the spreadsheet reader.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::Error),

    /// Raised when a configuration file holds values that cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
