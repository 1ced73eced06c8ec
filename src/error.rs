// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a straight line cannot be fitted to a set of points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitError {
    #[error("x and y have different lengths ({x_len} vs {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error("need at least 2 points to fit a line, got {0}")]
    TooFewPoints(usize),
    #[error("input contains non-finite values")]
    NonFinite,
    #[error("x values have zero variance, slope is undefined")]
    DegenerateX,
}

/// Errors raised while loading, analysing or exporting a measurement file.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse measurement JSON '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid timestamp '{value}' in temp_data: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("temp_data contains no samples")]
    EmptySeries,
    #[error("line fit failed: {0}")]
    Fit(#[from] FitError),
    #[error("failed to write summary CSV '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// src/error.rs
