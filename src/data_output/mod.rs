// src/data_output/mod.rs

pub mod summary_csv;

use std::fs;
use std::path::Path;

use crate::error::AnalysisError;

/// Creates the output directory tree if it does not exist yet.
pub fn prepare_output_dir(output_dir: &Path) -> Result<(), AnalysisError> {
    fs::create_dir_all(output_dir).map_err(|source| AnalysisError::Io {
        path: output_dir.to_path_buf(),
        source,
    })
}

// src/data_output/mod.rs
