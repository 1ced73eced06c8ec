// src/data_input/measurement_parser.rs

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use crate::data_input::measurement::MeasurementFile;
use crate::error::AnalysisError;

/// Reads and deserializes a measurement JSON file.
pub fn parse_measurement_file(input_file_path: &Path) -> Result<MeasurementFile, AnalysisError> {
    let file = File::open(input_file_path).map_err(|source| AnalysisError::Io {
        path: input_file_path.to_path_buf(),
        source,
    })?;
    let measurement: MeasurementFile = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        AnalysisError::Json {
            path: input_file_path.to_path_buf(),
            source,
        }
    })?;

    debug!(
        "Parsed '{}': user '{}', dataset '{}', {} raw samples, step_dist {} mm",
        input_file_path.display(),
        measurement.user_id(),
        measurement.dataset_timestamp(),
        measurement.temp_data.len(),
        measurement.step_dist()
    );

    Ok(measurement)
}

/// Dataset label used in plot titles and console output.
///
/// Leading and trailing `.` and `\` characters are stripped (so `.\run1.json`
/// typed in a Windows shell becomes `run1`) and the file extension is removed.
pub fn dataset_name(input_arg: &str) -> String {
    let trimmed = input_arg.trim_matches(|c| c == '.' || c == '\\');
    Path::new(trimmed)
        .with_extension("")
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_dataset_name_strips_extension() {
        assert_eq!(dataset_name("run1.json"), "run1");
        assert_eq!(dataset_name("data/run1.json"), "data/run1");
    }

    #[test]
    fn test_dataset_name_strips_windows_prefix() {
        assert_eq!(dataset_name(".\\run1.json"), "run1");
        assert_eq!(dataset_name("..\\run1.json"), "run1");
    }

    #[test]
    fn test_dataset_name_without_extension() {
        assert_eq!(dataset_name("run1"), "run1");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_measurement_file(Path::new("/nonexistent/frame.json")).unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ \"metadata\": ").unwrap();
        let err = parse_measurement_file(file.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::Json { .. }));
    }
}

// src/data_input/measurement_parser.rs
