// src/data_input/measurement.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Top-level layout of a frame expansion measurement file.
#[derive(Debug, Clone, Deserialize)]
pub struct MeasurementFile {
    pub metadata: Metadata,
    /// Raw samples keyed by wall-clock timestamp (`YYYY/MM/DD HH:MM:SS`).
    pub temp_data: BTreeMap<String, TempRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    pub z_axis: ZAxisMetadata,
    pub user: UserMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZAxisMetadata {
    /// Millimetres travelled per MCU step.
    pub step_dist: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserMetadata {
    pub id: String,
    /// Dataset timestamp. Written as a string by current macros, as a number by some older ones.
    pub timestamp: serde_json::Value,
}

/// One raw reading from `temp_data`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TempRecord {
    #[serde(deserialize_with = "deserialize_sample_index")]
    pub sample_index: i64,
    /// Z position reported by the MCU, in steps.
    pub mcu_z: f64,
    /// Frame temperature in degC.
    pub frame_temp: f64,
}

impl MeasurementFile {
    pub fn step_dist(&self) -> f64 {
        self.metadata.z_axis.step_dist
    }

    pub fn user_id(&self) -> &str {
        &self.metadata.user.id
    }

    /// Dataset timestamp as it should appear in output paths.
    pub fn dataset_timestamp(&self) -> String {
        match &self.metadata.user.timestamp {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Directory the plot and summary for this dataset are written to: `<root>/<user>/<timestamp>/`.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(self.user_id()).join(self.dataset_timestamp())
    }
}

// Sample indices are integers, but some loggers serialize them as `3.0`.
fn deserialize_sample_index<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(D::Error::custom(format!(
            "sample_index must be an integer, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json(timestamp: &str) -> String {
        format!(
            r#"{{
                "metadata": {{
                    "z_axis": {{ "step_dist": 0.0025, "max_z": 300 }},
                    "user": {{ "id": "tester", "timestamp": {timestamp} }}
                }},
                "temp_data": {{
                    "2021/06/01 12:00:00": {{ "sample_index": 0, "mcu_z": 1000, "frame_temp": 25.0, "bed_temp": 60.1 }},
                    "2021/06/01 12:00:05": {{ "sample_index": 1.0, "mcu_z": 1001.5, "frame_temp": 25.5 }}
                }}
            }}"#
        )
    }

    #[test]
    fn test_deserialize_measurement() {
        let m: MeasurementFile = serde_json::from_str(&sample_json("\"20210601_120000\"")).unwrap();
        assert_eq!(m.step_dist(), 0.0025);
        assert_eq!(m.user_id(), "tester");
        assert_eq!(m.dataset_timestamp(), "20210601_120000");
        assert_eq!(m.temp_data.len(), 2);
        let second = m.temp_data["2021/06/01 12:00:05"];
        assert_eq!(second.sample_index, 1);
        assert_eq!(second.mcu_z, 1001.5);
    }

    #[test]
    fn test_numeric_timestamp_renders_as_json_text() {
        let m: MeasurementFile = serde_json::from_str(&sample_json("1622548800")).unwrap();
        assert_eq!(m.dataset_timestamp(), "1622548800");
        assert_eq!(
            m.output_dir(Path::new("out")),
            Path::new("out").join("tester").join("1622548800")
        );
    }

    #[test]
    fn test_fractional_sample_index_rejected() {
        let json = sample_json("\"x\"").replace("\"sample_index\": 1.0", "\"sample_index\": 1.5");
        let err = serde_json::from_str::<MeasurementFile>(&json).unwrap_err();
        assert!(err.to_string().contains("sample_index must be an integer"));
    }
}

// src/data_input/measurement.rs
