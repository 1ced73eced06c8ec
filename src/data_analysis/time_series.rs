// src/data_analysis/time_series.rs

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use ndarray::Array1;

use crate::constants::TEMP_DATA_TIMESTAMP_FORMAT;
use crate::data_input::measurement::TempRecord;
use crate::error::AnalysisError;

/// Raw samples as chronologically ordered columns.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    pub timestamps: Vec<NaiveDateTime>,
    pub sample_index: Vec<i64>,
    pub mcu_z: Array1<f64>,
    pub frame_temp: Array1<f64>,
    /// Minutes since the first sample.
    pub elapsed_min: Array1<f64>,
}

impl TimeSeries {
    /// Builds the columns from the timestamp-keyed `temp_data` map.
    pub fn from_records(temp_data: &BTreeMap<String, TempRecord>) -> Result<Self, AnalysisError> {
        if temp_data.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }

        let mut rows: Vec<(NaiveDateTime, TempRecord)> = Vec::with_capacity(temp_data.len());
        for (key, record) in temp_data {
            let timestamp = NaiveDateTime::parse_from_str(key.trim(), TEMP_DATA_TIMESTAMP_FORMAT)
                .map_err(|source| AnalysisError::Timestamp {
                    value: key.clone(),
                    source,
                })?;
            rows.push((timestamp, *record));
        }
        rows.sort_by_key(|(timestamp, _)| *timestamp);

        let timestamps: Vec<NaiveDateTime> = rows.iter().map(|(t, _)| *t).collect();
        let elapsed_min = elapsed_minutes(&timestamps);

        Ok(Self {
            sample_index: rows.iter().map(|(_, r)| r.sample_index).collect(),
            mcu_z: rows.iter().map(|(_, r)| r.mcu_z).collect(),
            frame_temp: rows.iter().map(|(_, r)| r.frame_temp).collect(),
            elapsed_min,
            timestamps,
        })
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Cumulative sum of successive timestamp differences, in minutes. The first entry is 0.
pub fn elapsed_minutes(timestamps: &[NaiveDateTime]) -> Array1<f64> {
    let mut elapsed = Array1::zeros(timestamps.len());
    let mut total_s = 0.0;
    for i in 1..timestamps.len() {
        let delta = timestamps[i].signed_duration_since(timestamps[i - 1]);
        total_s += delta.num_milliseconds() as f64 / 1000.0;
        elapsed[i] = total_s / 60.0;
    }
    elapsed
}


// src/data_analysis/time_series.rs
