// src/data_output/summary_csv.rs

use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::constants::SAMPLE_SUMMARY_FILENAME;
use crate::data_analysis::expansion::ExpansionAnalysis;
use crate::error::AnalysisError;

/// One row of the exported per-sample table.
#[derive(Debug, Serialize)]
struct SampleSummaryRow {
    sample_index: i64,
    rows: usize,
    elapsed_min: f64,
    frame_temp: f64,
    frame_temp_sd: f64,
    mcu_z: f64,
    mcu_z_sd: f64,
    delta_z_mm: f64,
    delta_z_sd_mm: f64,
    fitted: bool,
}

/// Writes the aggregated per-sample table to `temp_coeff_samples.csv` in `output_dir`.
pub fn write_sample_summary(analysis: &ExpansionAnalysis, output_dir: &Path) -> Result<PathBuf, AnalysisError> {
    let output_path = output_dir.join(SAMPLE_SUMMARY_FILENAME);
    let csv_error = |source: csv::Error| AnalysisError::Csv {
        path: output_path.clone(),
        source,
    };

    let mut writer = csv::Writer::from_path(&output_path).map_err(csv_error)?;
    let summary = &analysis.summary;
    for i in 0..summary.len() {
        writer
            .serialize(SampleSummaryRow {
                sample_index: summary.sample_index[i],
                rows: summary.rows[i],
                elapsed_min: summary.elapsed_min[i],
                frame_temp: summary.frame_temp[i],
                frame_temp_sd: summary.frame_temp_sd[i],
                mcu_z: summary.mcu_z[i],
                mcu_z_sd: summary.mcu_z_sd[i],
                delta_z_mm: summary.delta_z[i],
                delta_z_sd_mm: summary.delta_z_sd[i],
                fitted: analysis.is_fitted(i),
            })
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|source| AnalysisError::Io {
        path: output_path.clone(),
        source,
    })?;

    debug!("Wrote {} summary rows to '{}'", summary.len(), output_path.display());
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::aggregate::SampleSummary;
    use crate::data_analysis::expansion::FitSource;
    use crate::data_analysis::linear_fit::LinearFit;
    use ndarray::array;

    #[test]
    fn test_writes_header_and_rows() {
        let analysis = ExpansionAnalysis {
            summary: SampleSummary {
                sample_index: vec![0, 1],
                rows: vec![2, 1],
                elapsed_min: array![0.5, 2.0],
                frame_temp: array![20.0, 21.0],
                frame_temp_sd: array![0.1, f64::NAN],
                mcu_z: array![100.0, 98.0],
                mcu_z_sd: array![0.5, f64::NAN],
                delta_z: array![0.0, -0.005],
                delta_z_sd: array![0.0, f64::NAN],
            },
            fitted_samples: vec![1],
            fit: LinearFit { slope: -0.005, intercept: 0.1 },
            source: FitSource::Unfiltered,
        };
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample_summary(&analysis, dir.path()).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "sample_index,rows,elapsed_min,frame_temp,frame_temp_sd,mcu_z,mcu_z_sd,delta_z_mm,delta_z_sd_mm,fitted"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0,2,0.5,20.0,"));
        assert!(lines[1].ends_with(",false"));
        assert!(lines[2].ends_with(",true"));
    }
}

// src/data_output/summary_csv.rs
