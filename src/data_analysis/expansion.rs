// src/data_analysis/expansion.rs

use log::{info, warn};
use ndarray::Axis;

use crate::data_analysis::aggregate::SampleSummary;
use crate::data_analysis::filter::{print_phase, stable_samples};
use crate::data_analysis::linear_fit::{fit_line, LinearFit};
use crate::data_analysis::time_series::TimeSeries;
use crate::data_input::measurement::MeasurementFile;
use crate::error::{AnalysisError, FitError};

/// Which set of samples the reported fit was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitSource {
    /// Stable, unsaturated samples from the print phase.
    Filtered,
    /// Every sample mean; used when the filtered set cannot be fitted.
    Unfiltered,
}

/// Result of the frame expansion analysis for one measurement file.
#[derive(Debug, Clone)]
pub struct ExpansionAnalysis {
    pub summary: SampleSummary,
    /// Indices into `summary` of the samples the fit used (and the plot shows).
    pub fitted_samples: Vec<usize>,
    pub fit: LinearFit,
    pub source: FitSource,
}

impl ExpansionAnalysis {
    /// Thermal expansion coefficient in mm/K.
    pub fn temp_coeff(&self) -> f64 {
        self.fit.temp_coeff()
    }

    /// `(delta_z, frame_temp)` pairs of the fitted samples, in plot orientation.
    pub fn fitted_points(&self) -> Vec<(f64, f64)> {
        self.fitted_samples
            .iter()
            .map(|&i| (self.summary.delta_z[i], self.summary.frame_temp[i]))
            .collect()
    }

    pub fn is_fitted(&self, sample: usize) -> bool {
        self.fitted_samples.contains(&sample)
    }
}

/// Runs reshape, aggregation, filtering and fitting on a parsed measurement file.
///
/// The fit of delta Z against frame temperature uses the filtered print-phase samples;
/// if that set cannot be fitted, all sample means are fitted instead.
pub fn analyze(measurement: &MeasurementFile) -> Result<ExpansionAnalysis, AnalysisError> {
    let series = TimeSeries::from_records(&measurement.temp_data)?;
    let summary = SampleSummary::from_series(&series, measurement.step_dist());
    info!(
        "Aggregated {} readings into {} samples",
        series.len(),
        summary.len()
    );

    let stable = stable_samples(&summary);
    let filtered = print_phase(&summary, &stable);
    info!(
        "{} stable samples, {} after print start",
        stable.len(),
        filtered.len()
    );

    match fit_samples(&summary, &filtered) {
        Ok(fit) => Ok(ExpansionAnalysis {
            summary,
            fitted_samples: filtered,
            fit,
            source: FitSource::Filtered,
        }),
        Err(e) => {
            warn!("Filtered data produces unfittable results ({e}). Plotting & fitting unfiltered mean data points.");
            let all: Vec<usize> = (0..summary.len()).collect();
            let fit = fit_samples(&summary, &all)?;
            Ok(ExpansionAnalysis {
                summary,
                fitted_samples: all,
                fit,
                source: FitSource::Unfiltered,
            })
        }
    }
}

/// Fits delta Z (mm) against frame temperature (degC) for the selected samples.
fn fit_samples(summary: &SampleSummary, indices: &[usize]) -> Result<LinearFit, FitError> {
    let temps = summary.frame_temp.select(Axis(0), indices);
    let delta_z = summary.delta_z.select(Axis(0), indices);
    fit_line(temps.view(), delta_z.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::BTreeMap;

    use crate::data_input::measurement::{Metadata, TempRecord, UserMetadata, ZAxisMetadata};

    const STEP_DIST: f64 = 0.0025;

    // Builds a measurement with `per_sample` readings per sample, one minute apart,
    // where Z drops 1.6 steps per degC.
    fn measurement(samples: &[(f64, f64)], per_sample: usize) -> MeasurementFile {
        let mut temp_data = BTreeMap::new();
        let mut minute = 0;
        for (sample_index, &(frame_temp, z_jitter)) in samples.iter().enumerate() {
            for k in 0..per_sample {
                let key = format!("2021/06/01 {:02}:{:02}:00", 10 + minute / 60, minute % 60);
                let jitter = if k % 2 == 0 { z_jitter } else { -z_jitter };
                temp_data.insert(
                    key,
                    TempRecord {
                        sample_index: sample_index as i64,
                        mcu_z: 10_000.0 - 1.6 * (frame_temp - 20.0) + jitter,
                        frame_temp,
                    },
                );
                minute += 1;
            }
        }
        MeasurementFile {
            metadata: Metadata {
                z_axis: ZAxisMetadata { step_dist: STEP_DIST },
                user: UserMetadata {
                    id: "tester".to_string(),
                    timestamp: serde_json::Value::String("20210601".to_string()),
                },
            },
            temp_data,
        }
    }

    #[test]
    fn test_filtered_fit() {
        let samples: Vec<(f64, f64)> = (0..12).map(|i| (20.0 + i as f64, 0.0)).collect();
        let analysis = analyze(&measurement(&samples, 2)).unwrap();

        assert_eq!(analysis.source, FitSource::Filtered);
        // Two minutes per sample: sample 5 ends at minute 11, sample 11 is the plateau maximum.
        assert_eq!(analysis.fitted_samples, (5..11).collect::<Vec<_>>());
        assert_relative_eq!(analysis.fit.slope, -1.6 * STEP_DIST, epsilon = 1e-9);
        assert_relative_eq!(analysis.temp_coeff(), 0.004, epsilon = 1e-9);
        assert_eq!(analysis.fitted_points().len(), 6);
        assert!(analysis.is_fitted(5) && !analysis.is_fitted(11));
    }

    #[test]
    fn test_noisy_samples_excluded_from_fit() {
        let mut samples: Vec<(f64, f64)> = (0..12).map(|i| (20.0 + i as f64, 0.0)).collect();
        samples[7].1 = 5.0;
        let analysis = analyze(&measurement(&samples, 2)).unwrap();
        assert_eq!(analysis.source, FitSource::Filtered);
        assert!(!analysis.is_fitted(7));
    }

    #[test]
    fn test_falls_back_to_unfiltered_when_filtered_set_is_empty() {
        // Single reading per sample: every spread is undefined, so nothing survives filtering.
        let samples: Vec<(f64, f64)> = (0..15).map(|i| (20.0 + i as f64, 0.0)).collect();
        let analysis = analyze(&measurement(&samples, 1)).unwrap();

        assert_eq!(analysis.source, FitSource::Unfiltered);
        assert_eq!(analysis.fitted_samples.len(), 15);
        assert_relative_eq!(analysis.temp_coeff(), 0.004, epsilon = 1e-9);
    }

    #[test]
    fn test_unfittable_everywhere_is_error() {
        let analysis = analyze(&measurement(&[(25.0, 0.0)], 3));
        assert!(matches!(analysis, Err(AnalysisError::Fit(FitError::TooFewPoints(1)))));
    }
}

// src/data_analysis/expansion.rs
