// src/data_analysis/filter.rs

use log::debug;
use ndarray_stats::QuantileExt;

use crate::constants::{FRAME_TEMP_PLATEAU_MARGIN_C, MCU_Z_SD_MAX_STEPS, PRINT_START_TIME_MIN};
use crate::data_analysis::aggregate::SampleSummary;

/// Indices of samples with a steady Z reading that are not on the saturated temperature plateau.
///
/// A sample is kept when its MCU Z standard deviation is below `MCU_Z_SD_MAX_STEPS`
/// (single-reading samples have an undefined spread and are dropped) and its mean frame
/// temperature is more than `FRAME_TEMP_PLATEAU_MARGIN_C` below the hottest sample.
pub fn stable_samples(summary: &SampleSummary) -> Vec<usize> {
    if summary.is_empty() {
        return Vec::new();
    }
    let max_frame_temp = *summary.frame_temp.max_skipnan();
    let temp_ceiling = max_frame_temp - FRAME_TEMP_PLATEAU_MARGIN_C;

    let kept: Vec<usize> = (0..summary.len())
        .filter(|&i| summary.mcu_z_sd[i] < MCU_Z_SD_MAX_STEPS && summary.frame_temp[i] < temp_ceiling)
        .collect();
    debug!(
        "Stability filter kept {} of {} samples (frame temp ceiling {:.2} degC)",
        kept.len(),
        summary.len(),
        temp_ceiling
    );
    kept
}

/// Narrows `indices` to samples taken after the heat-soak start (`PRINT_START_TIME_MIN`).
pub fn print_phase(summary: &SampleSummary, indices: &[usize]) -> Vec<usize> {
    indices
        .iter()
        .copied()
        .filter(|&i| summary.elapsed_min[i] > PRINT_START_TIME_MIN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    fn summary(elapsed: Array1<f64>, temps: Array1<f64>, z_sd: Array1<f64>) -> SampleSummary {
        let n = temps.len();
        SampleSummary {
            sample_index: (0..n as i64).collect(),
            rows: vec![3; n],
            elapsed_min: elapsed,
            frame_temp_sd: Array1::zeros(n),
            mcu_z: Array1::zeros(n),
            mcu_z_sd: z_sd,
            delta_z: Array1::zeros(n),
            delta_z_sd: Array1::zeros(n),
            frame_temp: temps,
        }
    }

    #[test]
    fn test_drops_noisy_and_plateau_samples() {
        let s = summary(
            array![0.0, 5.0, 15.0, 25.0, 35.0],
            array![20.0, 25.0, 30.0, 34.8, 35.0],
            array![0.5, 2.5, 1.0, f64::NAN, 0.1],
        );
        // idx1 noisy, idx3 NaN spread, idx3/idx4 within 0.3 of the 35.0 maximum.
        assert_eq!(stable_samples(&s), vec![0, 2]);
    }

    #[test]
    fn test_sd_threshold_is_strict() {
        let s = summary(array![0.0, 1.0], array![20.0, 30.0], array![2.0, 0.0]);
        assert_eq!(stable_samples(&s), Vec::<usize>::new());
    }

    #[test]
    fn test_print_phase_after_start_time() {
        let s = summary(
            array![0.0, 10.0, 10.5, 40.0],
            array![20.0, 21.0, 22.0, 30.0],
            array![0.0, 0.0, 0.0, 0.0],
        );
        assert_eq!(print_phase(&s, &[0, 1, 2, 3]), vec![2, 3]);
        assert_eq!(print_phase(&s, &[0, 1]), Vec::<usize>::new());
    }

    #[test]
    fn test_empty_summary() {
        let s = summary(Array1::zeros(0), Array1::zeros(0), Array1::zeros(0));
        assert!(stable_samples(&s).is_empty());
    }
}

// src/data_analysis/filter.rs
