// src/data_analysis/aggregate.rs

use std::collections::BTreeMap;

use ndarray::Array1;

use crate::data_analysis::time_series::TimeSeries;

/// Per-sample-index means and standard deviations, ordered by ascending sample index.
#[derive(Debug, Clone)]
pub struct SampleSummary {
    pub sample_index: Vec<i64>,
    /// Number of raw readings aggregated into each sample.
    pub rows: Vec<usize>,
    pub elapsed_min: Array1<f64>,
    pub frame_temp: Array1<f64>,
    pub frame_temp_sd: Array1<f64>,
    pub mcu_z: Array1<f64>,
    pub mcu_z_sd: Array1<f64>,
    /// Z displacement relative to the first sample, in mm.
    pub delta_z: Array1<f64>,
    /// Combined uncertainty of `delta_z` (this sample's and the reference sample's spread), in mm.
    pub delta_z_sd: Array1<f64>,
}

impl SampleSummary {
    /// Groups the raw series by sample index and derives the Z displacement columns.
    pub fn from_series(series: &TimeSeries, step_dist: f64) -> Self {
        let mut groups: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
        for (row, &sample_index) in series.sample_index.iter().enumerate() {
            groups.entry(sample_index).or_default().push(row);
        }

        let n = groups.len();
        let mut sample_index = Vec::with_capacity(n);
        let mut rows = Vec::with_capacity(n);
        let mut elapsed_min: Array1<f64> = Array1::zeros(n);
        let mut frame_temp: Array1<f64> = Array1::zeros(n);
        let mut frame_temp_sd: Array1<f64> = Array1::zeros(n);
        let mut mcu_z: Array1<f64> = Array1::zeros(n);
        let mut mcu_z_sd: Array1<f64> = Array1::zeros(n);

        for (i, (&index, members)) in groups.iter().enumerate() {
            let gather = |column: &Array1<f64>| -> Array1<f64> { members.iter().map(|&r| column[r]).collect() };
            let elapsed = gather(&series.elapsed_min);
            let temps = gather(&series.frame_temp);
            let z = gather(&series.mcu_z);

            sample_index.push(index);
            rows.push(members.len());
            elapsed_min[i] = mean(&elapsed);
            frame_temp[i] = mean(&temps);
            frame_temp_sd[i] = sample_sd(&temps);
            mcu_z[i] = mean(&z);
            mcu_z_sd[i] = sample_sd(&z);
        }

        let (delta_z, delta_z_sd) = displacement(&mcu_z, &mcu_z_sd, step_dist);

        Self {
            sample_index,
            rows,
            elapsed_min,
            frame_temp,
            frame_temp_sd,
            mcu_z,
            mcu_z_sd,
            delta_z,
            delta_z_sd,
        }
    }

    pub fn len(&self) -> usize {
        self.sample_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sample_index.is_empty()
    }
}

/// Converts mean MCU positions (steps) into displacement from the first sample (mm),
/// propagating the first sample's spread into every entry's uncertainty.
pub fn displacement(mcu_z: &Array1<f64>, mcu_z_sd: &Array1<f64>, step_dist: f64) -> (Array1<f64>, Array1<f64>) {
    if mcu_z.is_empty() {
        return (Array1::zeros(0), Array1::zeros(0));
    }
    let z0 = mcu_z[0];
    let sd0 = mcu_z_sd[0];
    let delta_z = mcu_z.mapv(|z| (z - z0) * step_dist);
    let delta_z_sd = mcu_z_sd.mapv(|sd| (sd * sd + sd0 * sd0).sqrt() * step_dist);
    (delta_z, delta_z_sd)
}

fn mean(values: &Array1<f64>) -> f64 {
    values.mean().unwrap_or(f64::NAN)
}

/// Sample standard deviation (n - 1 denominator); NaN for fewer than two values.
fn sample_sd(values: &Array1<f64>) -> f64 {
    if values.len() < 2 {
        f64::NAN
    } else {
        values.std(1.0)
    }
}


// src/data_analysis/aggregate.rs
