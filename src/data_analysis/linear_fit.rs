// src/data_analysis/linear_fit.rs

use ndarray::ArrayView1;

use crate::error::FitError;

/// A fitted straight line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Inverse of `evaluate`; `None` for a flat line.
    pub fn solve_for_x(&self, y: f64) -> Option<f64> {
        if self.slope == 0.0 {
            None
        } else {
            Some((y - self.intercept) / self.slope)
        }
    }

    /// Thermal expansion coefficient in mm/K for a fit of delta Z (mm) against
    /// frame temperature (degC). Positive when the nozzle moves toward the bed as the frame warms.
    pub fn temp_coeff(&self) -> f64 {
        -self.slope
    }
}

/// Ordinary least-squares fit of a degree-1 polynomial.
pub fn fit_line(x: ArrayView1<f64>, y: ArrayView1<f64>) -> Result<LinearFit, FitError> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(FitError::TooFewPoints(x.len()));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(FitError::NonFinite);
    }

    let n = x.len() as f64;
    let mean_x = x.sum() / n;
    let mean_y = y.sum() / n;

    let mut s_xx = 0.0;
    let mut s_xy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        s_xx += dx * dx;
        s_xy += dx * (yi - mean_y);
    }

    // Relative threshold: identical x values can leave rounding residue in s_xx.
    if s_xx <= f64::EPSILON * x.dot(&x) {
        return Err(FitError::DegenerateX);
    }

    let slope = s_xy / s_xx;
    Ok(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}


// src/data_analysis/linear_fit.rs
