// src/constants.rs

use plotters::style::colors::{BLACK, WHITE};
use plotters::style::RGBColor;

// Plot dimensions (6 x 6 inch figure at 100 dpi).
pub const PLOT_WIDTH: u32 = 600;
pub const PLOT_HEIGHT: u32 = 600;

// Height reserved above the chart for the three-line title.
pub const TITLE_AREA_HEIGHT_PX: u32 = 70;

// Timestamp format of the temp_data keys written by the measurement macro.
pub const TEMP_DATA_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

// --- Sample Filtering ---
// Samples whose MCU Z position scatters more than this (in steps) are noisy.
pub const MCU_Z_SD_MAX_STEPS: f64 = 2.0;
// Samples within this margin of the hottest mean frame temperature are on the saturated plateau.
pub const FRAME_TEMP_PLATEAU_MARGIN_C: f64 = 0.3;
// Minutes after the first sample before the heat-soak phase counts.
pub const PRINT_START_TIME_MIN: f64 = 10.0;

// --- Output Files ---
pub const FIT_PLOT_FILENAME: &str = "temp_coeff_fitting.png";
pub const FIT_PLOT_UNFILTERED_FILENAME: &str = "temp_coeff_fitting_unfiltered.png";
pub const SAMPLE_SUMMARY_FILENAME: &str = "temp_coeff_samples.csv";

// --- Plot Text ---
pub const PLOT_TITLE_SUFFIX_LINES: [&str; 2] = ["Frame Expansion", "Temperature Coefficient Fitting"];
pub const X_AXIS_LABEL: &str = "Delta Z [mm]";
pub const Y_AXIS_LABEL: &str = "Frame Temperature [degC]";

// Annotation anchor as a figure fraction measured from the bottom-left corner.
pub const ANNOTATION_FIGURE_FRACTION: (f64, f64) = (0.6, 0.8);

// --- Font Sizes ---
pub const FONT_SIZE_MAIN_TITLE: i32 = 16;
pub const FONT_SIZE_AXIS_LABEL: i32 = 13;
pub const FONT_SIZE_TICK_LABEL: i32 = 11;
pub const FONT_SIZE_ANNOTATION: i32 = 14;

// --- Plot Color Assignments ---
pub const COLOR_FIT_LINE: &RGBColor = &BLACK;
pub const COLOR_BACKGROUND: &RGBColor = &WHITE;

// Scatter marker radius in pixels.
pub const SCATTER_MARKER_RADIUS: i32 = 4;

// Stroke widths for lines
pub const LINE_WIDTH_FIT: u32 = 1;

// Number of dashes drawn along the visible part of the fitted trend line.
pub const FIT_LINE_DASH_SEGMENTS: usize = 30;

// src/constants.rs
