// src/pipeline.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use log::info;

use crate::data_analysis::expansion::{analyze, FitSource};
use crate::data_input::measurement_parser::{dataset_name, parse_measurement_file};
use crate::data_output::prepare_output_dir;
use crate::data_output::summary_csv::write_sample_summary;
use crate::plot_functions::plot_temp_coeff::plot_temp_coeff;

/// Outcome of processing one measurement file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub dataset_name: String,
    pub temp_coeff: f64,
    pub source: FitSource,
    pub fitted_samples: usize,
    pub plot_path: PathBuf,
    pub summary_path: PathBuf,
}

/// Loads, analyses and plots one measurement file.
///
/// Outputs go to `<output_root>/<user id>/<dataset timestamp>/`.
pub fn process_file(input_arg: &str, output_root: &Path) -> Result<FileReport, Box<dyn Error>> {
    let name = dataset_name(input_arg);
    println!("Analyzing file: {}", name);

    let measurement = parse_measurement_file(Path::new(input_arg))?;
    let analysis = analyze(&measurement)?;

    let output_dir = measurement.output_dir(output_root);
    prepare_output_dir(&output_dir)?;
    info!("Writing outputs to '{}'", output_dir.display());

    let plot_path = plot_temp_coeff(&analysis, &name, &output_dir)?;
    let summary_path = write_sample_summary(&analysis, &output_dir)?;

    Ok(FileReport {
        dataset_name: name,
        temp_coeff: analysis.temp_coeff(),
        source: analysis.source,
        fitted_samples: analysis.fitted_samples.len(),
        plot_path,
        summary_path,
    })
}

/// Processes every input in order. A failing file does not stop the ones after it.
pub fn process_files<S: AsRef<str>>(
    inputs: &[S],
    output_root: &Path,
) -> Vec<Result<FileReport, Box<dyn Error>>> {
    inputs
        .iter()
        .map(|input| process_file(input.as_ref(), output_root))
        .collect()
}

// src/pipeline.rs
