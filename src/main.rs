// src/main.rs

use std::error::Error;
use std::path::Path;

use clap::Parser;
use log::error;

use frame_expansion_render::crate_version;
use frame_expansion_render::data_analysis::expansion::FitSource;
use frame_expansion_render::pipeline::process_files;

/// Fits the Z-axis thermal expansion coefficient of a printer frame from measurement JSON files.
#[derive(Parser, Debug)]
#[command(name = "frame_expansion_render", version = crate_version(), about)]
struct Cli {
    /// Measurement JSON files to analyse.
    #[arg(required = true)]
    files: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut failures = 0usize;
    let results = process_files(&cli.files, Path::new("."));
    for (input_file, result) in cli.files.iter().zip(results) {
        match result {
            Ok(report) => {
                let source = match report.source {
                    FitSource::Filtered => "filtered",
                    FitSource::Unfiltered => "unfiltered",
                };
                println!(
                    "  {} temp_coeff: {:.4} mm/K ({} samples, {} fit)",
                    report.dataset_name, report.temp_coeff, report.fitted_samples, source
                );
                println!("  Plot saved as '{}'.", report.plot_path.display());
                println!("  Sample summary saved as '{}'.", report.summary_path.display());
            }
            Err(e) => {
                error!("Failed to process '{}': {}", input_file, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} files failed", failures, cli.files.len()).into());
    }
    Ok(())
}

// src/main.rs
