// src/plot_functions/plot_temp_coeff.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::constants::{
    ANNOTATION_FIGURE_FRACTION, COLOR_BACKGROUND, COLOR_FIT_LINE, FIT_LINE_DASH_SEGMENTS,
    FIT_PLOT_FILENAME, FIT_PLOT_UNFILTERED_FILENAME, LINE_WIDTH_FIT, PLOT_HEIGHT,
    PLOT_TITLE_SUFFIX_LINES, PLOT_WIDTH, SCATTER_MARKER_RADIUS, TITLE_AREA_HEIGHT_PX,
    X_AXIS_LABEL, Y_AXIS_LABEL,
};
use crate::data_analysis::expansion::{ExpansionAnalysis, FitSource};
use crate::font_config::{FONT_ANNOTATION, FONT_AXIS_LABEL, FONT_MAIN_TITLE, FONT_TICK_LABEL};
use crate::plot_framework::{
    dashed_segments, draw_centered_lines, draw_text_block, figure_fraction_to_pixel,
    format_tick, map_value_to_color, padded_range, tick_decimals, visible_fit_segment,
};

/// File name of the fit plot for a given fit source.
pub fn plot_filename(source: FitSource) -> &'static str {
    match source {
        FitSource::Filtered => FIT_PLOT_FILENAME,
        FitSource::Unfiltered => FIT_PLOT_UNFILTERED_FILENAME,
    }
}

/// Annotation text for the fitted coefficient.
pub fn temp_coeff_label(temp_coeff: f64) -> [String; 2] {
    ["temp_coeff:".to_string(), format!("{:.4} mm/K", temp_coeff)]
}

/// Renders the fitted samples (delta Z vs frame temperature), the dashed trend line and
/// the coefficient annotation into `output_dir`. Returns the path of the written PNG.
pub fn plot_temp_coeff(
    analysis: &ExpansionAnalysis,
    dataset_name: &str,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_path = output_dir.join(plot_filename(analysis.source));
    let points = analysis.fitted_points();

    let (x_range, y_range) = match (
        padded_range(points.iter().map(|p| p.0)),
        padded_range(points.iter().map(|p| p.1)),
    ) {
        (Some(x), Some(y)) => (x, y),
        _ => return Err(format!("No plottable samples for '{}'", dataset_name).into()),
    };
    let (temp_min, temp_max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.1), hi.max(p.1)));

    // The backend borrows its path until the end of the function.
    let render_path = output_path.clone();
    let root_area = BitMapBackend::new(&render_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(COLOR_BACKGROUND)?;
    let (title_area, chart_area) = root_area.split_vertically(TITLE_AREA_HEIGHT_PX);

    let title_lines = [dataset_name, PLOT_TITLE_SUFFIX_LINES[0], PLOT_TITLE_SUFFIX_LINES[1]];
    draw_centered_lines(&title_area, &title_lines, 8, FONT_MAIN_TITLE)?;

    let x_decimals = tick_decimals(x_range.end - x_range.start);
    let y_decimals = tick_decimals(y_range.end - y_range.start);

    let mut chart = ChartBuilder::on(&chart_area)
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .x_labels(6)
        .y_labels(8)
        .x_label_formatter(&|x| format_tick(*x, x_decimals))
        .y_label_formatter(&|y| format_tick(*y, y_decimals))
        .light_line_style(WHITE.mix(0.7))
        .axis_desc_style(FONT_AXIS_LABEL.as_tuple())
        .label_style(FONT_TICK_LABEL.as_tuple())
        .draw()?;

    // Scatter, coloured by frame temperature
    chart.draw_series(points.iter().map(|&(delta_z, frame_temp)| {
        Circle::new(
            (delta_z, frame_temp),
            SCATTER_MARKER_RADIUS,
            map_value_to_color(frame_temp, temp_min, temp_max).filled(),
        )
    }))?;

    // Fitted trend line, dashed across the visible area
    if let Some((start, end)) = visible_fit_segment(&analysis.fit, &x_range, &y_range) {
        for (dash_start, dash_end) in dashed_segments(start, end, FIT_LINE_DASH_SEGMENTS) {
            chart.draw_series(LineSeries::new(
                vec![dash_start, dash_end],
                COLOR_FIT_LINE.stroke_width(LINE_WIDTH_FIT),
            ))?;
        }
    }

    let label = temp_coeff_label(analysis.temp_coeff());
    let anchor = figure_fraction_to_pixel(ANNOTATION_FIGURE_FRACTION, (PLOT_WIDTH, PLOT_HEIGHT));
    draw_text_block(&root_area, &[label[0].as_str(), label[1].as_str()], anchor, FONT_ANNOTATION)?;

    root_area.present()?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_filename_by_source() {
        assert_eq!(plot_filename(FitSource::Filtered), "temp_coeff_fitting.png");
        assert_eq!(plot_filename(FitSource::Unfiltered), "temp_coeff_fitting_unfiltered.png");
    }

    #[test]
    fn test_temp_coeff_label() {
        let label = temp_coeff_label(0.004_23);
        assert_eq!(label[0], "temp_coeff:");
        assert_eq!(label[1], "0.0042 mm/K");
        assert_eq!(temp_coeff_label(-0.01)[1], "-0.0100 mm/K");
    }
}

// src/plot_functions/plot_temp_coeff.rs
