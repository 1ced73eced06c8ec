// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::Text;
use plotters::style::colors::BLACK;
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::data_analysis::linear_fit::LinearFit;
use crate::font_config::FontStyle;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Padded plot range over a set of values, or `None` when no value is finite.
pub fn padded_range<I>(values: I) -> Option<Range<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min.is_infinite() || max.is_infinite() {
        return None;
    }
    let (lo, hi) = calculate_range(min, max);
    Some(lo..hi)
}

/// Maps `value` within `[min, max]` onto the inferno colormap.
pub fn map_value_to_color(value: f64, min: f64, max: f64) -> RGBColor {
    if !value.is_finite() || !min.is_finite() || !max.is_finite() {
        return RGBColor(0, 0, 0);
    }

    // Ensure span is non-zero to avoid division by zero
    let span = (max - min).abs().max(1e-9);
    let t = ((value - min) / span).clamp(0.0, 1.0);

    let color = colorous::INFERNO.eval_continuous(t);
    RGBColor(color.r, color.g, color.b)
}

/// Number of decimals that keeps neighbouring ticks distinguishable for a given axis span.
pub fn tick_decimals(span: f64) -> usize {
    if !span.is_finite() || span <= 0.0 {
        return 1;
    }
    // Roughly 5-10 ticks per axis.
    let step = span / 5.0;
    (-step.log10()).ceil().clamp(0.0, 6.0) as usize
}

/// Formats an axis tick, avoiding a "-0.000" label at the origin.
pub fn format_tick(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted[1..].to_string()
    } else {
        formatted
    }
}

/// Converts a figure fraction measured from the bottom-left corner into pixel coordinates.
pub fn figure_fraction_to_pixel(fraction: (f64, f64), size: (u32, u32)) -> (i32, i32) {
    let x = fraction.0 * size.0 as f64;
    let y = (1.0 - fraction.1) * size.1 as f64;
    (x.round() as i32, y.round() as i32)
}

/// Portion of the fitted relation `x = fit(y)` that lies inside the plot ranges.
///
/// The fit maps frame temperature (plot y) to delta Z (plot x); the returned endpoints
/// are in `(x, y)` plot coordinates ordered by increasing y.
pub fn visible_fit_segment(
    fit: &LinearFit,
    x_range: &Range<f64>,
    y_range: &Range<f64>,
) -> Option<((f64, f64), (f64, f64))> {
    let mut y_lo = y_range.start;
    let mut y_hi = y_range.end;

    if fit.slope == 0.0 {
        if !x_range.contains(&fit.intercept) {
            return None;
        }
    } else {
        let (ya, yb) = match (fit.solve_for_x(x_range.start), fit.solve_for_x(x_range.end)) {
            (Some(a), Some(b)) => (a, b),
            _ => return None,
        };
        y_lo = y_lo.max(ya.min(yb));
        y_hi = y_hi.min(ya.max(yb));
    }

    if !(y_lo < y_hi) {
        return None;
    }
    Some(((fit.evaluate(y_lo), y_lo), (fit.evaluate(y_hi), y_hi)))
}

/// Splits a straight segment into `num_segments` dashes with equal gaps between them.
pub fn dashed_segments(
    start: (f64, f64),
    end: (f64, f64),
    num_segments: usize,
) -> Vec<((f64, f64), (f64, f64))> {
    if num_segments == 0 {
        return Vec::new();
    }
    // Half for dash, half for gap
    let pieces = (num_segments * 2 - 1) as f64;
    let lerp = |t: f64| (start.0 + (end.0 - start.0) * t, start.1 + (end.1 - start.1) * t);
    (0..num_segments)
        .map(|i| {
            let t0 = (i * 2) as f64 / pieces;
            let t1 = (i * 2 + 1) as f64 / pieces;
            (lerp(t0), lerp(t1))
        })
        .collect()
}

/// Draws lines of text centred horizontally in `area`, starting `top` pixels from its top edge.
pub fn draw_centered_lines(
    area: &DrawingArea<BitMapBackend, Shift>,
    lines: &[&str],
    top: i32,
    font: FontStyle,
) -> Result<(), Box<dyn Error>> {
    // Approximate character width relative to font size
    const CHAR_WIDTH_RATIO: f32 = 0.55;

    let (x_range, _) = area.get_pixel_range();
    let width = x_range.end - x_range.start;
    let char_width = (font.size as f32 * CHAR_WIDTH_RATIO) as i32;

    for (i, line) in lines.iter().enumerate() {
        let text_width = (line.chars().count() as i32).saturating_mul(char_width);
        let x = (width / 2 - text_width / 2).max(0);
        let y = top + i as i32 * font.line_height();
        let style = font.as_tuple().into_font().color(&BLACK);
        area.draw(&Text::new(*line, (x, y), style))?;
    }
    Ok(())
}

/// Top edge of a text block whose last line sits on `bottom`.
pub fn text_block_top(bottom: i32, line_count: usize, font: FontStyle) -> i32 {
    bottom - line_count as i32 * font.line_height()
}

/// Draws left-aligned lines of text with the block's bottom-left corner at `anchor`.
pub fn draw_text_block(
    area: &DrawingArea<BitMapBackend, Shift>,
    lines: &[&str],
    anchor: (i32, i32),
    font: FontStyle,
) -> Result<(), Box<dyn Error>> {
    let top = text_block_top(anchor.1, lines.len(), font);
    for (i, line) in lines.iter().enumerate() {
        let pos = (anchor.0, top + i as i32 * font.line_height());
        let style = font.as_tuple().into_font().color(&BLACK.mix(0.9));
        area.draw(&Text::new(*line, pos, style))?;
    }
    Ok(())
}


// src/plot_framework.rs
