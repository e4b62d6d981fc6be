//! Static chart generation for audit figures.
//!
//! Thin wrappers over `plotters` for the figure shapes the audit binaries
//! emit: a line chart (optionally with a logarithmic x axis) and a labeled
//! bar chart. Output format is chosen by file extension, `.svg` for vector
//! output and bitmap PNG otherwise.

use std::error::Error;

use plotters::coord::Shift;
use plotters::prelude::*;

/// Deep green used for the favorable series in comparison figures.
pub const ACCENT_GREEN: RGBColor = RGBColor(0x2E, 0x7D, 0x32);

/// Red used for the incumbent or unfavorable series.
pub const STANDARD_RED: RGBColor = RGBColor(0xC6, 0x28, 0x28);

/// Gray used for context series and annotations.
pub const NEUTRAL_GRAY: RGBColor = RGBColor(0x42, 0x42, 0x42);

/// Blue used for highlighted single-series figures.
pub const HIGHLIGHT_BLUE: RGBColor = RGBColor(0x15, 0x65, 0xC0);

/// Configuration for customizing charts.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Image width in pixels (default: 1024).
    pub width: u32,

    /// Image height in pixels (default: 768).
    pub height: u32,

    /// Chart title.
    pub title: String,

    /// X-axis label.
    pub xlabel: String,

    /// Y-axis label.
    pub ylabel: String,

    /// Line color for line charts (default: [`HIGHLIGHT_BLUE`]).
    pub line_color: RGBColor,

    /// Fill color for bar charts (default: [`ACCENT_GREEN`]).
    pub bar_color: RGBColor,

    /// Background color (default: white).
    pub background: RGBColor,

    /// Line thickness in pixels (default: 2).
    pub line_width: u32,

    /// Show grid lines (default: true).
    pub show_grid: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Chart".to_string(),
            xlabel: String::new(),
            ylabel: String::new(),
            line_color: HIGHLIGHT_BLUE,
            bar_color: ACCENT_GREEN,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl ChartConfig {
    /// Builds a config with title and axis labels filled in.
    pub fn labeled(title: &str, xlabel: &str, ylabel: &str) -> Self {
        Self {
            title: title.to_string(),
            xlabel: xlabel.to_string(),
            ylabel: ylabel.to_string(),
            ..Self::default()
        }
    }
}

/// Draws a line chart from paired x and y arrays.
///
/// # Panics
///
/// Panics if the series lengths differ.
///
/// # Errors
///
/// Returns an error if the backing file cannot be written or drawing fails.
pub fn plot_line(
    x: &[f64],
    y: &[f64],
    output_path: &str,
    config: Option<&ChartConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = config.cloned().unwrap_or_default();
    let config = &owned_config;
    assert_eq!(x.len(), y.len(), "X and Y series must have same length");

    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_line_on_area(&root, x, y, config, false)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_line_on_area(&root, x, y, config, false)
    }
}

/// Draws a line chart with a logarithmic x axis.
///
/// Intended for sweeps spanning several orders of magnitude, such as
/// separation factors from 1.5 to 11,000. Every x value must be positive.
///
/// # Panics
///
/// Panics if the series lengths differ.
///
/// # Errors
///
/// Returns an error if any x value is non-positive, the backing file cannot
/// be written, or drawing fails.
pub fn plot_line_log_x(
    x: &[f64],
    y: &[f64],
    output_path: &str,
    config: Option<&ChartConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = config.cloned().unwrap_or_default();
    let config = &owned_config;
    assert_eq!(x.len(), y.len(), "X and Y series must have same length");

    if x.iter().any(|&v| v <= 0.0) {
        return Err("logarithmic x axis requires positive x values".into());
    }

    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_line_on_area(&root, x, y, config, true)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_line_on_area(&root, x, y, config, true)
    }
}

/// Draws a labeled bar chart.
///
/// # Panics
///
/// Panics if the label and value counts differ.
///
/// # Errors
///
/// Returns an error if the backing file cannot be written or drawing fails.
pub fn plot_bars(
    labels: &[&str],
    values: &[f64],
    output_path: &str,
    config: Option<&ChartConfig>,
) -> Result<(), Box<dyn Error>> {
    let owned_config = config.cloned().unwrap_or_default();
    let config = &owned_config;
    assert_eq!(
        labels.len(),
        values.len(),
        "Labels and values must have same length"
    );

    if output_path.ends_with(".svg") {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_bars_on_area(&root, labels, values, config)
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_bars_on_area(&root, labels, values, config)
    }
}

fn draw_line_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    x: &[f64],
    y: &[f64],
    config: &ChartConfig,
    log_x: bool,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let (x_min, x_max) = bounds(x);
    let (y_min, y_max) = bounds(y);
    let y_pad = 0.1 * (y_max - y_min);
    let y_range = (y_min - y_pad)..(y_max + y_pad);

    root.fill(&config.background)?;

    let series = x.iter().zip(y.iter()).map(|(&xv, &yv)| (xv, yv));
    let style = config.line_color.stroke_width(config.line_width);

    if log_x {
        let mut chart = ChartBuilder::on(root)
            .caption(&config.title, ("sans-serif", 40.0).into_font())
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d((x_min..x_max).log_scale(), y_range)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);
        if config.show_grid {
            mesh.draw()?;
        } else {
            mesh.disable_mesh().draw()?;
        }

        chart.draw_series(LineSeries::new(series, style))?;
    } else {
        let mut chart = ChartBuilder::on(root)
            .caption(&config.title, ("sans-serif", 40.0).into_font())
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_range)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);
        if config.show_grid {
            mesh.draw()?;
        } else {
            mesh.disable_mesh().draw()?;
        }

        chart.draw_series(LineSeries::new(series, style))?;
    }

    root.present()?;
    Ok(())
}

fn draw_bars_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    labels: &[&str],
    values: &[f64],
    config: &ChartConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let (_, value_max) = bounds(values);
    let y_max = if value_max > 0.0 { 1.1 * value_max } else { 1.0 };
    let n = labels.len();

    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..n as f64, 0f64..y_max)?;

    let owned_labels: Vec<String> = labels.iter().map(|label| (*label).to_string()).collect();
    let formatter = |x: &f64| {
        let index = x.floor() as usize;
        owned_labels.get(index).cloned().unwrap_or_default()
    };
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_labels(n)
        .x_label_formatter(&formatter);
    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    chart.draw_series(values.iter().enumerate().map(|(i, &value)| {
        let left = i as f64 + 0.15;
        let right = i as f64 + 0.85;
        Rectangle::new([(left, 0.0), (right, value)], config.bar_color.filled())
    }))?;

    root.present()?;
    Ok(())
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::NamedTempFile;

    #[test]
    fn chart_config_default() {
        let config = ChartConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
    }

    #[test]
    fn labeled_config_fills_in_axes() {
        let config = ChartConfig::labeled("Stage counts", "β", "Stages");
        assert_eq!(config.title, "Stage counts");
        assert_eq!(config.xlabel, "β");
        assert_eq!(config.ylabel, "Stages");
    }

    #[test]
    fn plot_line_writes_png() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let x = vec![1.0, 2.0, 3.0];
        let y = vec![10.0, 5.0, 2.5];

        plot_line(&x, &y, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn plot_line_writes_svg() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("svg");

        let x = vec![1.0, 2.0, 3.0];
        let y = vec![10.0, 5.0, 2.5];

        plot_line(&x, &y, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn plot_line_log_x_spans_decades() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let x = vec![1.5, 15.0, 150.0, 1_500.0, 11_000.0];
        let y = vec![22.4, 3.4, 1.8, 1.2, 1.0];

        plot_line_log_x(&x, &y, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn plot_line_log_x_rejects_non_positive_x() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let x = vec![0.0, 1.0, 2.0];
        let y = vec![1.0, 2.0, 3.0];

        assert!(plot_line_log_x(&x, &y, path.to_str().unwrap(), None).is_err());
    }

    #[test]
    fn plot_bars_writes_png() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let labels = ["P507", "Janus ligand"];
        let values = [12.0, 2.0];

        plot_bars(&labels, &values, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    #[should_panic(expected = "X and Y series must have same length")]
    fn plot_line_mismatched_series_panics() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y = vec![1.0, 2.0];

        plot_line(&x, &y, path.to_str().unwrap(), None).unwrap();
    }
}
