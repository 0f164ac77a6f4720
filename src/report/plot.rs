//! Timing curves rendered as PNG line charts

use crate::bench::{EcdsaSample, Operation, RsaSample, TimingSample};
use crate::error::ReportResult;
use std::collections::BTreeMap;
use std::path::Path;

/// Title of the RSA chart
pub const RSA_TITLE: &str = "Asymmetric Algorithm Performance";
/// Title of the ECDSA chart
pub const ECDSA_TITLE: &str = "ECDSA Algorithm Performance";
/// X axis label
pub const X_LABEL: &str = "Input Size (bytes)";
/// Y axis label
pub const Y_LABEL: &str = "Time (s)";

const RSA_OPERATIONS: [Operation; 3] = [
    Operation::KeyGeneration,
    Operation::Encryption,
    Operation::Decryption,
];
const ECDSA_OPERATIONS: [Operation; 3] = [
    Operation::KeyGeneration,
    Operation::Signing,
    Operation::Verification,
];

/// One curve: (input size, seconds) points for a single operation
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Operation plotted
    pub operation: Operation,
    /// Points in input-size order
    pub points: Vec<(f64, f64)>,
}

/// Group timing samples into one series per operation, in `operations` order
pub fn build_series(timings: &[TimingSample], operations: &[Operation]) -> Vec<Series> {
    operations
        .iter()
        .map(|&operation| {
            let mut points: Vec<(f64, f64)> = timings
                .iter()
                .filter(|t| t.operation == operation)
                .map(|t| (t.input_size as f64, t.seconds()))
                .collect();
            points.sort_by(|a, b| a.0.total_cmp(&b.0));
            Series { operation, points }
        })
        .collect()
}

/// Plot key generation, encryption and decryption times
pub fn plot_rsa_results(results: &BTreeMap<usize, RsaSample>, path: &Path) -> ReportResult<()> {
    let timings: Vec<TimingSample> = results.values().flat_map(RsaSample::timings).collect();
    render_chart(RSA_TITLE, &build_series(&timings, &RSA_OPERATIONS), path)
}

/// Plot key generation, signing and verification times
pub fn plot_ecdsa_results(results: &BTreeMap<usize, EcdsaSample>, path: &Path) -> ReportResult<()> {
    let timings: Vec<TimingSample> = results.values().flat_map(EcdsaSample::timings).collect();
    render_chart(ECDSA_TITLE, &build_series(&timings, &ECDSA_OPERATIONS), path)
}

#[cfg(feature = "plot")]
fn render_chart(title: &str, series: &[Series], path: &Path) -> ReportResult<()> {
    use crate::error::ReportError;
    use plotters::prelude::*;

    const WIDTH: u32 = 1024;
    const HEIGHT: u32 = 768;

    let plot_err = |e: &dyn std::fmt::Display| ReportError::Plot {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let points = || series.iter().flat_map(|s| s.points.iter().copied());
    let x_max = points().map(|p| p.0).fold(0.0_f64, f64::max);
    let y_max = points().map(|p| p.1).fold(0.0_f64, f64::max);
    let x_range = 0.0..(x_max * 1.05).max(1.0);
    let y_range = 0.0..(y_max * 1.1).max(1e-6);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| plot_err(&e))?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(|e| plot_err(&e))?;

    for (idx, curve) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(LineSeries::new(curve.points.clone(), color.stroke_width(2)))
            .map_err(|e| plot_err(&e))?
            .label(curve.operation.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        chart
            .draw_series(curve.points.iter().map(|&point| Circle::new(point, 4, color.filled())))
            .map_err(|e| plot_err(&e))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| plot_err(&e))?;

    root.present().map_err(|e| plot_err(&e))?;
    tracing::debug!(path = %path.display(), title, "Rendered plot");
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn render_chart(title: &str, _series: &[Series], path: &Path) -> ReportResult<()> {
    tracing::warn!(
        path = %path.display(),
        title,
        "Built without the `plot` feature, skipping chart"
    );
    Ok(())
}
