//! Trend Chart Module
//! Renders the yearly breakdown as overlaid bar series with plotters.

use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::analysis::YearlyStat;

// 15x8 inches at 300 DPI.
pub const CHART_WIDTH: u32 = 4500;
pub const CHART_HEIGHT: u32 = 2400;

const TOTAL_COLOR: RGBColor = RGBColor(0xE0, 0xE0, 0xE0);
const TOPIC_COLOR: RGBColor = RGBColor(0xA2, 0xC2, 0xE1);
const METHOD_COLOR: RGBColor = RGBColor(0xFF, 0xD5, 0x4F);
const INTERSECTION_COLOR: RGBColor = RGBColor(0xD3, 0x2F, 0x2F);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no yearly data to plot")]
    NoData,
    #[error("chart rendering failed: {0}")]
    Render(String),
}

fn render_err(err: impl std::fmt::Display) -> ChartError {
    ChartError::Render(err.to_string())
}

/// Draw the four overlaid bar series (Total, Topic, Methodology,
/// Intersection) against publication year and write the result as PNG.
///
/// Years are treated as categories: only years present in `stats` get a
/// slot on the x-axis, evenly spaced regardless of gaps.
pub fn render_trend_chart(
    stats: &[YearlyStat],
    source_name: &str,
    path: &Path,
) -> Result<(), ChartError> {
    if stats.is_empty() {
        return Err(ChartError::NoData);
    }

    let n = stats.len();
    let years: Vec<i32> = stats.iter().map(|s| s.year).collect();
    let max_total = stats.iter().map(|s| s.total).max().unwrap_or(1).max(1);

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let title = format!(
        "Statistical Distribution of Review Papers in {}",
        source_name
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 64))
        .margin(40)
        .x_label_area_size(130)
        .y_label_area_size(150)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..(max_total as f64 * 1.05))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() < 0.25 && idx >= 0.0 && (idx as usize) < years.len() {
                years[idx as usize].to_string()
            } else {
                String::new()
            }
        })
        .y_label_formatter(&|y| format!("{:.0}", y))
        .x_desc("Publication Year")
        .y_desc("Number of Papers")
        .label_style(("sans-serif", 36))
        .axis_desc_style(("sans-serif", 44))
        .draw()
        .map_err(render_err)?;

    // Overlaid, not stacked: each series is drawn in full over the
    // previous one, widest counts first, so shorter bars stay visible.
    let series: [(&str, RGBColor, Vec<u32>); 4] = [
        (
            "Total Review Papers",
            TOTAL_COLOR,
            stats.iter().map(|s| s.total).collect(),
        ),
        (
            "Thematic Reviews (MRI/Sedation/Robot)",
            TOPIC_COLOR,
            stats.iter().map(|s| s.topic).collect(),
        ),
        (
            "Scoping Review Methodology",
            METHOD_COLOR,
            stats.iter().map(|s| s.method).collect(),
        ),
        (
            "Intersectional Scholarship (Topic + Method)",
            INTERSECTION_COLOR,
            stats.iter().map(|s| s.intersection).collect(),
        ),
    ];

    for (label, color, counts) in series {
        chart
            .draw_series(counts.iter().enumerate().map(|(i, &count)| {
                Rectangle::new(
                    [(i as f64 - 0.4, 0.0), (i as f64 + 0.4, count as f64)],
                    color.filled(),
                )
            }))
            .map_err(render_err)?
            .label(label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 14), (x + 40, y + 14)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.9))
        .border_style(&BLACK)
        .label_font(("sans-serif", 40))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
