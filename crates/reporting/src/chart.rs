// In crates/reporting/src/chart.rs

use std::fmt::Display;
use std::path::Path;

use core_types::WindowedSeries;
use pipeline::AnalysisReport;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::{Error, Result};

const CHART_SIZE: (u32, u32) = (1200, 600);
const CHART_TITLE: &str = "Stock Trend Analysis";

const PRICE_COLOR: RGBColor = RGBColor(31, 119, 180);
const SHORT_MA_COLOR: RGBColor = RGBColor(255, 127, 14);
const LONG_MA_COLOR: RGBColor = RGBColor(148, 103, 189);

const MARKER_SIZE: i32 = 8;

/// Renders the price, both moving averages and the crossover markers as an SVG file.
pub fn render_chart<P: AsRef<Path>>(path: P, report: &AnalysisReport) -> Result<()> {
    let path = path.as_ref();
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_chart(&root, report)?;
    root.present().map_err(chart_error)?;

    tracing::info!(path = %path.display(), "Rendered trend chart.");
    Ok(())
}

/// Same chart as [`render_chart`], returned as an SVG document.
pub fn render_chart_svg(report: &AnalysisReport) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        draw_chart(&root, report)?;
        root.present().map_err(chart_error)?;
    }
    Ok(svg)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    report: &AnalysisReport,
) -> Result<()> {
    let prices = report.prices.as_slice();
    let (y_min, y_max) =
        price_bounds(prices).ok_or_else(|| Error::Chart("no prices to plot".to_string()))?;
    let x_max = prices.len().saturating_sub(1).max(1) as f64;

    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(root)
        .caption(CHART_TITLE, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc("Days")
        .y_desc("Price")
        .draw()
        .map_err(chart_error)?;

    // 1. Raw prices.
    chart
        .draw_series(LineSeries::new(
            prices.iter().enumerate().map(|(day, &price)| (day as f64, price)),
            PRICE_COLOR.mix(0.6).stroke_width(2),
        ))
        .map_err(chart_error)?
        .label("Stock Prices")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PRICE_COLOR.stroke_width(2)));

    // 2. Moving averages, each starting on the day its window first fills.
    for (series, color) in [(&report.short_ma, SHORT_MA_COLOR), (&report.long_ma, LONG_MA_COLOR)] {
        chart
            .draw_series(LineSeries::new(calendar_points(series), color.stroke_width(2)))
            .map_err(chart_error)?
            .label(format!("{}-Day Moving Average", series.window()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    // 3. Crossover markers at the crossover day's price.
    let marker_point = |day: usize| prices.get(day).map(|&price| (day as f64, price));

    chart
        .draw_series(
            report
                .crossovers
                .buy_days()
                .into_iter()
                .filter_map(|day| marker_point(day))
                .map(|point| TriangleMarker::new(point, MARKER_SIZE, GREEN.filled())),
        )
        .map_err(chart_error)?
        .label("BUY")
        .legend(|(x, y)| TriangleMarker::new((x, y), MARKER_SIZE - 2, GREEN.filled()));

    chart
        .draw_series(
            report
                .crossovers
                .sell_days()
                .into_iter()
                .filter_map(|day| marker_point(day))
                .map(|point| EmptyElement::at(point) + down_triangle()),
        )
        .map_err(chart_error)?
        .label("SELL")
        .legend(|(x, y)| {
            let half = (MARKER_SIZE - 2) / 2;
            Polygon::new(vec![(x - half, y - half), (x + half, y - half), (x, y + half)], RED.filled())
        });

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_error)?;

    Ok(())
}

/// A filled, downward-pointing triangle centred on the element's anchor.
fn down_triangle() -> Polygon<(i32, i32)> {
    let half = MARKER_SIZE / 2;
    Polygon::new(vec![(-half, -half), (half, -half), (0, half)], RED.filled())
}

fn calendar_points(series: &WindowedSeries) -> impl Iterator<Item = (f64, f64)> + '_ {
    series.by_day().map(|(day, value)| (day as f64, value))
}

/// Vertical range covering every price with a small margin.
fn price_bounds(prices: &[f64]) -> Option<(f64, f64)> {
    let (min, max) = prices.iter().fold(None, |bounds, &price| match bounds {
        None => Some((price, price)),
        Some((min, max)) => Some((f64::min(min, price), f64::max(max, price))),
    })?;

    let padding = match (max - min) * 0.05 {
        pad if pad > 0.0 => pad,
        _ => 1.0,
    };
    Some((min - padding, max + padding))
}

fn chart_error<E: Display>(err: E) -> Error {
    Error::Chart(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_pad_the_price_range() {
        let (min, max) = price_bounds(&[10.0, 30.0, 20.0]).unwrap();
        assert_eq!((min, max), (9.0, 31.0));
    }

    #[test]
    fn flat_prices_still_get_a_range() {
        let (min, max) = price_bounds(&[5.0, 5.0]).unwrap();
        assert_eq!((min, max), (4.0, 6.0));
    }

    #[test]
    fn no_prices_no_bounds() {
        assert_eq!(price_bounds(&[]), None);
    }
}
