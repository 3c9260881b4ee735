use crate::input::*;
use anyhow::Result;
use bpaf::Bpaf;
use log::*;
use serde_json::json;
use std::io::Write;
use summary_stats::{BoxPlot, Chart, ChartKind, Histogram};

const SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Takes a dataset and produces a vega-lite plot specification on stdout
#[derive(Bpaf)]
pub struct Options {
    #[bpaf(external(input))]
    input: Input,
    /// boxplot or histogram
    #[bpaf(argument("KIND"), fallback(ChartKind::BoxPlot), display_fallback)]
    chart: ChartKind,
    /// Number of histogram bins (default: Sturges' rule)
    #[bpaf(argument("N"))]
    bins: Option<usize>,
    /// Print the prepared numbers instead of a vega-lite spec
    summary: bool,
}

pub fn plot(opts: Options) -> Result<()> {
    let data = opts.input.load()?;
    let chart = Chart::prepare(&data, opts.chart, opts.bins);
    if opts.bins.is_some() && opts.chart == ChartKind::BoxPlot {
        warn!("--bins has no effect on a box plot");
    }
    let out = if opts.summary {
        summary(&chart)?
    } else {
        match &chart {
            Chart::BoxPlot(x) => mk_boxplot(x),
            Chart::Histogram(x) => mk_histogram(x),
        }
    };
    let stdout = std::io::stdout();
    writeln!(stdout.lock(), "{}", out)?;
    Ok(())
}

/// The prepared chart as JSON, with the density curve filled in
pub fn summary(chart: &Chart) -> Result<serde_json::Value> {
    let mut json = serde_json::to_value(chart)?;
    if let Chart::Histogram(x) = chart {
        json["density"] = density_points(x, 1.);
    }
    Ok(json)
}

fn density_points(histogram: &Histogram, scale: f64) -> serde_json::Value {
    histogram
        .density()
        .map(|(x, y)| json!({ "x": x, "density": y * scale }))
        .collect()
}

pub fn mk_boxplot(boxplot: &BoxPlot) -> serde_json::Value {
    let summary = json!([boxplot]);
    let outliers = boxplot
        .outliers
        .iter()
        .map(|x| json!({ "value": x }))
        .collect::<Vec<_>>();
    let x = |field: &str| json!({ "field": field, "type": "quantitative", "title": "value", "scale": { "zero": false } });
    json!({
        "$schema": SCHEMA,
        "title": "Boxplot",
        "width": 640,
        "height": 180,
        "layer": [
            {
                "data": { "values": summary },
                "mark": { "type": "rule" },
                "encoding": { "x": x("lower_whisker"), "x2": { "field": "upper_whisker" } },
            },
            {
                "data": { "values": summary },
                "mark": { "type": "bar", "size": 40 },
                "encoding": { "x": x("q1"), "x2": { "field": "q3" } },
            },
            {
                "data": { "values": summary },
                "mark": { "type": "tick", "color": "white", "size": 40 },
                "encoding": { "x": x("median") },
            },
            {
                "data": { "values": outliers },
                "mark": { "type": "point" },
                "encoding": { "x": x("value") },
            },
        ],
    })
}

pub fn mk_histogram(histogram: &Histogram) -> serde_json::Value {
    // Scale the density so it sits on top of the bars
    let density = density_points(histogram, histogram.count_scale());
    json!({
        "$schema": SCHEMA,
        "title": "Histogram",
        "width": 640,
        "height": 320,
        "layer": [
            {
                "data": { "values": histogram.bins },
                "mark": { "type": "bar", "opacity": 0.5 },
                "encoding": {
                    "x": { "field": "lower", "type": "quantitative", "bin": { "binned": true }, "title": "value" },
                    "x2": { "field": "upper" },
                    "y": { "field": "count", "type": "quantitative" },
                },
            },
            {
                "data": { "values": density },
                "mark": { "type": "line", "interpolate": "monotone" },
                "encoding": {
                    "x": { "field": "x", "type": "quantitative" },
                    "y": { "field": "density", "type": "quantitative" },
                },
            },
        ],
    })
}
