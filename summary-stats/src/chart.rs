use crate::{BoxPlot, Dataset, Error, Histogram};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    BoxPlot,
    Histogram,
}

impl FromStr for ChartKind {
    type Err = Error;
    fn from_str(x: &str) -> Result<ChartKind, Error> {
        match x.to_ascii_lowercase().as_str() {
            "boxplot" => Ok(ChartKind::BoxPlot),
            "histogram" => Ok(ChartKind::Histogram),
            _ => Err(Error::UnknownChart(x.to_string())),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChartKind::BoxPlot => f.write_str("boxplot"),
            ChartKind::Histogram => f.write_str("histogram"),
        }
    }
}

/// Whatever the renderer needs to draw the chart it was asked for.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "chart")]
pub enum Chart {
    #[serde(rename = "boxplot")]
    BoxPlot(BoxPlot),
    #[serde(rename = "histogram")]
    Histogram(Histogram),
}

impl Chart {
    /// `bins` only matters for histograms; see [`Histogram::new`].
    pub fn prepare(data: &Dataset, kind: ChartKind, bins: Option<usize>) -> Chart {
        match kind {
            ChartKind::BoxPlot => Chart::BoxPlot(BoxPlot::new(data)),
            ChartKind::Histogram => Chart::Histogram(Histogram::new(data, bins)),
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            Chart::BoxPlot(_) => ChartKind::BoxPlot,
            Chart::Histogram(_) => ChartKind::Histogram,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kind() {
        assert_eq!("boxplot".parse::<ChartKind>(), Ok(ChartKind::BoxPlot));
        assert_eq!("Histogram".parse::<ChartKind>(), Ok(ChartKind::Histogram));
        assert_eq!(
            "pie".parse::<ChartKind>(),
            Err(Error::UnknownChart("pie".into()))
        );
        for kind in &[ChartKind::BoxPlot, ChartKind::Histogram] {
            assert_eq!(kind.to_string().parse::<ChartKind>(), Ok(*kind));
        }
    }

    #[test]
    fn prepare() {
        let data = Dataset::new(vec![2., 4., 4., 8.]).unwrap();
        let chart = Chart::prepare(&data, ChartKind::BoxPlot, Some(10));
        assert_eq!(chart.kind(), ChartKind::BoxPlot);
        let chart = Chart::prepare(&data, ChartKind::Histogram, Some(10));
        assert_eq!(chart.kind(), ChartKind::Histogram);
    }

    #[test]
    fn tagged_json() {
        let data = Dataset::new(vec![1., 2., 3.]).unwrap();
        let json = serde_json::to_value(Chart::prepare(&data, ChartKind::BoxPlot, None)).unwrap();
        assert_eq!(json["chart"], "boxplot");
        assert_eq!(json["median"], 2.);
        let json = serde_json::to_value(Chart::prepare(&data, ChartKind::Histogram, None)).unwrap();
        assert_eq!(json["chart"], "histogram");
        assert_eq!(json["rule"], "sturges");
        assert_eq!(json["bins"].as_array().map(|x| x.len()), Some(3));
    }
}
