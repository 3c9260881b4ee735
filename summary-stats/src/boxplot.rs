use crate::{median, quantile, Dataset};
use serde::Serialize;

/// How far past the quartiles a point may lie before it counts as an
/// outlier, in multiples of the IQR.
pub const WHISKER_IQR: f64 = 1.5;

/// The five-number summary, plus the points which fall outside the fences.
///
/// Quartiles are type-7 quantiles (see [`quantile`]).  The whiskers reach to
/// the most extreme points which are still inside the fences.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoxPlot {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    /// In ascending order
    pub outliers: Vec<f64>,
}

impl BoxPlot {
    pub fn new(data: &Dataset) -> BoxPlot {
        let sorted = data.sorted();
        let q1 = quantile(&sorted, 0.25);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let lower_fence = q1 - WHISKER_IQR * iqr;
        let upper_fence = q3 + WHISKER_IQR * iqr;
        let inside = |x: &&f64| lower_fence <= **x && **x <= upper_fence;
        BoxPlot {
            min: sorted[0],
            q1,
            median: median(&sorted),
            q3,
            max: sorted[sorted.len() - 1],
            lower_fence,
            upper_fence,
            // There's always a point between the fences; the fallbacks are
            // just to keep this total
            lower_whisker: sorted.iter().find(inside).copied().unwrap_or(q1),
            upper_whisker: sorted.iter().rev().find(inside).copied().unwrap_or(q3),
            outliers: sorted
                .iter()
                .copied()
                .filter(|x| *x < lower_fence || *x > upper_fence)
                .collect(),
        }
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
