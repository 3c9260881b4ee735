use crate::{scott_bandwidth, Dataset, DensityCurve, ScaledStats};
use log::*;
use serde::Serialize;

/// How many points the density overlay is evaluated at.
pub const DENSITY_POINTS: usize = 200;

/// The most bins a histogram will be given, whatever was asked for.
pub const MAX_BINS: usize = 10_000;

/// Sturges' rule: `⌈log₂ n⌉ + 1` bins.
pub fn sturges(n: usize) -> usize {
    // ⌈log₂ n⌉ is the bit length of n-1
    let bits = usize::BITS - n.saturating_sub(1).leading_zeros();
    bits as usize + 1
}

/// Where the bin count came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinRule {
    Sturges,
    Fixed,
}

/// A bin covering `[lower, upper)`, or `[lower, upper]` if `closed` (only
/// ever the last one).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    pub closed: bool,
}

impl Bin {
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && (x < self.upper || (self.closed && x == self.upper))
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Equal-width bins spanning the data, with a density estimate to overlay.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<Bin>,
    pub rule: BinRule,
    /// The kernel bandwidth used by [`Histogram::density`]
    pub bandwidth: f64,
    #[serde(skip)]
    samples: Vec<f64>,
}

impl Histogram {
    /// With `bins: None` the count comes from [`sturges`].  Asking for zero
    /// bins gets you one, and asking for more than [`MAX_BINS`] gets you
    /// `MAX_BINS`.
    ///
    /// The bins run from the smallest value to the largest.  If those are the
    /// same, the range is widened by ½ on either side.
    pub fn new(data: &Dataset, bins: Option<usize>) -> Histogram {
        let samples = data.sorted();
        let n = samples.len();
        let (k, rule) = match bins {
            Some(k) if k > MAX_BINS => {
                debug!("{} bins requested; capping at {}", k, MAX_BINS);
                (MAX_BINS, BinRule::Fixed)
            }
            Some(k) => (k.max(1), BinRule::Fixed),
            None => (sturges(n), BinRule::Sturges),
        };
        debug!("Using {} bins ({:?})", k, rule);

        let (mut lo, mut hi) = (samples[0], samples[n - 1]);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let edges = edges(lo, hi, k);
        let mut bins = edges
            .windows(2)
            .enumerate()
            .map(|(i, w)| Bin {
                lower: w[0],
                upper: w[1],
                count: 0,
                closed: i == k - 1,
            })
            .collect::<Vec<_>>();
        for &x in &samples {
            // The last edge at or below x; x == hi goes in the closed bin
            let idx = edges.partition_point(|e| *e <= x).saturating_sub(1);
            bins[idx.min(k - 1)].count += 1;
        }

        let std_dev = ScaledStats::new(&samples).sample_std_dev();
        let bandwidth = scott_bandwidth(n, std_dev).unwrap_or_else(|| {
            let w = (hi - lo) / k as f64;
            debug!("No spread in the data; using the bin width ({}) as bandwidth", w);
            w
        });

        Histogram {
            bins,
            rule,
            bandwidth,
            samples,
        }
    }

    /// The total of all the bin counts, which is the size of the dataset
    pub fn count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn range(&self) -> (f64, f64) {
        let first = self.bins[0];
        let last = self.bins[self.bins.len() - 1];
        (first.lower, last.upper)
    }

    pub fn bin_width(&self) -> f64 {
        self.bins[0].width()
    }

    /// The index of the bin holding `x`, if it's in range
    pub fn bin_of(&self, x: f64) -> Option<usize> {
        self.bins.iter().position(|b| b.contains(x))
    }

    /// A Gaussian KDE sampled at [`DENSITY_POINTS`] points across the bins.
    pub fn density(&self) -> DensityCurve<'_> {
        let (start, end) = self.range();
        DensityCurve::new(&self.samples, self.bandwidth, start, end, DENSITY_POINTS)
    }

    /// Multiply a density by this to draw it on the same axis as the counts.
    pub fn count_scale(&self) -> f64 {
        self.count() as f64 * self.bin_width()
    }
}

// `hi - lo` can overflow, so each edge is a weighted sum of the ends.
// Rounding can't be allowed to take an edge backwards or out of range.
fn edges(lo: f64, hi: f64, k: usize) -> Vec<f64> {
    let mut edges = Vec::with_capacity(k + 1);
    let mut prev = lo;
    for i in 0..k {
        let t = i as f64 / k as f64;
        let edge = (lo * (1. - t) + hi * t).max(prev).min(hi);
        edges.push(edge);
        prev = edge;
    }
    edges.push(hi);
    edges
}
