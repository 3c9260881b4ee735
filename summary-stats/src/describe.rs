use crate::{median, Dataset, ScaledStats};
use serde::{Serialize, Serializer};
use std::fmt;

/// The most frequent value, if there is exactly one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Unique(f64),
    /// Several values share the highest frequency.  This includes data where
    /// every value is distinct.
    NotUnique,
}

impl Mode {
    /// `sorted` must be non-empty and in ascending order.  Values are compared
    /// with `==`, so `-0.0` and `0.0` are counted together.
    pub fn from_sorted(sorted: &[f64]) -> Mode {
        let mut best = None;
        let mut best_count = 0;
        let mut tied = false;
        let mut rest = sorted;
        while let Some(&x) = rest.first() {
            let run = rest.iter().take_while(|&&y| y == x).count();
            if run > best_count {
                best = Some(x);
                best_count = run;
                tied = false;
            } else if run == best_count {
                tied = true;
            }
            rest = &rest[run..];
        }
        match best {
            Some(x) if !tied => Mode::Unique(x),
            _ => Mode::NotUnique,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Unique(x) => write!(f, "{}", x),
            Mode::NotUnique => f.write_str("not unique"),
        }
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Mode::Unique(x) => serializer.serialize_f64(*x),
            Mode::NotUnique => serializer.serialize_str("not unique"),
        }
    }
}

/// The fixed set of statistics shown for every dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    /// Sample variance (divisor n-1); `None` for a single value
    pub variance: Option<f64>,
    /// Sample standard deviation; `None` for a single value
    pub std_dev: Option<f64>,
    pub min: f64,
    pub max: f64,
}

impl DescriptiveStats {
    pub fn new(data: &Dataset) -> DescriptiveStats {
        let sorted = data.sorted();
        let bldr = ScaledStats::new(data.values());
        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        DescriptiveStats {
            count: data.len(),
            // Rounding can leave the running mean an ulp outside the data
            mean: bldr.mean().max(min).min(max),
            median: median(&sorted),
            mode: Mode::from_sorted(&sorted),
            variance: bldr.sample_var(),
            std_dev: bldr.sample_std_dev(),
            min,
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn describe(xs: &[f64]) -> DescriptiveStats {
        DescriptiveStats::new(&Dataset::new(xs.to_vec()).unwrap())
    }

    #[test]
    fn medians() {
        assert_eq!(describe(&[1., 2., 3., 4.]).median, 2.5);
        assert_eq!(describe(&[1., 2., 3.]).median, 2.);
        assert_eq!(describe(&[4., 1., 3., 2.]).median, 2.5);
    }

    #[test]
    fn modes() {
        assert_eq!(describe(&[1., 1., 2., 2., 3.]).mode, Mode::NotUnique);
        assert_eq!(describe(&[1., 1., 2.]).mode, Mode::Unique(1.));
        assert_eq!(describe(&[2., 1., 2.]).mode, Mode::Unique(2.));
        assert_eq!(describe(&[3., 1., 2.]).mode, Mode::NotUnique);
        assert_eq!(describe(&[5., 5., 5.]).mode, Mode::Unique(5.));
        assert_eq!(describe(&[5.]).mode, Mode::Unique(5.));
        // The last run can beat an earlier tie
        assert_eq!(describe(&[1., 2., 3., 3.]).mode, Mode::Unique(3.));
        // ...and an earlier winner can be tied by the last run
        assert_eq!(describe(&[1., 1., 2., 3., 3.]).mode, Mode::NotUnique);
    }

    #[test]
    fn signed_zero() {
        assert_eq!(describe(&[0., -0., 1.]).mode, Mode::Unique(0.));
    }

    #[test]
    fn single_value_has_no_spread() {
        let stats = describe(&[5.]);
        assert_eq!(stats.mean, 5.);
        assert_eq!(stats.median, 5.);
        assert_eq!(stats.variance, None);
        assert_eq!(stats.std_dev, None);
        assert_eq!(
            serde_json::to_string(&stats).unwrap(),
            r#"{"count":1,"mean":5.0,"median":5.0,"mode":5.0,"variance":null,"std_dev":null,"min":5.0,"max":5.0}"#
        );
    }

    #[test]
    fn sample_variance() {
        // numpy.var([2, 4, 4, 4, 5, 5, 7, 9], ddof=1)
        let stats = describe(&[2., 4., 4., 4., 5., 5., 7., 9.]);
        assert_relative_eq!(stats.mean, 5., epsilon = 1e-12);
        assert_relative_eq!(stats.variance.unwrap(), 4.571428571428571, epsilon = 1e-12);
        assert_relative_eq!(stats.std_dev.unwrap(), 2.138089935299395, epsilon = 1e-12);
        assert_eq!(stats.mode, Mode::Unique(4.));
    }

    #[test]
    fn huge_spread() {
        let stats = describe(&[-1e308, 1e308]);
        assert_eq!(stats.mean, 0.);
        assert_eq!(stats.median, 0.);
        let var = stats.variance.unwrap();
        assert!(var >= 0. && !var.is_nan());
        assert!(stats.std_dev.unwrap().is_finite());
    }

    #[test]
    fn display() {
        assert_eq!(Mode::Unique(1.5).to_string(), "1.5");
        assert_eq!(Mode::NotUnique.to_string(), "not unique");
        assert_eq!(
            serde_json::to_string(&Mode::NotUnique).unwrap(),
            "\"not unique\""
        );
    }
}
