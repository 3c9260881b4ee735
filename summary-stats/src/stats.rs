use std::iter::FromIterator;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct StatsBuilder {
    /// the number of samples seen so far
    count: usize,
    /// the mean of the entire dataset
    mean: f64,
    /// the squared distance from the mean
    m2: f64,
}

impl StatsBuilder {
    pub fn update(&mut self, x: f64) {
        // Welford's online algorithm
        self.count += 1;
        let delta1 = x - self.mean; // diff from the old mean
        self.mean += delta1 / self.count as f64;
        let delta2 = x - self.mean; // diff from the new mean
        self.m2 += delta1 * delta2;
    }

    pub fn count(self) -> usize {
        self.count
    }

    /// NaN if nothing has been seen yet.  A `Dataset` is never empty, so
    /// this can't happen when describing one.
    pub fn mean(self) -> f64 {
        if self.count == 0 {
            std::f64::NAN
        } else {
            self.mean
        }
    }

    /// The sample variance (divisor n-1).
    ///
    /// With fewer than two samples the divisor is zero and the variance is
    /// undefined, so this returns `None` rather than a NaN.
    pub fn sample_var(self) -> Option<f64> {
        if self.count <= 1 {
            None
        } else {
            Some(self.m2 / (self.count - 1) as f64)
        }
    }

    pub fn sample_std_dev(self) -> Option<f64> {
        self.sample_var().map(f64::sqrt)
    }
}

/// A [`StatsBuilder`] run over the values divided by a power of two near the
/// largest magnitude, with the results scaled back.
///
/// Data spanning most of the `f64` range would otherwise overflow the running
/// differences.  Dividing by a power of two is exact, so ordinary data gets
/// exactly the same answers as the plain builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledStats {
    scale: f64,
    inner: StatsBuilder,
}

impl ScaledStats {
    pub fn new(xs: &[f64]) -> ScaledStats {
        let largest = xs.iter().fold(0_f64, |m, x| m.max(x.abs()));
        let scale = if largest > 0. && largest.is_finite() {
            2_f64.powi(largest.log2().floor().clamp(-1022., 1023.) as i32)
        } else {
            1.
        };
        ScaledStats {
            scale,
            inner: xs.iter().map(|x| x / scale).collect(),
        }
    }

    pub fn count(self) -> usize {
        self.inner.count()
    }

    pub fn mean(self) -> f64 {
        self.inner.mean() * self.scale
    }

    /// Never negative.  May be `+inf` when the spread is near `f64::MAX`.
    pub fn sample_var(self) -> Option<f64> {
        let scale = self.scale;
        self.inner.sample_var().map(|v| (v.max(0.) * scale) * scale)
    }

    /// Scaled back after the square root, so it stays finite long after the
    /// variance has overflowed.
    pub fn sample_std_dev(self) -> Option<f64> {
        let scale = self.scale;
        self.inner.sample_var().map(|v| v.max(0.).sqrt() * scale)
    }
}

impl Extend<f64> for StatsBuilder {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for x in iter {
            self.update(x);
        }
    }
}

impl FromIterator<f64> for StatsBuilder {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> StatsBuilder {
        let mut bldr = StatsBuilder::default();
        bldr.extend(iter);
        bldr
    }
}
