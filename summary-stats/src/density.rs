use std::f64::consts::PI;

/// A Gaussian kernel density estimate at `x`.
///
/// `samples` must be non-empty and `bandwidth` positive.
pub fn gaussian_kde(samples: &[f64], bandwidth: f64, x: f64) -> f64 {
    let sum = samples
        .iter()
        .map(|s| {
            // Dividing first keeps the difference finite for huge samples
            let u = x / bandwidth - s / bandwidth;
            (-0.5 * u * u).exp()
        })
        .sum::<f64>();
    sum / samples.len() as f64 / bandwidth / (2. * PI).sqrt()
}

/// Scott's rule of thumb: `s · n^(-1/5)`.
///
/// Gives up (returns `None`) when the standard deviation is undefined or zero.
pub fn scott_bandwidth(n: usize, std_dev: Option<f64>) -> Option<f64> {
    let s = std_dev.filter(|s| *s > 0.)?;
    Some(s * (n as f64).powf(-0.2))
}

/// `(x, density)` pairs on an even grid from `start` to `end`, inclusive.
///
/// Nothing is computed until the iterator is advanced, and each step costs
/// one pass over the samples.
#[derive(Clone, Debug)]
pub struct DensityCurve<'a> {
    samples: &'a [f64],
    bandwidth: f64,
    start: f64,
    end: f64,
    points: usize,
    next: usize,
}

impl<'a> DensityCurve<'a> {
    pub fn new(
        samples: &'a [f64],
        bandwidth: f64,
        start: f64,
        end: f64,
        points: usize,
    ) -> DensityCurve<'a> {
        DensityCurve {
            samples,
            bandwidth,
            start,
            end,
            points,
            next: 0,
        }
    }

    fn x(&self, i: usize) -> f64 {
        if i + 1 == self.points {
            self.end
        } else {
            let t = i as f64 / (self.points - 1) as f64;
            self.start * (1. - t) + self.end * t
        }
    }
}

impl Iterator for DensityCurve<'_> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<(f64, f64)> {
        if self.next >= self.points {
            return None;
        }
        let x = self.x(self.next);
        self.next += 1;
        Some((x, gaussian_kde(self.samples, self.bandwidth, x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.points - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DensityCurve<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn standard_normal_peak() {
        // A single sample with unit bandwidth is the standard normal pdf
        assert_relative_eq!(gaussian_kde(&[0.], 1., 0.), 0.3989422804014327, epsilon = 1e-15);
        assert_relative_eq!(gaussian_kde(&[0.], 1., 1.), 0.24197072451914337, epsilon = 1e-15);
        assert_relative_eq!(gaussian_kde(&[2.], 1., 3.), gaussian_kde(&[2.], 1., 1.));
    }

    #[test]
    fn scott() {
        assert_eq!(scott_bandwidth(1, None), None);
        assert_eq!(scott_bandwidth(10, Some(0.)), None);
        assert_relative_eq!(
            scott_bandwidth(32, Some(2.)).unwrap(),
            1.,
            epsilon = 1e-12
        );
    }

    #[test]
    fn grid() {
        let samples = [1., 2., 3.];
        let curve = DensityCurve::new(&samples, 0.5, 0., 4., 5);
        assert_eq!(curve.len(), 5);
        let xs = curve.map(|(x, _)| x).collect::<Vec<_>>();
        assert_eq!(xs, vec![0., 1., 2., 3., 4.]);
    }

    #[test]
    fn huge_range() {
        let samples = [-1e308, 0., 1e308];
        let curve = DensityCurve::new(&samples, 7e307, -1e308, 1e308, 11).collect::<Vec<_>>();
        assert_eq!(curve[0].0, -1e308);
        assert_eq!(curve[5].0, 0.);
        assert_eq!(curve[10].0, 1e308);
        assert!(curve.iter().all(|(x, y)| x.is_finite() && y.is_finite() && *y > 0.));
    }

    #[test]
    fn integrates_to_about_one() {
        let samples = [-1., 0., 0.5, 2., 2.5];
        let points = 2001;
        let (start, end) = (-8., 10.);
        let dx = (end - start) / (points - 1) as f64;
        let area = DensityCurve::new(&samples, 0.8, start, end, points)
            .map(|(_, y)| y * dx)
            .sum::<f64>();
        assert_relative_eq!(area, 1., epsilon = 1e-3);
    }
}
