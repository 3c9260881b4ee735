use crate::Error;
use serde::Serialize;
use std::convert::TryFrom;

/// A non-empty sequence of finite numbers, in the order they were given.
///
/// The only way to get one is through a constructor which checks both
/// conditions, so everything which takes a `&Dataset` can rely on them.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset(Vec<f64>);

impl Dataset {
    pub fn new(values: Vec<f64>) -> Result<Dataset, Error> {
        if values.is_empty() {
            return Err(Error::EmptyInput);
        }
        if let Some(x) = values.iter().find(|x| !x.is_finite()) {
            return Err(Error::NonFinite(*x));
        }
        Ok(Dataset(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Always at least 1
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A sorted copy of the values.  The dataset itself keeps its order.
    pub fn sorted(&self) -> Vec<f64> {
        let mut xs = self.0.clone();
        xs.sort_by(f64::total_cmp);
        xs
    }

    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl TryFrom<Vec<f64>> for Dataset {
    type Error = Error;
    fn try_from(values: Vec<f64>) -> Result<Dataset, Error> {
        Dataset::new(values)
    }
}

impl AsRef<[f64]> for Dataset {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Parse numbers typed in by hand.
///
/// Commas and whitespace both count as separators, and runs of them collapse,
/// so `"1, 2,,3\n4"` gives four values.  Every token must be a finite number;
/// the first one which isn't is reported back.
pub fn parse_free_text(raw: &str) -> Result<Dataset, Error> {
    let values = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(parse_number)
        .collect::<Result<Vec<f64>, Error>>()?;
    Dataset::new(values)
}

fn parse_number(tok: &str) -> Result<f64, Error> {
    match tok.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(Error::InvalidNumberFormat(tok.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters() {
        let expected = vec![1., 2.5, -3., 4e3];
        for raw in &[
            "1,2.5,-3,4e3",
            "1 2.5 -3 4e3",
            "1, 2.5 ,-3 4e3",
            "  1,,2.5\t\n-3 ,, 4e3 ,",
        ] {
            assert_eq!(parse_free_text(raw).unwrap().values(), &expected[..]);
        }
    }

    #[test]
    fn empty() {
        assert_eq!(parse_free_text(""), Err(Error::EmptyInput));
        assert_eq!(parse_free_text(" ,, \n ,"), Err(Error::EmptyInput));
    }

    #[test]
    fn bad_tokens() {
        assert_eq!(
            parse_free_text("1, 2, three, 4"),
            Err(Error::InvalidNumberFormat("three".into()))
        );
        assert_eq!(
            parse_free_text("1;2"),
            Err(Error::InvalidNumberFormat("1;2".into()))
        );
        // The dataset must stay finite
        assert_eq!(
            parse_free_text("1 nan"),
            Err(Error::InvalidNumberFormat("nan".into()))
        );
        assert_eq!(
            parse_free_text("inf 1"),
            Err(Error::InvalidNumberFormat("inf".into()))
        );
    }

    #[test]
    fn single_value() {
        let data = parse_free_text("5").unwrap();
        assert_eq!(data.len(), 1);
        assert!(!data.is_empty());
        assert_eq!((data.min(), data.max()), (5., 5.));
    }

    #[test]
    fn constructor_checks() {
        assert_eq!(Dataset::new(vec![]), Err(Error::EmptyInput));
        assert_eq!(
            Dataset::try_from(vec![1., f64::INFINITY]),
            Err(Error::NonFinite(f64::INFINITY))
        );
        assert!(Dataset::new(vec![f64::NAN]).is_err());
    }

    #[test]
    fn sorted_copy() {
        let data = Dataset::new(vec![3., -1., 2.]).unwrap();
        assert_eq!(data.sorted(), vec![-1., 2., 3.]);
        assert_eq!(data.values(), &[3., -1., 2.]);
    }
}
