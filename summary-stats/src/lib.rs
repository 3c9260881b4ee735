/*! A crate for describing a single column of numbers.

Raw input (a blob of free text, or one field of a table of records) is parsed
into a [`Dataset`]: a non-empty sequence of finite numbers.  Everything
downstream of that is total: a `Dataset` can always be described, and can
always be prepared for a box plot or a histogram.

## Example

Suppose someone has typed a handful of measurements into a text box, some
separated by commas and some by spaces.

```
# use summary_stats::*;
let data = parse_free_text("1, 2 2,3  4").unwrap();

let stats = DescriptiveStats::new(&data);
assert_eq!(stats.median, 2.);
assert_eq!(stats.mode, Mode::Unique(2.));
assert_eq!(format!("{:.2}", stats.variance.unwrap()), "1.30");

let boxplot = BoxPlot::new(&data);
assert_eq!((boxplot.q1, boxplot.q3), (2., 3.));
assert!(boxplot.outliers.is_empty());

let histogram = Histogram::new(&data, None);
assert_eq!(histogram.bins.len(), 4); // Sturges: ⌈log₂ 5⌉ + 1
assert_eq!(histogram.count(), 5);
```

## Fixed methods

Quantiles, bin counts and density smoothing all come in several flavours.
This crate picks one of each and sticks to it:

* quartiles use linear interpolation between order statistics (Hyndman & Fan
  type 7, the default in R and numpy);
* outliers are points more than 1.5 × IQR beyond either quartile;
* the default bin count is Sturges' rule, `⌈log₂ n⌉ + 1`;
* the density overlay is a Gaussian kernel density estimate with Scott's
  bandwidth, `s · n^(-1/5)`.

*/

mod boxplot;
mod chart;
mod dataset;
mod density;
mod describe;
mod histogram;
mod quantile;
mod stats;
mod table;

pub use boxplot::*;
pub use chart::*;
pub use dataset::*;
pub use density::*;
pub use describe::*;
pub use histogram::*;
pub use quantile::*;
pub use stats::*;
pub use table::*;

/// Everything that can go wrong on the way from raw input to a [`Dataset`].
///
/// Once a `Dataset` exists nothing else in this crate can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// There were no values left to work with
    EmptyInput,
    /// A token which isn't a finite number
    InvalidNumberFormat(String),
    /// The requested field isn't in the table's schema
    ColumnNotFound(String),
    /// The requested field holds text
    ColumnNotNumeric(String),
    /// The table has no numeric fields at all
    NoNumericColumns,
    NonFinite(f64),
    UnknownChart(String),
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyInput => f.write_str("No data to describe"),
            Error::InvalidNumberFormat(tok) => write!(f, "\"{}\" is not a valid number", tok),
            Error::ColumnNotFound(col) => write!(f, "There is no column called \"{}\"", col),
            Error::ColumnNotNumeric(col) => write!(f, "Column \"{}\" is not numeric", col),
            Error::NoNumericColumns => f.write_str("The table has no numeric columns"),
            Error::NonFinite(x) => write!(f, "{} is not a finite number", x),
            Error::UnknownChart(x) => {
                write!(f, "Unknown chart \"{}\" (expected boxplot or histogram)", x)
            }
        }
    }
}
impl std::error::Error for Error {}
