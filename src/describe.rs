use crate::input::*;
use ansi_term::Style;
use anyhow::Result;
use bpaf::Bpaf;
use std::io::{IsTerminal, Write};
use summary_stats::{DescriptiveStats, Mode};

/// Takes a dataset and prints its descriptive statistics
#[derive(Bpaf)]
pub struct Options {
    #[bpaf(external(input))]
    input: Input,
    /// Print the statistics as JSON
    json: bool,
    /// Decimal places to show
    #[bpaf(argument("N"), fallback(4))]
    precision: usize,
}

pub fn describe(opts: Options) -> Result<()> {
    let data = opts.input.load()?;
    let stats = DescriptiveStats::new(&data);
    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let mut stdout = stdout.lock();
    if opts.json {
        writeln!(stdout, "{}", serde_json::to_string(&stats)?)?;
    } else {
        render(&mut stdout, &stats, opts.precision, color)?;
    }
    Ok(())
}

pub fn render(out: impl Write, stats: &DescriptiveStats, precision: usize, color: bool) -> Result<()> {
    let num = |x: f64| format!("{:.*}", precision, x);
    let or = |x: Option<f64>, placeholder: &str| match x {
        Some(x) => num(x),
        None if color => Style::new().dimmed().paint(placeholder).to_string(),
        None => placeholder.to_string(),
    };
    let mode = match stats.mode {
        Mode::Unique(x) => Some(x),
        Mode::NotUnique => None,
    };

    let mut out = tabwriter::TabWriter::new(out);
    writeln!(out, "count:\t{}", stats.count)?;
    writeln!(out, "mean:\t{}", num(stats.mean))?;
    writeln!(out, "median:\t{}", num(stats.median))?;
    writeln!(out, "mode:\t{}", or(mode, "not unique"))?;
    writeln!(out, "variance:\t{}", or(stats.variance, "undefined"))?;
    writeln!(out, "std dev:\t{}", or(stats.std_dev, "undefined"))?;
    writeln!(out, "min:\t{}", num(stats.min))?;
    writeln!(out, "max:\t{}", num(stats.max))?;
    out.flush()?;
    Ok(())
}
