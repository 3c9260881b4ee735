use crate::csv_table;
use anyhow::{Context, Result};
use bpaf::Bpaf;
use std::io::Write;
use std::path::PathBuf;
use summary_stats::Table;

/// Lists the numeric columns of a CSV file, one per line
#[derive(Bpaf)]
pub struct Options {
    /// The CSV file ("-" for stdin)
    #[bpaf(positional("FILE"))]
    csv: PathBuf,
}

pub fn columns(opts: Options) -> Result<()> {
    let table = csv_table::open(&opts.csv)?;
    let stdout = std::io::stdout();
    list(stdout.lock(), &table).with_context(|| opts.csv.display().to_string())
}

fn list(mut out: impl Write, table: &Table) -> Result<()> {
    let columns = table.numeric_columns();
    if columns.is_empty() {
        return Err(summary_stats::Error::NoNumericColumns.into());
    }
    for column in columns {
        writeln!(out, "{}", column)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_table::read_table;

    fn listed(csv: &str) -> Result<String> {
        let table = read_table(csv.as_bytes())?;
        let mut out = vec![];
        list(&mut out, &table)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn numeric_only() {
        let csv = "name,age,city,height\nann,31,oslo,1.7\nbob,NA,rome,1.8\n";
        assert_eq!(listed(csv).unwrap(), "age\nheight\n");
    }

    #[test]
    fn nothing_numeric() {
        let err = listed("name,city\nann,oslo\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<summary_stats::Error>(),
            Some(&summary_stats::Error::NoNumericColumns)
        );
    }
}
