use crate::csv_table;
use anyhow::{bail, Context, Result};
use bpaf::Bpaf;
use log::*;
use std::io::Read;
use std::path::PathBuf;
use summary_stats::{parse_column, parse_free_text, Dataset};

// Where the numbers come from.  With neither --values nor --csv, free text
// is read from stdin.
#[derive(Bpaf)]
pub struct Input {
    /// Numbers separated by commas and/or whitespace
    #[bpaf(argument("TEXT"))]
    values: Option<String>,
    /// A CSV file with a header row ("-" for stdin)
    #[bpaf(argument("FILE"))]
    csv: Option<PathBuf>,
    /// The CSV column to use.  Defaults to the first numeric one
    #[bpaf(argument("NAME"))]
    column: Option<String>,
}

impl Input {
    pub fn load(&self) -> Result<Dataset> {
        match (&self.values, &self.csv) {
            (Some(_), Some(_)) => bail!("--values and --csv can't be used together"),
            (_, None) if self.column.is_some() => bail!("--column only makes sense with --csv"),
            (Some(text), None) => Ok(parse_free_text(text)?),
            (None, Some(path)) => {
                let table = csv_table::open(path)?;
                info!(
                    "Read {} rows from {} (numeric columns: {:?})",
                    table.rows(),
                    path.display(),
                    table.numeric_columns(),
                );
                let column = match &self.column {
                    Some(x) => x.clone(),
                    None => {
                        let first = table
                            .numeric_columns()
                            .first()
                            .map(|x| x.to_string())
                            .ok_or(summary_stats::Error::NoNumericColumns)?;
                        info!("Using column \"{}\"", first);
                        first
                    }
                };
                parse_column(&table, &column).with_context(|| path.display().to_string())
            }
            (None, None) => {
                info!("Reading values from stdin");
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(parse_free_text(&text)?)
            }
        }
    }
}
