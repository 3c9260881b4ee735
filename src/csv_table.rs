use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use summary_stats::{Table, Value};

/// Cells which mean "nothing here"
const MISSING: &[&str] = &[
    "", "NA", "N/A", "n/a", "<NA>", "#N/A", "#NA", "NaN", "nan", "-NaN", "-nan", "NULL", "null",
    "None",
];

pub fn classify(cell: &str) -> Value {
    let cell = cell.trim();
    if MISSING.contains(&cell) {
        return Value::Missing;
    }
    match cell.parse::<f64>().ok() {
        Some(x) => Value::Number(x),
        None => Value::Text(cell.to_string()),
    }
}

/// Decode CSV with a header row.  Rows may be shorter or longer than the
/// header.
pub fn read_table(rdr: impl Read) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let columns = rdr
        .headers()?
        .iter()
        .map(|x| x.trim().to_string())
        .collect();
    let mut table = Table::new(columns);
    for row in rdr.into_records() {
        let row = row?;
        table.push_row(row.iter().map(classify).collect());
    }
    Ok(table)
}

/// "-" means stdin
pub fn open(path: &Path) -> Result<Table> {
    if path == Path::new("-") {
        read_table(std::io::stdin()).context("Couldn't read CSV from stdin")
    } else {
        let file = File::open(path).with_context(|| format!("Couldn't open {}", path.display()))?;
        read_table(file).with_context(|| format!("Couldn't read {}", path.display()))
    }
}
