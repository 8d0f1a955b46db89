use crate::error::DataError;
use core_types::{Dataset, SaleRecord, parse_calendar_date};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::str::FromStr;

/// Columns every input file must carry, in any order.
pub const REQUIRED_COLUMNS: [&str; 5] = ["date", "region", "product", "units", "price"];

/// One CSV row as text. Only the five columns the analyzer needs are
/// mapped; any extra columns are ignored by the deserializer.
#[derive(Debug, Deserialize)]
struct RawSaleRow {
    date: String,
    region: String,
    product: String,
    units: String,
    price: String,
}

/// Loads the sales dataset from a CSV file on disk.
///
/// Returns `DataError::InputNotFound` when nothing exists at `path`. Every
/// other failure (unreadable file, missing column, bad number or date) is
/// returned as the matching `DataError` variant and is expected to abort
/// the run.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataError::InputNotFound(path.to_path_buf()),
        _ => DataError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let dataset = load_from_reader(file)?;
    tracing::info!(path = %path.display(), rows = dataset.len(), "Loaded sales dataset.");
    Ok(dataset)
}

/// Loads the sales dataset from any CSV byte source with a header row.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Dataset, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| DataError::Csv { line: 1, source })?
        .clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DataError::MissingColumn(missing));
    }

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result.map_err(|source| DataError::Csv {
            line: source.position().map_or(0, |p| p.line()),
            source,
        })?;
        let line = row.position().map_or(0, |p| p.line());

        let raw: RawSaleRow = row
            .deserialize(Some(&headers))
            .map_err(|source| DataError::Csv { line, source })?;
        records.push(into_record(raw, line)?);
    }

    if records.is_empty() {
        tracing::warn!("Sales input contains a header but no data rows.");
    }

    Ok(Dataset::new(records))
}

fn into_record(raw: RawSaleRow, line: u64) -> Result<SaleRecord, DataError> {
    let date = parse_calendar_date(&raw.date)
        .map_err(|source| DataError::InvalidDate { line, source })?;

    Ok(SaleRecord {
        date,
        units: parse_decimal(&raw.units, "units", line)?,
        price: parse_decimal(&raw.price, "price", line)?,
        region: raw.region,
        product: raw.product,
    })
}

/// Accepts plain (`12`, `9.99`) and scientific (`1.5e3`) notation.
///
/// A finite real that a `Decimal` cannot hold is reported as out of range,
/// anything else that fails to parse as not a number.
fn parse_decimal(value: &str, column: &'static str, line: u64) -> Result<Decimal, DataError> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| {
            let value = value.to_string();
            match value.parse::<f64>() {
                Ok(real) if real.is_finite() => DataError::OutOfRange { line, column, value },
                _ => DataError::InvalidNumber { line, column, value },
            }
        })
}
