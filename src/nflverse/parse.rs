//! CSV decoding for nflverse release assets.

use std::io::Read;

use flate2::read::MultiGzDecoder;
use serde_json::{Number, Value};

use crate::core::table::Table;
use crate::Result;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Gunzip `bytes` if they carry the gzip magic number, otherwise pass them through.
pub fn decompress(bytes: Vec<u8>) -> Result<Vec<u8>> {
    if !bytes.starts_with(&GZIP_MAGIC) {
        return Ok(bytes);
    }
    let mut out = Vec::with_capacity(bytes.len() * 4);
    MultiGzDecoder::new(bytes.as_slice()).read_to_end(&mut out)?;
    Ok(out)
}

/// Parse one CSV cell the way a dataframe reader would infer it.
///
/// Empty, `NA` and `NaN` become null; integers and finite floats become
/// numbers; R/pandas boolean spellings become booleans; the rest stays text.
pub fn parse_cell(raw: &str) -> Value {
    match raw {
        "" | "NA" | "NaN" | "nan" => return Value::Null,
        "TRUE" | "True" | "true" => return Value::Bool(true),
        "FALSE" | "False" | "false" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(n) = raw.parse::<i64>() {
        // Leading zeros mark identifiers such as GSIS ids or zip codes.
        if !(raw.len() > 1 && raw.starts_with('0')) {
            return Value::Number(n.into());
        }
        return Value::String(raw.to_string());
    }

    if looks_numeric(raw) {
        if let Some(number) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(number);
        }
    }

    Value::String(raw.to_string())
}

// Rejects words Rust's float parser accepts ("inf", "infinity") and ids like "1e5abc".
fn looks_numeric(raw: &str) -> bool {
    raw.bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
        && raw.bytes().any(|b| b.is_ascii_digit())
}

/// Parse a headed CSV document into a [`Table`]. Ragged rows are padded or cut
/// to the header width.
pub fn parse_csv(bytes: &[u8]) -> Result<Table> {
    read_csv(bytes, true)
}

/// Like [`parse_csv`], but a row whose width differs from the header is an
/// error. Cached files are read this way since a short last row means the
/// file was cut off.
pub fn parse_csv_strict(bytes: &[u8]) -> Result<Table> {
    read_csv(bytes, false)
}

fn read_csv(bytes: &[u8], flexible: bool) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(flexible)
        .from_reader(bytes);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut table = Table::new(columns);

    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(parse_cell).collect());
    }
    Ok(table)
}
