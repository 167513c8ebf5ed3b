//! CSV input and output tables.
//!
//! Rows are kept as raw records so every original column survives the
//! round trip in its original order. Coordinates go into the configured
//! latitude/longitude columns: appended at the end, or overwritten in place
//! when the input already has them.

use crate::address::AddressRecord;
use crate::config::ColumnsConfig;
use crate::geocoder::Location;
use csv::StringRecord;
use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("input table has no {0:?} column")]
    MissingColumn(String),
    #[error("line {line}: {fields} fields but the header has {columns} columns")]
    RowTooLong {
        line: u64,
        fields: usize,
        columns: usize,
    },
    #[error("{rows} rows but {results} results")]
    LengthMismatch { rows: usize, results: usize },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A loaded input table with the positions of its address columns.
#[derive(Debug, Clone)]
pub struct InputTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
    address_idx: usize,
    city_idx: usize,
    state_idx: usize,
}

impl InputTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Address fields of every row, in file order. Short rows yield `None` fields.
    pub fn address_records(&self) -> Vec<AddressRecord> {
        self.rows
            .iter()
            .map(|row| AddressRecord {
                address: row.get(self.address_idx).map(str::to_string),
                city: row.get(self.city_idx).map(str::to_string),
                state: row.get(self.state_idx).map(str::to_string),
            })
            .collect()
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, TableError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| TableError::MissingColumn(name.to_string()))
}

/// Read a CSV table with a header row.
///
/// Short rows are accepted and read as missing cells. A row with more cells
/// than the header is rejected: its extra cells have no column to go into.
pub fn read_table<R: io::Read>(reader: R, columns: &ColumnsConfig) -> Result<InputTable, TableError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    let address_idx = column_index(&headers, &columns.address)?;
    let city_idx = column_index(&headers, &columns.city)?;
    let state_idx = column_index(&headers, &columns.state)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(TableError::RowTooLong {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                fields: record.len(),
                columns: headers.len(),
            });
        }
        rows.push(record);
    }
    tracing::debug!(rows = rows.len(), columns = headers.len(), "read input table");

    Ok(InputTable {
        headers,
        rows,
        address_idx,
        city_idx,
        state_idx,
    })
}

pub fn read_path(path: &Path, columns: &ColumnsConfig) -> Result<InputTable, TableError> {
    read_table(File::open(path)?, columns)
}

/// Write the table with coordinates, one output row per input row.
///
/// Unresolved rows get empty latitude/longitude cells.
pub fn write_table<W: io::Write>(
    writer: W,
    table: &InputTable,
    locations: &[Option<Location>],
    columns: &ColumnsConfig,
) -> Result<(), TableError> {
    if locations.len() != table.rows.len() {
        return Err(TableError::LengthMismatch {
            rows: table.rows.len(),
            results: locations.len(),
        });
    }

    let mut headers: Vec<String> = table.headers.iter().map(str::to_string).collect();
    let lat_idx = output_index(&mut headers, &columns.latitude);
    let lon_idx = output_index(&mut headers, &columns.longitude);

    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    wtr.write_record(&headers)?;

    for (row, location) in table.rows.iter().zip(locations) {
        let mut out: Vec<String> = row.iter().map(str::to_string).collect();
        if out.len() < headers.len() {
            out.resize(headers.len(), String::new());
        }
        let (lat, lon) = match location {
            Some(loc) => (loc.latitude.to_string(), loc.longitude.to_string()),
            None => (String::new(), String::new()),
        };
        out[lat_idx] = lat;
        out[lon_idx] = lon;
        wtr.write_record(&out)?;
    }
    wtr.flush()?;
    Ok(())
}

fn output_index(headers: &mut Vec<String>, name: &str) -> usize {
    match headers.iter().position(|h| h == name) {
        Some(idx) => idx,
        None => {
            headers.push(name.to_string());
            headers.len() - 1
        }
    }
}

pub fn write_path(
    path: &Path,
    table: &InputTable,
    locations: &[Option<Location>],
    columns: &ColumnsConfig,
) -> Result<(), TableError> {
    write_table(File::create(path)?, table, locations, columns)
}
