//! Reads sheet exports in CSV form.
//!
//! The first record is the header. Its first column holds the row key, the
//! remaining columns are either a plain field name (`LevelItem`) or a
//! repeated group member (`BaseParam[3]`).

use std::io::Read;

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use super::FieldValue;
use super::memory::{MemoryRow, MemorySheet};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV error")]
    Csv(#[from] ::csv::Error),
    #[error("Malformed column header: {0:?}")]
    Header(String),
    #[error("Invalid row key on line {line}: {value:?}")]
    RowKey { line: u64, value: String },
    #[error("Invalid cell on line {line}, column {column:?}: {value:?}")]
    Cell {
        line: u64,
        column: String,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Column {
    name: String,
    index: Option<usize>,
}

fn parse_column(header: &str) -> Result<Column, LoadError> {
    let header = header.trim();
    let malformed = || LoadError::Header(header.to_string());

    match header.split_once('[') {
        None if !header.is_empty() && !header.contains(']') => Ok(Column {
            name: header.to_string(),
            index: None,
        }),
        None => Err(malformed()),
        Some((name, rest)) => {
            let index = rest.strip_suffix(']').ok_or_else(malformed)?;
            let index = index.parse::<usize>().map_err(|_| malformed())?;
            if name.is_empty() {
                return Err(malformed());
            }

            Ok(Column {
                name: name.to_string(),
                index: Some(index),
            })
        }
    }
}

fn parse_cell(cell: &str) -> Option<Option<FieldValue>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Some(None);
    }

    match cell {
        "True" | "true" => return Some(Some(FieldValue::Bool(true))),
        "False" | "false" => return Some(Some(FieldValue::Bool(false))),
        _ => {}
    }

    let value = cell.parse::<i64>().ok()?;
    Some(Some(match i32::try_from(value) {
        Ok(v) => FieldValue::Int(v),
        Err(_) => FieldValue::Long(value),
    }))
}

/// Loads a whole sheet export into memory.
pub fn load_sheet<R: Read>(name: &str, reader: R) -> Result<MemorySheet, LoadError> {
    let mut reader = ::csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let columns = reader
        .headers()?
        .iter()
        .skip(1)
        .map(parse_column)
        .collect::<Result<Vec<_>, _>>()?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let raw_key = record.get(0).unwrap_or_default().trim();
        let key = raw_key.parse::<u32>().map_err(|_| LoadError::RowKey {
            line,
            value: raw_key.to_string(),
        })?;

        let mut row = MemoryRow::new(key);
        for (column, cell) in columns.iter().zip(record.iter().skip(1)) {
            let value = parse_cell(cell).ok_or_else(|| LoadError::Cell {
                line,
                column: column.name.clone(),
                value: cell.to_string(),
            })?;
            let Some(value) = value else {
                continue;
            };

            match column.index {
                Some(index) => row.set_at(column.name.clone(), index, value),
                None => row.set(column.name.clone(), value),
            }
        }
        rows.push(row);
    }

    debug!(
        "loaded sheet {name}: {} rows, columns {}",
        rows.len(),
        columns.iter().map(|c| c.name.as_str()).unique().join(", ")
    );

    Ok(MemorySheet::new(name, rows))
}
