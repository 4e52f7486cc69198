/// Loader for sheet exports in CSV form
#[cfg(feature = "csv")]
pub mod csv;
/// Plain in-memory rows and sheets
pub mod memory;

use variantly::Variantly;

use crate::error::{ErrorKind, IResult, failure_from_kind};

/// Key of a row within its sheet.
pub type RowKey = u32;

/// A resolved reference from one row to a row of another sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowLink {
    pub sheet: String,
    pub key: RowKey,
}

/// A single typed cell of a row.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldValue {
    Int(i32),
    Long(i64),
    Bool(bool),
    Link(RowLink),
}

/// Read access to the fields of one sheet row.
///
/// A field is addressed by its column group name and, for repeated groups
/// such as `BaseParam[0]..BaseParam[5]`, by an index. Implementations must
/// return the same value for the same address every time.
pub trait SheetRow {
    fn key(&self) -> RowKey;

    fn field(&self, column: &str, index: Option<usize>) -> Option<&FieldValue>;

    fn int(&self, column: &str) -> IResult<i32> {
        read_int(self, column, None)
    }

    fn int_at(&self, column: &str, index: usize) -> IResult<i32> {
        read_int(self, column, Some(index))
    }

    fn long(&self, column: &str) -> IResult<i64> {
        match required(self, column, None)? {
            FieldValue::Int(v) => Ok(i64::from(*v)),
            FieldValue::Long(v) => Ok(*v),
            _ => Err(wrong_type(column, None, "long")),
        }
    }

    fn bool(&self, column: &str) -> IResult<bool> {
        match required(self, column, None)? {
            FieldValue::Bool(v) => Ok(*v),
            FieldValue::Int(v) => Ok(*v != 0),
            _ => Err(wrong_type(column, None, "bool")),
        }
    }

    /// Key of the row a link column points at. Unresolved exports store the
    /// key as a plain integer, so those are accepted too.
    fn link(&self, column: &str) -> IResult<RowKey> {
        read_link(self, column, None)
    }

    fn link_at(&self, column: &str, index: usize) -> IResult<RowKey> {
        read_link(self, column, Some(index))
    }
}

/// A named collection of rows.
pub trait Sheet {
    type Row: SheetRow;

    fn name(&self) -> &str;

    fn row(&self, key: RowKey) -> Option<&Self::Row>;
}

fn required<'r, R: SheetRow + ?Sized>(
    row: &'r R,
    column: &str,
    index: Option<usize>,
) -> IResult<&'r FieldValue> {
    row.field(column, index).ok_or_else(|| {
        failure_from_kind(ErrorKind::MissingField {
            column: column.to_string(),
            index,
        })
    })
}

fn wrong_type(column: &str, index: Option<usize>, expected: &'static str) -> crate::error::Error {
    failure_from_kind(ErrorKind::FieldType {
        column: column.to_string(),
        index,
        expected,
    })
}

fn read_int<R: SheetRow + ?Sized>(row: &R, column: &str, index: Option<usize>) -> IResult<i32> {
    let value = required(row, column, index)?;
    if let Some(v) = value.int_ref() {
        return Ok(*v);
    }

    match value {
        FieldValue::Long(v) => i32::try_from(*v).map_err(|_| {
            failure_from_kind(ErrorKind::FieldRange {
                column: column.to_string(),
                index,
                value: *v,
            })
        }),
        FieldValue::Bool(v) => Ok(i32::from(*v)),
        _ => Err(wrong_type(column, index, "int")),
    }
}

fn read_link<R: SheetRow + ?Sized>(
    row: &R,
    column: &str,
    index: Option<usize>,
) -> IResult<RowKey> {
    match required(row, column, index)? {
        FieldValue::Link(link) => Ok(link.key),
        FieldValue::Int(v) => RowKey::try_from(*v).map_err(|_| {
            failure_from_kind(ErrorKind::FieldRange {
                column: column.to_string(),
                index,
                value: i64::from(*v),
            })
        }),
        _ => Err(wrong_type(column, index, "link")),
    }
}
