use std::collections::HashMap;

use crate::Rc;

use super::{FieldValue, RowKey, Sheet, SheetRow};

/// A sheet row held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryRow {
    key: RowKey,
    scalars: HashMap<String, FieldValue>,
    groups: HashMap<String, Vec<Option<FieldValue>>>,
}

impl MemoryRow {
    pub fn new(key: RowKey) -> Self {
        Self {
            key,
            ..Default::default()
        }
    }

    pub fn set(&mut self, column: impl Into<String>, value: FieldValue) {
        self.scalars.insert(column.into(), value);
    }

    pub fn set_at(&mut self, column: impl Into<String>, index: usize, value: FieldValue) {
        let group = self.groups.entry(column.into()).or_default();
        if group.len() <= index {
            group.resize(index + 1, None);
        }
        group[index] = Some(value);
    }

    pub fn with(mut self, column: impl Into<String>, value: FieldValue) -> Self {
        self.set(column, value);
        self
    }

    pub fn with_at(mut self, column: impl Into<String>, index: usize, value: FieldValue) -> Self {
        self.set_at(column, index, value);
        self
    }
}

impl SheetRow for MemoryRow {
    fn key(&self) -> RowKey {
        self.key
    }

    fn field(&self, column: &str, index: Option<usize>) -> Option<&FieldValue> {
        match index {
            None => self.scalars.get(column),
            Some(index) => self.groups.get(column)?.get(index)?.as_ref(),
        }
    }
}

/// An in-memory sheet, indexed by row key.
#[derive(Debug)]
pub struct MemorySheet {
    name: String,
    rows: Vec<Rc<MemoryRow>>,
    key_to_rows: HashMap<RowKey, Rc<MemoryRow>>,
}

impl MemorySheet {
    pub fn new<I>(name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = MemoryRow>,
    {
        let rows: Vec<Rc<MemoryRow>> = rows.into_iter().map(Rc::new).collect();
        let key_to_rows = rows.iter().map(|row| (row.key, row.clone())).collect();

        Self {
            name: name.into(),
            rows,
            key_to_rows,
        }
    }

    /// Rows in the order they were supplied.
    pub fn rows(&self) -> &[Rc<MemoryRow>] {
        self.rows.as_slice()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Sheet for MemorySheet {
    type Row = MemoryRow;

    fn name(&self) -> &str {
        &self.name
    }

    fn row(&self, key: RowKey) -> Option<&MemoryRow> {
        self.key_to_rows.get(&key).map(|row| row.as_ref())
    }
}
