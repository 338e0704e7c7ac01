use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::{self, Write};

/// One flat row: fixed column names paired with nullable values, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(&'static str, Option<String>)>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    pub fn push(&mut self, column: &'static str, value: Option<String>) {
        self.fields.push((column, value));
    }

    /// Value of `column`; `None` when the column is null or not part of the record.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == column)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.fields.iter().any(|(name, _)| *name == column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn values(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.fields.iter().map(|(_, value)| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// A column list plus the records extracted for it.
///
/// The column list is known even when there are no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<&'static str>,
    records: Vec<Record>,
}

impl Table {
    pub fn new(columns: Vec<&'static str>) -> Self {
        Table {
            columns,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        debug_assert!(record.columns().eq(self.columns.iter().copied()));
        self.records.push(record);
    }

    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, column: &str) -> Vec<Option<&str>> {
        self.records.iter().map(|record| record.get(column)).collect()
    }

    /// Writes a header row followed by one tab-separated line per record.
    /// Nulls become empty cells; tabs and newlines inside values become spaces.
    pub fn write_tsv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.columns.join("\t"))?;
        for record in &self.records {
            let line: Vec<String> = record
                .values()
                .map(|value| value.unwrap_or_default().replace(['\t', '\n', '\r'], " "))
                .collect();
            writeln!(out, "{}", line.join("\t"))?;
        }
        Ok(())
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}
