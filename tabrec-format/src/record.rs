//! Records and datasets: the in-memory model between parse and serialize

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::header::Header;
use crate::tokenizer;

/// One row of tabular input as an ordered field-name → value mapping.
///
/// Field order follows the header's column order. If the header contains
/// duplicate names, the later column's value silently overwrites the
/// earlier one while the key keeps its first position (last-value-wins,
/// an inherited quirk that is documented rather than fixed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Pair header names with positional row values.
    ///
    /// Rows shorter than the header are padded with empty strings; values
    /// beyond the header's column count are dropped.
    pub fn from_row(header: &Header, values: &[String]) -> Self {
        let mut fields = Map::new();
        let padded = values
            .iter()
            .map(String::as_str)
            .chain(std::iter::repeat(""));
        for (name, value) in header.iter().zip(padded) {
            fields.insert(name.to_string(), Value::String(value.to_string()));
        }
        Self { fields }
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Number of fields (distinct header names).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str().unwrap_or("")))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// The full ordered sequence of records parsed from one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    header: Header,
    records: Vec<Record>,
}

impl Dataset {
    /// Parse delimited text into a dataset.
    ///
    /// The first row becomes the header; every following row becomes one
    /// record, in input order. Empty input and header-only input both
    /// produce an empty dataset.
    pub fn parse(input: &str) -> Result<Self> {
        let mut rows = tokenizer::tokenize(input)?.into_iter();
        let header = rows.next().map(Header::new).unwrap_or_default();
        let records = rows.map(|row| Record::from_row(&header, &row)).collect();
        Ok(Self { header, records })
    }

    /// The header the records were built against.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Records in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records (non-header rows).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the input had no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}
