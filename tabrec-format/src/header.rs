//! Header row: the ordered field names for all subsequent rows

/// Ordered field names taken from the first row of the source.
///
/// An empty header (empty input) produces records with no fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    /// Build a header from the first row of the source.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Field names in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the header defines no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate field names in column order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
