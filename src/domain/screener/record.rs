use std::cmp::Ordering;
use std::fmt::Debug;

/// A single cell read from a record for filtering or sorting
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    /// Ascending order of two cells. Values that cannot be ordered against
    /// each other (NaN, text against number) compare equal.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            _ => Ordering::Equal,
        }
    }
}

/// Row type the query engine can filter and sort.
pub trait Record {
    type Field: Copy + PartialEq + Debug;

    /// Stable identifier (ticker or row id)
    fn key(&self) -> &str;

    /// Textual fields matched by the free-text search
    fn search_fields(&self) -> impl Iterator<Item = &str>;

    /// Value matched by the category selector; empty when the row has none
    fn category(&self) -> &str;

    /// `None` when the row has no value for `field`
    fn field(&self, field: Self::Field) -> Option<FieldValue<'_>>;

    fn number(&self, field: Self::Field) -> Option<f64> {
        self.field(field).and_then(|value| value.as_number())
    }
}
