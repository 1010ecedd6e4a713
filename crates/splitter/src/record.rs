//! Record — the field data model produced from one log line.

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// One part (section) of a log line.
///
/// `name` is reserved for strategies that assign column names; the built-in
/// splitters produce positional fields with an empty name, so position is the
/// only addressing mode today. Fields are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    value: String,
}

impl Field {
    /// A positional field: empty name, raw substring value.
    pub fn positional(value: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            value: value.into(),
        }
    }

    /// A named field. No built-in splitter assigns names; the constructor
    /// exists so downstream consumers can rely on the accessor pair.
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The parts of one log line, in split order (position = column index).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fields(Vec<Field>);

impl Fields {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bounds-checked column access.
    ///
    /// Out-of-range indices return `None`; callers that have already checked
    /// `len` can use the `Index` impl instead.
    pub fn get(&self, index: usize) -> Option<&Field> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }

    /// Re-join the field values with an output separator.
    pub fn join(&self, sep: &str) -> String {
        self.0
            .iter()
            .map(Field::value)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl From<Vec<Field>> for Fields {
    fn from(fields: Vec<Field>) -> Self {
        Self(fields)
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for Fields {
    type Output = Field;

    /// Panics on out-of-range indices, like any slice index.
    fn index(&self, index: usize) -> &Field {
        &self.0[index]
    }
}

impl IntoIterator for Fields {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Fields {
        ["2021/08/30 19:41:15.740", "INFO", "2", "1553", "Starting SKU Refresh"]
            .into_iter()
            .map(Field::positional)
            .collect()
    }

    #[test]
    fn test_positional_field_has_empty_name() {
        let field = Field::positional("INFO");
        assert_eq!(field.name(), "");
        assert_eq!(field.value(), "INFO");
    }

    #[test]
    fn test_named_field_accessors() {
        let field = Field::named("level", "INFO");
        assert_eq!(field.name(), "level");
        assert_eq!(field.value(), "INFO");
    }

    #[test]
    fn test_order_is_split_order() {
        let fields = row();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[1].value(), "INFO");
        assert_eq!(fields[3].value(), "1553");
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let fields = row();
        assert!(fields.get(4).is_some());
        assert!(fields.get(5).is_none());
    }

    #[test]
    fn test_join_with_output_delimiter() {
        let fields = row();
        assert_eq!(
            fields.join(","),
            "2021/08/30 19:41:15.740,INFO,2,1553,Starting SKU Refresh"
        );
    }

    #[test]
    fn test_empty_fields() {
        let fields = Fields::new();
        assert!(fields.is_empty());
        assert_eq!(fields.join(","), "");
    }

    #[test]
    fn test_serializes_as_ordered_records() {
        let fields: Fields = vec![Field::positional("a"), Field::positional("b")].into();
        let json = serde_json::to_value(&fields).expect("Failed to serialize fields");
        assert_eq!(
            json,
            serde_json::json!([
                { "name": "", "value": "a" },
                { "name": "", "value": "b" },
            ])
        );
    }
}
