use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized display row: an id plus field name -> display value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub fields: BTreeMap<String, String>,
}

impl Row {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style setter, handy for fixtures.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Field value; `"id"` resolves to the row id.
    pub fn get(&self, field: &str) -> Option<&str> {
        if field == "id" {
            return Some(self.id.as_str());
        }
        self.fields.get(field).map(String::as_str)
    }

    pub fn get_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_addressable_as_field() {
        let row = Row::new("7").with("status", "pending");
        assert_eq!(row.get("id"), Some("7"));
        assert_eq!(row.get("status"), Some("pending"));
        assert_eq!(row.get_or_empty("missing"), "");
    }
}
