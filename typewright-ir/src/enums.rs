//! Enumerated property entries.

use serde::{Deserialize, Serialize};

/// One allowed value of an enumerated schema property.
///
/// `datatype` carries the abstract schema type of the owning property
/// ("string", "int", ...), which decides whether the value is rendered
/// quoted or bare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumEntry {
    /// Raw name of the entry as written in the schema.
    pub name: String,
    /// Literal value of the entry.
    pub value: String,
    /// Abstract schema type of the owning property.
    pub datatype: String,
}

impl EnumEntry {
    /// Create an entry from its raw parts.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        datatype: impl Into<String>,
    ) -> Self {
        EnumEntry {
            name: name.into(),
            value: value.into(),
            datatype: datatype.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let entry = EnumEntry::new("available", "available", "string");
        assert_eq!(entry.name, "available");
        assert_eq!(entry.value, "available");
        assert_eq!(entry.datatype, "string");
    }
}
