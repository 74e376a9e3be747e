//! Schema type descriptors.

use serde::{Deserialize, Serialize};

/// Language-agnostic description of a schema property type.
///
/// Descriptors arrive from the schema parsing layer already resolved:
/// a name is either an abstract scalar type ("integer", "DateTime") or
/// a reference to a model defined elsewhere in the document. Containers
/// nest arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeDescriptor {
    /// Named scalar type from the schema ("string", "integer", ...).
    Primitive(String),
    /// Homogeneous list of the inner type.
    Array(Box<TypeDescriptor>),
    /// String-keyed dictionary of the value type.
    Map(Box<TypeDescriptor>),
    /// Binary file payload.
    File,
    /// Reference to a named model defined elsewhere in the document.
    ModelRef(String),
}

impl TypeDescriptor {
    /// Descriptor for a named scalar type.
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeDescriptor::Primitive(name.into())
    }

    /// Descriptor for a list of `inner` elements.
    pub fn array(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(inner))
    }

    /// Descriptor for a string-keyed map holding `values`.
    pub fn map(values: TypeDescriptor) -> Self {
        TypeDescriptor::Map(Box::new(values))
    }

    /// Descriptor referencing the model called `name`.
    pub fn model(name: impl Into<String>) -> Self {
        TypeDescriptor::ModelRef(name.into())
    }

    /// Returns true for list and map descriptors.
    pub fn is_container(&self) -> bool {
        matches!(self, TypeDescriptor::Array(_) | TypeDescriptor::Map(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            TypeDescriptor::primitive("string"),
            TypeDescriptor::Primitive("string".to_string())
        );
        assert_eq!(
            TypeDescriptor::model("Pet"),
            TypeDescriptor::ModelRef("Pet".to_string())
        );
        assert_eq!(
            TypeDescriptor::array(TypeDescriptor::primitive("integer")),
            TypeDescriptor::Array(Box::new(TypeDescriptor::Primitive("integer".to_string())))
        );
    }

    #[test]
    fn test_nested_composition() {
        let descriptor = TypeDescriptor::map(TypeDescriptor::array(TypeDescriptor::model("Pet")));
        let TypeDescriptor::Map(values) = &descriptor else {
            panic!("expected a map descriptor");
        };
        assert!(values.is_container());
    }

    #[test]
    fn test_is_container() {
        assert!(TypeDescriptor::array(TypeDescriptor::File).is_container());
        assert!(TypeDescriptor::map(TypeDescriptor::File).is_container());
        assert!(!TypeDescriptor::primitive("string").is_container());
        assert!(!TypeDescriptor::File.is_container());
        assert!(!TypeDescriptor::model("Pet").is_container());
    }
}
