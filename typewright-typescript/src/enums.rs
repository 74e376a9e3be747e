//! Enum constant derivation.

use serde::Serialize;
use typewright_core::{escape_text, sanitize_name, to_snake_case};
use typewright_ir::EnumEntry;

use crate::{
    codegen::TypeScriptCodegen, diagnostics::NamingCollision, naming::starts_with_digit,
};

/// Abstract types whose enum literals are emitted as bare numbers.
fn is_numeric_datatype(datatype: &str) -> bool {
    matches!(datatype, "int" | "double" | "float")
}

/// One derived enum constant, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// Constant name, shaped for the target language.
    pub name: String,
    /// Literal value, quoted unless the datatype is numeric.
    pub value: String,
}

impl TypeScriptCodegen {
    /// Render an enum literal (e.g., "active" -> "'active'", but "1"
    /// stays bare for numeric datatypes).
    pub fn to_enum_value(&self, value: &str, datatype: &str) -> String {
        if is_numeric_datatype(datatype) {
            value.to_string()
        } else {
            format!("'{}'", escape_text(value))
        }
    }

    /// Derive the constant name for one enum value.
    ///
    /// Numeric values spell out their sign and decimal point
    /// ("-1" -> "MINUS_1", "3.14" -> "3_DOT_14"). Everything else is
    /// upper snake-cased with at most one leading and one trailing
    /// underscore trimmed, and a digit-leading result gets an
    /// underscore prefix.
    pub fn to_enum_var_name(&self, name: &str, datatype: &str) -> String {
        if is_numeric_datatype(datatype) {
            return name
                .replace('-', "MINUS_")
                .replace('+', "PLUS_")
                .replace('.', "_DOT_");
        }

        let upper = sanitize_name(&to_snake_case(name).to_uppercase());
        let trimmed = upper.strip_prefix('_').unwrap_or(upper.as_str());
        let trimmed = trimmed.strip_suffix('_').unwrap_or(trimmed);
        if starts_with_digit(trimmed) {
            format!("_{}", trimmed)
        } else {
            trimmed.to_string()
        }
    }

    /// Derive the enum type name for a property (e.g., "status" ->
    /// "StatusEnum"). Renames reported by the model namer flow into
    /// `collisions`.
    pub fn to_enum_name(
        &self,
        property_name: &str,
        collisions: &mut Vec<NamingCollision>,
    ) -> String {
        let enum_name = format!("{}Enum", self.to_model_name(property_name, collisions));
        if starts_with_digit(&enum_name) {
            format!("_{}", enum_name)
        } else {
            enum_name
        }
    }

    /// Spell the default value of an enum-typed property as
    /// `datatype` joined to the raw value.
    pub fn to_enum_default_value(&self, value: &str, datatype: &str) -> String {
        format!("{}_{}", datatype, value)
    }

    /// Derive name/value pairs for a whole enum, preserving entry order.
    pub fn enum_members(&self, entries: &[EnumEntry]) -> Vec<EnumMember> {
        entries
            .iter()
            .map(|entry| EnumMember {
                name: self.to_enum_var_name(&entry.name, &entry.datatype),
                value: self.to_enum_value(&entry.value, &entry.datatype),
            })
            .collect()
    }
}
