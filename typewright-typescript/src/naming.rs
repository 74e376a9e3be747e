//! Identifier derivation for parameters, properties, models and operations.

use typewright_core::{sanitize_name, to_camel_case, to_pascal_case, to_snake_case};

use crate::{
    codegen::TypeScriptCodegen,
    config::NamingConvention,
    diagnostics::{CollisionReason, NamingCollision},
    error::{Error, Result},
};

pub(crate) fn starts_with_digit(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_digit())
}

impl TypeScriptCodegen {
    /// Derive a method parameter name (e.g., "created-at" -> "createdAt").
    ///
    /// Constant-style names made of uppercase letters and underscores
    /// pass through untouched. Results that land on a reserved word or
    /// a leading digit are escaped with an underscore.
    pub fn to_param_name(&self, name: &str) -> String {
        let name = name.replace('-', "_");
        if name.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
            return name;
        }
        let name = to_camel_case(&name);
        if self.is_reserved_word(&name) || starts_with_digit(&name) {
            return self.escape_reserved_word(&name);
        }
        name
    }

    /// Derive a model property name under the configured convention.
    ///
    /// Unlike [`to_param_name`](Self::to_param_name) this applies no
    /// reserved-word escaping; the convention is applied verbatim.
    pub fn to_var_name(&self, name: &str) -> String {
        match self.options().model_naming {
            NamingConvention::Original => name.to_string(),
            NamingConvention::CamelCase => to_camel_case(name),
            NamingConvention::PascalCase => to_pascal_case(name),
            NamingConvention::SnakeCase => to_snake_case(name),
        }
    }

    /// Derive a model type name (e.g., "phone_number" -> "PhoneNumber").
    ///
    /// The raw name is sanitized, joined with the configured prefix and
    /// suffix, then PascalCased. Names that collide with a reserved
    /// word or start with a digit are renamed to `Model`-prefixed form
    /// and the rename is pushed onto `collisions`.
    pub fn to_model_name(&self, name: &str, collisions: &mut Vec<NamingCollision>) -> String {
        let mut name = sanitize_name(name);

        let prefix = self.options().model_name_prefix.as_deref();
        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            name = format!("{}_{}", prefix, name);
        }
        let suffix = self.options().model_name_suffix.as_deref();
        if let Some(suffix) = suffix.filter(|s| !s.is_empty()) {
            name = format!("{}_{}", name, suffix);
        }

        if self.is_reserved_word(&name) {
            let renamed = to_pascal_case(&format!("model_{}", name));
            collisions.push(NamingCollision::new(
                name,
                renamed.clone(),
                CollisionReason::ReservedWord,
            ));
            return renamed;
        }
        if starts_with_digit(&name) {
            let renamed = to_pascal_case(&format!("model_{}", name));
            collisions.push(NamingCollision::new(
                name,
                renamed.clone(),
                CollisionReason::LeadingDigit,
            ));
            return renamed;
        }
        to_pascal_case(&name)
    }

    /// Derive the file stem for a model. Identical to the model name,
    /// so model and file never disagree on spelling.
    pub fn to_model_filename(&self, name: &str, collisions: &mut Vec<NamingCollision>) -> String {
        self.to_model_name(name, collisions)
    }

    /// Derive a method name for an operation (e.g., "get-pet-by-id" ->
    /// "getPetById").
    ///
    /// An empty operation id is a hard failure. The reserved-word check
    /// runs against the raw id before sanitization, so an id that only
    /// becomes reserved after camelization is not escaped.
    pub fn to_operation_id(&self, operation_id: &str) -> Result<String> {
        if operation_id.is_empty() {
            return Err(Error::EmptyOperationId);
        }
        if self.is_reserved_word(operation_id) {
            let method = to_camel_case(&sanitize_name(operation_id));
            return Ok(self.escape_reserved_word(&method));
        }
        Ok(to_camel_case(&sanitize_name(operation_id)))
    }
}
