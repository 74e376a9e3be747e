//! Type declaration rendering for schema descriptors.

use typewright_ir::TypeDescriptor;

use crate::{codegen::TypeScriptCodegen, diagnostics::NamingCollision};

impl TypeScriptCodegen {
    /// Resolve an abstract schema type name to a target type name.
    ///
    /// Mapped names that land on a primitive are emitted verbatim;
    /// everything else goes through the model namer, so unmapped
    /// schema types and model references share one spelling.
    pub fn schema_type(&self, name: &str, collisions: &mut Vec<NamingCollision>) -> String {
        match self.type_mapping.get(name) {
            Some(mapped) if self.primitive_types.contains(mapped.as_str()) => mapped.clone(),
            Some(mapped) => self.to_model_name(mapped.as_str(), collisions),
            None => self.to_model_name(name, collisions),
        }
    }

    /// Render the full target declaration for a descriptor.
    ///
    /// Arrays render as `Array<inner>`, maps as inline index
    /// signatures, and files as `any`.
    pub fn type_declaration(
        &self,
        descriptor: &TypeDescriptor,
        collisions: &mut Vec<NamingCollision>,
    ) -> String {
        match descriptor {
            TypeDescriptor::Array(inner) => {
                let container = self.schema_type("array", collisions);
                let inner = self.type_declaration(inner, collisions);
                format!("{}<{}>", container, inner)
            }
            TypeDescriptor::Map(values) => {
                let values = self.type_declaration(values, collisions);
                format!("{{ [key: string]: {}; }}", values)
            }
            TypeDescriptor::File => "any".to_string(),
            TypeDescriptor::Primitive(name) | TypeDescriptor::ModelRef(name) => {
                self.schema_type(name, collisions)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CodegenOptions;

    #[test]
    fn test_schema_type_primitive_mappings() {
        let codegen = TypeScriptCodegen::default();
        let mut collisions = Vec::new();
        for (from, to) in [
            ("integer", "number"),
            ("int", "number"),
            ("long", "number"),
            ("short", "number"),
            ("float", "number"),
            ("double", "number"),
            ("number", "number"),
            ("string", "string"),
            ("char", "string"),
            ("binary", "string"),
            ("ByteArray", "string"),
            ("UUID", "string"),
            ("boolean", "boolean"),
            ("object", "any"),
            ("Map", "any"),
            ("DateTime", "Date"),
            ("array", "Array"),
            ("Array", "Array"),
            ("List", "Array"),
        ] {
            assert_eq!(codegen.schema_type(from, &mut collisions), to);
        }
        assert!(collisions.is_empty());
    }

    #[test]
    fn test_schema_type_unmapped_goes_through_model_namer() {
        let codegen = TypeScriptCodegen::default();
        let mut collisions = Vec::new();
        assert_eq!(codegen.schema_type("Pet", &mut collisions), "Pet");
        assert_eq!(
            codegen.schema_type("pet-response", &mut collisions),
            "PetResponse"
        );
        assert!(collisions.is_empty());
    }

    #[test]
    fn test_schema_type_mapped_to_non_primitive() {
        let codegen =
            TypeScriptCodegen::default().with_type_mapping("array", "ReadonlyArray");
        let mut collisions = Vec::new();
        assert_eq!(
            codegen.schema_type("array", &mut collisions),
            "ReadonlyArray"
        );
        assert!(collisions.is_empty());
    }

    #[test]
    fn test_type_declaration_scalars() {
        let codegen = TypeScriptCodegen::default();
        let mut collisions = Vec::new();
        assert_eq!(
            codegen.type_declaration(&TypeDescriptor::primitive("string"), &mut collisions),
            "string"
        );
        assert_eq!(
            codegen.type_declaration(&TypeDescriptor::primitive("DateTime"), &mut collisions),
            "Date"
        );
        assert_eq!(
            codegen.type_declaration(&TypeDescriptor::File, &mut collisions),
            "any"
        );
        assert_eq!(
            codegen.type_declaration(&TypeDescriptor::model("Pet"), &mut collisions),
            "Pet"
        );
    }

    #[test]
    fn test_type_declaration_array() {
        let codegen = TypeScriptCodegen::default();
        let mut collisions = Vec::new();
        let descriptor = TypeDescriptor::array(TypeDescriptor::primitive("string"));
        assert_eq!(
            codegen.type_declaration(&descriptor, &mut collisions),
            "Array<string>"
        );
    }

    #[test]
    fn test_type_declaration_map() {
        let codegen = TypeScriptCodegen::default();
        let mut collisions = Vec::new();
        let descriptor = TypeDescriptor::map(TypeDescriptor::primitive("integer"));
        assert_eq!(
            codegen.type_declaration(&descriptor, &mut collisions),
            "{ [key: string]: number; }"
        );
    }

    #[test]
    fn test_type_declaration_nested() {
        let codegen = TypeScriptCodegen::default();
        let mut collisions = Vec::new();
        let descriptor = TypeDescriptor::array(TypeDescriptor::array(TypeDescriptor::map(
            TypeDescriptor::primitive("integer"),
        )));
        assert_eq!(
            codegen.type_declaration(&descriptor, &mut collisions),
            "Array<Array<{ [key: string]: number; }>>"
        );
    }

    #[test]
    fn test_type_declaration_reports_model_renames() {
        let codegen = TypeScriptCodegen::default();
        let mut collisions = Vec::new();
        let descriptor = TypeDescriptor::array(TypeDescriptor::model("return"));
        assert_eq!(
            codegen.type_declaration(&descriptor, &mut collisions),
            "Array<ModelReturn>"
        );
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].raw, "return");
    }

    #[test]
    fn test_type_declaration_custom_container() {
        let codegen =
            TypeScriptCodegen::default().with_type_mapping("array", "ReadonlyArray");
        let mut collisions = Vec::new();
        let descriptor = TypeDescriptor::array(TypeDescriptor::primitive("string"));
        assert_eq!(
            codegen.type_declaration(&descriptor, &mut collisions),
            "ReadonlyArray<string>"
        );
    }

    #[test]
    fn test_type_declaration_respects_prefix_for_models_only() {
        let codegen = TypeScriptCodegen::new(CodegenOptions {
            model_name_prefix: Some("api".to_string()),
            ..CodegenOptions::default()
        });
        let mut collisions = Vec::new();
        let descriptor = TypeDescriptor::map(TypeDescriptor::model("pet"));
        assert_eq!(
            codegen.type_declaration(&descriptor, &mut collisions),
            "{ [key: string]: ApiPet; }"
        );
        // Primitive mappings bypass the model namer and thus the prefix.
        assert_eq!(
            codegen.type_declaration(&TypeDescriptor::primitive("string"), &mut collisions),
            "string"
        );
    }
}
