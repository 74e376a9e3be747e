//! The TypeScript generator value and its lookup tables.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::config::CodegenOptions;

/// Identifiers that must never be emitted unescaped.
///
/// The table is folded to lower case at construction; membership checks
/// compare candidates as-is.
const RESERVED_WORDS: &[&str] = &[
    // local variable names used in generated API methods
    "varLocalPath",
    "queryParameters",
    "headerParams",
    "formParams",
    "useFormData",
    "varLocalDeferred",
    "requestOptions",
    // TypeScript reserved words
    "abstract",
    "await",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "double",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "function",
    "goto",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "int",
    "interface",
    "let",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "transient",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "volatile",
    "while",
    "with",
    "yield",
];

/// Type names emitted verbatim, without the model-name treatment.
const PRIMITIVE_TYPES: &[&str] = &[
    "string", "String", "boolean", "Boolean", "Double", "Integer", "Long", "Float", "Object",
    "Array", "Date", "number", "any",
];

/// Abstract schema types and the target types they lower to.
const TYPE_MAPPING: &[(&str, &str)] = &[
    ("Array", "Array"),
    ("array", "Array"),
    ("List", "Array"),
    ("boolean", "boolean"),
    ("string", "string"),
    ("int", "number"),
    ("float", "number"),
    ("number", "number"),
    ("long", "number"),
    ("short", "number"),
    ("char", "string"),
    ("double", "number"),
    ("object", "any"),
    ("integer", "number"),
    ("Map", "any"),
    ("DateTime", "Date"),
    // TODO: map binary to a byte-array type once the client runtime has one
    ("binary", "string"),
    ("ByteArray", "string"),
    ("UUID", "string"),
];

/// Name and type derivation for generated TypeScript clients.
///
/// The value is fully configured at construction and never mutated
/// afterwards, so every derivation in a run sees the same tables and
/// options. Renames are reported through the `collisions` sink the
/// derivation methods take, never applied silently.
#[derive(Debug, Clone)]
pub struct TypeScriptCodegen {
    options: CodegenOptions,
    pub(crate) reserved_words: HashSet<String>,
    pub(crate) primitive_types: HashSet<String>,
    pub(crate) type_mapping: IndexMap<String, String>,
}

impl TypeScriptCodegen {
    /// Build a generator with the default tables and the given options.
    pub fn new(options: CodegenOptions) -> Self {
        Self {
            options,
            reserved_words: RESERVED_WORDS.iter().map(|w| w.to_lowercase()).collect(),
            primitive_types: PRIMITIVE_TYPES.iter().map(|p| p.to_string()).collect(),
            type_mapping: TYPE_MAPPING
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// The options this generator was built with.
    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// Whether generated code may rely on ES6 language features.
    pub fn supports_es6(&self) -> bool {
        self.options.supports_es6
    }

    /// Reserve an additional word. Folded to lower case like the
    /// built-in table.
    pub fn with_reserved_word(mut self, word: impl Into<String>) -> Self {
        self.reserved_words.insert(word.into().to_lowercase());
        self
    }

    /// Mark a target type name as primitive so mappings onto it are
    /// emitted verbatim.
    pub fn with_primitive_type(mut self, name: impl Into<String>) -> Self {
        self.primitive_types.insert(name.into());
        self
    }

    /// Add or override one abstract-to-target type mapping.
    pub fn with_type_mapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.type_mapping.insert(from.into(), to.into());
        self
    }

    /// Membership in the reserved-word table, comparing `name` as-is.
    pub fn is_reserved_word(&self, name: &str) -> bool {
        self.reserved_words.contains(name)
    }

    /// Escape a reserved identifier. Not idempotent; callers re-check
    /// membership before escaping again.
    pub fn escape_reserved_word(&self, name: &str) -> String {
        format!("_{}", name)
    }

    /// The configured reserved words, in no particular order.
    pub fn reserved_words(&self) -> impl Iterator<Item = &str> {
        self.reserved_words.iter().map(String::as_str)
    }
}

impl Default for TypeScriptCodegen {
    fn default() -> Self {
        Self::new(CodegenOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words_are_lowercased() {
        let codegen = TypeScriptCodegen::default();
        assert!(codegen.is_reserved_word("class"));
        assert!(codegen.is_reserved_word("return"));
        assert!(codegen.is_reserved_word("varlocalpath"));
        // Comparison is as-is, so mixed-case candidates never match.
        assert!(!codegen.is_reserved_word("Class"));
        assert!(!codegen.is_reserved_word("varLocalPath"));
        assert!(!codegen.is_reserved_word("hello"));
    }

    #[test]
    fn test_escape_reserved_word() {
        let codegen = TypeScriptCodegen::default();
        assert_eq!(codegen.escape_reserved_word("class"), "_class");
        assert_eq!(codegen.escape_reserved_word("_class"), "__class");
    }

    #[test]
    fn test_with_reserved_word() {
        let codegen = TypeScriptCodegen::default().with_reserved_word("Fetch");
        assert!(codegen.is_reserved_word("fetch"));
        assert!(!codegen.is_reserved_word("Fetch"));
    }

    #[test]
    fn test_reserved_words_iterator() {
        let codegen = TypeScriptCodegen::default();
        let words: Vec<&str> = codegen.reserved_words().collect();
        assert!(words.contains(&"class"));
        assert!(words.iter().all(|w| *w == w.to_lowercase()));
    }
}
