//! TypeScript naming and type mapping for the typewright client generator.
//!
//! This crate derives the identifiers and type declarations embedded in
//! generated TypeScript clients: parameter and property names, model
//! and file names, method names, enum constants, and the declaration
//! syntax for schema types.
//!
//! # Usage
//!
//! Build a [`TypeScriptCodegen`] once from [`CodegenOptions`], then
//! call its derivation methods. Renames forced by reserved words or
//! digit-leading names are pushed onto a caller-owned collision list
//! rather than applied silently.
//!
//! ```ignore
//! use typewright_typescript::{CodegenOptions, TypeDescriptor, TypeScriptCodegen};
//!
//! let codegen = TypeScriptCodegen::new(CodegenOptions::default());
//! let mut collisions = Vec::new();
//!
//! let declaration = codegen.type_declaration(
//!     &TypeDescriptor::array(TypeDescriptor::primitive("string")),
//!     &mut collisions,
//! );
//! assert_eq!(declaration, "Array<string>");
//!
//! let model = codegen.to_model_name("200Response", &mut collisions);
//! assert_eq!(model, "Model200Response");
//! assert_eq!(collisions.len(), 1);
//! ```
//!
//! # Derivations
//!
//! - [`TypeScriptCodegen::to_param_name`] - method parameter names
//! - [`TypeScriptCodegen::to_var_name`] - model property names
//! - [`TypeScriptCodegen::to_model_name`] - model type and file names
//! - [`TypeScriptCodegen::to_operation_id`] - API method names
//! - [`TypeScriptCodegen::type_declaration`] - full type syntax
//! - [`TypeScriptCodegen::enum_members`] - enum constant name/value pairs

mod codegen;
mod config;
mod diagnostics;
mod enums;
mod error;
mod naming;
mod types;

pub use codegen::TypeScriptCodegen;
pub use config::{CodegenOptions, NamingConvention};
pub use diagnostics::{CollisionReason, NamingCollision};
pub use enums::EnumMember;
pub use error::{Error, Result};
pub use typewright_ir::{EnumEntry, TypeDescriptor};
