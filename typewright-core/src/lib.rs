//! Core string utilities for the typewright client generator.
//!
//! This crate provides the case conversions and cleanup passes shared
//! by the language-specific generator crates.

mod case;
mod sanitize;

// Case conversions
pub use case::{to_camel_case, to_pascal_case, to_snake_case};
// Name and literal cleanup
pub use sanitize::{escape_text, sanitize_name};
