//! Intermediate representation types for the typewright client generator.
//!
//! This crate provides the unified type definitions shared across the
//! typewright code generation pipeline. These types are the single
//! source of truth for schema-derived type information.
//!
//! # Architecture
//!
//! ```text
//! schema document → parsing → typewright-ir (unified types) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no TypeScript-specific concerns)
//! - Self-contained (plain data, no behavior beyond constructors)

mod descriptor;
mod enums;

pub use descriptor::TypeDescriptor;
pub use enums::EnumEntry;
