//! Generator options for the TypeScript target.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Naming conventions applicable to generated model properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum NamingConvention {
    /// Keep property names exactly as written in the schema.
    #[serde(rename = "original")]
    Original,
    /// camelCase properties.
    #[default]
    #[serde(rename = "camelCase")]
    CamelCase,
    /// PascalCase properties.
    #[serde(rename = "PascalCase")]
    PascalCase,
    /// snake_case properties.
    #[serde(rename = "snake_case")]
    SnakeCase,
}

impl NamingConvention {
    /// Returns the convention identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingConvention::Original => "original",
            NamingConvention::CamelCase => "camelCase",
            NamingConvention::PascalCase => "PascalCase",
            NamingConvention::SnakeCase => "snake_case",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NamingConvention {
    type Err = Error;

    /// Convention names are matched exactly; "camelcase" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(NamingConvention::Original),
            "camelCase" => Ok(NamingConvention::CamelCase),
            "PascalCase" => Ok(NamingConvention::PascalCase),
            "snake_case" => Ok(NamingConvention::SnakeCase),
            _ => Err(Error::InvalidNamingConvention {
                value: s.to_string(),
            }),
        }
    }
}

/// Options fixed before any name or type derivation starts.
///
/// The option set is immutable once handed to the generator, so every
/// derivation over the lifetime of a run sees the same configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CodegenOptions {
    /// Naming convention applied to model properties.
    pub model_naming: NamingConvention,
    /// Whether generated code may rely on ES6 language features.
    pub supports_es6: bool,
    /// Prefix joined to every model name before conversion.
    pub model_name_prefix: Option<String>,
    /// Suffix joined to every model name before conversion.
    pub model_name_suffix: Option<String>,
}
