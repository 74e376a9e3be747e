//! Diagnostic values collected during name derivation.
//!
//! Renames are reported as data rather than logged, so callers decide
//! whether to print, collect, or fail on them.

use serde::Serialize;

/// Why a schema name could not be used verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CollisionReason {
    /// The name matched the reserved-word table.
    ReservedWord,
    /// The name started with a digit.
    LeadingDigit,
}

impl std::fmt::Display for CollisionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionReason::ReservedWord => write!(f, "reserved word"),
            CollisionReason::LeadingDigit => write!(f, "starts with a number"),
        }
    }
}

/// A rename applied while deriving a model name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingCollision {
    /// The name as it stood when the collision was detected.
    pub raw: String,
    /// The replacement the derivation settled on.
    pub renamed: String,
    /// What the collision was.
    pub reason: CollisionReason,
}

impl NamingCollision {
    /// Record a rename of `raw` to `renamed`.
    pub fn new(
        raw: impl Into<String>,
        renamed: impl Into<String>,
        reason: CollisionReason,
    ) -> Self {
        Self {
            raw: raw.into(),
            renamed: renamed.into(),
            reason,
        }
    }
}

impl std::fmt::Display for NamingCollision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' ({}) cannot be used as model name, renamed to '{}'",
            self.raw, self.reason, self.renamed
        )
    }
}
