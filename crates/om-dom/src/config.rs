//! Render options.

use serde::{Deserialize, Serialize};

/// How props are checked before a tree is mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Accept any props unchecked
    #[default]
    Permissive,
    /// Reject malformed attribute names and handler keys
    Strict,
}

/// Options for a render container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub validation: Validation,
}

impl RenderConfig {
    pub fn strict() -> Self {
        Self {
            validation: Validation::Strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.validation == Validation::Strict
    }
}
