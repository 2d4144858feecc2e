//! Marker family definitions.

use serde::{Deserialize, Serialize};

use crate::constants::{builtin_interpretation, BUILTIN_MARKERS};

/// One marker family: an id, its lexical forms, and an optional interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDefinition {
    pub id: String,
    #[serde(default)]
    pub forms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

impl MarkerDefinition {
    /// Marker whose only form is its id.
    pub fn single(id: &str) -> Self {
        Self {
            id: id.to_string(),
            forms: vec![id.to_string()],
            interpretation: None,
        }
    }

    /// The built-in marker families.
    pub fn builtin() -> Vec<Self> {
        BUILTIN_MARKERS
            .iter()
            .map(|(id, _)| Self::single(id))
            .collect()
    }

    /// Resolve the interpretation: own text, then the built-in table, then `fallback`.
    pub fn resolve_interpretation(&self, fallback: &str) -> String {
        self.interpretation
            .as_deref()
            .or_else(|| builtin_interpretation(&self.id))
            .unwrap_or(fallback)
            .to_string()
    }
}
