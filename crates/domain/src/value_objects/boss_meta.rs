//! Display-only boss card metadata
//!
//! Computed once when a boss is added and carried on the unit from then on.

use serde::{Deserialize, Serialize};

/// Boss card details: the raw health expression the HP was derived from,
/// the two special ability texts, immunities, and optional notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossMeta {
    health_expr: String,
    #[serde(default)]
    specials: Vec<String>,
    #[serde(default)]
    immunities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl BossMeta {
    /// Create boss metadata. Empty notes are normalized to `None` so they
    /// are omitted from the persisted form.
    pub fn new(
        health_expr: impl Into<String>,
        specials: Vec<String>,
        immunities: Vec<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            health_expr: health_expr.into(),
            specials,
            immunities,
            notes: notes.filter(|n| !n.is_empty()),
        }
    }

    pub fn health_expr(&self) -> &str {
        &self.health_expr
    }

    pub fn specials(&self) -> &[String] {
        &self.specials
    }

    pub fn immunities(&self) -> &[String] {
        &self.immunities
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
