//! Base stat line for a unit
//!
//! Stats are copied by value from the catalog when a unit is created and
//! never re-fetched afterwards; the catalog is free to change between
//! scenarios without touching units already on the board.

use serde::{Deserialize, Serialize};

/// A single unit's base stats at a given level.
///
/// `attributes` are free-form strings like "Target 2" or "Shield 1".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitStats {
    pub health: i32,
    #[serde(rename = "move", default)]
    pub movement: i32,
    #[serde(default)]
    pub attack: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<i32>,
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl UnitStats {
    pub fn new(health: i32, movement: i32, attack: i32) -> Self {
        Self {
            health,
            movement,
            attack,
            range: None,
            attributes: Vec::new(),
        }
    }

    /// Stat line for an ally: only health matters, everything else stays zero.
    pub fn flat(health: i32) -> Self {
        Self::new(health, 0, 0)
    }

    pub fn with_range(mut self, range: i32) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<String>) -> Self {
        self.attributes = attributes;
        self
    }
}
