//! Unit - one placed game piece on the play area
//!
//! `id`, `name`, `number`, `kind`, and `stats` are write-once; only hit
//! points and active conditions mutate after creation, and only through the
//! dedicated methods here so the clamp and no-duplicate-tag invariants hold
//! at all times.

use serde::{Deserialize, Serialize};

use crate::ids::UnitId;
use crate::value_objects::{BossMeta, UnitStats};
use crate::DomainError;

/// What a unit is, which drives grouping, sorting, and stat shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Normal,
    Elite,
    Boss,
    Ally,
}

impl UnitKind {
    pub fn is_monster(&self) -> bool {
        matches!(self, Self::Normal | Self::Elite)
    }
}

/// One unit instance on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    id: UnitId,
    name: String,
    number: u32,
    #[serde(rename = "type")]
    kind: UnitKind,
    stats: UnitStats,
    current_hp: i32,
    #[serde(default)]
    active_conditions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    boss_meta: Option<BossMeta>,
}

impl Unit {
    /// Create a monster unit at full health.
    ///
    /// # Errors
    ///
    /// Returns an error if `number` is zero or `kind` is not a monster kind.
    pub fn monster(
        name: impl Into<String>,
        number: u32,
        kind: UnitKind,
        stats: UnitStats,
    ) -> Result<Self, DomainError> {
        if number == 0 {
            return Err(DomainError::validation("Unit number must be positive"));
        }
        if !kind.is_monster() {
            return Err(DomainError::validation(
                "Monster units must be normal or elite",
            ));
        }
        Ok(Self {
            id: UnitId::new(),
            name: name.into(),
            number,
            kind,
            current_hp: stats.health,
            stats,
            active_conditions: Vec::new(),
            boss_meta: None,
        })
    }

    /// Create a boss unit. Bosses always occupy number 1 and start at the
    /// full health already baked into `stats`.
    pub fn boss(name: impl Into<String>, stats: UnitStats, meta: BossMeta) -> Self {
        Self {
            id: UnitId::new(),
            name: name.into(),
            number: 1,
            kind: UnitKind::Boss,
            current_hp: stats.health,
            stats,
            active_conditions: Vec::new(),
            boss_meta: Some(meta),
        }
    }

    /// Create an ally unit with a flat stat line. Ally numbers are fixed at
    /// 1; allies are grouped by kind, not by name/number.
    pub fn ally(name: impl Into<String>, health: i32) -> Self {
        let stats = UnitStats::flat(health);
        Self {
            id: UnitId::new(),
            name: name.into(),
            number: 1,
            kind: UnitKind::Ally,
            current_hp: stats.health,
            stats,
            active_conditions: Vec::new(),
            boss_meta: None,
        }
    }

    /// Reconstruct from storage (persisted-record hydration).
    ///
    /// Re-establishes the invariants regardless of what was stored: HP is
    /// clamped back into range, duplicate condition tags are dropped, and
    /// a stray `boss_meta` on a non-boss record is discarded.
    pub fn from_storage(
        id: UnitId,
        name: String,
        number: u32,
        kind: UnitKind,
        stats: UnitStats,
        current_hp: i32,
        active_conditions: Vec<String>,
        boss_meta: Option<BossMeta>,
    ) -> Self {
        let max = stats.health.max(0);
        let mut conditions: Vec<String> = Vec::with_capacity(active_conditions.len());
        for tag in active_conditions {
            if !conditions.contains(&tag) {
                conditions.push(tag);
            }
        }
        Self {
            id,
            name,
            number: number.max(1),
            kind,
            current_hp: current_hp.clamp(0, max),
            stats,
            active_conditions: conditions,
            boss_meta: boss_meta.filter(|_| kind == UnitKind::Boss),
        }
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn stats(&self) -> &UnitStats {
        &self.stats
    }

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    /// Maximum HP is the stat-line health the unit was created with.
    pub fn max_hp(&self) -> i32 {
        self.stats.health
    }

    pub fn active_conditions(&self) -> &[String] {
        &self.active_conditions
    }

    pub fn has_condition(&self, tag: &str) -> bool {
        self.active_conditions.iter().any(|c| c == tag)
    }

    pub fn boss_meta(&self) -> Option<&BossMeta> {
        self.boss_meta.as_ref()
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Mutation
    // ──────────────────────────────────────────────────────────────────────────

    /// Adjust current HP by `delta`, clamped into `[0, max_hp]`.
    ///
    /// Saturating so an extreme delta pins to the nearest bound instead
    /// of wrapping.
    pub fn adjust_hp(&mut self, delta: i32) {
        let max = self.stats.health.max(0);
        self.current_hp = self.current_hp.saturating_add(delta).clamp(0, max);
    }

    /// Toggle a condition tag: added if absent, removed if present.
    ///
    /// Tags are stored as-is; validating against the recognized vocabulary
    /// is a UI-layer concern. Returns whether the tag is now active.
    pub fn toggle_condition(&mut self, tag: &str) -> bool {
        if let Some(idx) = self.active_conditions.iter().position(|c| c == tag) {
            self.active_conditions.remove(idx);
            false
        } else {
            self.active_conditions.push(tag.to_string());
            true
        }
    }
}
