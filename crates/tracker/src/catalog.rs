//! Static monster/boss stat catalog
//!
//! Serde shapes for the read-only stat tables shipped as JSON. The tracker
//! looks an entry up once per add-action and copies the stat line onto the
//! new unit; it never caches or mutates the catalog.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use skirmish_domain::UnitStats;

/// The whole catalog: monster entries and boss entries keyed by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub monsters: HashMap<String, MonsterEntry>,
    #[serde(default)]
    pub bosses: HashMap<String, BossEntry>,
}

/// All level entries for one monster name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterEntry {
    #[serde(default)]
    pub level: Vec<MonsterLevel>,
}

/// Monster stat lines at one level: a normal and an elite variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterLevel {
    pub level: i32,
    pub normal: UnitStats,
    pub elite: UnitStats,
}

impl MonsterLevel {
    /// The stat line backing a requested kind tag. Boss and ally tags have
    /// no monster stat line, so requesting them yields `None`.
    pub fn stat_line(&self, kind: skirmish_domain::UnitKind) -> Option<&UnitStats> {
        match kind {
            skirmish_domain::UnitKind::Normal => Some(&self.normal),
            skirmish_domain::UnitKind::Elite => Some(&self.elite),
            _ => None,
        }
    }
}

/// All level entries for one boss name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossEntry {
    #[serde(default)]
    pub level: Vec<BossLevel>,
}

/// Boss stats at one level. Health is usually an expression like `"8xC"`,
/// occasionally a bare number in older data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossLevel {
    pub level: i32,
    pub health: HealthValue,
    #[serde(rename = "move", default)]
    pub movement: i32,
    #[serde(default)]
    pub attack: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<i32>,
    #[serde(default)]
    pub special1: Vec<String>,
    #[serde(default)]
    pub special2: Vec<String>,
    #[serde(default)]
    pub immunities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Boss health as stored in the catalog: a formula string or a raw number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HealthValue {
    Number(i32),
    Expr(String),
}

impl HealthValue {
    /// The string form handed to the health expression evaluator.
    pub fn as_expr_string(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Expr(s) => s.clone(),
        }
    }
}

impl Catalog {
    /// Parse a catalog from its JSON source.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Look up a monster's stat lines for a scenario level.
    pub fn monster_level(&self, name: &str, level: i32) -> Option<&MonsterLevel> {
        self.monsters
            .get(name)?
            .level
            .iter()
            .find(|l| l.level == level)
    }

    /// Look up a boss's stat line for a scenario level.
    pub fn boss_level(&self, name: &str, level: i32) -> Option<&BossLevel> {
        self.bosses
            .get(name)?
            .level
            .iter()
            .find(|l| l.level == level)
    }
}
