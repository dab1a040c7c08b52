//! Value objects for the encounter domain

mod boss_health;
mod boss_meta;
mod stats;

pub use boss_health::{compute_boss_health, BossHealthExpr};
pub use boss_meta::BossMeta;
pub use stats::UnitStats;
