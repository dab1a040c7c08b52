extern crate self as skirmish_domain;

pub mod conditions;
pub mod entities;
pub mod error;
pub mod grouping;
pub mod ids;
pub mod value_objects;

// Re-export entities
pub use entities::{Unit, UnitKind};

pub use error::DomainError;

// Re-export the grouping projection
pub use grouping::{group_units, UnitGroup, ALLY_GROUP_NAME};

// Re-export ID types
pub use ids::UnitId;

// Re-export value objects
pub use value_objects::{compute_boss_health, BossHealthExpr, BossMeta, UnitStats};

// Re-export the condition vocabulary
pub use conditions::{immunity_for, CONDITIONS};
