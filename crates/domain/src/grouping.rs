//! Grouping/ordering projection of the roster
//!
//! A pure, recomputed-on-change projection of the flat unit list into the
//! groups the display layer renders: monster groups by name (elites before
//! normals, ascending number), singleton boss groups, and one merged ally
//! group last. The roster remains the single source of truth; this function
//! never mutates it.

use std::collections::HashMap;

use crate::entities::{Unit, UnitKind};

/// Reserved label for the merged ally group. All allies land here
/// regardless of their individual names.
pub const ALLY_GROUP_NAME: &str = "Allies";

/// One display group: a label and its ordered units.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitGroup {
    name: String,
    units: Vec<Unit>,
}

impl UnitGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// A group holding exactly one boss unit. Boss singletons keep their
    /// unit unsorted and slot in between monster groups and allies.
    pub fn is_boss_singleton(&self) -> bool {
        self.units.len() == 1 && self.units[0].kind() == UnitKind::Boss
    }

    pub fn is_ally_group(&self) -> bool {
        self.units.first().map(Unit::kind) == Some(UnitKind::Ally)
    }
}

/// Project the roster into ordered display groups.
///
/// Side-effect-free and idempotent: the same roster snapshot always yields
/// a structurally identical projection. The empty roster projects to an
/// empty sequence.
pub fn group_units(units: &[Unit]) -> Vec<UnitGroup> {
    let mut buckets: HashMap<&str, Vec<Unit>> = HashMap::new();
    for unit in units {
        let key = if unit.kind() == UnitKind::Ally {
            ALLY_GROUP_NAME
        } else {
            unit.name()
        };
        buckets.entry(key).or_default().push(unit.clone());
    }

    let mut groups: Vec<UnitGroup> = buckets
        .into_iter()
        .map(|(name, mut members)| {
            let boss_singleton =
                members.len() == 1 && members[0].kind() == UnitKind::Boss;
            if name == ALLY_GROUP_NAME {
                members.sort_by(|a, b| {
                    a.name()
                        .cmp(b.name())
                        .then_with(|| a.id().to_string().cmp(&b.id().to_string()))
                });
            } else if !boss_singleton {
                // Elites strictly precede normals, then ascending number
                members.sort_by_key(|u| (u.kind() != UnitKind::Elite, u.number()));
            }
            UnitGroup {
                name: name.to_string(),
                units: members,
            }
        })
        .collect();

    // Monster groups by name, then boss singletons by name, allies always last
    groups.sort_by(|a, b| group_rank(a).cmp(&group_rank(b)).then_with(|| a.name.cmp(&b.name)));
    groups
}

fn group_rank(group: &UnitGroup) -> u8 {
    if group.is_ally_group() {
        2
    } else if group.is_boss_singleton() {
        1
    } else {
        0
    }
}
