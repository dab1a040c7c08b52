//! Monster admission control
//!
//! The tracker's only consistency guard: given one snapshot of the roster,
//! decide which requested board slots may become units. A slot request is
//! dropped silently when its number is already taken for that monster name
//! or when the catalog has no stat line for the requested kind; dropped
//! candidates are ordinary outcomes, never errors.

use std::collections::HashSet;

use skirmish_domain::{Unit, UnitKind};

use crate::catalog::MonsterLevel;

/// Build the units admitted from `slots` against a roster snapshot.
///
/// `slots` is 1-indexed by board position: the candidate at position `i`
/// gets number `i`. `None` entries request nothing. When `level` is absent
/// the whole call is a no-op returning an empty list.
pub fn admit_monsters(
    existing: &[Unit],
    name: &str,
    slots: &[Option<UnitKind>],
    level: Option<&MonsterLevel>,
) -> Vec<Unit> {
    let Some(level) = level else {
        return Vec::new();
    };

    let taken: HashSet<u32> = existing
        .iter()
        .filter(|u| u.name() == name)
        .map(Unit::number)
        .collect();

    slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| {
            let kind = (*slot)?;
            let number = i as u32 + 1;
            if taken.contains(&number) {
                tracing::debug!(name, number, "slot dropped, number already occupied");
                return None;
            }
            let stats = level.stat_line(kind)?;
            Unit::monster(name, number, kind, stats.clone()).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_domain::UnitStats;

    fn level() -> MonsterLevel {
        MonsterLevel {
            level: 1,
            normal: UnitStats::new(6, 0, 2).with_range(4),
            elite: UnitStats::new(9, 0, 3).with_range(5),
        }
    }

    #[test]
    fn admits_requested_slots_with_position_numbers() {
        // positions 2 and 4 requested out of four slots
        let slots = vec![
            None,
            Some(UnitKind::Normal),
            None,
            Some(UnitKind::Elite),
        ];
        let admitted = admit_monsters(&[], "Ancient Artillery", &slots, Some(&level()));

        assert_eq!(admitted.len(), 2);
        assert_eq!(admitted[0].number(), 2);
        assert_eq!(admitted[0].kind(), UnitKind::Normal);
        assert_eq!(admitted[0].current_hp(), 6);
        assert_eq!(admitted[1].number(), 4);
        assert_eq!(admitted[1].kind(), UnitKind::Elite);
        assert_eq!(admitted[1].current_hp(), 9);
    }

    #[test]
    fn drops_slots_whose_number_is_taken() {
        let existing = vec![
            Unit::monster("X", 1, UnitKind::Normal, UnitStats::new(6, 0, 2)).expect("valid"),
        ];
        let slots = vec![Some(UnitKind::Normal), Some(UnitKind::Elite)];
        let admitted = admit_monsters(&existing, "X", &slots, Some(&level()));

        assert_eq!(admitted.len(), 1);
        assert_eq!(admitted[0].number(), 2);
        assert_eq!(admitted[0].kind(), UnitKind::Elite);
    }

    #[test]
    fn never_duplicates_a_preexisting_name_number_pair() {
        let existing = vec![
            Unit::monster("Ancient Artillery", 1, UnitKind::Normal, UnitStats::new(6, 0, 2))
                .expect("valid"),
            Unit::monster("Ancient Artillery", 3, UnitKind::Elite, UnitStats::new(9, 0, 3))
                .expect("valid"),
        ];
        let slots = vec![
            Some(UnitKind::Normal),
            Some(UnitKind::Elite),
            Some(UnitKind::Normal),
            Some(UnitKind::Elite),
        ];
        let admitted = admit_monsters(&existing, "Ancient Artillery", &slots, Some(&level()));

        let numbers: Vec<u32> = admitted.iter().map(Unit::number).collect();
        assert_eq!(numbers, vec![2, 4]);
    }

    #[test]
    fn other_names_do_not_block_numbers() {
        let existing = vec![
            Unit::monster("Y", 1, UnitKind::Normal, UnitStats::new(6, 0, 2)).expect("valid"),
        ];
        let slots = vec![Some(UnitKind::Normal)];
        let admitted = admit_monsters(&existing, "X", &slots, Some(&level()));
        assert_eq!(admitted.len(), 1);
        assert_eq!(admitted[0].number(), 1);
    }

    #[test]
    fn missing_level_stats_is_a_no_op() {
        let slots = vec![Some(UnitKind::Normal), Some(UnitKind::Elite)];
        assert!(admit_monsters(&[], "X", &slots, None).is_empty());
    }

    #[test]
    fn kinds_without_a_stat_line_are_dropped() {
        let slots = vec![Some(UnitKind::Boss), Some(UnitKind::Ally), Some(UnitKind::Normal)];
        let admitted = admit_monsters(&[], "X", &slots, Some(&level()));
        assert_eq!(admitted.len(), 1);
        assert_eq!(admitted[0].number(), 3);
    }

    #[test]
    fn empty_slots_admit_nothing() {
        assert!(admit_monsters(&[], "X", &[], Some(&level())).is_empty());
        assert!(admit_monsters(&[], "X", &[None, None], Some(&level())).is_empty());
    }
}
