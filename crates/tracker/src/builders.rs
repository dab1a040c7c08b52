//! Boss and ally construction
//!
//! Bosses and allies bypass the per-number collision check but go through
//! the same roster append primitive as monsters. Boss HP comes from the
//! catalog health expression scaled by party size; ability texts have their
//! `{{icon}}` tokens replaced with a placeholder the display layer renders.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use skirmish_domain::{compute_boss_health, BossMeta, Unit, UnitKind, UnitStats};

use crate::catalog::BossLevel;

static ICON_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{.*?\}\}").expect("icon token pattern is valid"));

/// Build a boss unit from its catalog stat line.
///
/// The evaluated health lands in both `current_hp` and the stat-line max;
/// the raw expression is kept on the boss card for display.
pub fn build_boss(name: &str, level: &BossLevel, party_count: i32) -> Unit {
    let health_expr = level.health.as_expr_string();
    let hp = compute_boss_health(&health_expr, party_count);

    let mut stats = UnitStats::new(hp, level.movement, level.attack);
    stats.range = level.range;

    let meta = BossMeta::new(
        health_expr,
        vec![render_special(&level.special1), render_special(&level.special2)],
        level.immunities.clone(),
        level.notes.clone(),
    );
    Unit::boss(name, stats, meta)
}

/// Join one special-ability line list and substitute icon tokens.
fn render_special(lines: &[String]) -> String {
    ICON_TOKEN.replace_all(&lines.join(", "), "\u{1F7E5}").into_owned()
}

/// The number the next auto-named ally gets: existing ally count + 1.
pub fn next_ally_number(existing: &[Unit]) -> u32 {
    existing.iter().filter(|u| u.kind() == UnitKind::Ally).count() as u32 + 1
}

/// Build an ally unit. Blank names auto-generate `"Ally N"`.
pub fn build_ally(name: &str, health: i32, existing: &[Unit]) -> Unit {
    let trimmed = name.trim();
    let name = if trimmed.is_empty() {
        format!("Ally {}", next_ally_number(existing))
    } else {
        trimmed.to_string()
    };
    Unit::ally(name, health)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HealthValue;

    fn boss_level(health: HealthValue) -> BossLevel {
        BossLevel {
            level: 0,
            health,
            movement: 3,
            attack: 4,
            range: None,
            special1: vec!["Move to next door and reveal room".to_string()],
            special2: vec!["Summon Living Bones".to_string()],
            immunities: vec!["Stun".to_string(), "Immobilize".to_string()],
            notes: Some("Test notes".to_string()),
        }
    }

    #[test]
    fn boss_health_scales_with_party_count() {
        let level = boss_level(HealthValue::Expr("6xC".to_string()));
        let boss = build_boss("Test Boss", &level, 4);
        assert_eq!(boss.current_hp(), 24);
        assert_eq!(boss.max_hp(), 24);
        assert_eq!(boss.kind(), UnitKind::Boss);
        assert_eq!(boss.number(), 1);
        let meta = boss.boss_meta().expect("boss meta");
        assert_eq!(meta.health_expr(), "6xC");
        assert_eq!(meta.immunities(), ["Stun".to_string(), "Immobilize".to_string()]);
        assert_eq!(meta.notes(), Some("Test notes"));
        assert_eq!(meta.specials().len(), 2);
    }

    #[test]
    fn numeric_catalog_health_does_not_evaluate() {
        // a bare number is not an `NxC` expression, so evaluation falls
        // back to zero exactly like the display layer expects
        let level = boss_level(HealthValue::Number(40));
        let boss = build_boss("Golem", &level, 4);
        assert_eq!(boss.current_hp(), 0);
        assert_eq!(boss.boss_meta().expect("meta").health_expr(), "40");
    }

    #[test]
    fn special_lines_join_and_icon_tokens_substitute() {
        let mut level = boss_level(HealthValue::Expr("8xC".to_string()));
        level.special1 = vec![
            "Shield {{shield}} 2".to_string(),
            "Retaliate 1".to_string(),
        ];
        level.special2 = vec![];
        let boss = build_boss("Test Boss", &level, 2);
        let meta = boss.boss_meta().expect("boss meta");
        assert_eq!(meta.specials()[0], "Shield \u{1F7E5} 2, Retaliate 1");
        assert_eq!(meta.specials()[1], "");
    }

    #[test]
    fn ally_names_auto_increment_when_blank() {
        let first = build_ally("", 10, &[]);
        assert_eq!(first.name(), "Ally 1");

        let existing = vec![first];
        let second = build_ally("   ", 12, &existing);
        assert_eq!(second.name(), "Ally 2");
    }

    #[test]
    fn ally_custom_names_are_trimmed() {
        let ally = build_ally("   Trimmed Name   ", 8, &[]);
        assert_eq!(ally.name(), "Trimmed Name");
        assert_eq!(ally.current_hp(), 8);
        assert_eq!(ally.max_hp(), 8);
        assert_eq!(ally.number(), 1);
    }

    #[test]
    fn non_ally_units_do_not_affect_auto_numbering() {
        let monster = Unit::monster("Imp", 1, UnitKind::Normal, UnitStats::new(6, 1, 2))
            .expect("valid monster");
        assert_eq!(next_ally_number(&[monster]), 1);
    }
}
