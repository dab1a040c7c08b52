//! Persisted-record decode and normalization
//!
//! The roster is persisted as a plain JSON array of unit records. Old or
//! hand-edited data gets normalized on load instead of failing startup:
//! unknown kinds fall back to normal, missing numbers to their defaults,
//! missing arrays to empty. The outcome of each record is an explicit
//! `Parsed` vs `Defaulted` sum so the silent-default behavior stays
//! auditable. A top-level value that is not an array discards to an empty
//! roster.

use serde_json::{Map, Value};
use uuid::Uuid;

use skirmish_domain::{BossMeta, Unit, UnitId, UnitKind, UnitStats};

/// Outcome of decoding one persisted unit record.
#[derive(Debug, Clone)]
pub enum Decoded {
    /// Record matched the expected shape field-for-field.
    Parsed(Unit),
    /// Record was missing or malformed somewhere and defaults were applied.
    Defaulted(Unit),
}

impl Decoded {
    pub fn into_unit(self) -> Unit {
        match self {
            Self::Parsed(unit) | Self::Defaulted(unit) => unit,
        }
    }

    pub fn unit(&self) -> &Unit {
        match self {
            Self::Parsed(unit) | Self::Defaulted(unit) => unit,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted(_))
    }
}

/// Decode a persisted roster snapshot.
///
/// Malformed top-level JSON or a non-array value yields an empty list
/// rather than an error; startup must never fail on bad persisted state.
pub fn decode_units(raw: &str) -> Vec<Decoded> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Discarding persisted roster, malformed JSON: {}", e);
            return Vec::new();
        }
    };
    let Some(items) = value.as_array() else {
        tracing::warn!("Discarding persisted roster, top-level value is not an array");
        return Vec::new();
    };
    items.iter().map(decode_unit).collect()
}

fn decode_unit(value: &Value) -> Decoded {
    let mut defaulted = !value.is_object();
    let obj = value.as_object();

    let id = match field(obj, "id").and_then(Value::as_str) {
        Some(s) => match Uuid::parse_str(s) {
            Ok(uuid) => UnitId::from_uuid(uuid),
            Err(_) => {
                defaulted = true;
                UnitId::new()
            }
        },
        None => {
            defaulted = true;
            UnitId::new()
        }
    };

    let name = string_or(obj, "name", "", &mut defaulted);
    let number = u32_or(obj, "number", 1, &mut defaulted);

    let kind = match field(obj, "type").and_then(Value::as_str) {
        Some("boss") => UnitKind::Boss,
        Some("elite") => UnitKind::Elite,
        Some("ally") => UnitKind::Ally,
        Some("normal") => UnitKind::Normal,
        _ => {
            defaulted = true;
            UnitKind::Normal
        }
    };

    let stats = decode_stats(field(obj, "stats"), &mut defaulted);

    let current_hp = match field(obj, "currentHp").and_then(Value::as_i64) {
        Some(hp) => clamp_i32(hp),
        None => {
            defaulted = true;
            stats.health
        }
    };

    let active_conditions = string_list(field(obj, "activeConditions"), &mut defaulted);

    let boss_meta = if kind == UnitKind::Boss {
        Some(decode_boss_meta(field(obj, "bossMeta"), &mut defaulted))
    } else {
        None
    };

    let unit = Unit::from_storage(
        id,
        name,
        number,
        kind,
        stats,
        current_hp,
        active_conditions,
        boss_meta,
    );
    if defaulted {
        Decoded::Defaulted(unit)
    } else {
        Decoded::Parsed(unit)
    }
}

fn decode_stats(value: Option<&Value>, defaulted: &mut bool) -> UnitStats {
    let obj = value.and_then(Value::as_object);
    if obj.is_none() {
        *defaulted = true;
    }
    let health = i32_or(obj, "health", 0, defaulted);
    let movement = i32_or(obj, "move", 0, defaulted);
    let attack = i32_or(obj, "attack", 0, defaulted);
    // range is legitimately optional; only a present-but-non-numeric value
    // counts as a default
    let range = match field(obj, "range") {
        None | Some(Value::Null) => None,
        Some(v) => match v.as_i64() {
            Some(r) => Some(clamp_i32(r)),
            None => {
                *defaulted = true;
                None
            }
        },
    };
    let attributes = string_list(field(obj, "attributes"), defaulted);
    UnitStats {
        health,
        movement,
        attack,
        range,
        attributes,
    }
}

fn decode_boss_meta(value: Option<&Value>, defaulted: &mut bool) -> BossMeta {
    let obj = value.and_then(Value::as_object);
    if obj.is_none() {
        *defaulted = true;
    }
    let health_expr = string_or(obj, "healthExpr", "", defaulted);
    let specials = string_list(field(obj, "specials"), defaulted);
    let immunities = string_list(field(obj, "immunities"), defaulted);
    // notes are optional and empty notes are always dropped
    let notes = field(obj, "notes")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    BossMeta::new(health_expr, specials, immunities, notes)
}

fn field<'a>(obj: Option<&'a Map<String, Value>>, key: &str) -> Option<&'a Value> {
    obj.and_then(|o| o.get(key))
}

fn string_or(
    obj: Option<&Map<String, Value>>,
    key: &str,
    default: &str,
    defaulted: &mut bool,
) -> String {
    match field(obj, key).and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => {
            *defaulted = true;
            default.to_string()
        }
    }
}

fn i32_or(obj: Option<&Map<String, Value>>, key: &str, default: i32, defaulted: &mut bool) -> i32 {
    match field(obj, key).and_then(Value::as_i64) {
        Some(n) => clamp_i32(n),
        None => {
            *defaulted = true;
            default
        }
    }
}

fn u32_or(obj: Option<&Map<String, Value>>, key: &str, default: u32, defaulted: &mut bool) -> u32 {
    match field(obj, key).and_then(Value::as_u64) {
        Some(n) => u32::try_from(n).unwrap_or(u32::MAX),
        None => {
            *defaulted = true;
            default
        }
    }
}

fn string_list(value: Option<&Value>, defaulted: &mut bool) -> Vec<String> {
    match value.and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => {
            *defaulted = true;
            Vec::new()
        }
    }
}

fn clamp_i32(n: i64) -> i32 {
    i32::try_from(n).unwrap_or(if n < 0 { i32::MIN } else { i32::MAX })
}
