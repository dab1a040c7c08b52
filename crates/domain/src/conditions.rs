//! The fixed condition vocabulary shared with UI layers.
//!
//! The roster store itself does not validate condition tags against this
//! list; it exists so UI layers render a consistent set of toggles and can
//! match boss immunities against active conditions.

/// Status effects a UI can toggle on a unit.
pub const CONDITIONS: [&str; 7] = [
    "strengthened",
    "muddled",
    "poisoned",
    "wounded",
    "stunned",
    "immobilized",
    "disarmed",
];

/// The immunity name printed on boss stat cards for a toggleable condition.
///
/// Returns `None` for unknown tags and for `strengthened`, which has no
/// immunity counterpart.
pub fn immunity_for(condition: &str) -> Option<&'static str> {
    match condition {
        "muddled" => Some("muddle"),
        "poisoned" => Some("poison"),
        "wounded" => Some("wound"),
        "stunned" => Some("stun"),
        "immobilized" => Some("immobilize"),
        "disarmed" => Some("disarm"),
        _ => None,
    }
}
