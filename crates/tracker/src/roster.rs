//! Roster store - the authoritative in-memory unit list
//!
//! The single source of truth for the encounter. Every mutation goes
//! through here: the store updates the list, recomputes the grouped
//! projection, and write-through persists the serialized snapshot to the
//! storage port. Readers only ever see a snapshot slice or the derived
//! projection, never a handle that permits out-of-band mutation.

use std::sync::Arc;

use skirmish_domain::{group_units, DomainError, Unit, UnitGroup, UnitId, UnitKind};

use crate::admission::admit_monsters;
use crate::builders::{build_ally, build_boss};
use crate::catalog::{BossLevel, MonsterLevel};
use crate::decode::decode_units;
use crate::ports::{storage_keys, StorageProvider};

pub struct Roster {
    units: Vec<Unit>,
    /// Derived projection, recomputed on every write
    grouped: Vec<UnitGroup>,
    storage: Arc<dyn StorageProvider>,
}

impl Roster {
    /// Load the persisted roster through the storage port, normalizing each
    /// record. Malformed persisted state yields an empty roster, never a
    /// startup failure.
    pub fn load(storage: Arc<dyn StorageProvider>) -> Self {
        let units: Vec<Unit> = match storage.load(storage_keys::PLAY_AREA) {
            Some(raw) => decode_units(&raw)
                .into_iter()
                .map(|decoded| {
                    if decoded.is_defaulted() {
                        tracing::debug!(
                            name = decoded.unit().name(),
                            "persisted unit record needed defaults"
                        );
                    }
                    decoded.into_unit()
                })
                .collect(),
            None => Vec::new(),
        };
        tracing::debug!(count = units.len(), "roster loaded");
        let grouped = group_units(&units);
        Self {
            units,
            grouped,
            storage,
        }
    }

    /// Snapshot of the unit list in insertion order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// The grouped display projection for the current roster state.
    pub fn grouped(&self) -> &[UnitGroup] {
        &self.grouped
    }

    /// Replace the whole unit list.
    pub fn replace(&mut self, units: Vec<Unit>) {
        self.units = units;
        self.commit();
    }

    /// Append units in order. Appending nothing leaves the roster (and the
    /// persisted snapshot) untouched.
    pub fn append(&mut self, units: Vec<Unit>) {
        if units.is_empty() {
            return;
        }
        self.units.extend(units);
        self.commit();
    }

    /// Admit and append monsters for the requested board slots.
    ///
    /// Evaluated against a single snapshot of the roster, appended as one
    /// atomic update; returns the units that survived admission.
    pub fn add_monsters(
        &mut self,
        name: &str,
        slots: &[Option<UnitKind>],
        level: Option<&MonsterLevel>,
    ) -> Vec<Unit> {
        let admitted = admit_monsters(&self.units, name, slots, level);
        self.append(admitted.clone());
        admitted
    }

    /// Add a boss from its catalog stat line.
    pub fn add_boss(&mut self, name: &str, level: &BossLevel, party_count: i32) -> UnitId {
        let boss = build_boss(name, level, party_count);
        let id = boss.id();
        self.append(vec![boss]);
        id
    }

    /// Add an ally; blank names auto-generate `"Ally N"`.
    pub fn add_ally(&mut self, name: &str, health: i32) -> UnitId {
        let ally = build_ally(name, health, &self.units);
        let id = ally.id();
        self.append(vec![ally]);
        id
    }

    /// Remove a unit by id. Idempotently silent when the id is absent.
    pub fn remove_by_id(&mut self, id: &UnitId) {
        self.units.retain(|u| u.id() != *id);
        self.commit();
    }

    /// Adjust a unit's HP by `delta`, clamped into `[0, max_hp]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` when no unit has the given id.
    pub fn adjust_hp(&mut self, id: &UnitId, delta: i32) -> Result<(), DomainError> {
        self.unit_mut(id)?.adjust_hp(delta);
        self.commit();
        Ok(())
    }

    /// Toggle a condition tag on a unit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` when no unit has the given id.
    pub fn toggle_condition(&mut self, id: &UnitId, tag: &str) -> Result<(), DomainError> {
        self.unit_mut(id)?.toggle_condition(tag);
        self.commit();
        Ok(())
    }

    /// Empty the roster and drop the persisted key. Used by session reset.
    pub(crate) fn clear(&mut self) {
        self.units.clear();
        self.grouped.clear();
        self.storage.remove(storage_keys::PLAY_AREA);
    }

    fn unit_mut(&mut self, id: &UnitId) -> Result<&mut Unit, DomainError> {
        self.units
            .iter_mut()
            .find(|u| u.id() == *id)
            .ok_or_else(|| DomainError::not_found("Unit", id.to_string()))
    }

    /// Recompute the projection and write-through persist. Persistence is
    /// best-effort; the in-memory roster is already consistent.
    fn commit(&mut self) {
        self.grouped = group_units(&self.units);
        match serde_json::to_string(&self.units) {
            Ok(json) => self.storage.save(storage_keys::PLAY_AREA, &json),
            Err(e) => tracing::error!("Failed to serialize roster snapshot: {}", e),
        }
    }
}
