//! Weapon slots: single sized receptacles within a mount.
//!
//! A slot holds zero or one weapon and is the only place size validation
//! happens; mounts never re-check compatibility themselves.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fitting::{FittingSize, WeaponSize};
use crate::weapon::MechWeapon;

/// Errors from equipping a weapon into a slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("a {size} weapon does not fit a {fitting} slot")]
    SizeMismatch {
        fitting: FittingSize,
        size: WeaponSize,
    },
}

/// A single weapon receptacle with a fixed fitting size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponSlot {
    size: FittingSize,
    weapon: Option<MechWeapon>,
}

impl WeaponSlot {
    /// Create an empty slot with the given fitting size.
    pub fn new(size: FittingSize) -> Self {
        WeaponSlot { size, weapon: None }
    }

    pub fn size(&self) -> FittingSize {
        self.size
    }

    /// The currently equipped weapon, if any.
    pub fn weapon(&self) -> Option<&MechWeapon> {
        self.weapon.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.weapon.is_none()
    }

    /// Equip `weapon`, replacing whatever was there.
    ///
    /// Returns the replaced weapon on success. Fails if the weapon's size
    /// is not accepted by this slot's fitting; the slot is unchanged on
    /// failure.
    pub fn equip(&mut self, weapon: MechWeapon) -> Result<Option<MechWeapon>, SlotError> {
        if !self.size.accepts(weapon.size()) {
            return Err(SlotError::SizeMismatch {
                fitting: self.size,
                size: weapon.size(),
            });
        }
        Ok(self.weapon.replace(weapon))
    }

    /// Remove and return the equipped weapon, if any.
    pub fn unequip(&mut self) -> Option<MechWeapon> {
        self.weapon.take()
    }

    /// Attach a weapon without size validation. Used for slots that are
    /// pre-loaded at construction, where the fitting accepts every size.
    pub(crate) fn preload(&mut self, weapon: MechWeapon) {
        self.weapon = Some(weapon);
    }

    /// Produce the persistable record for this slot.
    pub fn serialize(&self) -> SlotData {
        SlotData {
            size: self.size,
            weapon: self.weapon.clone(),
        }
    }

    /// Rebuild a slot from a persisted record. Trusted input: the stored
    /// weapon is restored without re-running the size check.
    pub fn deserialize(data: &SlotData) -> WeaponSlot {
        WeaponSlot {
            size: data.size,
            weapon: data.weapon.clone(),
        }
    }
}

/// Persisted form of a [`WeaponSlot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotData {
    pub size: FittingSize,
    pub weapon: Option<MechWeapon>,
}
