//! Weapon mounts: the attachment points on a mech frame.
//!
//! A mount's shape fixes its slot layout at construction (see
//! [`MountType::layout`]). The one dynamic rule is the Flex shape: while
//! its single flex slot holds an auxiliary-sized weapon, the mount exposes
//! a second, independent auxiliary slot. That view is recomputed on every
//! read, never cached, so equipping or unequipping a weapon changes the
//! answer without any explicit rebuild step.

use serde::{Deserialize, Serialize};

use crate::bonus::CoreBonus;
use crate::fitting::{MountType, WeaponSize};
use crate::slot::{SlotData, WeaponSlot};
use crate::weapon::MechWeapon;

/// State shared by both mount kinds.
#[derive(Debug, Clone)]
struct MountCore {
    mount_type: MountType,
    lock: bool,
    slots: Vec<WeaponSlot>,
    extra: Vec<WeaponSlot>,
}

impl MountCore {
    fn new(mount_type: MountType) -> Self {
        let (primary, extra) = mount_type.layout();
        MountCore {
            mount_type,
            lock: false,
            slots: primary.iter().copied().map(WeaponSlot::new).collect(),
            extra: extra.iter().copied().map(WeaponSlot::new).collect(),
        }
    }

    /// True while the flex slot holds an auxiliary weapon, i.e. while the
    /// hidden extra slot is folded into the visible sequence.
    fn flex_expanded(&self) -> bool {
        self.mount_type == MountType::Flex
            && self
                .slots
                .first()
                .and_then(WeaponSlot::weapon)
                .is_some_and(|w| w.size() == WeaponSize::Auxiliary)
    }

    fn slots(&self) -> Vec<&WeaponSlot> {
        if self.flex_expanded() {
            self.slots.iter().chain(self.extra.iter()).collect()
        } else {
            self.slots.iter().collect()
        }
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut WeaponSlot> {
        let primary = self.slots.len();
        if index < primary {
            self.slots.get_mut(index)
        } else if self.flex_expanded() {
            self.extra.get_mut(index - primary)
        } else {
            None
        }
    }

    /// Weapons across the primary slots, in slot order. The hidden extra
    /// slot's weapon is never included here; it is reachable only through
    /// the expanded slot view.
    fn weapons(&self) -> Vec<&MechWeapon> {
        self.slots.iter().filter_map(WeaponSlot::weapon).collect()
    }
}

/// A fixed mount carrying a weapon built into a frame or system.
///
/// Pre-loaded at construction and effectively immutable afterwards: no
/// public operation detaches or replaces the weapon, locks the mount, or
/// adds bonuses.
#[derive(Debug, Clone)]
pub struct IntegratedMount {
    core: MountCore,
    item_source: String,
}

impl IntegratedMount {
    pub fn new(weapon: MechWeapon, item_source: impl Into<String>) -> Self {
        let mut core = MountCore::new(MountType::Integrated);
        // Integrated fittings accept every weapon size.
        core.slots[0].preload(weapon);
        IntegratedMount {
            core,
            item_source: item_source.into(),
        }
    }

    pub fn mount_type(&self) -> MountType {
        self.core.mount_type
    }

    /// The built-in weapon. Always present after construction.
    pub fn weapon(&self) -> Option<&MechWeapon> {
        self.core.slots.first().and_then(WeaponSlot::weapon)
    }

    /// Identifier of the frame or system that grants this mount.
    pub fn item_source(&self) -> &str {
        &self.item_source
    }

    pub fn slots(&self) -> Vec<&WeaponSlot> {
        self.core.slots()
    }

    pub fn weapons(&self) -> Vec<&MechWeapon> {
        self.core.weapons()
    }

    pub fn is_locked(&self) -> bool {
        self.core.lock
    }
}

/// A player-adjustable mount.
#[derive(Debug, Clone)]
pub struct EquippableMount {
    core: MountCore,
    bonus_effects: Vec<CoreBonus>,
}

impl EquippableMount {
    /// Create an empty, unlocked mount of the given shape.
    ///
    /// `mount_type` must not be [`MountType::Integrated`]; that shape is
    /// reserved for [`IntegratedMount`]. The precondition is the caller's
    /// to uphold and is not checked here.
    pub fn new(mount_type: MountType) -> Self {
        EquippableMount {
            core: MountCore::new(mount_type),
            bonus_effects: Vec::new(),
        }
    }

    pub fn mount_type(&self) -> MountType {
        self.core.mount_type
    }

    /// The effective slot view, recomputed on every call.
    ///
    /// For every shape but Flex this is just the primary slots. A Flex
    /// mount whose flex slot holds an auxiliary weapon additionally
    /// exposes its hidden auxiliary slot as a second entry.
    pub fn slots(&self) -> Vec<&WeaponSlot> {
        self.core.slots()
    }

    /// Mutable access to a slot by index into the effective view.
    ///
    /// Returns `None` for indices past the current view, including the
    /// hidden extra slot of a non-expanded Flex mount.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut WeaponSlot> {
        self.core.slot_mut(index)
    }

    /// Weapons equipped across the primary slots, in slot order.
    pub fn weapons(&self) -> Vec<&MechWeapon> {
        self.core.weapons()
    }

    pub fn is_locked(&self) -> bool {
        self.core.lock
    }

    /// Set the lock flag. Locking is advisory: this mount still accepts
    /// slot mutations, and callers that care must consult
    /// [`is_locked`](Self::is_locked) first.
    pub fn lock(&mut self) {
        self.core.lock = true;
    }

    pub fn unlock(&mut self) {
        self.core.lock = false;
    }

    /// Append a bonus built from `id`. No de-duplication: adding the same
    /// id twice yields two entries.
    pub fn add_core_bonus(&mut self, id: &str) {
        self.bonus_effects.push(CoreBonus::new(id));
    }

    /// Remove the first bonus structurally equal to `bonus`. A no-op if
    /// nothing matches.
    pub fn remove_core_bonus(&mut self, bonus: &CoreBonus) {
        if let Some(index) = self.bonus_effects.iter().position(|b| b == bonus) {
            self.bonus_effects.remove(index);
        }
    }

    /// Applied bonuses, in insertion order.
    pub fn bonus_effects(&self) -> &[CoreBonus] {
        &self.bonus_effects
    }

    /// Produce the persistable record for this mount.
    ///
    /// Slots are captured from the effective view, so a Flex mount holding
    /// an auxiliary weapon serializes with two slot entries.
    pub fn serialize(&self) -> MountData {
        MountData {
            mount_type: self.mount_type(),
            lock: self.is_locked(),
            slots: self.slots().iter().map(|s| s.serialize()).collect(),
            bonus_effects: self
                .bonus_effects
                .iter()
                .map(|b| b.id().to_string())
                .collect(),
        }
    }

    /// Rebuild a mount from a persisted record.
    ///
    /// Restores the slot sequence only: `lock` and `bonus_effects` are
    /// written by [`serialize`](Self::serialize) but not read back, and a
    /// Flex record saved in its expanded two-slot form is restored
    /// verbatim into the primary sequence. The constructor-built hidden
    /// extra slot stays in place alongside it, so the effective view of
    /// such a mount shows three entries (the restored flex and auxiliary
    /// slots plus the still-hidden extra one). Callers needing full
    /// fidelity must reapply lock state and bonuses themselves. Trusted
    /// input: slot cardinality and sizes are not revalidated against the
    /// shape table.
    pub fn deserialize(data: &MountData) -> EquippableMount {
        let mut mount = EquippableMount::new(data.mount_type);
        mount.core.slots = data.slots.iter().map(WeaponSlot::deserialize).collect();
        mount
    }
}

/// The closed set of mount kinds a frame can carry.
#[derive(Debug, Clone)]
pub enum Mount {
    Integrated(IntegratedMount),
    Equippable(EquippableMount),
}

impl Mount {
    pub fn mount_type(&self) -> MountType {
        match self {
            Mount::Integrated(m) => m.mount_type(),
            Mount::Equippable(m) => m.mount_type(),
        }
    }

    /// The effective slot view of the underlying mount.
    pub fn slots(&self) -> Vec<&WeaponSlot> {
        match self {
            Mount::Integrated(m) => m.slots(),
            Mount::Equippable(m) => m.slots(),
        }
    }

    pub fn weapons(&self) -> Vec<&MechWeapon> {
        match self {
            Mount::Integrated(m) => m.weapons(),
            Mount::Equippable(m) => m.weapons(),
        }
    }

    pub fn is_locked(&self) -> bool {
        match self {
            Mount::Integrated(m) => m.is_locked(),
            Mount::Equippable(m) => m.is_locked(),
        }
    }
}

impl From<IntegratedMount> for Mount {
    fn from(mount: IntegratedMount) -> Self {
        Mount::Integrated(mount)
    }
}

impl From<EquippableMount> for Mount {
    fn from(mount: EquippableMount) -> Self {
        Mount::Equippable(mount)
    }
}

/// Persisted form of an [`EquippableMount`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountData {
    pub mount_type: MountType,
    pub lock: bool,
    pub slots: Vec<SlotData>,
    pub bonus_effects: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitting::FittingSize;

    fn weapon(id: &str, size: WeaponSize) -> MechWeapon {
        MechWeapon::new(id, id, size)
    }

    fn slot_sizes(mount: &EquippableMount) -> Vec<FittingSize> {
        mount.slots().iter().map(|s| s.size()).collect()
    }

    #[test]
    fn test_fixed_shapes_match_layout_table() {
        for (mount_type, expected) in [
            (MountType::Main, vec![FittingSize::Main]),
            (MountType::Heavy, vec![FittingSize::Heavy]),
            (
                MountType::AuxAux,
                vec![FittingSize::Auxiliary, FittingSize::Auxiliary],
            ),
            (
                MountType::MainAux,
                vec![FittingSize::Main, FittingSize::Auxiliary],
            ),
        ] {
            let mount = EquippableMount::new(mount_type);
            assert_eq!(slot_sizes(&mount), expected, "{mount_type}");
            // Reading the view must not change it.
            assert_eq!(slot_sizes(&mount), expected, "{mount_type}");
        }
    }

    #[test]
    fn test_flex_expands_for_auxiliary_weapon() {
        let mut mount = EquippableMount::new(MountType::Flex);
        assert_eq!(slot_sizes(&mount), vec![FittingSize::Flex]);

        mount
            .slot_mut(0)
            .unwrap()
            .equip(weapon("mw_pistol", WeaponSize::Auxiliary))
            .unwrap();

        let view = mount.slots();
        assert_eq!(view.len(), 2);
        assert_eq!(view[1].size(), FittingSize::Auxiliary);
        assert!(view[1].is_empty());
    }

    #[test]
    fn test_flex_stays_collapsed_for_main_weapon() {
        let mut mount = EquippableMount::new(MountType::Flex);
        mount
            .slot_mut(0)
            .unwrap()
            .equip(weapon("mw_rifle", WeaponSize::Main))
            .unwrap();
        assert_eq!(mount.slots().len(), 1);
        // The hidden slot is not addressable while collapsed.
        assert!(mount.slot_mut(1).is_none());
    }

    #[test]
    fn test_flex_collapses_on_unequip() {
        let mut mount = EquippableMount::new(MountType::Flex);
        mount
            .slot_mut(0)
            .unwrap()
            .equip(weapon("mw_pistol", WeaponSize::Auxiliary))
            .unwrap();
        assert_eq!(mount.slots().len(), 2);

        mount.slot_mut(0).unwrap().unequip();
        assert_eq!(mount.slots().len(), 1);
    }

    #[test]
    fn test_flex_view_is_idempotent() {
        let mut mount = EquippableMount::new(MountType::Flex);
        mount
            .slot_mut(0)
            .unwrap()
            .equip(weapon("mw_pistol", WeaponSize::Auxiliary))
            .unwrap();

        let first: Vec<FittingSize> = slot_sizes(&mount);
        let second: Vec<FittingSize> = slot_sizes(&mount);
        assert_eq!(first, second);
    }

    #[test]
    fn test_flex_extra_slot_survives_collapse() {
        let mut mount = EquippableMount::new(MountType::Flex);
        mount
            .slot_mut(0)
            .unwrap()
            .equip(weapon("mw_pistol", WeaponSize::Auxiliary))
            .unwrap();
        mount
            .slot_mut(1)
            .unwrap()
            .equip(weapon("mw_nexus", WeaponSize::Auxiliary))
            .unwrap();

        // Swapping in a main weapon hides the extra slot but keeps its
        // contents; re-expanding brings the same weapon back.
        mount
            .slot_mut(0)
            .unwrap()
            .equip(weapon("mw_rifle", WeaponSize::Main))
            .unwrap();
        assert_eq!(mount.slots().len(), 1);

        mount
            .slot_mut(0)
            .unwrap()
            .equip(weapon("mw_pistol", WeaponSize::Auxiliary))
            .unwrap();
        let view = mount.slots();
        assert_eq!(view[1].weapon().map(MechWeapon::id), Some("mw_nexus"));
    }

    #[test]
    fn test_weapons_covers_primary_slots_only() {
        let mut mount = EquippableMount::new(MountType::MainAux);
        mount
            .slot_mut(1)
            .unwrap()
            .equip(weapon("mw_pistol", WeaponSize::Auxiliary))
            .unwrap();

        let weapons = mount.weapons();
        assert_eq!(weapons.len(), 1);
        assert_eq!(weapons[0].id(), "mw_pistol");
    }

    #[test]
    fn test_weapons_excludes_hidden_extra_slot() {
        let mut mount = EquippableMount::new(MountType::Flex);
        mount
            .slot_mut(0)
            .unwrap()
            .equip(weapon("mw_pistol", WeaponSize::Auxiliary))
            .unwrap();
        mount
            .slot_mut(1)
            .unwrap()
            .equip(weapon("mw_nexus", WeaponSize::Auxiliary))
            .unwrap();

        // The extra slot's weapon is visible through the slot view but not
        // through the primary weapon list.
        assert_eq!(mount.slots().len(), 2);
        let weapons = mount.weapons();
        assert_eq!(weapons.len(), 1);
        assert_eq!(weapons[0].id(), "mw_pistol");
    }

    #[test]
    fn test_lock_flag() {
        let mut mount = EquippableMount::new(MountType::Main);
        assert!(!mount.is_locked());
        mount.lock();
        assert!(mount.is_locked());
        mount.unlock();
        assert!(!mount.is_locked());
    }

    #[test]
    fn test_core_bonus_add_remove() {
        let mut mount = EquippableMount::new(MountType::Heavy);
        mount.add_core_bonus("cb_mount_retrofit");
        assert_eq!(mount.bonus_effects().len(), 1);

        // Removal matches by value, so a rebuilt bonus works.
        mount.remove_core_bonus(&CoreBonus::new("cb_mount_retrofit"));
        assert!(mount.bonus_effects().is_empty());
    }

    #[test]
    fn test_core_bonus_duplicates_removed_one_at_a_time() {
        let mut mount = EquippableMount::new(MountType::Heavy);
        mount.add_core_bonus("cb_mount_retrofit");
        mount.add_core_bonus("cb_mount_retrofit");
        assert_eq!(mount.bonus_effects().len(), 2);

        mount.remove_core_bonus(&CoreBonus::new("cb_mount_retrofit"));
        assert_eq!(mount.bonus_effects().len(), 1);
        assert_eq!(mount.bonus_effects()[0].id(), "cb_mount_retrofit");
    }

    #[test]
    fn test_remove_missing_bonus_is_noop() {
        let mut mount = EquippableMount::new(MountType::Heavy);
        mount.add_core_bonus("cb_mount_retrofit");
        mount.remove_core_bonus(&CoreBonus::new("cb_auto_stabilizer"));
        assert_eq!(mount.bonus_effects().len(), 1);
    }

    #[test]
    fn test_serialize_captures_effective_view() {
        let mut mount = EquippableMount::new(MountType::Flex);
        mount
            .slot_mut(0)
            .unwrap()
            .equip(weapon("mw_pistol", WeaponSize::Auxiliary))
            .unwrap();

        let data = mount.serialize();
        assert_eq!(data.mount_type, MountType::Flex);
        assert_eq!(data.slots.len(), 2);
        assert_eq!(data.slots[0].size, FittingSize::Flex);
        assert_eq!(data.slots[1].size, FittingSize::Auxiliary);
    }

    #[test]
    fn test_round_trip_restores_slots_but_not_lock_or_bonuses() {
        let mut mount = EquippableMount::new(MountType::MainAux);
        mount
            .slot_mut(0)
            .unwrap()
            .equip(weapon("mw_rifle", WeaponSize::Main))
            .unwrap();
        mount.lock();
        mount.add_core_bonus("cb_mount_retrofit");

        let data = mount.serialize();
        assert!(data.lock);
        assert_eq!(data.bonus_effects, vec!["cb_mount_retrofit".to_string()]);

        let restored = EquippableMount::deserialize(&data);
        assert_eq!(restored.mount_type(), MountType::MainAux);
        assert_eq!(
            slot_sizes(&restored),
            vec![FittingSize::Main, FittingSize::Auxiliary]
        );
        assert_eq!(restored.weapons().len(), 1);
        assert_eq!(restored.weapons()[0].id(), "mw_rifle");

        // Deliberately lossy: the record carries lock and bonus ids, but
        // deserialization restores neither.
        assert!(!restored.is_locked());
        assert!(restored.bonus_effects().is_empty());
    }

    #[test]
    fn test_deserialize_expanded_flex_record_double_exposes_aux() {
        let mut mount = EquippableMount::new(MountType::Flex);
        mount
            .slot_mut(0)
            .unwrap()
            .equip(weapon("mw_pistol", WeaponSize::Auxiliary))
            .unwrap();

        let data = mount.serialize();
        assert_eq!(data.slots.len(), 2);

        // The expanded view lands in the primary sequence unchanged, and
        // the constructor-built hidden slot stays alongside it. With an
        // auxiliary weapon in the flex slot the view re-expands, so the
        // restored mount shows three entries.
        let restored = EquippableMount::deserialize(&data);
        assert_eq!(restored.weapons().len(), 1);
        assert_eq!(
            slot_sizes(&restored),
            vec![
                FittingSize::Flex,
                FittingSize::Auxiliary,
                FittingSize::Auxiliary
            ]
        );
    }

    #[test]
    fn test_mount_data_json_round_trip() {
        let mut mount = EquippableMount::new(MountType::AuxAux);
        mount
            .slot_mut(0)
            .unwrap()
            .equip(weapon("mw_pistol", WeaponSize::Auxiliary))
            .unwrap();
        mount.add_core_bonus("cb_mount_retrofit");

        let data = mount.serialize();
        let json = serde_json::to_string(&data).unwrap();
        let parsed: MountData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mount_type"], "aux_aux");
        assert_eq!(value["lock"], false);
        assert_eq!(value["bonus_effects"][0], "cb_mount_retrofit");
    }

    #[test]
    fn test_integrated_mount() {
        let drill = weapon("mw_drill", WeaponSize::Heavy);
        let mount = IntegratedMount::new(drill.clone(), "ms_breach_frame");

        assert_eq!(mount.mount_type(), MountType::Integrated);
        assert_eq!(mount.weapon(), Some(&drill));
        assert_eq!(mount.item_source(), "ms_breach_frame");
        assert!(!mount.is_locked());

        let slots = mount.slots();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].size(), FittingSize::Integrated);
        assert_eq!(mount.weapons(), vec![&drill]);
    }

    #[test]
    fn test_mount_enum_delegates() {
        let integrated: Mount =
            IntegratedMount::new(weapon("mw_drill", WeaponSize::Heavy), "ms_breach_frame").into();
        assert_eq!(integrated.mount_type(), MountType::Integrated);
        assert_eq!(integrated.weapons().len(), 1);

        let equippable: Mount = EquippableMount::new(MountType::Flex).into();
        assert_eq!(equippable.mount_type(), MountType::Flex);
        assert_eq!(equippable.slots().len(), 1);
        assert!(!equippable.is_locked());
    }
}
