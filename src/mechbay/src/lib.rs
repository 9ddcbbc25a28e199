//! # mechbay
//!
//! Mech loadout library - weapon mounts, slots, and fitting rules.
//!
//! This library models the weapon-mount layer of a mech loadout:
//! - Mount shapes and the slot layout each shape carries
//! - Weapon slots with fitting-size validation
//! - The Flex mount's dynamic second auxiliary slot
//! - Mount-level core bonuses and persisted mount records
//!
//! ## Example
//!
//! ```
//! use mechbay::{EquippableMount, MechWeapon, MountType, WeaponSize};
//!
//! # fn main() -> Result<(), mechbay::SlotError> {
//! let mut mount = EquippableMount::new(MountType::Flex);
//! assert_eq!(mount.slots().len(), 1);
//!
//! // An auxiliary weapon in the flex slot opens up a second aux slot.
//! let pistol = MechWeapon::new("mw_pistol", "Pistol", WeaponSize::Auxiliary);
//! if let Some(slot) = mount.slot_mut(0) {
//!     slot.equip(pistol)?;
//! }
//! assert_eq!(mount.slots().len(), 2);
//!
//! // Persist and restore (slots only; lock and bonuses are not restored).
//! let record = mount.serialize();
//! let restored = EquippableMount::deserialize(&record);
//! assert_eq!(restored.weapons().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod bonus;
pub mod fitting;
pub mod mount;
pub mod reference;
pub mod slot;
pub mod weapon;

// Re-export commonly used items
#[doc(inline)]
pub use bonus::CoreBonus;
#[doc(inline)]
pub use fitting::{FittingSize, MountType, UnknownCode, WeaponSize};
#[doc(inline)]
pub use mount::{EquippableMount, IntegratedMount, Mount, MountData};
#[doc(inline)]
pub use slot::{SlotData, SlotError, WeaponSlot};
#[doc(inline)]
pub use weapon::MechWeapon;

// Reference data (mount shapes, fitting sizes)
#[doc(inline)]
pub use reference::{
    fitting_by_code, mount_shape_by_code, mount_shape_info, FittingInfo, MountShapeInfo,
    FITTINGS, MOUNT_SHAPES,
};
