//! Weapon entity referenced by mounts.
//!
//! Weapon definitions (stats, tags, licensing) live outside this crate;
//! mounts only care about a weapon's identifier and size.

use serde::{Deserialize, Serialize};

use crate::fitting::WeaponSize;

/// A mech weapon as seen by the mount layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MechWeapon {
    id: String,
    name: String,
    size: WeaponSize,
}

impl MechWeapon {
    pub fn new(id: impl Into<String>, name: impl Into<String>, size: WeaponSize) -> Self {
        MechWeapon {
            id: id.into(),
            name: name.into(),
            size,
        }
    }

    /// Identifier used for persistence.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> WeaponSize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_accessors() {
        let weapon = MechWeapon::new("mw_ar", "Assault Rifle", WeaponSize::Main);
        assert_eq!(weapon.id(), "mw_ar");
        assert_eq!(weapon.name(), "Assault Rifle");
        assert_eq!(weapon.size(), WeaponSize::Main);
    }
}
