//! Core bonus references attached to equippable mounts.
//!
//! The bonus definitions themselves (names, effects) live in external
//! compendium data; mounts only track which bonuses are applied, by id.

use serde::{Deserialize, Serialize};

/// A mount-level bonus, referenced by identifier.
///
/// Compares structurally, so a bonus rebuilt from the same id is equal to
/// the one it was rebuilt from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreBonus {
    id: String,
}

impl CoreBonus {
    pub fn new(id: impl Into<String>) -> Self {
        CoreBonus { id: id.into() }
    }

    /// Identifier used for persistence.
    pub fn id(&self) -> &str {
        &self.id
    }
}
