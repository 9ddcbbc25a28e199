//! Reference data for mount shapes and fitting sizes.
//!
//! Static display metadata used for categorization and UI text. The
//! authoritative slot layout lives in [`MountType::layout`]; these tables
//! only describe it.

use crate::fitting::{FittingSize, MountType};

// ============================================================================
// Mount shapes
// ============================================================================

/// Mount shape information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountShapeInfo {
    pub mount_type: MountType,
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All mount shapes
pub const MOUNT_SHAPES: &[MountShapeInfo] = &[
    MountShapeInfo {
        mount_type: MountType::Main,
        code: "main",
        name: "Main Mount",
        description: "Carries a single main weapon",
    },
    MountShapeInfo {
        mount_type: MountType::Heavy,
        code: "heavy",
        name: "Heavy Mount",
        description: "Carries a single heavy weapon",
    },
    MountShapeInfo {
        mount_type: MountType::AuxAux,
        code: "aux_aux",
        name: "Aux/Aux Mount",
        description: "Carries two auxiliary weapons",
    },
    MountShapeInfo {
        mount_type: MountType::MainAux,
        code: "main_aux",
        name: "Main/Aux Mount",
        description: "Carries a main weapon and an auxiliary weapon",
    },
    MountShapeInfo {
        mount_type: MountType::Flex,
        code: "flex",
        name: "Flex Mount",
        description: "Carries one main weapon, or up to two auxiliary weapons",
    },
    MountShapeInfo {
        mount_type: MountType::Integrated,
        code: "integrated",
        name: "Integrated Mount",
        description: "A weapon built into a frame or system, not player-editable",
    },
];

/// Get mount shape info by code
pub fn mount_shape_by_code(code: &str) -> Option<&'static MountShapeInfo> {
    MOUNT_SHAPES.iter().find(|m| m.code == code)
}

/// Get mount shape info for a mount type
pub fn mount_shape_info(mount_type: MountType) -> Option<&'static MountShapeInfo> {
    MOUNT_SHAPES.iter().find(|m| m.mount_type == mount_type)
}

// ============================================================================
// Fitting sizes
// ============================================================================

/// Fitting size information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittingInfo {
    pub fitting: FittingSize,
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All fitting sizes
pub const FITTINGS: &[FittingInfo] = &[
    FittingInfo {
        fitting: FittingSize::Auxiliary,
        code: "auxiliary",
        name: "Auxiliary",
        description: "Accepts auxiliary weapons only",
    },
    FittingInfo {
        fitting: FittingSize::Main,
        code: "main",
        name: "Main",
        description: "Accepts auxiliary and main weapons",
    },
    FittingInfo {
        fitting: FittingSize::Flex,
        code: "flex",
        name: "Flex",
        description: "Accepts auxiliary and main weapons; doubles as two auxiliary slots",
    },
    FittingInfo {
        fitting: FittingSize::Heavy,
        code: "heavy",
        name: "Heavy",
        description: "Accepts weapons of any size",
    },
    FittingInfo {
        fitting: FittingSize::Integrated,
        code: "integrated",
        name: "Integrated",
        description: "Pre-loaded at construction, accepts weapons of any size",
    },
];

/// Get fitting info by code
pub fn fitting_by_code(code: &str) -> Option<&'static FittingInfo> {
    FITTINGS.iter().find(|f| f.code == code)
}
