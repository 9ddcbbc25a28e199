//! Fitting sizes, weapon sizes, and mount shapes.
//!
//! [`MountType::layout`] is the single source of truth for how many slots a
//! mount shape has and what fitting size each slot carries. It is consulted
//! once at mount construction and never recomputed afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an unknown enum code from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} code: {code}")]
pub struct UnknownCode {
    kind: &'static str,
    code: String,
}

impl UnknownCode {
    fn new(kind: &'static str, code: &str) -> Self {
        UnknownCode {
            kind,
            code: code.to_string(),
        }
    }
}

/// Size category a weapon slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FittingSize {
    Auxiliary,
    Main,
    Flex,
    Heavy,
    Integrated,
}

impl FittingSize {
    /// Whether a weapon of `size` fits a slot with this fitting.
    ///
    /// Auxiliary fittings take only auxiliary weapons. Main and Flex
    /// fittings take anything up to a main weapon. Heavy and Integrated
    /// fittings take every size.
    pub fn accepts(&self, size: WeaponSize) -> bool {
        match self {
            Self::Auxiliary => matches!(size, WeaponSize::Auxiliary),
            Self::Main | Self::Flex => {
                matches!(size, WeaponSize::Auxiliary | WeaponSize::Main)
            }
            Self::Heavy | Self::Integrated => true,
        }
    }
}

impl std::fmt::Display for FittingSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auxiliary => write!(f, "auxiliary"),
            Self::Main => write!(f, "main"),
            Self::Flex => write!(f, "flex"),
            Self::Heavy => write!(f, "heavy"),
            Self::Integrated => write!(f, "integrated"),
        }
    }
}

impl std::str::FromStr for FittingSize {
    type Err = UnknownCode;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auxiliary" | "aux" => Ok(Self::Auxiliary),
            "main" => Ok(Self::Main),
            "flex" => Ok(Self::Flex),
            "heavy" => Ok(Self::Heavy),
            "integrated" => Ok(Self::Integrated),
            _ => Err(UnknownCode::new("fitting size", s)),
        }
    }
}

/// Size category of a weapon itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponSize {
    Auxiliary,
    Main,
    Heavy,
}

impl std::fmt::Display for WeaponSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auxiliary => write!(f, "auxiliary"),
            Self::Main => write!(f, "main"),
            Self::Heavy => write!(f, "heavy"),
        }
    }
}

impl std::str::FromStr for WeaponSize {
    type Err = UnknownCode;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auxiliary" | "aux" => Ok(Self::Auxiliary),
            "main" => Ok(Self::Main),
            "heavy" => Ok(Self::Heavy),
            _ => Err(UnknownCode::new("weapon size", s)),
        }
    }
}

/// Shape of a weapon mount.
///
/// The shape fixes the slot layout for the mount's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountType {
    Main,
    Heavy,
    AuxAux,
    MainAux,
    Flex,
    Integrated,
}

impl MountType {
    /// All mount shapes.
    pub const ALL: &'static [MountType] = &[
        MountType::Main,
        MountType::Heavy,
        MountType::AuxAux,
        MountType::MainAux,
        MountType::Flex,
        MountType::Integrated,
    ];

    /// Slot layout for this shape: `(primary, extra)` fitting sequences.
    ///
    /// The extra sequence is non-empty only for Flex, whose hidden
    /// auxiliary slot surfaces while the flex slot holds an
    /// auxiliary-sized weapon.
    pub fn layout(&self) -> (&'static [FittingSize], &'static [FittingSize]) {
        match self {
            Self::Integrated => (&[FittingSize::Integrated], &[]),
            Self::AuxAux => (&[FittingSize::Auxiliary, FittingSize::Auxiliary], &[]),
            Self::MainAux => (&[FittingSize::Main, FittingSize::Auxiliary], &[]),
            Self::Flex => (&[FittingSize::Flex], &[FittingSize::Auxiliary]),
            Self::Main => (&[FittingSize::Main], &[]),
            Self::Heavy => (&[FittingSize::Heavy], &[]),
        }
    }
}

impl std::fmt::Display for MountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Heavy => write!(f, "heavy"),
            Self::AuxAux => write!(f, "aux_aux"),
            Self::MainAux => write!(f, "main_aux"),
            Self::Flex => write!(f, "flex"),
            Self::Integrated => write!(f, "integrated"),
        }
    }
}

impl std::str::FromStr for MountType {
    type Err = UnknownCode;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "heavy" => Ok(Self::Heavy),
            "aux_aux" | "aux/aux" => Ok(Self::AuxAux),
            "main_aux" | "main/aux" => Ok(Self::MainAux),
            "flex" => Ok(Self::Flex),
            "integrated" => Ok(Self::Integrated),
            _ => Err(UnknownCode::new("mount type", s)),
        }
    }
}
