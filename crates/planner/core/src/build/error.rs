//! Build state errors.
//!
//! Every rejection leaves the build and upgrade state untouched.

use crate::catalog::{AbilityId, CharacterId, ItemId};
use crate::error::{ErrorSeverity, PlannerError};

/// Errors raised by build and upgrade mutations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildError {
    /// Slot index beyond the fixed slot count.
    #[error("slot {slot} does not exist (slots: {count})")]
    SlotOutOfRange {
        slot: usize,
        count: usize,
    },

    /// The item is already equipped somewhere in the build.
    #[error("item '{item}' is already equipped in slot {equipped_in}")]
    DuplicateItem {
        item: ItemId,
        /// Slot currently holding the item.
        equipped_in: usize,
    },

    /// The slot's total-souls threshold is not met yet.
    #[error("slot {slot} is locked ({current}/{required} souls spent)")]
    SlotLocked {
        slot: usize,
        required: i64,
        current: i64,
    },

    /// Strict slot policy: the slot already holds an item.
    #[error("slot {slot} is occupied by '{occupant}'")]
    SlotOccupied {
        slot: usize,
        occupant: ItemId,
    },

    /// Upgrade level above the tier count.
    #[error("upgrade level {level} for ability '{ability}' exceeds maximum {max}")]
    UpgradeLevelOutOfRange {
        ability: AbilityId,
        level: u8,
        max: u8,
    },

    /// The character has no such ability.
    #[error("character has no ability '{ability}'")]
    UnknownAbility {
        ability: AbilityId,
    },

    /// Point budget enforcement: the new level costs more points than earned.
    #[error("upgrades would use {required} ability points but only {available} are available")]
    PointBudgetExceeded {
        required: u32,
        available: u32,
    },

    /// A saved build belongs to another character.
    #[error("saved build is for character '{found}', session character is '{expected}'")]
    CharacterMismatch {
        expected: CharacterId,
        found: CharacterId,
    },
}

impl PlannerError for BuildError {
    fn severity(&self) -> ErrorSeverity {
        use BuildError::*;
        match self {
            // Both clear up once more souls are spent
            SlotLocked { .. } | PointBudgetExceeded { .. } => ErrorSeverity::Recoverable,

            SlotOutOfRange { .. }
            | DuplicateItem { .. }
            | SlotOccupied { .. }
            | UpgradeLevelOutOfRange { .. }
            | UnknownAbility { .. }
            | CharacterMismatch { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use BuildError::*;
        match self {
            SlotOutOfRange { .. } => "BUILD_SLOT_OUT_OF_RANGE",
            DuplicateItem { .. } => "BUILD_DUPLICATE_ITEM",
            SlotLocked { .. } => "BUILD_SLOT_LOCKED",
            SlotOccupied { .. } => "BUILD_SLOT_OCCUPIED",
            UpgradeLevelOutOfRange { .. } => "BUILD_UPGRADE_LEVEL_OUT_OF_RANGE",
            UnknownAbility { .. } => "BUILD_UNKNOWN_ABILITY",
            PointBudgetExceeded { .. } => "BUILD_POINT_BUDGET_EXCEEDED",
            CharacterMismatch { .. } => "BUILD_CHARACTER_MISMATCH",
        }
    }
}
