//! Per-slot contents of the action bar

use crate::AbilityId;
use serde::{Deserialize, Serialize};

/// What a bar position holds
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlotContents {
    /// Weapon slot: excluded from management, the host's item use applies
    FreeUse,
    /// Managed slot with nothing bound
    #[default]
    Unassigned,
    /// Managed slot bound to an ability in the player's collection
    Assigned(AbilityId),
}

impl SlotContents {
    /// Check if this is a weapon slot
    pub fn is_free_use(&self) -> bool {
        matches!(self, SlotContents::FreeUse)
    }

    /// The bound ability, if any
    pub fn ability(&self) -> Option<&AbilityId> {
        match self {
            SlotContents::Assigned(id) => Some(id),
            _ => None,
        }
    }
}

/// A bar position: its contents plus the player's per-slot exclusion
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slot {
    /// What the position holds
    pub contents: SlotContents,
    /// Set by the player to exclude this slot without disabling the bar.
    /// Always false on weapon slots.
    pub disabled: bool,
}

impl Slot {
    /// A weapon slot
    pub fn free_use() -> Self {
        Self {
            contents: SlotContents::FreeUse,
            disabled: false,
        }
    }

    /// An empty managed slot
    pub fn unassigned() -> Self {
        Self::default()
    }

    /// Check if this is a weapon slot
    pub fn is_free_use(&self) -> bool {
        self.contents.is_free_use()
    }

    /// The bound ability, if any
    pub fn ability(&self) -> Option<&AbilityId> {
        self.contents.ability()
    }
}
