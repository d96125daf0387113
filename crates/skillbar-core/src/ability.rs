//! Ability instances and their capability flags

use crate::AbilityId;
use serde::{Deserialize, Serialize};

/// Capability flags attached to an ability when it is registered
///
/// The bar never inspects what an ability does; it only asks whether the
/// ability can be activated from a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// Ability has a targeted effect (aimed at an entity)
    pub targeted: bool,
    /// Ability has an instant/self effect (fired without a target)
    pub instant: bool,
    /// Ability is composed at runtime from scripted components
    pub dynamic: bool,
    /// For dynamic abilities: whether the composition declares itself castable
    pub castable: bool,
}

impl Capabilities {
    /// Passive ability with no activation capability
    pub fn passive() -> Self {
        Self::default()
    }

    /// Targeted ability
    pub fn targeted() -> Self {
        Self {
            targeted: true,
            ..Self::default()
        }
    }

    /// Instant/self ability
    pub fn instant() -> Self {
        Self {
            instant: true,
            ..Self::default()
        }
    }

    /// Mark as dynamically composed, with the given castable declaration
    pub fn dynamic(mut self, castable: bool) -> Self {
        self.dynamic = true;
        self.castable = castable;
        self
    }
}

/// An ability as held in a player's unlocked collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    /// Key of the ability
    pub id: AbilityId,
    /// Activation capabilities
    pub capabilities: Capabilities,
    /// Current level (0 means not learned)
    pub level: u32,
}

impl Ability {
    /// Create a level 1 ability
    pub fn new(id: impl Into<AbilityId>, capabilities: Capabilities) -> Self {
        Self {
            id: id.into(),
            capabilities,
            level: 1,
        }
    }

    /// Set the level
    pub fn at_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }
}
