//! Bar configuration
//!
//! A `BarConfig` fixes which positions are weapon slots, which game mode
//! suppresses the bar, and whether a fresh bar starts enabled. It is plain
//! serde data and can be written in RON:
//!
//! ```
//! use skillbar_core::{BarConfig, GameMode};
//!
//! let config = BarConfig::from_ron_str(
//!     "(free_use_slots: [0, 8], no_combat_mode: Spectator, enabled_by_default: true)",
//! )
//! .unwrap();
//! assert_eq!(config.free_use_slots.len(), 2);
//! assert_eq!(config.no_combat_mode, GameMode::Spectator);
//! ```

use crate::error::{Error, Result};
use crate::{SlotIndex, BAR_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Host game modes the bar reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Survival,
    Creative,
    Adventure,
    Spectator,
}

/// Configuration shared by every bar a controller creates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Weapon slots, left to the host's default item use
    pub free_use_slots: Vec<SlotIndex>,
    /// Entering this mode hides the bar; leaving it restores the bar
    pub no_combat_mode: GameMode,
    /// Initial bar-wide enabled flag
    pub enabled_by_default: bool,
}

impl BarConfig {
    /// Parse and validate a RON document
    pub fn from_ron_str(content: &str) -> Result<Self> {
        let config: BarConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Check that at least one slot is left for abilities
    pub fn validate(&self) -> Result<()> {
        let mut seen = [false; BAR_SIZE];
        for slot in &self.free_use_slots {
            seen[slot.get()] = true;
        }
        if seen.iter().all(|s| *s) {
            return Err(Error::InvalidConfig(
                "every slot is a weapon slot; nothing left to manage".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the given slot is a weapon slot under this config
    pub fn is_free_use(&self, slot: SlotIndex) -> bool {
        self.free_use_slots.contains(&slot)
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            free_use_slots: vec![SlotIndex::FIRST],
            no_combat_mode: GameMode::Creative,
            enabled_by_default: true,
        }
    }
}
