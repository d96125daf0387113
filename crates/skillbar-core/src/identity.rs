//! Identity types for sessions, abilities, professions and bar slots

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of positions on the action bar
pub const BAR_SIZE: usize = 9;

/// A connected player, as numbered by the host
///
/// Displays as `session:<n>` in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The host's number for this session
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session:{}", self.0)
    }
}

/// Name of an ability in a player's unlocked collection
///
/// Slots hold this key rather than the ability itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityId(pub String);

impl AbilityId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The ability's name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AbilityId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Name of a profession (class). Only its presence matters to the bar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfessionId(pub String);

impl ProfessionId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for ProfessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated position on the action bar (0..=8)
///
/// Raw indices coming from the host are checked once here; every bar
/// operation takes a `SlotIndex` and can index the slot array directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// Leftmost bar position
    pub const FIRST: SlotIndex = SlotIndex(0);
    /// Rightmost bar position
    pub const LAST: SlotIndex = SlotIndex(BAR_SIZE as u8 - 1);

    /// Validate a raw slot index
    pub fn new(index: usize) -> Result<Self> {
        if index < BAR_SIZE {
            Ok(Self(index as u8))
        } else {
            Err(Error::SlotOutOfRange(index))
        }
    }

    /// Validate a raw index, returning `None` when it is off the bar
    pub fn checked(index: usize) -> Option<Self> {
        Self::new(index).ok()
    }

    /// Position as a plain index
    pub fn get(&self) -> usize {
        self.0 as usize
    }

    /// All nine bar positions in order
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..BAR_SIZE as u8).map(SlotIndex)
    }
}

impl TryFrom<usize> for SlotIndex {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::new(index)
    }
}

impl From<SlotIndex> for usize {
    fn from(slot: SlotIndex) -> Self {
        slot.get()
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id() {
        let id = SessionId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "session:7");
    }

    #[test]
    fn test_ability_id() {
        let id = AbilityId::new("fireball");
        assert_eq!(id.as_str(), "fireball");
        assert_eq!(AbilityId::from("fireball"), id);
    }

    #[test]
    fn test_slot_index_bounds() {
        assert_eq!(SlotIndex::new(0).unwrap().get(), 0);
        assert_eq!(SlotIndex::new(8).unwrap().get(), 8);
        assert!(matches!(SlotIndex::new(9), Err(Error::SlotOutOfRange(9))));
        assert!(SlotIndex::checked(42).is_none());
    }

    #[test]
    fn test_slot_index_all() {
        let all: Vec<usize> = SlotIndex::all().map(|s| s.get()).collect();
        assert_eq!(all, (0..BAR_SIZE).collect::<Vec<_>>());
    }

    #[test]
    fn test_slot_index_from_ron() {
        let slots: Vec<SlotIndex> = ron::from_str("[0, 8]").unwrap();
        assert_eq!(slots[1].get(), 8);
        assert!(ron::from_str::<Vec<SlotIndex>>("[9]").is_err());
    }
}
