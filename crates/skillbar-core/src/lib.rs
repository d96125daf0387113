//! Skillbar Core - Per-session action bar model
//!
//! This crate holds everything about a single action bar that does not
//! depend on where events come from:
//! - Identity types (`SessionId`, `AbilityId`, `SlotIndex`)
//! - Ability capability flags and the eligibility rules in `SlotPolicy`
//! - `SkillBarState`, the nine-slot assignment table and its operations
//! - `BarConfig`, loadable from RON
//! - The host collaborator traits the bar calls (`BarView`, `AbilityCaster`)
//!
//! ## Testing Feature
//!
//! Enable the `testing` feature for recording collaborators:
//! ```toml
//! skillbar-core = { version = "0.1", features = ["testing"] }
//! ```

mod ability;
pub mod config;
mod error;
mod identity;
mod policy;
mod slot;
mod state;
pub mod view;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use ability::{Ability, Capabilities};
pub use config::{BarConfig, GameMode};
pub use error::{Error, Result};
pub use identity::{AbilityId, ProfessionId, SessionId, SlotIndex, BAR_SIZE};
pub use policy::SlotPolicy;
pub use slot::{Slot, SlotContents};
pub use state::SkillBarState;
pub use view::{AbilityCaster, BarView};
