//! Skillbar Dispatch - Host notifications to action bar operations
//!
//! This crate connects the host's push-event stream to the per-session
//! bars of `skillbar-core`.
//!
//! ## Architecture
//!
//! ```text
//! host event ──▶ Controller::handle ──▶ SkillBarState op ──▶ BarView
//!                     │      │
//!                     │      └──▶ Dispatch { cancel_default, .. } back to host
//!                     ▼
//!               DeferredScheduler ──(next cycle)──▶ Controller::tick
//! ```
//!
//! ## Key Components
//!
//! - [`Controller`]: single entry point, owns the collaborators
//! - [`BarEvent`]: the notifications the controller understands
//! - [`SessionDirectory`] / [`SessionStore`]: session-keyed bar lookup
//! - [`AbilityRegistry`]: the player's unlocked abilities and casting
//! - [`DeferredScheduler`] / [`CycleQueue`]: one-cycle postponement
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut controller = Controller::new(BarConfig::default(), store, registry, view)?;
//!
//! loop {
//!     controller.tick();
//!     for event in host.poll_events() {
//!         if controller.handle(event)?.cancel_default {
//!             host.cancel_default_action();
//!         }
//!     }
//! }
//! ```

mod controller;
mod directory;
mod error;
mod event;
mod scheduler;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use controller::Controller;
pub use directory::{AbilityRegistry, SessionDirectory, SessionRecord, SessionStore};
pub use error::{Error, Result};
pub use event::{BarEvent, ClickAction, ClickEvent, ClickKind, Dispatch, SlotRegion};
pub use scheduler::{CycleQueue, Deferred, DeferredScheduler};
