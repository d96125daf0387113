//! Recording collaborators for tests
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for downstream crates that drive a bar against a fake host.

use crate::view::{AbilityCaster, BarView};
use crate::{AbilityId, SessionId, Slot};
use indexmap::IndexMap;

/// A call made against [`RecordingView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Render(SessionId),
    Clear(SessionId),
}

/// A `BarView` that remembers what each session's quick-bar shows
#[derive(Debug, Default)]
pub struct RecordingView {
    /// Every call, in order
    pub calls: Vec<ViewCall>,
    screens: IndexMap<SessionId, Vec<Slot>>,
}

impl RecordingView {
    /// What the session currently sees, `None` if no bar is shown
    pub fn shown(&self, session: SessionId) -> Option<&Vec<Slot>> {
        self.screens.get(&session)
    }

    /// Number of renders pushed to the session so far
    pub fn renders(&self, session: SessionId) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == ViewCall::Render(session))
            .count()
    }
}

impl BarView for RecordingView {
    fn render_bar(&mut self, session: SessionId, slots: &[Slot]) {
        self.calls.push(ViewCall::Render(session));
        self.screens.insert(session, slots.to_vec());
    }

    fn clear_bar(&mut self, session: SessionId) {
        self.calls.push(ViewCall::Clear(session));
        self.screens.shift_remove(&session);
    }
}

/// An `AbilityCaster` that logs casts instead of running them
#[derive(Debug, Default)]
pub struct RecordingCaster {
    /// Every cast requested, in order
    pub casts: Vec<(SessionId, AbilityId)>,
}

impl AbilityCaster for RecordingCaster {
    fn execute_cast(&mut self, session: SessionId, ability: &AbilityId) {
        self.casts.push((session, ability.clone()));
    }
}
