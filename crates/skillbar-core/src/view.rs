//! Host collaborators the bar calls into
//!
//! The bar never draws icons or runs abilities itself. It pushes its slot
//! table to a [`BarView`] and hands casts to an [`AbilityCaster`].

use crate::{AbilityId, SessionId, Slot};

/// The session's visible quick-bar
pub trait BarView {
    /// Show the bar-managed icons for every slot in `slots`
    ///
    /// Weapon slots are included so the host can leave them untouched.
    fn render_bar(&mut self, session: SessionId, slots: &[Slot]);

    /// Remove every bar-managed icon from the session's quick-bar
    fn clear_bar(&mut self, session: SessionId);
}

/// Runs abilities on behalf of a session
pub trait AbilityCaster {
    /// Cast the ability; what the cast does is up to the host
    fn execute_cast(&mut self, session: SessionId, ability: &AbilityId);
}
