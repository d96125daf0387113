//! In-memory ability registry for tests

use crate::directory::AbilityRegistry;
use indexmap::IndexMap;
use skillbar_core::{Ability, AbilityCaster, AbilityId, SessionId};

/// Per-session ability books; casts are recorded, not run
#[derive(Debug, Default)]
pub struct BookRegistry {
    books: IndexMap<SessionId, IndexMap<AbilityId, Ability>>,
    /// Every cast requested, in order
    pub casts: Vec<(SessionId, AbilityId)>,
}

impl BookRegistry {
    /// Add an ability to the session's collection
    pub fn learn(&mut self, session: SessionId, ability: Ability) {
        self.books
            .entry(session)
            .or_default()
            .insert(ability.id.clone(), ability);
    }
}

impl AbilityCaster for BookRegistry {
    fn execute_cast(&mut self, session: SessionId, ability: &AbilityId) {
        self.casts.push((session, ability.clone()));
    }
}

impl AbilityRegistry for BookRegistry {
    fn ability(&self, session: SessionId, ability: &AbilityId) -> Option<&Ability> {
        self.books.get(&session)?.get(ability)
    }
}
