//! Session lookup and the player's ability collection
//!
//! The controller never owns player identity. It asks a
//! [`SessionDirectory`] for the bar of a session and an
//! [`AbilityRegistry`] for the abilities that session has unlocked.
//! [`SessionStore`] is a plain in-process directory.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use skillbar_core::{
    Ability, AbilityCaster, AbilityId, BarConfig, ProfessionId, SessionId, SkillBarState,
};

/// Session-keyed access to bars and profession status
pub trait SessionDirectory {
    /// Whether the session currently has a profession
    fn has_profession(&self, session: SessionId) -> bool;

    /// The session's bar, if one exists
    fn state(&self, session: SessionId) -> Option<&SkillBarState>;

    /// Mutable access to the session's bar
    fn state_mut(&mut self, session: SessionId) -> Option<&mut SkillBarState>;

    /// The session's bar, creating an empty one from `config` if missing
    fn state_or_create(&mut self, session: SessionId, config: &BarConfig) -> &mut SkillBarState;

    /// The session ended: drop its bar.
    ///
    /// Called while handling the leave notification, so a host that keeps
    /// bars must persist the record before passing that notification on.
    fn release(&mut self, session: SessionId);
}

/// The player's unlocked abilities, plus the ability to cast them
pub trait AbilityRegistry: AbilityCaster {
    /// The session's instance of an ability, if unlocked
    fn ability(&self, session: SessionId, ability: &AbilityId) -> Option<&Ability>;
}

/// What the store keeps per session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Current profession, `None` without one
    pub profession: Option<ProfessionId>,
    /// The session's action bar, created on first profession
    pub bar: Option<SkillBarState>,
}

/// In-process session directory
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: IndexMap<SessionId, SessionRecord>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for a session, inserting an empty one if needed
    pub fn entry(&mut self, session: SessionId) -> &mut SessionRecord {
        self.sessions.entry(session).or_default()
    }

    /// Record for a session, if known
    pub fn get(&self, session: SessionId) -> Option<&SessionRecord> {
        self.sessions.get(&session)
    }

    /// Set or clear the session's profession
    pub fn set_profession(&mut self, session: SessionId, profession: Option<ProfessionId>) {
        self.entry(session).profession = profession;
    }

    /// Forget a session (after it ended). Returns its record for persistence.
    pub fn remove(&mut self, session: SessionId) -> Option<SessionRecord> {
        self.sessions.shift_remove(&session)
    }

    /// Number of known sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check if no session is known
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionDirectory for SessionStore {
    fn has_profession(&self, session: SessionId) -> bool {
        self.sessions
            .get(&session)
            .is_some_and(|r| r.profession.is_some())
    }

    fn state(&self, session: SessionId) -> Option<&SkillBarState> {
        self.sessions.get(&session)?.bar.as_ref()
    }

    fn state_mut(&mut self, session: SessionId) -> Option<&mut SkillBarState> {
        self.sessions.get_mut(&session)?.bar.as_mut()
    }

    fn state_or_create(&mut self, session: SessionId, config: &BarConfig) -> &mut SkillBarState {
        self.entry(session)
            .bar
            .get_or_insert_with(|| SkillBarState::new(config))
    }

    fn release(&mut self, session: SessionId) {
        self.remove(session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profession_tracking() {
        let mut store = SessionStore::new();
        let session = SessionId::new(1);
        assert!(!store.has_profession(session));

        store.set_profession(session, Some(ProfessionId::new("mage")));
        assert!(store.has_profession(session));

        store.set_profession(session, None);
        assert!(!store.has_profession(session));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_state_created_once() {
        let mut store = SessionStore::new();
        let session = SessionId::new(4);
        let config = BarConfig::default();
        assert!(store.state(session).is_none());

        store.state_or_create(session, &config).set_enabled(false);
        // Second lookup returns the same bar
        assert!(!store.state_or_create(session, &config).is_enabled());
        assert!(store.state_mut(session).is_some());
    }

    #[test]
    fn test_release_forgets_session() {
        let mut store = SessionStore::new();
        let session = SessionId::new(3);
        store.set_profession(session, Some(ProfessionId::new("mage")));
        store.state_or_create(session, &BarConfig::default());

        store.release(session);
        assert!(store.get(session).is_none());
        assert!(!store.has_profession(session));
    }

    #[test]
    fn test_remove() {
        let mut store = SessionStore::new();
        let session = SessionId::new(2);
        store.state_or_create(session, &BarConfig::default());

        let record = store.remove(session).unwrap();
        assert!(record.bar.is_some());
        assert!(store.is_empty());
        assert!(store.state(session).is_none());
    }
}
