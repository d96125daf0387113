//! Per-session action bar state
//!
//! `SkillBarState` owns the nine-slot assignment table and the two flags
//! that track whether the bar is active and whether it is on screen. All
//! mutations go through [`SlotPolicy`] first; rejected input leaves the
//! table unchanged and reports `false`.

use crate::view::{AbilityCaster, BarView};
use crate::{Ability, AbilityId, BarConfig, SessionId, Slot, SlotContents, SlotIndex, SlotPolicy, BAR_SIZE};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The action bar of one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBarState {
    /// Assignment table, one entry per bar position
    slots: [Slot; BAR_SIZE],
    /// Whether slot-select input is intercepted
    enabled: bool,
    /// Whether the table is currently shown in the session's UI.
    /// Never persisted: a restored bar has to be set up again.
    #[serde(skip)]
    setup: bool,
    /// Abilities made available for binding, in unlock order
    unlocked: IndexSet<AbilityId>,
}

impl SkillBarState {
    /// Create an empty bar laid out by `config`
    pub fn new(config: &BarConfig) -> Self {
        let slots = std::array::from_fn(|i| {
            let weapon = SlotIndex::checked(i).is_some_and(|slot| config.is_free_use(slot));
            if weapon {
                Slot::free_use()
            } else {
                Slot::unassigned()
            }
        });
        Self {
            slots,
            enabled: config.enabled_by_default,
            setup: false,
            unlocked: IndexSet::new(),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The full assignment table
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Contents of one position
    pub fn contents(&self, slot: SlotIndex) -> &SlotContents {
        &self.slots[slot.get()].contents
    }

    /// Whether the slot is left to the host's item use
    pub fn is_weapon_slot(&self, slot: SlotIndex) -> bool {
        !SlotPolicy::is_managed(&self.slots, slot)
    }

    /// Whether the table is currently on screen
    pub fn is_setup(&self) -> bool {
        self.setup
    }

    /// Whether slot-select input is intercepted
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the player has excluded this slot
    pub fn is_slot_disabled(&self, slot: SlotIndex) -> bool {
        self.slots[slot.get()].disabled
    }

    /// Where an ability is currently bound
    pub fn assigned_slot(&self, ability: &AbilityId) -> Option<SlotIndex> {
        SlotPolicy::slot_of(&self.slots, ability)
    }

    /// Abilities available for binding, oldest first
    pub fn unlocked(&self) -> impl Iterator<Item = &AbilityId> {
        self.unlocked.iter()
    }

    /// Whether the ability may be bound to a slot
    pub fn is_unlocked(&self, ability: &AbilityId) -> bool {
        self.unlocked.contains(ability)
    }

    // ========================================================================
    // UI lifecycle
    // ========================================================================

    /// Push the table to the session's UI. Does nothing if already shown.
    pub fn setup(&mut self, session: SessionId, view: &mut impl BarView) {
        if self.setup {
            trace!(%session, "bar already set up");
            return;
        }
        view.render_bar(session, &self.slots);
        self.setup = true;
        debug!(%session, "bar set up");
    }

    /// Take the bar's icons off the session's UI, keeping the bindings
    pub fn clear(&mut self, session: SessionId, view: &mut impl BarView) {
        if !self.setup {
            trace!(%session, "bar not shown, nothing to clear");
            return;
        }
        view.clear_bar(session);
        self.setup = false;
        debug!(%session, "bar cleared");
    }

    /// Re-render the bound icons (after a level change). Only while shown.
    pub fn update(&mut self, session: SessionId, view: &mut impl BarView) {
        if !self.setup {
            trace!(%session, "bar not shown, skipping update");
            return;
        }
        view.render_bar(session, &self.slots);
        debug!(%session, "bar updated");
    }

    // ========================================================================
    // Table mutations
    // ========================================================================

    /// Unbind every managed slot and drop the per-slot exclusions.
    /// Weapon slots and the UI are left alone.
    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut().filter(|s| !s.is_free_use()) {
            *slot = Slot::unassigned();
        }
        debug!("bar reset");
    }

    /// Make an ability available for binding. Does not pick a slot.
    pub fn unlock(&mut self, ability: &Ability) -> bool {
        if !SlotPolicy::is_eligible(&ability.capabilities) {
            trace!(ability = %ability.id, "ineligible ability not unlocked");
            return false;
        }
        let added = self.unlocked.insert(ability.id.clone());
        if added {
            debug!(ability = %ability.id, "ability unlocked for binding");
        }
        added
    }

    /// Withdraw an ability from the bindable set. Existing bindings stay.
    pub fn lock(&mut self, ability: &AbilityId) -> bool {
        self.unlocked.shift_remove(ability)
    }

    /// Bind an ability to a managed slot, replacing whatever was there
    ///
    /// If the ability was already bound elsewhere, that slot is vacated so
    /// the ability shows once. Weapon slots and ineligible abilities are
    /// rejected.
    pub fn assign(&mut self, ability: &Ability, slot: SlotIndex) -> bool {
        if !SlotPolicy::is_managed(&self.slots, slot) {
            trace!(%slot, ability = %ability.id, "cannot assign to weapon slot");
            return false;
        }
        if !SlotPolicy::is_eligible(&ability.capabilities) {
            trace!(%slot, ability = %ability.id, "ineligible ability not assigned");
            return false;
        }

        if let Some(previous) = self.assigned_slot(&ability.id) {
            if previous != slot {
                self.slots[previous.get()].contents = SlotContents::Unassigned;
            }
        }
        self.slots[slot.get()].contents = SlotContents::Assigned(ability.id.clone());
        debug!(%slot, ability = %ability.id, "ability assigned");
        true
    }

    /// Flip the player's exclusion of one managed slot
    pub fn toggle_slot(&mut self, slot: SlotIndex) -> bool {
        if !SlotPolicy::is_managed(&self.slots, slot) {
            return false;
        }
        let entry = &mut self.slots[slot.get()];
        entry.disabled = !entry.disabled;
        debug!(%slot, disabled = entry.disabled, "slot toggled");
        true
    }

    /// Set the bar-wide enabled flag
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    // ========================================================================
    // Activation
    // ========================================================================

    /// Cast whatever the slot holds. Returns whether a cast was attempted.
    pub fn apply(&self, session: SessionId, slot: SlotIndex, caster: &mut impl AbilityCaster) -> bool {
        match SlotPolicy::cast_target(&self.slots, slot, self.enabled) {
            Some(ability) => {
                debug!(%session, %slot, %ability, "casting from bar");
                caster.execute_cast(session, ability);
                true
            }
            None => {
                trace!(%session, %slot, "nothing to cast");
                false
            }
        }
    }
}

impl Default for SkillBarState {
    fn default() -> Self {
        Self::new(&BarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingCaster, RecordingView, ViewCall};
    use crate::Capabilities;

    const SESSION: SessionId = SessionId(1);

    fn slot(i: usize) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    fn bolt() -> Ability {
        Ability::new("bolt", Capabilities::targeted())
    }

    fn ward() -> Ability {
        Ability::new("ward", Capabilities::instant())
    }

    fn passive() -> Ability {
        Ability::new("thick_skin", Capabilities::passive())
    }

    #[test]
    fn test_new_bar_layout() {
        let bar = SkillBarState::default();
        assert_eq!(bar.contents(slot(0)), &SlotContents::FreeUse);
        for i in 1..BAR_SIZE {
            assert_eq!(bar.contents(slot(i)), &SlotContents::Unassigned);
        }
        assert!(bar.is_enabled());
        assert!(!bar.is_setup());
    }

    #[test]
    fn test_weapon_slots_immune_to_assign_and_toggle() {
        let mut bar = SkillBarState::default();
        let before = bar.clone();

        for ability in [bolt(), ward(), passive()] {
            assert!(!bar.assign(&ability, slot(0)));
        }
        assert!(!bar.toggle_slot(slot(0)));

        assert_eq!(bar, before);
        assert!(bar.is_weapon_slot(slot(0)));
        assert!(!bar.is_slot_disabled(slot(0)));
    }

    #[test]
    fn test_assign_then_apply_casts_once() {
        let mut bar = SkillBarState::default();
        let mut caster = RecordingCaster::default();

        assert!(bar.assign(&bolt(), slot(4)));
        assert!(bar.apply(SESSION, slot(4), &mut caster));
        assert_eq!(caster.casts, vec![(SESSION, AbilityId::new("bolt"))]);
    }

    #[test]
    fn test_ineligible_rejected_by_unlock_and_assign() {
        let mut bar = SkillBarState::default();
        let dormant = Ability::new("rune", Capabilities::targeted().dynamic(false));

        for ability in [passive(), dormant] {
            let before = bar.clone();
            assert!(!bar.unlock(&ability));
            assert!(!bar.assign(&ability, slot(3)));
            assert_eq!(bar, before);
            assert!(!bar.is_unlocked(&ability.id));
        }
    }

    #[test]
    fn test_toggle_disables_and_reenables_slot() {
        let mut bar = SkillBarState::default();
        let mut caster = RecordingCaster::default();

        assert!(bar.assign(&bolt(), slot(3)));
        assert_eq!(bar.contents(slot(3)), &SlotContents::Assigned(AbilityId::new("bolt")));

        assert!(bar.toggle_slot(slot(3)));
        assert!(bar.is_slot_disabled(slot(3)));
        assert!(!bar.apply(SESSION, slot(3), &mut caster));
        assert!(caster.casts.is_empty());

        assert!(bar.toggle_slot(slot(3)));
        assert!(bar.apply(SESSION, slot(3), &mut caster));
        assert_eq!(caster.casts.len(), 1);
    }

    #[test]
    fn test_apply_on_disabled_bar() {
        let mut bar = SkillBarState::default();
        let mut caster = RecordingCaster::default();
        bar.assign(&bolt(), slot(2));
        bar.set_enabled(false);

        assert!(!bar.apply(SESSION, slot(2), &mut caster));
        assert!(!bar.apply(SESSION, slot(5), &mut caster));
        assert!(caster.casts.is_empty());
    }

    #[test]
    fn test_assign_overwrites_and_moves() {
        let mut bar = SkillBarState::default();
        bar.assign(&bolt(), slot(1));
        bar.assign(&ward(), slot(2));

        // Overwrite slot 2
        assert!(bar.assign(&bolt(), slot(2)));
        assert_eq!(bar.contents(slot(2)), &SlotContents::Assigned(AbilityId::new("bolt")));
        // ...and bolt left slot 1
        assert_eq!(bar.contents(slot(1)), &SlotContents::Unassigned);
        assert_eq!(bar.assigned_slot(&AbilityId::new("ward")), None);
    }

    #[test]
    fn test_reset_keeps_weapon_slots() {
        let mut bar = SkillBarState::default();
        bar.assign(&bolt(), slot(4));
        bar.toggle_slot(slot(5));

        bar.reset();

        assert_eq!(bar.contents(slot(0)), &SlotContents::FreeUse);
        assert_eq!(bar.contents(slot(4)), &SlotContents::Unassigned);
        assert!(!bar.is_slot_disabled(slot(5)));
    }

    #[test]
    fn test_reset_then_setup_shows_no_icons() {
        let mut bar = SkillBarState::default();
        let mut view = RecordingView::default();
        bar.assign(&bolt(), slot(4));

        bar.reset();
        bar.setup(SESSION, &mut view);

        let shown = view.shown(SESSION).unwrap();
        assert!(shown.iter().all(|s| s.ability().is_none()));
        assert!(shown[0].is_free_use());
    }

    #[test]
    fn test_setup_is_idempotent() {
        let mut bar = SkillBarState::default();
        let mut view = RecordingView::default();
        bar.assign(&ward(), slot(6));

        bar.setup(SESSION, &mut view);
        let once = view.shown(SESSION).cloned();
        bar.setup(SESSION, &mut view);

        assert!(bar.is_setup());
        assert_eq!(view.shown(SESSION).cloned(), once);
        assert_eq!(view.calls.len(), 1);
    }

    #[test]
    fn test_clear_and_update() {
        let mut bar = SkillBarState::default();
        let mut view = RecordingView::default();

        // Update before setup does nothing
        bar.update(SESSION, &mut view);
        assert!(view.calls.is_empty());

        bar.setup(SESSION, &mut view);
        bar.update(SESSION, &mut view);
        bar.clear(SESSION, &mut view);
        // Clearing twice only touches the UI once
        bar.clear(SESSION, &mut view);

        assert!(!bar.is_setup());
        assert!(view.shown(SESSION).is_none());
        assert_eq!(
            view.calls,
            vec![ViewCall::Render(SESSION), ViewCall::Render(SESSION), ViewCall::Clear(SESSION)]
        );
    }

    #[test]
    fn test_unlock_and_lock() {
        let mut bar = SkillBarState::default();
        assert!(bar.unlock(&bolt()));
        assert!(!bar.unlock(&bolt()));
        assert!(bar.unlock(&ward()));

        let order: Vec<_> = bar.unlocked().map(|a| a.as_str()).collect();
        assert_eq!(order, vec!["bolt", "ward"]);
        // Unlocking never binds a slot
        assert_eq!(bar.assigned_slot(&AbilityId::new("bolt")), None);

        assert!(bar.lock(&AbilityId::new("bolt")));
        assert!(!bar.is_unlocked(&AbilityId::new("bolt")));
    }

    #[test]
    fn test_setup_flag_not_persisted() {
        let mut bar = SkillBarState::default();
        let mut view = RecordingView::default();
        bar.assign(&bolt(), slot(3));
        bar.unlock(&bolt());
        bar.setup(SESSION, &mut view);

        let text = ron::to_string(&bar).unwrap();
        let restored: SkillBarState = ron::from_str(&text).unwrap();

        assert!(!restored.is_setup());
        assert_eq!(restored.contents(slot(3)), bar.contents(slot(3)));
        assert!(restored.is_unlocked(&AbilityId::new("bolt")));
    }
}
