//! Slot policy: stateless rules over a bar's slot table
//!
//! Every rule here is a pure function of its arguments. `SkillBarState`
//! consults these before any mutation so the rules live in one place.

use crate::{AbilityId, Capabilities, Slot, SlotIndex};

/// Stateless rules deciding which slots and abilities the bar may touch
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotPolicy;

impl SlotPolicy {
    /// True iff the slot is not a weapon slot
    pub fn is_managed(slots: &[Slot], slot: SlotIndex) -> bool {
        slots
            .get(slot.get())
            .is_some_and(|s| !s.is_free_use())
    }

    /// True iff the ability may be bound to a slot
    ///
    /// Requires a targeted or instant capability. A dynamically composed
    /// ability must additionally declare itself castable.
    pub fn is_eligible(capabilities: &Capabilities) -> bool {
        let activatable = capabilities.targeted || capabilities.instant;
        if capabilities.dynamic {
            activatable && capabilities.castable
        } else {
            activatable
        }
    }

    /// The ability a slot would cast right now, if any
    ///
    /// The bar must be enabled, the slot managed and not individually
    /// disabled, and an ability must be bound.
    pub fn cast_target(slots: &[Slot], slot: SlotIndex, bar_enabled: bool) -> Option<&AbilityId> {
        if !bar_enabled {
            return None;
        }
        let entry = slots.get(slot.get())?;
        if entry.disabled {
            return None;
        }
        entry.ability()
    }

    /// First managed slot currently holding the given ability
    pub fn slot_of(slots: &[Slot], ability: &AbilityId) -> Option<SlotIndex> {
        slots
            .iter()
            .position(|s| s.ability() == Some(ability))
            .and_then(SlotIndex::checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SlotContents;

    fn slot(i: usize) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    fn table() -> Vec<Slot> {
        let mut slots = vec![Slot::unassigned(); 9];
        slots[0] = Slot::free_use();
        slots[2].contents = SlotContents::Assigned(AbilityId::new("bolt"));
        slots
    }

    #[test]
    fn test_is_managed() {
        let slots = table();
        assert!(!SlotPolicy::is_managed(&slots, slot(0)));
        assert!(SlotPolicy::is_managed(&slots, slot(1)));
        assert!(SlotPolicy::is_managed(&slots, slot(2)));
    }

    #[test]
    fn test_eligibility() {
        assert!(SlotPolicy::is_eligible(&Capabilities::targeted()));
        assert!(SlotPolicy::is_eligible(&Capabilities::instant()));
        assert!(!SlotPolicy::is_eligible(&Capabilities::passive()));
    }

    #[test]
    fn test_dynamic_eligibility_requires_castable() {
        assert!(SlotPolicy::is_eligible(&Capabilities::instant().dynamic(true)));
        assert!(!SlotPolicy::is_eligible(&Capabilities::instant().dynamic(false)));
        // Declaring castable does not stand in for an activation capability
        assert!(!SlotPolicy::is_eligible(&Capabilities::passive().dynamic(true)));
    }

    #[test]
    fn test_cast_target() {
        let mut slots = table();
        assert_eq!(
            SlotPolicy::cast_target(&slots, slot(2), true),
            Some(&AbilityId::new("bolt"))
        );
        assert_eq!(SlotPolicy::cast_target(&slots, slot(2), false), None);
        assert_eq!(SlotPolicy::cast_target(&slots, slot(1), true), None);
        assert_eq!(SlotPolicy::cast_target(&slots, slot(0), true), None);

        slots[2].disabled = true;
        assert_eq!(SlotPolicy::cast_target(&slots, slot(2), true), None);
    }

    #[test]
    fn test_slot_of() {
        let slots = table();
        assert_eq!(SlotPolicy::slot_of(&slots, &AbilityId::new("bolt")), Some(slot(2)));
        assert_eq!(SlotPolicy::slot_of(&slots, &AbilityId::new("heal")), None);
    }
}
