//! Notifications delivered by the host

use serde::{Deserialize, Serialize};
use skillbar_core::{Ability, AbilityId, GameMode, ProfessionId, SessionId};

/// A host notification the controller reacts to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BarEvent {
    /// Session connected
    Join { session: SessionId },
    /// Session disconnected
    Leave { session: SessionId },
    /// Profession changed; `None` on either side means "no profession"
    ProfessionChanged {
        session: SessionId,
        previous: Option<ProfessionId>,
        current: Option<ProfessionId>,
    },
    /// An ability entered the session's collection
    AbilityUnlocked { session: SessionId, ability: Ability },
    /// An ability gained a level; the host is still applying the upgrade
    AbilityUpgraded {
        session: SessionId,
        ability: AbilityId,
        level: u32,
    },
    /// An ability lost a level
    AbilityDowngraded {
        session: SessionId,
        ability: AbilityId,
        level: u32,
    },
    Death { session: SessionId },
    Respawn { session: SessionId },
    /// Raw click in the session's inventory or an ability-browsing view
    InventoryClick(ClickEvent),
    /// The player selected a different bar position
    ActiveSlotChanged {
        session: SessionId,
        previous: usize,
        current: usize,
    },
    /// Game mode change; `cancelled` is set if another handler vetoed it
    GameModeChanged {
        session: SessionId,
        previous: GameMode,
        current: GameMode,
        cancelled: bool,
    },
}

impl BarEvent {
    /// The session this notification concerns
    pub fn session(&self) -> SessionId {
        match self {
            BarEvent::Join { session }
            | BarEvent::Leave { session }
            | BarEvent::ProfessionChanged { session, .. }
            | BarEvent::AbilityUnlocked { session, .. }
            | BarEvent::AbilityUpgraded { session, .. }
            | BarEvent::AbilityDowngraded { session, .. }
            | BarEvent::Death { session }
            | BarEvent::Respawn { session }
            | BarEvent::ActiveSlotChanged { session, .. }
            | BarEvent::GameModeChanged { session, .. } => *session,
            BarEvent::InventoryClick(click) => click.session,
        }
    }

    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            BarEvent::Join { .. } => "join",
            BarEvent::Leave { .. } => "leave",
            BarEvent::ProfessionChanged { .. } => "profession_changed",
            BarEvent::AbilityUnlocked { .. } => "ability_unlocked",
            BarEvent::AbilityUpgraded { .. } => "ability_upgraded",
            BarEvent::AbilityDowngraded { .. } => "ability_downgraded",
            BarEvent::Death { .. } => "death",
            BarEvent::Respawn { .. } => "respawn",
            BarEvent::InventoryClick(_) => "inventory_click",
            BarEvent::ActiveSlotChanged { .. } => "active_slot_changed",
            BarEvent::GameModeChanged { .. } => "game_mode_changed",
        }
    }
}

/// What the click asks the host to do with the items involved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickAction {
    Pickup,
    Place,
    SwapWithCursor,
    MoveToOtherInventory,
    /// Number key pressed over a slot: swap it with a bar position
    HotbarSwap,
    /// Like `HotbarSwap`, but the displaced item is re-added elsewhere
    HotbarMoveAndReadd,
    Drop,
    Nothing,
}

impl ClickAction {
    /// Whether the action moves something onto a bar position
    pub fn targets_hotbar(&self) -> bool {
        matches!(self, ClickAction::HotbarSwap | ClickAction::HotbarMoveAndReadd)
    }
}

/// Which button/modifier produced the click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClickKind {
    #[default]
    Left,
    /// Secondary button
    Right,
    ShiftLeft,
    ShiftRight,
    Middle,
    NumberKey,
    Drop,
}

/// Part of the inventory the clicked slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotRegion {
    /// The nine bar positions
    QuickBar,
    Container,
    Armor,
    Crafting,
    Outside,
}

/// Click metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    /// Who clicked
    pub session: SessionId,
    pub action: ClickAction,
    pub region: SlotRegion,
    /// Index of the clicked slot within its region
    pub slot: usize,
    /// Bar position named by a number-key action
    pub hotbar_button: Option<usize>,
    pub click: ClickKind,
    /// Ability shown under the cursor, when the click landed in an
    /// ability-browsing view
    pub hovered_ability: Option<AbilityId>,
}

impl ClickEvent {
    /// Create a plain left click
    pub fn new(session: SessionId, action: ClickAction, region: SlotRegion, slot: usize) -> Self {
        Self {
            session,
            action,
            region,
            slot,
            hotbar_button: None,
            click: ClickKind::Left,
            hovered_ability: None,
        }
    }

    /// Number-key press over `slot` targeting bar position `button`
    pub fn hotbar_swap(session: SessionId, region: SlotRegion, slot: usize, button: usize) -> Self {
        Self::new(session, ClickAction::HotbarSwap, region, slot)
            .with_click(ClickKind::NumberKey)
            .with_hotbar_button(button)
    }

    /// Set the click kind
    pub fn with_click(mut self, click: ClickKind) -> Self {
        self.click = click;
        self
    }

    /// Set the targeted bar position
    pub fn with_hotbar_button(mut self, button: usize) -> Self {
        self.hotbar_button = Some(button);
        self
    }

    /// Mark the click as made over an ability in a browsing view
    pub fn over_ability(mut self, ability: impl Into<AbilityId>) -> Self {
        self.hovered_ability = Some(ability.into());
        self
    }
}

impl From<ClickEvent> for BarEvent {
    fn from(click: ClickEvent) -> Self {
        BarEvent::InventoryClick(click)
    }
}

/// The controller's verdict on an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// The host must skip its default handling of the triggering input
    pub cancel_default: bool,
    /// A cast was handed to the ability collaborator
    pub cast_attempted: bool,
}

impl Dispatch {
    /// Let the host proceed normally
    pub fn pass() -> Self {
        Self::default()
    }

    /// Suppress the host's default handling
    pub fn cancel() -> Self {
        Self {
            cancel_default: true,
            cast_attempted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_session() {
        let session = SessionId::new(3);
        let click = ClickEvent::new(session, ClickAction::Pickup, SlotRegion::QuickBar, 2);
        assert_eq!(BarEvent::from(click).session(), session);
        assert_eq!(BarEvent::Death { session }.session(), session);
    }

    #[test]
    fn test_hotbar_swap_builder() {
        let click = ClickEvent::hotbar_swap(SessionId::new(1), SlotRegion::Container, 14, 5)
            .over_ability("bolt");

        assert!(click.action.targets_hotbar());
        assert_eq!(click.click, ClickKind::NumberKey);
        assert_eq!(click.hotbar_button, Some(5));
        assert_eq!(click.hovered_ability, Some(AbilityId::new("bolt")));
    }

    #[test]
    fn test_targets_hotbar() {
        assert!(ClickAction::HotbarMoveAndReadd.targets_hotbar());
        assert!(!ClickAction::Pickup.targets_hotbar());
        assert!(!ClickAction::MoveToOtherInventory.targets_hotbar());
    }
}
