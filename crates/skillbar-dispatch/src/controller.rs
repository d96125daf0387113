//! Event dispatch controller
//!
//! [`Controller::handle`] is the single entry point for host notifications.
//! Each event kind maps to a fixed set of bar operations:
//!
//! | Event                          | Requires          | Bar operations                | When       |
//! |--------------------------------|-------------------|-------------------------------|------------|
//! | join                           | profession        | setup                         | now        |
//! | leave                          |                   | clear (if professed), release | now        |
//! | death                          | profession        | clear                         | now        |
//! | profession none -> some        | bar not set up    | setup                         | now        |
//! | profession some -> none        |                   | reset, clear, update          | now        |
//! | ability unlocked               | eligible          | unlock                        | now        |
//! | ability upgraded               |                   | update                        | next cycle |
//! | ability downgraded             |                   | update (lock at level 0)      | now        |
//! | respawn                        | profession        | setup, update                 | now        |
//! | inventory click                | profession, on    | cancel / toggle / assign*     | now        |
//! | active slot changed            | profession, on    | cancel, apply                 | now        |
//! | mode -> no-combat              | profession        | clear                         | now        |
//! | mode no-combat -> other        | profession        | setup                         | next cycle |
//!
//! \* binding needs the ability to be in the bar's unlocked set.
//!
//! Deferred work runs when the host calls [`Controller::tick`] at the top
//! of its next cycle. A deferred task re-checks that the session still has
//! a profession and a bar, and does nothing otherwise.
//!
//! The controller assumes one processing thread. A multi-threaded host
//! should put the whole controller behind a single lock and call `tick`
//! from the thread that owns it.

use crate::directory::{AbilityRegistry, SessionDirectory};
use crate::error::{Error, Result};
use crate::event::{BarEvent, ClickEvent, ClickKind, Dispatch, SlotRegion};
use crate::scheduler::{CycleQueue, Deferred, DeferredScheduler};
use skillbar_core::{
    Ability, AbilityId, BarConfig, BarView, GameMode, ProfessionId, SessionId, SkillBarState,
    SlotIndex, SlotPolicy, BAR_SIZE,
};
use tracing::{debug, trace, warn};

/// Keeps every session's bar consistent with the host's notifications
pub struct Controller<D, R, V, S = CycleQueue> {
    /// Layout for bars created on first profession
    config: BarConfig,
    directory: D,
    registry: R,
    view: V,
    scheduler: S,
    /// Number of processing cycles started so far
    cycle: u64,
}

impl<D, R, V> Controller<D, R, V, CycleQueue>
where
    D: SessionDirectory,
    R: AbilityRegistry,
    V: BarView,
{
    /// Create a controller with the in-process next-cycle queue
    pub fn new(config: BarConfig, directory: D, registry: R, view: V) -> Result<Self> {
        Self::with_scheduler(config, directory, registry, view, CycleQueue::new())
    }
}

impl<D, R, V, S> Controller<D, R, V, S>
where
    D: SessionDirectory,
    R: AbilityRegistry,
    V: BarView,
    S: DeferredScheduler,
{
    /// Create a controller with a host-provided scheduler
    pub fn with_scheduler(
        config: BarConfig,
        directory: D,
        registry: R,
        view: V,
        scheduler: S,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            directory,
            registry,
            view,
            scheduler,
            cycle: 0,
        })
    }

    /// Layout used for new bars
    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// The session directory
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Mutable session directory
    pub fn directory_mut(&mut self) -> &mut D {
        &mut self.directory
    }

    /// The ability registry
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutable ability registry
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// The host UI collaborator
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Current cycle number
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Tasks waiting for the next cycle
    pub fn pending_deferred(&self) -> usize {
        self.scheduler.pending()
    }

    /// The bar of a session
    pub fn bar(&self, session: SessionId) -> Result<&SkillBarState> {
        self.directory
            .state(session)
            .ok_or(Error::SessionNotFound(session))
    }

    // ========================================================================
    // Cycle
    // ========================================================================

    /// Start a new processing cycle: run everything deferred during the
    /// previous one. Returns how many tasks ran.
    pub fn tick(&mut self) -> usize {
        self.cycle += 1;
        let due = self.scheduler.take_due();
        let count = due.len();
        for task in due {
            self.run_deferred(task);
        }
        if count > 0 {
            debug!(cycle = self.cycle, count, "ran deferred bar tasks");
        }
        count
    }

    fn run_deferred(&mut self, task: Deferred) {
        let session = task.session();
        if !self.directory.has_profession(session) {
            warn!(%session, ?task, "session lost its profession before deferred task ran");
            return;
        }
        let Some(bar) = self.directory.state_mut(session) else {
            warn!(%session, ?task, "session has no bar anymore, dropping deferred task");
            return;
        };
        match task {
            Deferred::Update(_) => bar.update(session, &mut self.view),
            Deferred::Setup(_) => bar.setup(session, &mut self.view),
        }
    }

    fn defer(&mut self, task: Deferred) {
        trace!(cycle = self.cycle, ?task, "deferring to next cycle");
        self.scheduler.run_next_cycle(task);
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Apply one host notification
    ///
    /// Returns whether the host should suppress its default handling of
    /// the input that caused the event. Errors only on malformed payloads
    /// (a bar position outside 0..=8).
    pub fn handle(&mut self, event: BarEvent) -> Result<Dispatch> {
        debug!(session = %event.session(), kind = event.kind(), cycle = self.cycle, "bar event");

        let dispatch = match event {
            BarEvent::Join { session } => {
                if self.directory.has_profession(session) {
                    self.directory
                        .state_or_create(session, &self.config)
                        .setup(session, &mut self.view);
                }
                Dispatch::pass()
            }
            BarEvent::Leave { session } => {
                self.clear_if_professed(session);
                self.directory.release(session);
                debug!(%session, "session released");
                Dispatch::pass()
            }
            BarEvent::Death { session } => {
                self.clear_if_professed(session);
                Dispatch::pass()
            }
            BarEvent::ProfessionChanged {
                session,
                previous,
                current,
            } => {
                self.on_profession_changed(session, previous, current);
                Dispatch::pass()
            }
            BarEvent::AbilityUnlocked { session, ability } => {
                self.on_unlocked(session, &ability);
                Dispatch::pass()
            }
            BarEvent::AbilityUpgraded { session, .. } => {
                self.defer(Deferred::Update(session));
                Dispatch::pass()
            }
            BarEvent::AbilityDowngraded {
                session,
                ability,
                level,
            } => {
                self.on_downgraded(session, &ability, level);
                Dispatch::pass()
            }
            BarEvent::Respawn { session } => {
                if self.directory.has_profession(session) {
                    let bar = self.directory.state_or_create(session, &self.config);
                    bar.setup(session, &mut self.view);
                    bar.update(session, &mut self.view);
                }
                Dispatch::pass()
            }
            BarEvent::InventoryClick(click) => self.on_click(&click)?,
            BarEvent::ActiveSlotChanged {
                session, current, ..
            } => self.on_active_slot(session, current)?,
            BarEvent::GameModeChanged {
                session,
                previous,
                current,
                cancelled,
            } => {
                self.on_mode_changed(session, previous, current, cancelled);
                Dispatch::pass()
            }
        };

        Ok(dispatch)
    }

    fn clear_if_professed(&mut self, session: SessionId) {
        if !self.directory.has_profession(session) {
            return;
        }
        if let Some(bar) = self.directory.state_mut(session) {
            bar.clear(session, &mut self.view);
        }
    }

    fn on_profession_changed(
        &mut self,
        session: SessionId,
        previous: Option<ProfessionId>,
        current: Option<ProfessionId>,
    ) {
        match (previous, current) {
            (None, Some(profession)) => {
                debug!(%session, %profession, "first profession");
                let bar = self.directory.state_or_create(session, &self.config);
                if !bar.is_setup() {
                    bar.setup(session, &mut self.view);
                }
            }
            (Some(profession), None) => {
                debug!(%session, %profession, "profession removed, resetting bar");
                if let Some(bar) = self.directory.state_mut(session) {
                    bar.reset();
                    bar.clear(session, &mut self.view);
                    bar.update(session, &mut self.view);
                }
            }
            _ => trace!(%session, "profession swap leaves bar as is"),
        }
    }

    fn on_unlocked(&mut self, session: SessionId, ability: &Ability) {
        if !SlotPolicy::is_eligible(&ability.capabilities) {
            trace!(%session, ability = %ability.id, "unlocked ability cannot go on the bar");
            return;
        }
        // Unlocks may arrive before the first profession creates the bar
        self.directory
            .state_or_create(session, &self.config)
            .unlock(ability);
    }

    fn on_downgraded(&mut self, session: SessionId, ability: &AbilityId, level: u32) {
        let Some(bar) = self.directory.state_mut(session) else {
            return;
        };
        if level == 0 {
            bar.lock(ability);
        }
        bar.update(session, &mut self.view);
    }

    fn on_click(&mut self, click: &ClickEvent) -> Result<Dispatch> {
        let session = click.session;
        if !self.directory.has_profession(session) {
            return Ok(Dispatch::pass());
        }
        let Some(bar) = self.directory.state_mut(session) else {
            return Ok(Dispatch::pass());
        };
        if !bar.is_enabled() {
            return Ok(Dispatch::pass());
        }

        let button = click.hotbar_button.map(SlotIndex::new).transpose()?;
        let mut dispatch = Dispatch::pass();

        // Keep arbitrary items out of managed slots
        if click.action.targets_hotbar() {
            if let Some(button) = button {
                if !bar.is_weapon_slot(button) {
                    dispatch.cancel_default = true;
                }
            }
        } else if click.region == SlotRegion::QuickBar && click.slot < BAR_SIZE {
            let slot = SlotIndex::new(click.slot)?;
            if !bar.is_weapon_slot(slot) {
                dispatch.cancel_default = true;
                if click.click == ClickKind::Right {
                    bar.toggle_slot(slot);
                }
            }
        }

        if !click.action.targets_hotbar() {
            return Ok(dispatch);
        }

        // Binding from an ability-browsing view
        let (Some(hovered), Some(button)) = (&click.hovered_ability, button) else {
            return Ok(dispatch);
        };
        if !bar.is_unlocked(hovered) {
            trace!(%session, ability = %hovered, "ability not unlocked on this bar");
            return Ok(dispatch);
        }
        match self.registry.ability(session, hovered) {
            Some(ability) if SlotPolicy::is_eligible(&ability.capabilities) => {
                bar.assign(ability, button);
            }
            Some(_) => trace!(%session, ability = %hovered, "ability not bindable"),
            None => trace!(%session, ability = %hovered, "session does not own ability"),
        }
        Ok(dispatch)
    }

    fn on_active_slot(&mut self, session: SessionId, current: usize) -> Result<Dispatch> {
        let slot = SlotIndex::new(current)?;
        if !self.directory.has_profession(session) {
            return Ok(Dispatch::pass());
        }
        let Some(bar) = self.directory.state_mut(session) else {
            return Ok(Dispatch::pass());
        };
        if bar.is_weapon_slot(slot) || !bar.is_enabled() {
            return Ok(Dispatch::pass());
        }

        let cast_attempted = bar.apply(session, slot, &mut self.registry);
        Ok(Dispatch {
            cancel_default: true,
            cast_attempted,
        })
    }

    fn on_mode_changed(
        &mut self,
        session: SessionId,
        previous: GameMode,
        current: GameMode,
        cancelled: bool,
    ) {
        if cancelled {
            trace!(%session, "mode change vetoed, ignoring");
            return;
        }
        if !self.directory.has_profession(session) {
            return;
        }
        let no_combat = self.config.no_combat_mode;
        if current == no_combat {
            if let Some(bar) = self.directory.state_mut(session) {
                bar.clear(session, &mut self.view);
            }
        } else if previous == no_combat {
            self.defer(Deferred::Setup(session));
        }
    }
}
