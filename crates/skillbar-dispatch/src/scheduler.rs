//! Next-cycle scheduling
//!
//! Some notifications arrive while the host is still applying its own
//! side effects (an upgrade transaction, a mode change). The controller
//! answers those on the following cycle: it submits a [`Deferred`] task,
//! and [`Controller::tick`](crate::Controller::tick) drains everything
//! submitted before the cycle began. There is no delay beyond one cycle
//! and no cancellation.

use serde::{Deserialize, Serialize};
use skillbar_core::SessionId;
use std::collections::VecDeque;

/// Work postponed to the next processing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deferred {
    /// Re-render the session's bar
    Update(SessionId),
    /// Put the session's bar back on screen
    Setup(SessionId),
}

impl Deferred {
    /// The session the task acts on
    pub fn session(&self) -> SessionId {
        match self {
            Deferred::Update(session) | Deferred::Setup(session) => *session,
        }
    }
}

/// Runs tasks on the next processing cycle
pub trait DeferredScheduler {
    /// Queue a task for the next cycle
    fn run_next_cycle(&mut self, task: Deferred);

    /// Remove and return every task queued so far, oldest first
    ///
    /// Tasks queued while the returned batch runs belong to the cycle
    /// after.
    fn take_due(&mut self) -> Vec<Deferred>;

    /// Number of tasks waiting
    fn pending(&self) -> usize;
}

/// In-process single work queue
///
/// Identical tasks submitted within one cycle collapse into one; each
/// still runs exactly once.
#[derive(Debug, Default)]
pub struct CycleQueue {
    queue: VecDeque<Deferred>,
}

impl CycleQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeferredScheduler for CycleQueue {
    fn run_next_cycle(&mut self, task: Deferred) {
        if !self.queue.contains(&task) {
            self.queue.push_back(task);
        }
    }

    fn take_due(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.queue).into()
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
