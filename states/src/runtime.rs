use std::any::{Any, TypeId, type_name};

use flume::{Receiver, Sender};

use crate::TaskId;

/// A value published for the state or compute identified by `target`.
#[derive(Debug)]
pub struct Update {
    pub(crate) target: TypeId,
    pub(crate) value: Box<dyn Any + Send>,
    /// Set when the update comes from a command run, so stale runs can be dropped.
    pub(crate) origin: Option<TaskId>,
}

#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }

    pub fn updater(&self) -> Updater {
        Updater {
            send: self.send.clone(),
        }
    }

    pub(crate) fn drain(&self) -> impl Iterator<Item = Update> + '_ {
        self.recv.try_iter()
    }
}

/// Sends new values for states or computes back to the UI thread.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub fn set<T: Any + Send>(&self, value: T) {
        self.send_update(Update {
            target: TypeId::of::<T>(),
            value: Box::new(value),
            origin: None,
        });
    }

    fn send_update(&self, update: Update) {
        if self.send.send(update).is_err() {
            log::warn!("State runtime is gone, dropped an update");
        }
    }
}

/// Updater handed to a command run.
///
/// Every value it publishes is tagged with the run's [`TaskId`]. When the same
/// command is dispatched again before this run finishes, the context drops
/// whatever this run still publishes.
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater {
    inner: Updater,
    task: TaskId,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(inner: Updater, task: TaskId) -> Self {
        Self { inner, task }
    }

    pub fn set<T: Any + Send>(&self, value: T) {
        log::trace!(
            "{} published by generation {}",
            type_name::<T>(),
            self.task.generation()
        );
        self.inner.send_update(Update {
            target: TypeId::of::<T>(),
            value: Box::new(value),
            origin: Some(self.task),
        });
    }
}
