//! Identity and cancellation handles for command runs.
//!
//! Each dispatch of a command gets a fresh [`TaskId`]: the command's `TypeId`
//! plus a generation counter. Only the highest generation of a given command
//! may still publish results; older runs are cancelled and their late updates
//! are dropped by `StateCtx::sync_computes`.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher values belong to more recent dispatches.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A command run together with its cancellation token.
///
/// Cancellation is cooperative: the run has to check `is_cancelled()` or
/// race its work against `cancelled()`.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
