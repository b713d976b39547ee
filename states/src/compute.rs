use std::any::Any;
use std::fmt::Debug;

/// Cached result of some side effect.
///
/// Unlike a [`State`](crate::State), a compute is never written by the UI.
/// It is only replaced through an [`Updater`](crate::Updater), typically from a
/// [`Command`](crate::Command) running in the background, and the new value
/// becomes visible after the next [`StateCtx::sync_computes`](crate::StateCtx::sync_computes).
pub trait Compute: Any + Debug {
    fn as_any(&self) -> &dyn Any;

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}
