use std::any::{Any, type_name};
use std::fmt::Debug;

/// Plain application state owned by [`StateCtx`](crate::StateCtx).
///
/// States are read and mutated directly on the UI thread. Commands only ever
/// see a clone, so a state a command depends on must return one from
/// [`State::snapshot`].
pub trait State: Any + Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Replaces `target` with the boxed value when the types line up.
///
/// Shared by every `State::assign_box` and `Compute::assign_box` impl.
pub fn assign_impl<T: Any>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => log::warn!("Ignored update with mismatched type for {}", type_name::<T>()),
    }
}
