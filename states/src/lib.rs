//! Reactive state container shared by the business layer and the UI.
//!
//! - [`State`]: plain data owned by [`StateCtx`], mutated on the UI thread
//! - [`Compute`]: cached results, replaced only through an [`Updater`]
//! - [`Command`]: explicitly dispatched async side effects

mod command;
mod compute;
mod ctx;
mod runtime;
mod snapshot;
mod state;
mod task;

pub use command::{Command, CommandFuture};
pub use compute::Compute;
pub use ctx::StateCtx;
pub use runtime::{LatestOnlyUpdater, StateRuntime, Update, Updater};
pub use snapshot::CommandSnapshot;
pub use state::{State, assign_impl};
pub use task::{TaskHandle, TaskId};
