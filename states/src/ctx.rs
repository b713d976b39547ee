use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::fmt;

use tokio_util::sync::CancellationToken;

use crate::{
    Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, State, StateRuntime,
    TaskHandle, TaskId, Updater,
};

/// Owner of every state, compute and command of the app.
///
/// Frame cycle on the UI thread:
/// 1. `sync_computes()` applies values published since the last frame
/// 2. the UI reads states/computes, mutates states and enqueues commands
/// 3. `flush_commands()` snapshots and spawns the queued commands
pub struct StateCtx {
    runtime: StateRuntime,
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    queue: Vec<TypeId>,
    generations: BTreeMap<TypeId, u64>,
    in_flight: BTreeMap<TypeId, TaskHandle>,
    #[cfg(not(target_arch = "wasm32"))]
    tasks: tokio::task::JoinSet<()>,
}

impl fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("queue", &self.queue.len())
            .field("in_flight", &self.in_flight.len())
            .finish_non_exhaustive()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self {
            runtime: StateRuntime::new(),
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queue: Vec::new(),
            generations: BTreeMap::new(),
            in_flight: BTreeMap::new(),
            #[cfg(not(target_arch = "wasm32"))]
            tasks: tokio::task::JoinSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    /// # Panics
    /// Panics when `T` was never added with `add_state`.
    pub fn state<T: State>(&self) -> &T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    /// # Panics
    /// Panics when `T` was never added with `add_state`.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics when `T` was never recorded with `record_compute`.
    pub fn compute<T: Compute>(&self) -> &T {
        self.cached::<T>()
            .unwrap_or_else(|| panic!("Compute {} is not registered", type_name::<T>()))
    }

    pub fn updater(&self) -> Updater {
        self.runtime.updater()
    }

    /// Queues `T` for the next `flush_commands`. Queuing twice before a flush runs it once.
    pub fn enqueue_command<T: Command>(&mut self) {
        let id = TypeId::of::<T>();
        if !self.commands.contains_key(&id) {
            log::warn!("Command {} is not registered, ignored", type_name::<T>());
            return;
        }
        if !self.queue.contains(&id) {
            self.queue.push(id);
        }
    }

    /// Enqueue and flush in one go.
    pub fn dispatch<T: Command>(&mut self) {
        self.enqueue_command::<T>();
        self.flush_commands();
    }

    pub fn flush_commands(&mut self) {
        for id in std::mem::take(&mut self.queue) {
            let Some(command) = self.commands.get(&id) else {
                continue;
            };

            let generation = self.generations.entry(id).or_insert(0);
            *generation += 1;
            let task = TaskId::new(id, *generation);

            if let Some(previous) = self.in_flight.remove(&id) {
                log::debug!(
                    "Cancelling {command:?} generation {} in favour of {}",
                    previous.id().generation(),
                    task.generation()
                );
                previous.cancel();
            }

            let token = CancellationToken::new();
            let snap = take_snapshot(&self.states, &self.computes);
            let updater = LatestOnlyUpdater::new(self.runtime.updater(), task);
            let future = command.run(snap, updater, token.clone());

            self.in_flight.insert(id, TaskHandle::new(task, token));
            self.spawn(task, future);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&mut self, task: TaskId, future: CommandFuture) {
        if tokio::runtime::Handle::try_current().is_err() {
            log::error!(
                "No Tokio runtime, dropped command run generation {}",
                task.generation()
            );
            return;
        }
        self.tasks.spawn(future);
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&mut self, _task: TaskId, future: CommandFuture) {
        wasm_bindgen_futures::spawn_local(future);
    }

    /// Applies every value published since the last call and returns how many were applied.
    ///
    /// Values published by a command run that has since been superseded are dropped.
    pub fn sync_computes(&mut self) -> usize {
        self.reap_finished_tasks();

        let mut applied = 0;
        for update in self.runtime.drain() {
            if let Some(origin) = update.origin
                && self.generations.get(&origin.type_id()).copied() != Some(origin.generation())
            {
                log::debug!(
                    "Dropped stale update from generation {}",
                    origin.generation()
                );
                continue;
            }

            if let Some(compute) = self.computes.get_mut(&update.target) {
                compute.assign_box(update.value);
                applied += 1;
            } else if let Some(state) = self.states.get_mut(&update.target) {
                state.assign_box(update.value);
                applied += 1;
            } else {
                log::warn!("Dropped update for unregistered {:?}", update.target);
            }
        }
        applied
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn reap_finished_tasks(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            if let Err(err) = result
                && err.is_panic()
            {
                log::error!("Command task panicked: {err}");
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn reap_finished_tasks(&mut self) {}

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn task_count(&self) -> usize {
        0
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_set_mut(&mut self) -> &mut tokio::task::JoinSet<()> {
        &mut self.tasks
    }

    /// Cancels every in-flight command and waits for the tasks to wind down.
    pub async fn shutdown(&mut self) {
        for handle in self.in_flight.values() {
            handle.cancel();
        }
        self.in_flight.clear();
        self.queue.clear();

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.tasks.abort_all();
            while self.tasks.join_next().await.is_some() {}
        }
    }
}

fn take_snapshot(
    states: &BTreeMap<TypeId, Box<dyn State>>,
    computes: &BTreeMap<TypeId, Box<dyn Compute>>,
) -> CommandSnapshot {
    let mut snap = CommandSnapshot::new();
    for (id, state) in states {
        if let Some(value) = state.snapshot() {
            snap.insert_state(*id, value);
        }
    }
    for (id, compute) in computes {
        if let Some(value) = compute.snapshot() {
            snap.insert_compute(*id, value);
        }
    }
    snap
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::time::Duration;

    use super::*;
    use crate::assign_impl;

    #[derive(Debug, Clone, Default)]
    struct EchoInput {
        text: String,
        delay_ms: u64,
    }

    impl State for EchoInput {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
            Some(Box::new(self.clone()))
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            assign_impl(self, new_self);
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    struct EchoCompute {
        echoed: Option<String>,
    }

    impl Compute for EchoCompute {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            assign_impl(self, new_self);
        }
    }

    /// Echoes `EchoInput::text` into `EchoCompute` after `EchoInput::delay_ms`.
    #[derive(Debug)]
    struct EchoCommand;

    impl Command for EchoCommand {
        fn run(
            &self,
            snap: CommandSnapshot,
            updater: LatestOnlyUpdater,
            _cancel: CancellationToken,
        ) -> CommandFuture {
            let input = snap.state::<EchoInput>().clone();
            Box::pin(async move {
                tokio::time::sleep(Duration::from_millis(input.delay_ms)).await;
                updater.set(EchoCompute {
                    echoed: Some(input.text),
                });
            })
        }
    }

    fn setup_ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(EchoInput::default());
        ctx.record_compute(EchoCompute::default());
        ctx.record_command(EchoCommand);
        ctx
    }

    async fn flush_and_wait(ctx: &mut StateCtx) {
        ctx.flush_commands();
        while ctx.task_count() > 0 {
            if ctx.task_set_mut().join_next().await.is_some() {
                ctx.sync_computes();
            }
        }
        ctx.sync_computes();
    }

    #[test]
    fn update_mutates_registered_state() {
        let mut ctx = setup_ctx();

        ctx.update::<EchoInput>(|input| input.text = "hello".to_owned());

        assert_eq!(ctx.state::<EchoInput>().text, "hello");
    }

    #[test]
    fn updater_values_apply_on_sync() {
        let mut ctx = setup_ctx();
        let updater = ctx.updater();

        updater.set(EchoCompute {
            echoed: Some("direct".to_owned()),
        });
        assert_eq!(ctx.compute::<EchoCompute>().echoed, None, "not applied before sync");

        assert_eq!(ctx.sync_computes(), 1);
        assert_eq!(ctx.compute::<EchoCompute>().echoed.as_deref(), Some("direct"));
    }

    #[test]
    fn cached_returns_none_for_unregistered_compute() {
        let ctx = StateCtx::new();
        assert!(ctx.cached::<EchoCompute>().is_none());
    }

    #[test]
    fn enqueue_twice_queues_once() {
        let mut ctx = setup_ctx();

        ctx.enqueue_command::<EchoCommand>();
        ctx.enqueue_command::<EchoCommand>();

        assert_eq!(ctx.queue.len(), 1, "duplicate enqueue should be collapsed");
    }

    #[tokio::test]
    async fn dispatched_command_reads_snapshot_and_publishes() {
        let mut ctx = setup_ctx();
        ctx.update::<EchoInput>(|input| input.text = "page 2".to_owned());

        ctx.enqueue_command::<EchoCommand>();
        flush_and_wait(&mut ctx).await;

        assert_eq!(
            ctx.compute::<EchoCompute>().echoed.as_deref(),
            Some("page 2")
        );
    }

    #[tokio::test]
    async fn superseded_run_cannot_overwrite_newer_result() {
        let mut ctx = setup_ctx();

        ctx.update::<EchoInput>(|input| {
            input.text = "slow and old".to_owned();
            input.delay_ms = 80;
        });
        ctx.dispatch::<EchoCommand>();

        ctx.update::<EchoInput>(|input| {
            input.text = "fast and new".to_owned();
            input.delay_ms = 0;
        });
        ctx.enqueue_command::<EchoCommand>();
        flush_and_wait(&mut ctx).await;

        assert_eq!(
            ctx.compute::<EchoCompute>().echoed.as_deref(),
            Some("fast and new"),
            "the late response of the first run must be dropped"
        );
    }

    #[tokio::test]
    async fn shutdown_clears_pending_work() {
        let mut ctx = setup_ctx();
        ctx.update::<EchoInput>(|input| input.delay_ms = 10_000);
        ctx.dispatch::<EchoCommand>();
        assert_eq!(ctx.task_count(), 1);

        ctx.shutdown().await;

        assert_eq!(ctx.task_count(), 0);
        assert_eq!(ctx.sync_computes(), 0);
    }
}
