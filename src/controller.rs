//! # Content Controller
//!
//! The orchestrator that owns the [`LoadingState`], runs the fetch, and
//! keeps the displayed view in step with the state.
//!
//! Every mutation, whether it comes from activation, a fetch outcome or a
//! retry, is applied and then followed synchronously by:
//! 1. asking the [`ViewProvider`] which view to show (with a freshly bound
//!    [`RetryAction`]),
//! 2. asking the current [`TransitionProvider`] how to animate,
//! 3. handing both to the [`ContainerView`](crate::container::ContainerView),
//! 4. notifying read-only observers.
//!
//! Mutations requested while those steps run (a view firing its retry
//! synchronously, an observer reloading) are queued and applied in order
//! once the current notification returns. None are dropped or merged.
//!
//! ## Example
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//! use futures::executor::LocalPool;
//! use dioxus_async_content::prelude::*;
//!
//! let mut pool = LocalPool::new();
//! let container = Rc::new(RefCell::new(SlotContainer::<String>::new()));
//! let controller = ContentController::custom(
//!     Host::new(pool.spawner(), container.clone()),
//!     ContentConfig::default(),
//!     || async { Ok::<_, String>("hello".to_string()) },
//!     ViewProvider::from_renderers(
//!         || "loading".to_string(),
//!         |content: &String| format!("content: {content}"),
//!         |error: &String, _retry| format!("error: {error}"),
//!     ),
//! );
//!
//! controller.activate().unwrap();
//! pool.run_until_stalled();
//!
//! let shown = container.borrow().current().map(|d| d.view.clone());
//! assert_eq!(shown.as_deref(), Some("content: hello"));
//! ```

mod fetch;
mod observers;

pub use observers::Subscription;

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    convert::Infallible,
    future::Future,
    rc::{Rc, Weak},
};

use futures::{
    FutureExt,
    future::{self, Aborted},
    task::{LocalSpawn, LocalSpawnExt},
};

use crate::{
    config::ContentConfig,
    container::ContainerView,
    errors::{ContentError, ContentResult},
    host::Host,
    retry::{RetryAction, RetryPolicy},
    state::{LoadingState, StateKind},
    transition::TransitionProvider,
    types::{ControllerBounds, FetchFn},
    view_provider::{RenderContext, StatusView, ViewProvider},
};

use fetch::FetchSlot;
use observers::{Observers, Unsubscribe};

enum Mutation<C, E> {
    /// First appearance: shows the idle state, then starts the first fetch
    Activate,
    Start,
    Complete { generation: u64, result: Result<C, E> },
}

struct Inner<C, E, V> {
    state: RefCell<LoadingState<C, E>>,
    fetch: FetchFn<C, E>,
    provider: ViewProvider<C, E, V>,
    transition_provider: RefCell<Option<TransitionProvider<C, E>>>,
    spawner: Box<dyn LocalSpawn>,
    container: RefCell<Box<dyn ContainerView<V>>>,
    observers: Rc<Observers<C, E>>,
    in_flight: FetchSlot,
    queue: RefCell<VecDeque<Mutation<C, E>>>,
    draining: Cell<bool>,
    activated: Cell<bool>,
    torn_down: Cell<bool>,
}

/// Resets the draining flag even if a renderer panics
struct DrainGuard<'a>(&'a Cell<bool>);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Shows loading, content or error views for a single async fetch
///
/// The controller is the only writer of its state and of the displayed
/// view. Everything else reads through [`subscribe`](Self::subscribe) and
/// [`with_state`](Self::with_state), or acts through a [`RetryAction`].
///
/// Dropping the controller tears it down.
pub struct ContentController<C, E, V>
where
    C: ControllerBounds,
    E: ControllerBounds,
    V: ControllerBounds,
{
    inner: Rc<Inner<C, E, V>>,
}

impl<C, E, V> ContentController<C, E, V>
where
    C: ControllerBounds,
    E: ControllerBounds,
    V: ControllerBounds,
{
    /// Fully custom per-state views
    ///
    /// The controller starts `Idle` and does nothing until [`activate`](Self::activate).
    pub fn custom<F, Fut>(
        host: Host<V>,
        config: ContentConfig,
        fetch: F,
        provider: ViewProvider<C, E, V>,
    ) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<C, E>> + 'static,
    {
        let Host {
            spawner,
            container,
        } = host;

        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(LoadingState::Idle),
                fetch: Box::new(move || fetch().boxed_local()),
                provider,
                transition_provider: RefCell::new(config.transition_provider()),
                spawner,
                container: RefCell::new(container),
                observers: Rc::new(Observers::new()),
                in_flight: FetchSlot::new(),
                queue: RefCell::new(VecDeque::new()),
                draining: Cell::new(false),
                activated: Cell::new(false),
                torn_down: Cell::new(false),
            }),
        }
    }

    /// Built-in status views with a fixed error message
    pub fn new<F, Fut>(
        host: Host<V>,
        config: ContentConfig,
        fetch: F,
        render: impl Fn(&C) -> V + 'static,
        error_message: impl Into<String>,
        retry_policy: RetryPolicy<E>,
    ) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<C, E>> + 'static,
        V: StatusView,
    {
        let provider = ViewProvider::standard(
            config.loading_message.clone(),
            error_message,
            retry_policy,
            render,
        );
        Self::custom(host, config, fetch, provider)
    }

    /// Built-in status views with the error message derived from each error
    pub fn with_error_message<F, Fut>(
        host: Host<V>,
        config: ContentConfig,
        fetch: F,
        render: impl Fn(&C) -> V + 'static,
        error_message: impl Fn(&E) -> String + 'static,
        retry_policy: RetryPolicy<E>,
    ) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<C, E>> + 'static,
        V: StatusView,
    {
        let provider = ViewProvider::with_error_message(
            config.loading_message.clone(),
            error_message,
            retry_policy,
            render,
        );
        Self::custom(host, config, fetch, provider)
    }

    /// Shows the idle state, then starts the first fetch
    ///
    /// Meant to be called when the view first becomes visible. The view
    /// provider, transition provider and observers all see `Idle` once
    /// before the fetch moves the state to `InProgress`. Later calls do
    /// nothing; use [`reload`](Self::reload) to fetch again.
    pub fn activate(&self) -> ContentResult<()> {
        if self.inner.torn_down.get() {
            return Err(ContentError::TornDown);
        }
        if self.inner.activated.replace(true) {
            return Ok(());
        }
        crate::debug_log!("Activating content controller");
        self.inner
            .dispatch(Mutation::Activate)
            .inspect_err(|_| self.inner.activated.set(false))
    }

    /// Restarts the fetch, superseding any fetch still pending
    ///
    /// When called from inside a render or an observer the restart is
    /// queued and `Ok(())` is returned straight away; failures of queued
    /// restarts are logged.
    pub fn reload(&self) -> ContentResult<()> {
        self.inner.activated.set(true);
        self.inner.dispatch(Mutation::Start)
    }

    /// A retry handle bound to this controller
    ///
    /// The handle does not keep the controller alive.
    pub fn retry_action(&self) -> RetryAction {
        self.inner.retry_action()
    }

    pub fn state_kind(&self) -> StateKind {
        self.inner.state.borrow().kind()
    }

    /// Reads the current state
    pub fn with_state<R>(&self, f: impl FnOnce(&LoadingState<C, E>) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Snapshot of the current state
    pub fn state(&self) -> LoadingState<C, E>
    where
        C: Clone,
        E: Clone,
    {
        self.inner.state.borrow().clone()
    }

    /// Generation of the most recently started fetch, 0 before the first one
    pub fn generation(&self) -> u64 {
        self.inner.in_flight.generation()
    }

    /// Whether a fetch is running whose outcome will still be applied
    pub fn is_fetching(&self) -> bool {
        self.inner.in_flight.is_pending()
    }

    /// Registers a read-only observer, called after every state mutation
    ///
    /// Observers run after the displayed view has been updated.
    pub fn subscribe(&self, observer: impl Fn(&LoadingState<C, E>) + 'static) -> Subscription {
        let id = self.inner.observers.insert(observer);
        let registry = Rc::downgrade(&self.inner.observers) as Weak<dyn Unsubscribe>;
        Subscription::new(id, registry)
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.len()
    }

    /// Replaces the transition provider
    ///
    /// Read before every swap, so the change applies from the next state
    /// mutation on. `None` swaps without animation.
    pub fn set_transition_provider(&self, provider: Option<TransitionProvider<C, E>>) {
        *self.inner.transition_provider.borrow_mut() = provider;
    }

    /// Runs `f` against the view the container is currently showing
    ///
    /// Lets the host delegate presentation questions (status bar style,
    /// focus, titles) to whichever child is active. Returns `None` while
    /// the container is in the middle of a swap.
    pub fn with_active_child<R>(&self, f: impl FnOnce(&V) -> R) -> Option<R> {
        let Ok(container) = self.inner.container.try_borrow() else {
            crate::debug_log!("Active child requested during a swap");
            return None;
        };
        let mut f = Some(f);
        let mut out = None;
        container.visit_active(&mut |view| {
            if let Some(f) = f.take() {
                out = Some(f(view));
            }
        });
        out
    }

    /// Cancels the pending fetch and drops every observer
    ///
    /// The state is frozen from here on. Late fetch outcomes, retries and
    /// reloads are ignored.
    pub fn teardown(&self) {
        self.inner.teardown();
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.torn_down.get()
    }
}

impl<C, V> ContentController<C, Infallible, V>
where
    C: ControllerBounds,
    V: ControllerBounds + StatusView,
{
    /// Built-in loading view for fetches that cannot fail
    pub fn infallible<F, Fut>(
        host: Host<V>,
        config: ContentConfig,
        fetch: F,
        render: impl Fn(&C) -> V + 'static,
    ) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = C> + 'static,
    {
        let provider = ViewProvider::infallible(config.loading_message.clone(), render);
        Self::custom(host, config, move || fetch().map(Ok), provider)
    }
}

impl<C, V> ContentController<C, Infallible, V>
where
    C: ControllerBounds,
    V: ControllerBounds,
{
    /// Custom loading and content views for fetches that cannot fail
    pub fn infallible_custom<F, Fut>(
        host: Host<V>,
        config: ContentConfig,
        fetch: F,
        render_loading: impl Fn() -> V + 'static,
        render_content: impl Fn(&C) -> V + 'static,
    ) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = C> + 'static,
    {
        let provider = ViewProvider::infallible_custom(render_loading, render_content);
        Self::custom(host, config, move || fetch().map(Ok), provider)
    }
}

impl<C, E, V> Drop for ContentController<C, E, V>
where
    C: ControllerBounds,
    E: ControllerBounds,
    V: ControllerBounds,
{
    fn drop(&mut self) {
        self.inner.teardown();
    }
}

impl<C, E, V> std::fmt::Debug for ContentController<C, E, V>
where
    C: ControllerBounds,
    E: ControllerBounds,
    V: ControllerBounds,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentController")
            .field("state", &self.state_kind())
            .field("generation", &self.generation())
            .field("torn_down", &self.is_torn_down())
            .finish_non_exhaustive()
    }
}

impl<C, E, V> Inner<C, E, V>
where
    C: ControllerBounds,
    E: ControllerBounds,
    V: ControllerBounds,
{
    fn dispatch(self: &Rc<Self>, mutation: Mutation<C, E>) -> ContentResult<()> {
        if self.torn_down.get() {
            return Err(ContentError::TornDown);
        }
        self.queue.borrow_mut().push_back(mutation);
        if self.draining.replace(true) {
            crate::debug_log!("Mutation queued behind a running notification");
            return Ok(());
        }
        let _guard = DrainGuard(&self.draining);

        let mut outcome = Ok(());
        loop {
            if self.torn_down.get() {
                self.queue.borrow_mut().clear();
                break;
            }
            let next = self.queue.borrow_mut().pop_front();
            let Some(mutation) = next else {
                break;
            };
            if let Err(error) = self.apply(mutation) {
                if outcome.is_ok() {
                    outcome = Err(error);
                } else {
                    crate::warn_log!("Queued mutation failed: {}", error);
                }
            }
        }
        outcome
    }

    fn apply(self: &Rc<Self>, mutation: Mutation<C, E>) -> ContentResult<()> {
        match mutation {
            Mutation::Activate => {
                if self.state.borrow().is_idle() {
                    self.notify();
                    if self.torn_down.get() {
                        return Ok(());
                    }
                }
                self.start_fetch()?;
            }
            Mutation::Start => self.start_fetch()?,
            Mutation::Complete { generation, result } => {
                if !self.in_flight.finish(generation) {
                    crate::log_fetch_stale!(
                        "Dropping outcome of fetch {} (current is {})",
                        generation,
                        self.in_flight.generation()
                    );
                    return Ok(());
                }
                self.state.borrow_mut().complete(result)?;
                crate::log_fetch_complete!(
                    "Fetch {} finished with {}",
                    generation,
                    self.state.borrow().kind()
                );
            }
        }
        self.notify();
        Ok(())
    }

    /// Spawns a new fetch and moves to `InProgress`
    ///
    /// The executor is asked whether it accepts tasks before the fetch
    /// closure runs, so a shut down executor never triggers the fetch.
    /// Nothing changes if the executor refuses the task.
    fn start_fetch(self: &Rc<Self>) -> ContentResult<()> {
        self.spawner.status_local()?;
        let generation = self.in_flight.next_generation();
        let (fetch, abort) = future::abortable((self.fetch)());
        let weak = Rc::downgrade(self);

        self.spawner.spawn_local(async move {
            let result = match fetch.await {
                Ok(result) => result,
                Err(Aborted) => return,
            };
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if let Err(error) = inner.dispatch(Mutation::Complete { generation, result }) {
                crate::debug_log!("Fetch {} outcome not applied: {}", generation, error);
            }
        })?;

        if self.in_flight.install(generation, abort) {
            crate::log_fetch_stale!("Fetch {} superseded by {}", generation - 1, generation);
        }
        crate::log_fetch_start!("Fetch {} started", generation);
        self.state.borrow_mut().start();
        Ok(())
    }

    fn notify(self: &Rc<Self>) {
        let state = self.state.borrow();
        let context = RenderContext::new(self.retry_action());
        let view = self.provider.view_for(&state, &context);
        let transition_provider = self.transition_provider.borrow().clone();
        let transition = transition_provider.and_then(|provider| provider.transition_for(&state));

        match view {
            Some(view) => {
                crate::log_swap!("Showing {} view (transition: {:?})", state.kind(), transition);
                self.container.borrow_mut().set_content(view, transition);
            }
            None => {
                crate::debug_log!("No view change for {} state", state.kind());
            }
        }

        self.observers.notify(&state);
    }

    fn retry_action(self: &Rc<Self>) -> RetryAction {
        let weak = Rc::downgrade(self);
        RetryAction::new(move || match weak.upgrade() {
            Some(inner) => {
                crate::log_retry!("Retry requested");
                inner.activated.set(true);
                if let Err(error) = inner.dispatch(Mutation::Start) {
                    crate::warn_log!("Retry failed: {}", error);
                }
            }
            None => {
                crate::debug_log!("Retry ignored, controller was dropped");
            }
        })
    }

    fn teardown(&self) {
        if self.torn_down.replace(true) {
            return;
        }
        self.in_flight.cancel();
        self.observers.clear();
        if let Ok(mut queue) = self.queue.try_borrow_mut() {
            queue.clear();
        }
        crate::debug_log!("Content controller torn down");
    }
}
