//! View providers: which view to show for a given state
//!
//! A [`ViewProvider`] is a pure mapping from the current [`LoadingState`] to
//! an optional view. `None` means "no change": the container keeps whatever
//! it is already showing. Every built-in provider returns `None` for
//! `Idle`, so the view in place before the first fetch is never cleared.
//!
//! The retry handle reaches the provider through a [`RenderContext`] that
//! the controller builds fresh for every invocation. Providers never hold
//! on to a retry handle between renders.

use std::{convert::Infallible, fmt, rc::Rc};

use crate::{
    retry::{RetryAction, RetryPolicy},
    state::LoadingState,
};

/// Per-render context handed to a [`ViewProvider`]
#[derive(Clone, Debug)]
pub struct RenderContext {
    pub retry: RetryAction,
}

impl RenderContext {
    pub fn new(retry: RetryAction) -> Self {
        Self { retry }
    }
}

/// Views able to stand in for the loading and error states
///
/// This is the capability the convenience constructors use to build the
/// status views themselves. Custom providers don't need it.
pub trait StatusView: Sized {
    /// View shown while a fetch is running
    fn loading(message: Option<&str>) -> Self;

    /// View shown after a failed fetch, with a retry control when `retry` is set
    fn error(message: &str, retry: Option<RetryAction>) -> Self;
}

type Render<C, E, V> = dyn Fn(&LoadingState<C, E>, &RenderContext) -> Option<V>;

/// Maps the current state to the view that should be displayed
pub struct ViewProvider<C, E, V> {
    render: Rc<Render<C, E, V>>,
}

impl<C, E, V> ViewProvider<C, E, V> {
    /// Full control over every state, including `Idle`
    pub fn new(
        render: impl Fn(&LoadingState<C, E>, &RenderContext) -> Option<V> + 'static,
    ) -> Self {
        Self {
            render: Rc::new(render),
        }
    }

    /// One renderer per state; `Idle` leaves the current view in place
    pub fn from_renderers(
        render_loading: impl Fn() -> V + 'static,
        render_content: impl Fn(&C) -> V + 'static,
        render_error: impl Fn(&E, RetryAction) -> V + 'static,
    ) -> Self {
        Self::new(move |state, context| match state {
            LoadingState::Idle => None,
            LoadingState::InProgress => Some(render_loading()),
            LoadingState::Success(content) => Some(render_content(content)),
            LoadingState::Failure(error) => Some(render_error(error, context.retry.clone())),
        })
    }

    pub fn view_for(&self, state: &LoadingState<C, E>, context: &RenderContext) -> Option<V> {
        (self.render)(state, context)
    }
}

impl<C, E, V> ViewProvider<C, E, V>
where
    C: 'static,
    E: 'static,
    V: StatusView + 'static,
{
    /// Status views with a fixed error message
    pub fn standard(
        loading_message: Option<String>,
        error_message: impl Into<String>,
        retry_policy: RetryPolicy<E>,
        render: impl Fn(&C) -> V + 'static,
    ) -> Self {
        let error_message = error_message.into();
        Self::with_error_message(
            loading_message,
            move |_| error_message.clone(),
            retry_policy,
            render,
        )
    }

    /// Status views with the error message derived from each error
    ///
    /// The retry control is only offered when `retry_policy` accepts the error.
    pub fn with_error_message(
        loading_message: Option<String>,
        error_message: impl Fn(&E) -> String + 'static,
        retry_policy: RetryPolicy<E>,
        render: impl Fn(&C) -> V + 'static,
    ) -> Self {
        Self::from_renderers(
            move || V::loading(loading_message.as_deref()),
            render,
            move |error, retry| {
                let message = error_message(error);
                let retry = retry_policy.should_retry(error).then_some(retry);
                V::error(&message, retry)
            },
        )
    }
}

impl<C, V> ViewProvider<C, Infallible, V>
where
    C: 'static,
    V: 'static,
{
    /// Loading and content renderers for fetches that cannot fail
    pub fn infallible_custom(
        render_loading: impl Fn() -> V + 'static,
        render_content: impl Fn(&C) -> V + 'static,
    ) -> Self {
        Self::new(move |state, _| match state {
            LoadingState::Idle => None,
            LoadingState::InProgress => Some(render_loading()),
            LoadingState::Success(content) => Some(render_content(content)),
            LoadingState::Failure(never) => match *never {},
        })
    }
}

impl<C, V> ViewProvider<C, Infallible, V>
where
    C: 'static,
    V: StatusView + 'static,
{
    /// Built-in loading view and a content renderer for fetches that cannot fail
    pub fn infallible(loading_message: Option<String>, render: impl Fn(&C) -> V + 'static) -> Self {
        Self::infallible_custom(move || V::loading(loading_message.as_deref()), render)
    }
}

impl<C, E, V> Clone for ViewProvider<C, E, V> {
    fn clone(&self) -> Self {
        Self {
            render: self.render.clone(),
        }
    }
}

impl<C, E, V> fmt::Debug for ViewProvider<C, E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewProvider").finish_non_exhaustive()
    }
}
