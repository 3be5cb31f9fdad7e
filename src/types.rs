//! Common types and aliases used throughout dioxus-async-content

use futures::future::LocalBoxFuture;

/// Common trait bounds for content, error and view types held by a controller
///
/// Controllers are single-threaded, so nothing here needs `Send` or `Sync`.
pub trait ControllerBounds: 'static {}
impl<T> ControllerBounds for T where T: 'static {}

/// Future produced by a single fetch invocation
pub type FetchFuture<C, E> = LocalBoxFuture<'static, Result<C, E>>;

/// Type-erased fetch trigger, invoked once per load or retry
pub(crate) type FetchFn<C, E> = Box<dyn Fn() -> FetchFuture<C, E>>;
