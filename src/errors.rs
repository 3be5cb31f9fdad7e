//! Error types for dioxus-async-content
//!
//! These cover failures of the controller itself. Errors produced by the
//! caller's fetch never become a [`ContentError`]; they are captured in
//! [`LoadingState::Failure`](crate::state::LoadingState::Failure) and only
//! ever inspected by caller-supplied functions.

use futures::task::SpawnError;

use crate::state::StateKind;

/// Errors raised by the content controller and the loading state machine
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A fetch outcome was applied to a state that was not waiting for one
    #[error("cannot complete a fetch while the state is {0}")]
    NotInProgress(StateKind),
    /// The host executor refused the fetch task
    #[error("failed to spawn fetch: {0}")]
    Spawn(#[from] SpawnError),
    /// The controller was torn down and accepts no further mutations
    #[error("content controller has been torn down")]
    TornDown,
}

/// Convenience alias for controller results
pub type ContentResult<T> = Result<T, ContentError>;
