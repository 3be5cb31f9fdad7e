//! State: the loading state machine for dioxus-async-content
//!
//! [`LoadingState`] holds exactly one of four cases at a time. The only way
//! out of a terminal case is [`LoadingState::start`], so a result can never
//! replace another result without passing through `InProgress` first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ContentError, ContentResult};

/// Represents the state of the single content fetch driving a controller
#[derive(Clone, PartialEq, Debug)]
pub enum LoadingState<C, E> {
    /// No fetch has started yet
    Idle,
    /// A fetch is running and no outcome has arrived
    InProgress,
    /// The latest fetch completed with content
    Success(C),
    /// The latest fetch completed with an error
    Failure(E),
}

/// Payload-free tag of a [`LoadingState`], used for logging and errors
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateKind {
    Idle,
    InProgress,
    Success,
    Failure,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StateKind::Idle => "idle",
            StateKind::InProgress => "in progress",
            StateKind::Success => "success",
            StateKind::Failure => "failure",
        };
        f.write_str(name)
    }
}

impl<C, E> LoadingState<C, E> {
    /// Moves to `InProgress`, regardless of the prior state
    pub fn start(&mut self) {
        *self = LoadingState::InProgress;
    }

    /// Applies the outcome of the running fetch
    ///
    /// Only legal while `InProgress`. Any other state is left untouched and
    /// [`ContentError::NotInProgress`] is returned.
    pub fn complete(&mut self, result: Result<C, E>) -> ContentResult<()> {
        if !self.is_loading() {
            return Err(ContentError::NotInProgress(self.kind()));
        }
        *self = result.into();
        Ok(())
    }

    /// Returns the payload-free tag of this state
    pub fn kind(&self) -> StateKind {
        match self {
            LoadingState::Idle => StateKind::Idle,
            LoadingState::InProgress => StateKind::InProgress,
            LoadingState::Success(_) => StateKind::Success,
            LoadingState::Failure(_) => StateKind::Failure,
        }
    }

    /// Returns true if no fetch has started
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadingState::Idle)
    }

    /// Returns true if a fetch is currently running
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::InProgress)
    }

    /// Returns true if the state contains content
    pub fn is_success(&self) -> bool {
        matches!(self, LoadingState::Success(_))
    }

    /// Returns true if the state contains an error
    pub fn is_error(&self) -> bool {
        matches!(self, LoadingState::Failure(_))
    }

    /// Returns the content if successful, None otherwise
    pub fn data(&self) -> Option<&C> {
        match self {
            LoadingState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error if failed, None otherwise
    pub fn error(&self) -> Option<&E> {
        match self {
            LoadingState::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// Converts from `&LoadingState<C, E>` to `LoadingState<&C, &E>`
    pub fn as_ref(&self) -> LoadingState<&C, &E> {
        match self {
            LoadingState::Idle => LoadingState::Idle,
            LoadingState::InProgress => LoadingState::InProgress,
            LoadingState::Success(data) => LoadingState::Success(data),
            LoadingState::Failure(error) => LoadingState::Failure(error),
        }
    }

    /// Maps a LoadingState<C, E> to LoadingState<U, E> by applying a function to the contained content if successful.
    pub fn map<U, F>(self, op: F) -> LoadingState<U, E>
    where
        F: FnOnce(C) -> U,
    {
        match self {
            LoadingState::Idle => LoadingState::Idle,
            LoadingState::InProgress => LoadingState::InProgress,
            LoadingState::Success(data) => LoadingState::Success(op(data)),
            LoadingState::Failure(e) => LoadingState::Failure(e),
        }
    }

    /// Maps a LoadingState<C, E> to LoadingState<C, F> by applying a function to the contained error if failed.
    pub fn map_err<F, O>(self, op: O) -> LoadingState<C, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            LoadingState::Idle => LoadingState::Idle,
            LoadingState::InProgress => LoadingState::InProgress,
            LoadingState::Success(data) => LoadingState::Success(data),
            LoadingState::Failure(e) => LoadingState::Failure(op(e)),
        }
    }

    /// Chains a LoadingState<C, E> to LoadingState<U, E> by applying a function to the contained content if successful.
    pub fn and_then<U, F>(self, op: F) -> LoadingState<U, E>
    where
        F: FnOnce(C) -> LoadingState<U, E>,
    {
        match self {
            LoadingState::Idle => LoadingState::Idle,
            LoadingState::InProgress => LoadingState::InProgress,
            LoadingState::Success(data) => op(data),
            LoadingState::Failure(e) => LoadingState::Failure(e),
        }
    }
}

impl<C, E> Default for LoadingState<C, E> {
    fn default() -> Self {
        LoadingState::Idle
    }
}

impl<C, E> From<Result<C, E>> for LoadingState<C, E> {
    fn from(result: Result<C, E>) -> Self {
        match result {
            Ok(data) => LoadingState::Success(data),
            Err(error) => LoadingState::Failure(error),
        }
    }
}
