#![doc = include_str!("../README.md")]

// Core modules
pub mod config;
pub mod container;
pub mod controller;
pub mod errors;
pub mod hooks;
pub mod host;
mod log_utils;
pub mod retry;
pub mod state;
pub mod transition;
pub mod types;
pub mod view_provider;

// Re-export commonly used items at crate root for convenience
pub use config::ContentConfig;
pub use controller::ContentController;

pub mod prelude {
    //! The prelude exports all the most common types and functions for using dioxus-async-content.

    // The orchestrator and its handles
    pub use crate::controller::{ContentController, Subscription};
    pub use crate::retry::{RetryAction, RetryPolicy};

    // The loading state, needed for matching
    pub use crate::state::{LoadingState, StateKind};

    // Deciding what to show and how
    pub use crate::transition::{Edge, Transition, TransitionKind, TransitionProvider};
    pub use crate::view_provider::{RenderContext, StatusView, ViewProvider};

    // Host collaborators
    pub use crate::container::{ContainerView, Displayed, SlotContainer};
    pub use crate::host::{Host, TokioLocalSpawner};

    // Dioxus integration
    pub use crate::hooks::{DioxusSpawner, UseContent, use_content_controller};

    // Configuration
    pub use crate::config::ContentConfig;

    // Error types
    pub use crate::errors::{ContentError, ContentResult};
}
