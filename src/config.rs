//! # Content Configuration
//!
//! Settings shared by every controller constructor. `ContentConfig` can be
//! built in code or deserialized from an app's settings file.
//!
//! ## Example
//!
//! ```rust
//! use dioxus_async_content::config::ContentConfig;
//! use dioxus_async_content::transition::{Edge, Transition};
//!
//! let config = ContentConfig::new()
//!     .with_loading_message("Fetching invoices")
//!     .with_transition(Transition::slide(Edge::Bottom));
//! assert_eq!(config.loading_message.as_deref(), Some("Fetching invoices"));
//! ```

use serde::{Deserialize, Serialize};

use crate::transition::{Transition, TransitionProvider};

/// Configuration for a content controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Copy shown under the built-in loading indicator
    pub loading_message: Option<String>,
    /// Transition used for every swap; `None` swaps instantly
    pub transition: Option<Transition>,
}

impl ContentConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the copy shown while loading
    pub fn with_loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = Some(message.into());
        self
    }

    /// Use `transition` for every swap
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Swap views without animation
    pub fn without_transition(mut self) -> Self {
        self.transition = None;
        self
    }

    pub(crate) fn transition_provider<C, E>(&self) -> Option<TransitionProvider<C, E>> {
        self.transition.map(TransitionProvider::fixed)
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            loading_message: None,
            transition: Some(Transition::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::TransitionKind;

    #[test]
    fn defaults_to_fixed_fade() {
        let config = ContentConfig::default();
        assert_eq!(config.loading_message, None);
        assert_eq!(config.transition, Some(Transition::fade()));
        assert!(config.transition_provider::<(), ()>().is_some());
    }

    #[test]
    fn without_transition_disables_provider() {
        let config = ContentConfig::new().without_transition();
        assert!(config.transition_provider::<(), ()>().is_none());
    }

    #[test]
    fn deserializes_partial_settings() {
        let config: ContentConfig = serde_json::from_str(
            r#"{ "transition": { "kind": { "slide": "left" }, "duration_ms": 150 } }"#,
        )
        .unwrap();
        assert_eq!(config.loading_message, None);
        let transition = config.transition.unwrap();
        assert_eq!(
            transition.kind,
            TransitionKind::Slide(crate::transition::Edge::Left)
        );
        assert_eq!(transition.duration_ms, 150);

        let config: ContentConfig =
            serde_json::from_str(r#"{ "loading_message": "Hang on", "transition": null }"#)
                .unwrap();
        assert_eq!(config.loading_message.as_deref(), Some("Hang on"));
        assert_eq!(config.transition, None);
    }
}
