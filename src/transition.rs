//! Transition descriptors and the provider that picks one per state
//!
//! A [`Transition`] only describes an animation. Running it is up to the
//! [`ContainerView`](crate::container::ContainerView) performing the swap.

use std::{fmt, rc::Rc, time::Duration};

use serde::{Deserialize, Serialize};

use crate::state::LoadingState;

/// Edge a directional transition moves from
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// The visual effect applied when the displayed view is swapped
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Cross-dissolve between the outgoing and incoming views
    Fade,
    /// Incoming view slides in from an edge
    Slide(Edge),
    /// Container flips around the axis parallel to an edge
    Flip(Edge),
    /// Outgoing view curls away towards an edge
    Curl(Edge),
}

/// Animation descriptor for a view swap
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Transition {
    pub kind: TransitionKind,
    pub duration_ms: u64,
}

impl Transition {
    pub const DEFAULT_DURATION_MS: u64 = 300;

    pub fn new(kind: TransitionKind, duration: Duration) -> Self {
        Self {
            kind,
            duration_ms: duration.as_millis().try_into().unwrap_or(u64::MAX),
        }
    }

    pub fn fade() -> Self {
        Self::default()
    }

    pub fn slide(edge: Edge) -> Self {
        Self {
            kind: TransitionKind::Slide(edge),
            duration_ms: Self::DEFAULT_DURATION_MS,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Class name a web host can attach to the incoming view
    pub fn css_class(&self) -> String {
        let edge = |edge: Edge| match edge {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        };
        match self.kind {
            TransitionKind::Fade => "transition-fade".to_string(),
            TransitionKind::Slide(e) => format!("transition-slide-{}", edge(e)),
            TransitionKind::Flip(e) => format!("transition-flip-{}", edge(e)),
            TransitionKind::Curl(e) => format!("transition-curl-{}", edge(e)),
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            kind: TransitionKind::Fade,
            duration_ms: Self::DEFAULT_DURATION_MS,
        }
    }
}

/// Maps a state to the transition used when its view is shown
///
/// `None` means the swap happens without animation.
pub struct TransitionProvider<C, E> {
    transition: Rc<dyn Fn(&LoadingState<C, E>) -> Option<Transition>>,
}

impl<C, E> TransitionProvider<C, E> {
    /// Always yields `transition`, whatever the state
    pub fn fixed(transition: Transition) -> Self {
        Self::dynamic(move |_| Some(transition))
    }

    /// Delegates the choice entirely to `handler`
    pub fn dynamic(handler: impl Fn(&LoadingState<C, E>) -> Option<Transition> + 'static) -> Self {
        Self {
            transition: Rc::new(handler),
        }
    }

    pub fn transition_for(&self, state: &LoadingState<C, E>) -> Option<Transition> {
        (self.transition)(state)
    }
}

impl<C, E> Clone for TransitionProvider<C, E> {
    fn clone(&self) -> Self {
        Self {
            transition: self.transition.clone(),
        }
    }
}

impl<C, E> fmt::Debug for TransitionProvider<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionProvider").finish_non_exhaustive()
    }
}
