//! # Dioxus Hooks
//!
//! Glue between [`ContentController`] and a Dioxus component: a signal-backed
//! container, a spawner that runs fetches as Dioxus tasks, built-in status
//! views rendered as [`Element`]s, and [`use_content_controller`] to wire
//! the three together.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dioxus::prelude::*;
//! use dioxus_async_content::prelude::*;
//!
//! async fn fetch_greeting() -> Result<String, String> {
//!     Ok("Hello, World!".to_string())
//! }
//!
//! #[component]
//! fn Greeting() -> Element {
//!     let content = use_content_controller(|host| {
//!         ContentController::new(
//!             host,
//!             ContentConfig::new().with_loading_message("Loading greeting"),
//!             fetch_greeting,
//!             |greeting: &String| rsx! { h1 { "{greeting}" } },
//!             "Could not load the greeting",
//!             RetryPolicy::always(),
//!         )
//!     });
//!     content.render()
//! }
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use futures::{
    future::LocalFutureObj,
    task::{LocalSpawn, SpawnError},
};

use crate::{
    container::{ContainerView, Displayed},
    controller::ContentController,
    host::Host,
    retry::RetryAction,
    transition::Transition,
    types::ControllerBounds,
    view_provider::StatusView,
};

/// Runs fetches as Dioxus tasks owned by the current scope
#[derive(Clone, Copy, Debug, Default)]
pub struct DioxusSpawner;

impl LocalSpawn for DioxusSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        spawn(future);
        Ok(())
    }
}

impl<V: 'static> ContainerView<V> for Signal<Option<Displayed<V>>> {
    fn set_content(&mut self, view: V, transition: Option<Transition>) {
        let revision = self.peek().as_ref().map_or(0, |d| d.revision) + 1;
        self.set(Some(Displayed {
            view,
            transition,
            revision,
        }));
    }

    fn visit_active(&self, visitor: &mut dyn FnMut(&V)) {
        if let Some(displayed) = &*self.peek() {
            visitor(&displayed.view);
        }
    }
}

impl StatusView for Element {
    fn loading(message: Option<&str>) -> Self {
        let message = message.map(str::to_uppercase);
        rsx! {
            div { class: "async-content-status async-content-loading",
                div { class: "async-content-spinner" }
                if let Some(message) = message {
                    span { class: "async-content-message", "{message}" }
                }
            }
        }
    }

    fn error(message: &str, retry: Option<RetryAction>) -> Self {
        let message = message.to_string();
        rsx! {
            div { class: "async-content-status async-content-error",
                if let Some(retry) = retry {
                    button {
                        class: "async-content-retry",
                        onclick: move |_| retry.call(),
                        "↻"
                    }
                }
                span { class: "async-content-message", "{message}" }
            }
        }
    }
}

/// A controller mounted in a component, plus the signal it renders into
pub struct UseContent<C, E>
where
    C: ControllerBounds,
    E: ControllerBounds,
{
    controller: Rc<ContentController<C, E, Element>>,
    displayed: Signal<Option<Displayed<Element>>>,
}

impl<C, E> UseContent<C, E>
where
    C: ControllerBounds,
    E: ControllerBounds,
{
    pub fn controller(&self) -> &ContentController<C, E, Element> {
        &self.controller
    }

    /// Signal holding the view currently shown
    pub fn displayed(&self) -> Signal<Option<Displayed<Element>>> {
        self.displayed
    }

    /// Renders the active view inside a container tagged with its transition class
    pub fn render(&self) -> Element {
        let current = self.displayed.read();
        let Some(displayed) = &*current else {
            return rsx! {};
        };
        let transition = displayed
            .transition
            .map(|t| t.css_class())
            .unwrap_or_default();
        let view = displayed.view.clone();
        rsx! {
            div { class: "async-content {transition}", {view} }
        }
    }
}

impl<C, E> Clone for UseContent<C, E>
where
    C: ControllerBounds,
    E: ControllerBounds,
{
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            displayed: self.displayed,
        }
    }
}

/// Mounts a [`ContentController`] in the current component
///
/// `build` runs once, on the first render, with a [`Host`] backed by a
/// signal container and the [`DioxusSpawner`]. The first fetch starts from
/// an effect after that render, and the controller is torn down when the
/// component is dropped.
pub fn use_content_controller<C, E>(
    build: impl FnOnce(Host<Element>) -> ContentController<C, E, Element>,
) -> UseContent<C, E>
where
    C: ControllerBounds,
    E: ControllerBounds,
{
    let displayed = use_signal(|| None::<Displayed<Element>>);
    let controller = use_hook(move || Rc::new(build(Host::new(DioxusSpawner, displayed))));

    let for_effect = controller.clone();
    use_effect(move || {
        if let Err(error) = for_effect.activate() {
            crate::warn_log!("Content controller failed to activate: {}", error);
        }
    });

    let for_drop = controller.clone();
    use_drop(move || for_drop.teardown());

    UseContent {
        controller,
        displayed,
    }
}
