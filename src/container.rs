//! The container that mechanically swaps the displayed view

use std::{cell::RefCell, rc::Rc};

use crate::transition::Transition;

/// Performs the view replacement requested by a controller
///
/// The container owns the displayed view. Controllers only ever hand it a
/// replacement together with the transition to animate with; `None` means
/// an instant swap.
///
/// The controller holds the container mutably for the whole of
/// `set_content`. Calls back into the controller from there see no active
/// child.
pub trait ContainerView<V> {
    /// Replaces the displayed view
    fn set_content(&mut self, view: V, transition: Option<Transition>);

    /// Calls `visitor` with the displayed view, if there is one
    fn visit_active(&self, visitor: &mut dyn FnMut(&V));
}

/// Snapshot of what a container is currently showing
#[derive(Clone, Debug, PartialEq)]
pub struct Displayed<V> {
    pub view: V,
    pub transition: Option<Transition>,
    /// Number of swaps performed so far, starting at 1
    pub revision: u64,
}

/// Container that keeps the displayed view in memory
///
/// Useful for hosts that pull the active view rather than being pushed
/// one, and for tests.
#[derive(Debug)]
pub struct SlotContainer<V> {
    current: Option<Displayed<V>>,
}

impl<V> SlotContainer<V> {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn current(&self) -> Option<&Displayed<V>> {
        self.current.as_ref()
    }
}

impl<V> Default for SlotContainer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ContainerView<V> for SlotContainer<V> {
    fn set_content(&mut self, view: V, transition: Option<Transition>) {
        let revision = self.current.as_ref().map_or(0, |d| d.revision) + 1;
        self.current = Some(Displayed {
            view,
            transition,
            revision,
        });
    }

    fn visit_active(&self, visitor: &mut dyn FnMut(&V)) {
        if let Some(displayed) = &self.current {
            visitor(&displayed.view);
        }
    }
}

/// Shared containers, so the host can keep a handle to what it gave away
impl<V, K> ContainerView<V> for Rc<RefCell<K>>
where
    K: ContainerView<V>,
{
    fn set_content(&mut self, view: V, transition: Option<Transition>) {
        self.borrow_mut().set_content(view, transition);
    }

    fn visit_active(&self, visitor: &mut dyn FnMut(&V)) {
        self.borrow().visit_active(visitor);
    }
}
