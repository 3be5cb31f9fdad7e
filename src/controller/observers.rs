//! Read-only state observers and their subscriptions

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::state::LoadingState;

type Observer<C, E> = Rc<dyn Fn(&LoadingState<C, E>)>;

pub(crate) trait Unsubscribe {
    fn unsubscribe(&self, id: u64);
}

/// Observer list owned by a controller
pub(crate) struct Observers<C, E> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Observer<C, E>)>>,
}

impl<C, E> Observers<C, E> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn insert(&self, observer: impl Fn(&LoadingState<C, E>) + 'static) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    /// Calls every observer registered at the time of the call, in order
    pub(crate) fn notify(&self, state: &LoadingState<C, E>) {
        // Snapshot so observers may subscribe or cancel while being notified
        let snapshot: Vec<Observer<C, E>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in snapshot {
            observer(state);
        }
    }

    pub(crate) fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl<C, E> Unsubscribe for Observers<C, E> {
    fn unsubscribe(&self, id: u64) {
        self.entries.borrow_mut().retain(|(entry, _)| *entry != id);
    }
}

/// Handle to a state observer registered with
/// [`ContentController::subscribe`](crate::controller::ContentController::subscribe)
///
/// Dropping the handle unsubscribes. Tearing the controller down drops
/// every observer regardless of outstanding handles.
#[must_use = "dropping a Subscription unsubscribes the observer"]
pub struct Subscription {
    id: u64,
    registry: Weak<dyn Unsubscribe>,
}

impl Subscription {
    pub(crate) fn new(id: u64, registry: Weak<dyn Unsubscribe>) -> Self {
        Self { id, registry }
    }

    /// Unsubscribes now
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unsubscribe(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
