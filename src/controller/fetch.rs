//! Generation-tagged slot for the single in-flight fetch

use std::cell::{Cell, RefCell};

use futures::future::AbortHandle;

/// Tracks which fetch is current
///
/// Every fetch is tagged with a generation. Only the fetch holding the
/// current generation may complete; anything older is stale and is both
/// aborted and ignored.
pub(crate) struct FetchSlot {
    generation: Cell<u64>,
    abort: RefCell<Option<AbortHandle>>,
}

impl FetchSlot {
    pub(crate) fn new() -> Self {
        Self {
            generation: Cell::new(0),
            abort: RefCell::new(None),
        }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Generation the next fetch will carry once installed
    pub(crate) fn next_generation(&self) -> u64 {
        self.generation.get() + 1
    }

    /// Makes `generation` current, aborting the fetch it supersedes
    ///
    /// Returns true if a fetch was still pending.
    pub(crate) fn install(&self, generation: u64, abort: AbortHandle) -> bool {
        self.generation.set(generation);
        match self.abort.replace(Some(abort)) {
            Some(previous) => {
                previous.abort();
                true
            }
            None => false,
        }
    }

    /// Clears the slot if `generation` is current
    ///
    /// Returns false for stale generations, whose outcome must be dropped.
    pub(crate) fn finish(&self, generation: u64) -> bool {
        if generation != self.generation.get() {
            return false;
        }
        self.abort.borrow_mut().take();
        true
    }

    /// Aborts the pending fetch, if any, and invalidates its generation
    pub(crate) fn cancel(&self) {
        if let Some(pending) = self.abort.borrow_mut().take() {
            pending.abort();
        }
        self.generation.set(self.generation.get() + 1);
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.abort.borrow().is_some()
    }
}
