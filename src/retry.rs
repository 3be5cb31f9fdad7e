//! Retry handles and retry eligibility

use std::{fmt, rc::Rc};

/// A re-invocable trigger that restarts the fetch cycle of a controller
///
/// Controllers build these around a weak back-reference, so holding a
/// `RetryAction` never keeps a controller alive. Invoking one after its
/// controller is gone does nothing.
///
/// Two actions compare equal only if they share the same trigger, which
/// lets a `RetryAction` travel inside Dioxus props.
#[derive(Clone)]
pub struct RetryAction {
    trigger: Rc<dyn Fn()>,
}

impl RetryAction {
    /// Wraps a trigger closure
    pub fn new(trigger: impl Fn() + 'static) -> Self {
        Self {
            trigger: Rc::new(trigger),
        }
    }

    /// Restarts the fetch
    pub fn call(&self) {
        (self.trigger)();
    }
}

impl PartialEq for RetryAction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.trigger, &other.trigger)
    }
}

impl fmt::Debug for RetryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryAction").finish_non_exhaustive()
    }
}

/// Decides, per error, whether an error view offers a retry control
pub struct RetryPolicy<E> {
    should_retry: Rc<dyn Fn(&E) -> bool>,
}

impl<E> RetryPolicy<E> {
    /// Offer retry for every error
    pub fn always() -> Self {
        Self::custom(|_| true)
    }

    /// Never offer retry
    pub fn never() -> Self {
        Self::custom(|_| false)
    }

    /// Offer retry only for errors accepted by `should_retry`
    pub fn custom(should_retry: impl Fn(&E) -> bool + 'static) -> Self {
        Self {
            should_retry: Rc::new(should_retry),
        }
    }

    pub fn should_retry(&self, error: &E) -> bool {
        (self.should_retry)(error)
    }
}

impl<E> Default for RetryPolicy<E> {
    fn default() -> Self {
        Self::always()
    }
}

impl<E> Clone for RetryPolicy<E> {
    fn clone(&self) -> Self {
        Self {
            should_retry: self.should_retry.clone(),
        }
    }
}

impl<E> fmt::Debug for RetryPolicy<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn retry_action_is_reinvocable() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let retry = RetryAction::new(move || counter.set(counter.get() + 1));

        retry.call();
        retry.clone().call();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn retry_action_equality_is_identity() {
        let a = RetryAction::new(|| {});
        let b = RetryAction::new(|| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn policies() {
        assert!(RetryPolicy::<u16>::always().should_retry(&500));
        assert!(!RetryPolicy::<u16>::never().should_retry(&500));

        let transient = RetryPolicy::custom(|status: &u16| *status >= 500);
        assert!(transient.should_retry(&503));
        assert!(!transient.should_retry(&404));
        assert!(RetryPolicy::<u16>::default().should_retry(&404));
    }
}
