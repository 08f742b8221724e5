//! Mutable builder: one owned state, mutated in place under a lock

use std::fmt;

use parking_lot::Mutex;

use super::MutableBuilder;
use crate::log_trace;

type Mutator<T, D> = Box<dyn Fn(&mut T, &D) + Send + Sync>;
type Constructor<T, P> = Box<dyn Fn(&T) -> P + Send + Sync>;

/// Generic mutable builder.
///
/// Every [`apply`](Self::apply) mutates the single owned state; every
/// [`merge`](Self::merge) runs the constructor over the current state without
/// consuming or clearing it. Both take `&self` and are serialized on one
/// lock per builder, so a builder can be shared across threads (e.g. in an
/// `Arc`) without lost updates or torn reads.
///
/// The mutator and constructor run while the lock is held; they must not
/// call back into the same builder.
pub struct MutableBuilderCore<T, D, P> {
    state: Mutex<T>,
    mutator: Mutator<T, D>,
    constructor: Constructor<T, P>,
}

impl<T, D, P> MutableBuilderCore<T, D, P> {
    /// Create a builder from its collaborators
    ///
    /// # Arguments
    ///
    /// * `initializer` - produces the empty backing state
    /// * `mutator` - applies one delta to the state
    /// * `constructor` - maps the current state to the result type
    pub fn new<I, M, C>(initializer: I, mutator: M, constructor: C) -> Self
    where
        I: FnOnce() -> T,
        M: Fn(&mut T, &D) + Send + Sync + 'static,
        C: Fn(&T) -> P + Send + Sync + 'static,
    {
        Self {
            state: Mutex::new(initializer()),
            mutator: Box::new(mutator),
            constructor: Box::new(constructor),
        }
    }

    /// Apply a delta to the owned state
    pub fn apply(&self, delta: D) {
        let mut state = self.state.lock();
        (self.mutator)(&mut state, &delta);
    }

    /// Construct a result from the current state
    pub fn merge(&self) -> P {
        let state = self.state.lock();
        log_trace!("mutable builder merge");
        (self.constructor)(&state)
    }

    /// Run `f` against the current state under the builder lock
    pub fn inspect<F, X>(&self, f: F) -> X
    where
        F: FnOnce(&T) -> X,
    {
        f(&self.state.lock())
    }
}

impl<T, D, P> MutableBuilder<P> for MutableBuilderCore<T, D, P> {
    fn merge(&self) -> P {
        MutableBuilderCore::merge(self)
    }
}

impl<T, D, P> fmt::Debug for MutableBuilderCore<T, D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableBuilderCore")
            .field("locked", &self.state.is_locked())
            .finish_non_exhaustive()
    }
}
