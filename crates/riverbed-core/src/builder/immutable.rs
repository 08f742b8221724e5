//! Immutable builder: a persistent history of deltas replayed on demand

use std::fmt;
use std::sync::Arc;

use super::chain::Link;
use super::ImmutableBuilder;
use crate::core::settings;
use crate::{log_trace, log_warn};

/// Collaborators shared by every builder derived from the same root
struct Recipe<T, D, R, P> {
    initializer: Box<dyn Fn() -> T + Send + Sync>,
    mutator: Box<dyn Fn(&mut T, &D) + Send + Sync>,
    parent_constructor: Box<dyn Fn(T) -> P + Send + Sync>,
    root_constructor: Box<dyn Fn(T) -> R + Send + Sync>,
}

/// Generic immutable builder.
///
/// A builder is a pointer to the newest link of a persistent delta history
/// plus the collaborators that interpret it. [`with`](Self::with) never
/// touches the receiver: it returns a new builder whose history is the
/// receiver's plus one delta. Any number of builders can branch from the
/// same point.
///
/// [`build`](Self::build) and [`done`](Self::done) replay the whole history,
/// oldest delta first, into freshly initialized state on every call, so the
/// result reflects exactly the deltas reachable from this builder. Replays
/// share nothing mutable, so a builder can be used from many threads at once.
pub struct ImmutableBuilderCore<T, D, R, P> {
    head: Option<Arc<Link<D>>>,
    recipe: Arc<Recipe<T, D, R, P>>,
}

impl<T, D, R, P> ImmutableBuilderCore<T, D, R, P> {
    /// Create a root builder with an empty history
    ///
    /// # Arguments
    ///
    /// * `initializer` - produces the empty backing state
    /// * `mutator` - applies one delta to the state
    /// * `parent_constructor` - maps finished state to the parent type (`done`)
    /// * `root_constructor` - maps finished state to the root type (`build`)
    pub fn new<I, M, PC, RC>(
        initializer: I,
        mutator: M,
        parent_constructor: PC,
        root_constructor: RC,
    ) -> Self
    where
        I: Fn() -> T + Send + Sync + 'static,
        M: Fn(&mut T, &D) + Send + Sync + 'static,
        PC: Fn(T) -> P + Send + Sync + 'static,
        RC: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            head: None,
            recipe: Arc::new(Recipe {
                initializer: Box::new(initializer),
                mutator: Box::new(mutator),
                parent_constructor: Box::new(parent_constructor),
                root_constructor: Box::new(root_constructor),
            }),
        }
    }

    /// Derive a builder with one more delta; the receiver is unchanged
    pub fn with(&self, delta: D) -> Self {
        Self {
            head: Some(Link::extend(self.head.as_ref(), delta)),
            recipe: Arc::clone(&self.recipe),
        }
    }

    /// Construct the root type from this builder's history
    pub fn build(&self) -> R {
        (self.recipe.root_constructor)(self.replay())
    }

    /// Construct the parent type from this builder's history
    pub fn done(&self) -> P {
        (self.recipe.parent_constructor)(self.replay())
    }

    /// Number of deltas in this builder's history
    pub fn depth(&self) -> usize {
        self.head.as_ref().map_or(0, |head| head.depth())
    }

    /// Whether this builder has no history
    pub fn is_root(&self) -> bool {
        self.head.is_none()
    }

    /// This builder's deltas, oldest first
    pub fn history(&self) -> Vec<&D> {
        self.head.as_ref().map_or_else(Vec::new, |head| head.oldest_first())
    }

    /// Whether both builders end at the same published link
    pub fn same_history(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => Arc::ptr_eq(&self.recipe, &other.recipe),
            _ => false,
        }
    }

    /// Fold the history into fresh state: reverse the backward chain, then
    /// apply deltas oldest first
    fn replay(&self) -> T {
        let mut state = (self.recipe.initializer)();
        let Some(head) = &self.head else {
            return state;
        };

        let depth = head.depth();
        let threshold = settings::current().chain_depth_warning;
        if threshold > 0 && depth > threshold {
            log_warn!(depth, threshold, "replaying a deep builder history");
        }
        log_trace!(depth, "replaying builder history");

        for delta in head.oldest_first() {
            (self.recipe.mutator)(&mut state, delta);
        }
        state
    }
}

impl<T, D, R, P> Clone for ImmutableBuilderCore<T, D, R, P> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            recipe: Arc::clone(&self.recipe),
        }
    }
}

impl<T, D, R, P> ImmutableBuilder<R, P> for ImmutableBuilderCore<T, D, R, P> {
    fn build(&self) -> R {
        ImmutableBuilderCore::build(self)
    }

    fn done(&self) -> P {
        ImmutableBuilderCore::done(self)
    }
}

impl<T, D, R, P> fmt::Debug for ImmutableBuilderCore<T, D, R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImmutableBuilderCore")
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type SBuilder = ImmutableBuilderCore<String, String, String, String>;

    fn root() -> SBuilder {
        ImmutableBuilderCore::new(
            String::new,
            |s: &mut String, d: &String| s.push_str(d),
            |s: String| s,
            |s: String| format!("Built: {}", s),
        )
    }

    #[test]
    fn root_builder_folds_to_initial_state() {
        let b = root();
        assert!(b.is_root());
        assert_eq!(b.depth(), 0);
        assert_eq!(b.done(), "");
        assert_eq!(b.build(), "Built: ");
    }

    #[test]
    fn done_and_build_use_their_own_constructor() {
        let b = root().with("Hi".into()).with(" World".into());
        assert_eq!(b.done(), "Hi World");
        assert_eq!(b.build(), "Built: Hi World");
        assert_eq!(b.history(), vec!["Hi", " World"]);
    }

    #[test]
    fn extending_a_builder_leaves_it_unchanged() {
        let b = root().with("value".into());
        let initial = b.build();

        let extended = b.with("another".into()).with("value".into());
        assert_eq!(b.build(), initial);
        assert_eq!(extended.done(), "valueanothervalue");
        assert_eq!(b.depth(), 1);
        assert_eq!(extended.depth(), 3);
    }

    #[test]
    fn siblings_do_not_see_each_other() {
        let base = root().with("a".into());
        let left = base.with("L".into());
        let right = base.with("R".into());

        assert_eq!(left.done(), "aL");
        assert_eq!(right.done(), "aR");
        assert_eq!(base.done(), "a");
        assert!(!left.same_history(&right));
        assert!(left.same_history(&left.clone()));
    }

    #[test]
    fn replay_handles_deep_histories() {
        let b = ImmutableBuilderCore::new(|| 0u64, |n: &mut u64, d: &u64| *n += d, |n| n, |n| n);
        let mut tip = b.clone();
        for i in 0..50_000u64 {
            tip = tip.with(i);
        }
        assert_eq!(tip.done(), (0..50_000u64).sum::<u64>());
        assert_eq!(b.done(), 0);
    }

    #[test]
    fn builders_can_replay_from_many_threads() {
        let b = root().with("x".into()).with("y".into());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let b = b.clone();
                std::thread::spawn(move || b.with(i.to_string()).done())
            })
            .collect();
        let mut results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        results.sort();
        assert_eq!(results, vec!["xy0", "xy1", "xy2", "xy3"]);
        assert_eq!(b.done(), "xy");
    }
}
