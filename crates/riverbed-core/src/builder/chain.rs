//! Persistent delta history for immutable builders

use std::sync::Arc;

/// One published node of a builder history.
///
/// Links point backwards to their predecessor and are never mutated after
/// construction. Any number of builders may share a prefix; a link lives as
/// long as its longest-lived descendant.
pub(crate) struct Link<D> {
    delta: D,
    previous: Option<Arc<Link<D>>>,
    depth: usize,
}

impl<D> Link<D> {
    /// Publish a new link after `previous`
    pub(crate) fn extend(previous: Option<&Arc<Link<D>>>, delta: D) -> Arc<Self> {
        Arc::new(Self {
            delta,
            previous: previous.cloned(),
            depth: previous.map_or(1, |p| p.depth + 1),
        })
    }

    /// Number of links from this one back to the root, inclusive
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Deltas from this link back to the root (newest first)
    pub(crate) fn iter(&self) -> Links<'_, D> {
        Links { next: Some(self) }
    }

    /// Deltas from the root up to this link (oldest first)
    pub(crate) fn oldest_first(&self) -> Vec<&D> {
        let mut deltas: Vec<&D> = Vec::with_capacity(self.depth);
        deltas.extend(self.iter());
        deltas.reverse();
        deltas
    }
}

// Unlink iteratively; the default recursive drop would overflow the stack on
// long histories.
impl<D> Drop for Link<D> {
    fn drop(&mut self) {
        let mut previous = self.previous.take();
        while let Some(link) = previous {
            match Arc::try_unwrap(link) {
                Ok(mut owned) => previous = owned.previous.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over a history, newest first
pub(crate) struct Links<'a, D> {
    next: Option<&'a Link<D>>,
}

impl<'a, D> Iterator for Links<'a, D> {
    type Item = &'a D;

    fn next(&mut self) -> Option<&'a D> {
        let link = self.next?;
        self.next = link.previous.as_deref();
        Some(&link.delta)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, |link| link.depth);
        (remaining, Some(remaining))
    }
}
