//! Guard predicates for controlling wizard progress.
//!
//! Guards are pure boolean functions that decide whether a step may be left
//! in the forward direction. They hold no state of their own and are
//! re-evaluated every time they are checked.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over a value of type `T`.
///
/// Guards are cheap to clone; clones share the same predicate.
///
/// # Example
///
/// ```rust
/// use trailhead::core::Guard;
///
/// let non_empty = Guard::new(|s: &String| !s.trim().is_empty());
///
/// assert!(non_empty.check(&"Lisbon".to_string()));
/// assert!(!non_empty.check(&"   ".to_string()));
/// ```
pub struct Guard<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that passes only when every guard in `guards` passes.
    ///
    /// An empty list always passes.
    pub fn all(guards: Vec<Guard<T>>) -> Self
    where
        T: 'static,
    {
        Guard::new(move |value| guards.iter().all(|g| g.check(value)))
    }

    /// Combine two guards; both must pass.
    pub fn and(self, other: Guard<T>) -> Self
    where
        T: 'static,
    {
        Guard::new(move |value| self.check(value) && other.check(value))
    }

    /// Evaluate the predicate.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Guard {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
