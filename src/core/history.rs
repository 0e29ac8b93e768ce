//! Navigation history tracking.
//!
//! Every phase change of a wizard is recorded as an immutable
//! [`StepTransition`]. The history is append-only.

use super::phase::WizardPhase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What triggered a transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum NavigationCause {
    Advance,
    Retreat,
    Jump,
    Complete,
    Cancel,
}

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use trailhead::core::{NavigationCause, StepTransition, WizardPhase};
/// use chrono::Utc;
///
/// let transition = StepTransition {
///     from: WizardPhase::Step(0),
///     to: WizardPhase::Step(1),
///     cause: NavigationCause::Advance,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to.step_index(), Some(1));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepTransition {
    /// The phase being left
    pub from: WizardPhase,
    /// The phase being entered
    pub to: WizardPhase,
    /// The navigation action that caused it
    pub cause: NavigationCause,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of phase changes.
///
/// History is immutable - [`record`](StepHistory::record) returns a new
/// history with the transition added.
///
/// # Example
///
/// ```rust
/// use trailhead::core::{NavigationCause, StepHistory, StepTransition, WizardPhase};
/// use chrono::Utc;
///
/// let history = StepHistory::new()
///     .record(StepTransition {
///         from: WizardPhase::Step(0),
///         to: WizardPhase::Step(1),
///         cause: NavigationCause::Advance,
///         timestamp: Utc::now(),
///     })
///     .record(StepTransition {
///         from: WizardPhase::Step(1),
///         to: WizardPhase::Completed,
///         cause: NavigationCause::Complete,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Step 0 -> Step 1 -> Completed
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StepHistory {
    transitions: Vec<StepTransition>,
}

impl StepHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StepTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of phases traversed.
    ///
    /// Returns the starting phase followed by the `to` phase of each
    /// transition.
    pub fn get_path(&self) -> Vec<WizardPhase> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Number of transitions triggered by `cause`.
    pub fn count(&self, cause: NavigationCause) -> usize {
        self.transitions.iter().filter(|t| t.cause == cause).count()
    }

    /// Elapsed time between the first and the last transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StepTransition] {
        &self.transitions
    }
}
