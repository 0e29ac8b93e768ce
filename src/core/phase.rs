//! Wizard phases.
//!
//! A wizard is always in exactly one phase: on one of its steps, or in one
//! of the two terminal phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a wizard in its state machine.
///
/// `Step(0)` is the initial phase. `Completed` and `Cancelled` are terminal:
/// no further transitions are accepted once either is reached.
///
/// # Example
///
/// ```rust
/// use trailhead::core::WizardPhase;
///
/// let phase = WizardPhase::Step(1);
/// assert_eq!(phase.step_index(), Some(1));
/// assert!(!phase.is_terminal());
///
/// assert!(WizardPhase::Completed.is_terminal());
/// assert_eq!(WizardPhase::Cancelled.step_index(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum WizardPhase {
    /// Editing the step at this index
    Step(usize),
    /// The draft was turned into a finished record
    Completed,
    /// The draft was discarded
    Cancelled,
}

impl WizardPhase {
    /// Index of the active step, if any.
    pub fn step_index(&self) -> Option<usize> {
        match self {
            Self::Step(index) => Some(*index),
            Self::Completed | Self::Cancelled => None,
        }
    }

    /// Check if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Check if the phase ended without producing a record.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for WizardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(index) => write!(f, "Step {index}"),
            Self::Completed => f.write_str("Completed"),
            Self::Cancelled => f.write_str("Cancelled"),
        }
    }
}
