//! Core wizard state machine types.
//!
//! This module contains the pure pieces the controller is assembled from:
//! - Field validators
//! - Guard predicates for transition control
//! - Wizard phases and their immutable history
//!
//! Nothing in this module performs I/O.

mod guard;
mod history;
mod phase;
pub mod validators;

pub use guard::Guard;
pub use history::{NavigationCause, StepHistory, StepTransition};
pub use phase::WizardPhase;
