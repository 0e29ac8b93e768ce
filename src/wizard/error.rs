//! Wizard errors.

use crate::core::WizardPhase;
use thiserror::Error;

/// Misuse of a wizard by its caller.
///
/// Validation failures are not errors; they show up as
/// [`Advance::Blocked`](super::Advance::Blocked) instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WizardError {
    #[error("Wizard '{wizard}' is {phase} and accepts no further input")]
    Finished { wizard: String, phase: WizardPhase },
}

/// Errors that can occur when building a wizard.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("No steps defined. Add at least one step with .step(definition)")]
    NoSteps,

    #[error("Record builder not specified. Call .finalize(builder) before .build()")]
    MissingFinalizer,
}
