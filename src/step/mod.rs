//! Step definitions.
//!
//! A step is pure configuration: a label, the fields it shows, and the
//! guard that decides whether the user may move past it.
//!
//! Besides the boolean guard, a step can produce a [`StepReport`] listing
//! every failing field at once, using Stillwater's `Validation` to
//! accumulate violations instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use trailhead::draft::{Draft, Field};
//! use trailhead::step::{FieldSpec, StepDefinition};
//!
//! let basics = StepDefinition::from_specs(
//!     "Basics",
//!     vec![
//!         FieldSpec::text(Field::Title),
//!         FieldSpec::non_negative_int(Field::Price),
//!     ],
//! );
//!
//! let mut draft = Draft::new();
//! assert!(!basics.can_advance(&draft));
//! assert_eq!(basics.violations(&draft).len(), 2);
//!
//! draft.set_text(Field::Title, "Sunny Studio");
//! draft.set_text(Field::Price, "1200");
//! assert!(basics.can_advance(&draft));
//! ```

mod rules;
mod violations;

pub use rules::{FieldSpec, Rule};
pub use violations::FieldViolation;

use crate::core::Guard;
use crate::draft::Draft;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking every field on a step.
pub type StepReport = Validation<(), NonEmptyVec<FieldViolation>>;

/// One page of a wizard.
#[derive(Clone, Debug)]
pub struct StepDefinition {
    position: usize,
    label: String,
    fields: Vec<FieldSpec>,
    guard: Guard<Draft>,
}

impl StepDefinition {
    /// Create a step with an explicit `can_advance` guard.
    ///
    /// The field specs still drive [`report`](Self::report), but only the
    /// guard decides whether the step can be left.
    pub fn new(label: impl Into<String>, fields: Vec<FieldSpec>, can_advance: Guard<Draft>) -> Self {
        Self {
            position: 0,
            label: label.into(),
            fields,
            guard: can_advance,
        }
    }

    /// Create a step whose guard requires every field spec to pass.
    pub fn from_specs(label: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        let guard = Guard::all(fields.iter().map(FieldSpec::guard).collect());
        Self::new(label, fields, guard)
    }

    /// Set the ordinal position. Wizards assign positions on construction.
    pub(crate) fn at_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Evaluate the guard against the current draft.
    ///
    /// Never cached: the answer always reflects the draft passed in.
    pub fn can_advance(&self, draft: &Draft) -> bool {
        self.guard.check(draft)
    }

    /// Check every field, accumulating ALL violations.
    ///
    /// When the fields pass but a custom guard still refuses, the report
    /// fails with a single [`FieldViolation::Incomplete`].
    pub fn report(&self, draft: &Draft) -> StepReport {
        let checks: Vec<StepReport> = self
            .fields
            .iter()
            .map(|spec| match spec.check(draft) {
                Ok(()) => Validation::success(()),
                Err(violation) => Validation::fail(violation),
            })
            .collect();

        let report = Validation::all_vec(checks).map(|_| ());
        if report.is_success() && !self.can_advance(draft) {
            return Validation::fail(FieldViolation::Incomplete {
                step: self.label.clone(),
            });
        }
        report
    }

    /// Flattened list of violations, empty when the step is complete.
    pub fn violations(&self, draft: &Draft) -> Vec<FieldViolation> {
        match self.report(draft) {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }
}
