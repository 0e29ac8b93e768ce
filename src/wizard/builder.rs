//! Builder for constructing wizards.

use crate::draft::Draft;
use crate::step::StepDefinition;
use crate::wizard::error::BuildError;
use crate::wizard::{FinalizePolicy, Finalizer, Wizard};
use std::sync::Arc;

/// Builder for constructing wizards with a fluent API.
///
/// # Example
///
/// ```rust
/// use trailhead::draft::{Draft, Field};
/// use trailhead::step::{FieldSpec, StepDefinition};
/// use trailhead::wizard::WizardBuilder;
///
/// let wizard = WizardBuilder::new("note")
///     .step(StepDefinition::from_specs("Text", vec![FieldSpec::text(Field::Notes)]))
///     .finalize(|draft: &Draft| draft.text(Field::Notes).to_string())
///     .build()
///     .unwrap();
///
/// assert_eq!(wizard.step_count(), 1);
/// ```
pub struct WizardBuilder<R> {
    name: String,
    steps: Vec<StepDefinition>,
    finalizer: Option<Finalizer<R>>,
    policy: FinalizePolicy,
}

impl<R> WizardBuilder<R> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
            finalizer: None,
            policy: FinalizePolicy::default(),
        }
    }

    /// Append a step (required at least once).
    pub fn step(mut self, step: StepDefinition) -> Self {
        self.steps.push(step);
        self
    }

    /// Append several steps at once.
    pub fn steps(mut self, steps: impl IntoIterator<Item = StepDefinition>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Set the record builder run on completion (required).
    pub fn finalize<F>(mut self, finalizer: F) -> Self
    where
        F: Fn(&Draft) -> R + Send + Sync + 'static,
    {
        self.finalizer = Some(Arc::new(finalizer));
        self
    }

    /// Choose which steps are re-checked before completion.
    pub fn policy(mut self, policy: FinalizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the wizard, positioned on its first step.
    pub fn build(self) -> Result<Wizard<R>, BuildError> {
        if self.steps.is_empty() {
            return Err(BuildError::NoSteps);
        }
        let finalizer = self.finalizer.ok_or(BuildError::MissingFinalizer)?;

        let steps = self
            .steps
            .into_iter()
            .enumerate()
            .map(|(position, step)| step.at_position(position))
            .collect();

        Ok(Wizard::from_parts(self.name, steps, finalizer, self.policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Field;
    use crate::step::FieldSpec;

    #[test]
    fn builder_requires_steps() {
        let result = WizardBuilder::<()>::new("empty").finalize(|_| ()).build();
        assert!(matches!(result, Err(BuildError::NoSteps)));
    }

    #[test]
    fn builder_requires_finalizer() {
        let result = WizardBuilder::<()>::new("unfinished")
            .step(StepDefinition::from_specs("One", vec![]))
            .build();
        assert!(matches!(result, Err(BuildError::MissingFinalizer)));
    }

    #[test]
    fn builder_assigns_positions() {
        let wizard = WizardBuilder::new("three")
            .steps(vec![
                StepDefinition::from_specs("A", vec![FieldSpec::text(Field::Name)]),
                StepDefinition::from_specs("B", vec![]),
                StepDefinition::from_specs("C", vec![]),
            ])
            .finalize(|_| 0u8)
            .build()
            .unwrap();

        let positions: Vec<usize> = wizard.steps().iter().map(|s| s.position()).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(wizard.current_index(), Some(0));
    }

    #[test]
    fn builder_sets_policy() {
        let wizard = WizardBuilder::new("lenient")
            .step(StepDefinition::from_specs("A", vec![]))
            .finalize(|_| ())
            .policy(FinalizePolicy::LastStepOnly)
            .build()
            .unwrap();

        assert_eq!(wizard.policy(), FinalizePolicy::LastStepOnly);
    }
}
