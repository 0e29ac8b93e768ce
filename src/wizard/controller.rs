//! Wizard controller that drives a draft through its steps.

use crate::core::{NavigationCause, StepHistory, StepTransition, WizardPhase};
use crate::draft::Draft;
use crate::step::{StepDefinition, StepReport};
use crate::wizard::error::WizardError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Record builder run when the last step is completed.
pub type Finalizer<R> = Arc<dyn Fn(&Draft) -> R + Send + Sync>;

/// Which guards must pass before the record is built.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum FinalizePolicy {
    /// Every step's guard is re-checked against the final draft
    #[default]
    AllSteps,
    /// Only the last step's guard is checked
    LastStepOnly,
}

/// Result of [`Wizard::advance`].
#[derive(Clone, Debug, PartialEq)]
pub enum Advance<R> {
    /// Moved forward to the step at `to`
    Moved { to: usize },
    /// The guard of step `step` refused; nothing changed
    Blocked { step: usize },
    /// The draft was turned into a record; the wizard is finished
    Completed(R),
}

impl<R> Advance<R> {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }

    /// The finished record, if this advance completed the wizard.
    pub fn into_record(self) -> Option<R> {
        match self {
            Self::Completed(record) => Some(record),
            Self::Moved { .. } | Self::Blocked { .. } => None,
        }
    }
}

/// A multi-step creation flow.
///
/// The wizard exclusively owns its [`Draft`]. Steps are fixed at
/// construction; the current index only moves by one in either direction,
/// except through [`jump_to_step`](Self::jump_to_step) which clamps.
///
/// # Example
///
/// ```rust
/// use trailhead::draft::{Draft, Field};
/// use trailhead::step::{FieldSpec, StepDefinition};
/// use trailhead::wizard::{Advance, WizardBuilder};
///
/// let mut wizard = WizardBuilder::new("trip")
///     .step(StepDefinition::from_specs("Where", vec![FieldSpec::text(Field::Destination)]))
///     .step(StepDefinition::from_specs("Notes", vec![FieldSpec::optional(Field::Notes)]))
///     .finalize(|draft: &Draft| draft.text(Field::Destination).to_string())
///     .build()
///     .unwrap();
///
/// assert_eq!(wizard.advance().unwrap(), Advance::Blocked { step: 0 });
///
/// wizard.draft_mut().unwrap().set_text(Field::Destination, "Kyoto");
/// assert_eq!(wizard.advance().unwrap(), Advance::Moved { to: 1 });
/// assert_eq!(
///     wizard.advance().unwrap(),
///     Advance::Completed("Kyoto".to_string())
/// );
/// assert!(wizard.is_finished());
/// ```
pub struct Wizard<R> {
    name: String,
    steps: Vec<StepDefinition>,
    phase: WizardPhase,
    draft: Draft,
    history: StepHistory,
    finalizer: Finalizer<R>,
    policy: FinalizePolicy,
}

impl<R> Wizard<R> {
    pub(crate) fn from_parts(
        name: String,
        steps: Vec<StepDefinition>,
        finalizer: Finalizer<R>,
        policy: FinalizePolicy,
    ) -> Self {
        tracing::debug!(wizard = %name, steps = steps.len(), "wizard opened");
        Self {
            name,
            steps,
            phase: WizardPhase::Step(0),
            draft: Draft::new(),
            history: StepHistory::new(),
            finalizer,
            policy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn policy(&self) -> FinalizePolicy {
        self.policy
    }

    pub fn history(&self) -> &StepHistory {
        &self.history
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Index of the active step; `None` once finished.
    pub fn current_index(&self) -> Option<usize> {
        self.phase.step_index()
    }

    pub fn current_step(&self) -> Option<&StepDefinition> {
        self.current_index().and_then(|index| self.steps.get(index))
    }

    pub fn is_last_step(&self) -> bool {
        self.current_index() == Some(self.last_index())
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mutable access to the draft while the wizard is active.
    pub fn draft_mut(&mut self) -> Result<&mut Draft, WizardError> {
        self.active_index()?;
        Ok(&mut self.draft)
    }

    /// Whether Next/Publish should be enabled right now.
    ///
    /// On the last step this applies the [`FinalizePolicy`].
    pub fn can_advance(&self) -> bool {
        match self.current_index() {
            None => false,
            Some(index) if index == self.last_index() => self.blocking_step().is_none(),
            Some(index) => self.steps[index].can_advance(&self.draft),
        }
    }

    /// Field report for the active step.
    pub fn report(&self) -> Option<StepReport> {
        self.current_step().map(|step| step.report(&self.draft))
    }

    /// Move forward, or build the record when on the last step.
    ///
    /// A refused guard is not an error: the wizard stays where it is and
    /// [`Advance::Blocked`] names the step that refused.
    pub fn advance(&mut self) -> Result<Advance<R>, WizardError> {
        let index = self.active_index()?;

        if index == self.last_index() {
            if let Some(step) = self.blocking_step() {
                tracing::debug!(wizard = %self.name, step, "completion blocked");
                return Ok(Advance::Blocked { step });
            }
            return Ok(Advance::Completed(self.complete()));
        }

        if !self.steps[index].can_advance(&self.draft) {
            tracing::debug!(wizard = %self.name, step = index, "advance blocked");
            return Ok(Advance::Blocked { step: index });
        }

        self.move_to(WizardPhase::Step(index + 1), NavigationCause::Advance);
        Ok(Advance::Moved { to: index + 1 })
    }

    /// Move back one step. A no-op on the first step.
    ///
    /// Entered fields are kept.
    pub fn retreat(&mut self) -> Result<usize, WizardError> {
        let index = self.active_index()?;
        if index > 0 {
            self.move_to(WizardPhase::Step(index - 1), NavigationCause::Retreat);
            return Ok(index - 1);
        }
        Ok(index)
    }

    /// Jump straight to a step, clamped to the valid range.
    ///
    /// Intermediate steps are not validated, so users can revisit or edit
    /// later steps in place.
    pub fn jump_to_step(&mut self, index: usize) -> Result<usize, WizardError> {
        let current = self.active_index()?;
        let target = index.min(self.last_index());
        if target != current {
            self.move_to(WizardPhase::Step(target), NavigationCause::Jump);
        }
        Ok(target)
    }

    /// Discard the draft without producing a record.
    pub fn cancel(&mut self) -> Result<(), WizardError> {
        self.active_index()?;
        self.draft = Draft::new();
        self.move_to(WizardPhase::Cancelled, NavigationCause::Cancel);
        tracing::info!(wizard = %self.name, "wizard cancelled");
        Ok(())
    }

    fn active_index(&self) -> Result<usize, WizardError> {
        self.phase.step_index().ok_or_else(|| WizardError::Finished {
            wizard: self.name.clone(),
            phase: self.phase,
        })
    }

    /// First step whose guard refuses completion under the policy.
    fn blocking_step(&self) -> Option<usize> {
        let last = self.last_index();
        match self.policy {
            FinalizePolicy::LastStepOnly => {
                (!self.steps[last].can_advance(&self.draft)).then_some(last)
            }
            FinalizePolicy::AllSteps => self
                .steps
                .iter()
                .position(|step| !step.can_advance(&self.draft)),
        }
    }

    fn complete(&mut self) -> R {
        let draft = std::mem::take(&mut self.draft);
        let record = (self.finalizer)(&draft);
        self.move_to(WizardPhase::Completed, NavigationCause::Complete);
        tracing::info!(
            wizard = %self.name,
            fields = draft.len(),
            "wizard completed"
        );
        record
    }

    fn move_to(&mut self, to: WizardPhase, cause: NavigationCause) {
        let from = self.phase;
        self.history = self.history.record(StepTransition {
            from,
            to,
            cause,
            timestamp: Utc::now(),
        });
        self.phase = to;
        tracing::debug!(wizard = %self.name, %from, %to, ?cause, "wizard moved");
    }
}

impl<R> fmt::Debug for Wizard<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wizard")
            .field("name", &self.name)
            .field("phase", &self.phase)
            .field("steps", &self.steps.len())
            .field("draft", &self.draft)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
