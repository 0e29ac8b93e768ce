//! Finished records and the per-kind wizards that produce them.
//!
//! Each record kind fixes its own step sequence and its own
//! `Draft -> record` mapping. Builders trust the draft they are handed:
//! whatever the wizard's guards let through is mapped, and anything left
//! unset is defaulted from [`RecordDefaults`].

mod defaults;
mod group;
mod housing;
mod place;
mod roommate;
mod selections;
mod trip;

pub use defaults::RecordDefaults;
pub use group::GroupEvent;
pub use housing::{HousingSpot, MAX_RATING, MIN_RATING};
pub use place::Place;
pub use roommate::Roommate;
pub use selections::{Availability, GroupActivity, HousingType, PlaceCategory};
pub use trip::Trip;

use crate::config::WizardConfig;
use crate::draft::{Draft, Field, ImageRef};
use crate::step::StepDefinition;
use crate::wizard::{BuildError, Wizard, WizardBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a finished record.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How to reach the person behind a listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    pub(crate) fn from_draft(draft: &Draft) -> Self {
        Self {
            phone: draft.non_blank(Field::Phone),
            email: draft.non_blank(Field::Email),
        }
    }
}

/// The record kinds a wizard can create.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Place,
    GroupEvent,
    HousingSpot,
    Roommate,
    Trip,
}

impl RecordKind {
    pub const ALL: [RecordKind; 5] = [
        Self::Place,
        Self::GroupEvent,
        Self::HousingSpot,
        Self::Roommate,
        Self::Trip,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Place => "place",
            Self::GroupEvent => "group",
            Self::HousingSpot => "housing",
            Self::Roommate => "roommate",
            Self::Trip => "trip",
        }
    }

    /// The fixed step sequence for this kind.
    pub fn steps(&self) -> Vec<StepDefinition> {
        match self {
            Self::Place => place::steps(),
            Self::GroupEvent => group::steps(),
            Self::HousingSpot => housing::steps(),
            Self::Roommate => roommate::steps(),
            Self::Trip => trip::steps(),
        }
    }

    /// Map a draft into a finished record of this kind.
    pub fn build(&self, draft: &Draft, defaults: &RecordDefaults) -> FinishedRecord {
        match self {
            Self::Place => FinishedRecord::Place(Place::from_draft(draft, defaults)),
            Self::GroupEvent => FinishedRecord::GroupEvent(GroupEvent::from_draft(draft, defaults)),
            Self::HousingSpot => {
                FinishedRecord::HousingSpot(HousingSpot::from_draft(draft, defaults))
            }
            Self::Roommate => FinishedRecord::Roommate(Roommate::from_draft(draft, defaults)),
            Self::Trip => FinishedRecord::Trip(Trip::from_draft(draft, defaults)),
        }
    }

    /// Open a new wizard for this kind.
    pub fn wizard(self, config: &WizardConfig) -> Result<Wizard<FinishedRecord>, BuildError> {
        let defaults = RecordDefaults::from_config(config);
        WizardBuilder::new(self.name())
            .steps(self.steps())
            .policy(config.finalize_policy)
            .finalize(move |draft: &Draft| self.build(draft, &defaults))
            .build()
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable output of a completed wizard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FinishedRecord {
    Place(Place),
    HousingSpot(HousingSpot),
    Roommate(Roommate),
    GroupEvent(GroupEvent),
    Trip(Trip),
}

impl FinishedRecord {
    pub fn id(&self) -> RecordId {
        match self {
            Self::Place(r) => r.id,
            Self::HousingSpot(r) => r.id,
            Self::Roommate(r) => r.id,
            Self::GroupEvent(r) => r.id,
            Self::Trip(r) => r.id,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Place(_) => RecordKind::Place,
            Self::HousingSpot(_) => RecordKind::HousingSpot,
            Self::Roommate(_) => RecordKind::Roommate,
            Self::GroupEvent(_) => RecordKind::GroupEvent,
            Self::Trip(_) => RecordKind::Trip,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Place(r) => r.created_at,
            Self::HousingSpot(r) => r.created_at,
            Self::Roommate(r) => r.created_at,
            Self::GroupEvent(r) => r.created_at,
            Self::Trip(r) => r.created_at,
        }
    }

    /// Headline shown in lists.
    pub fn title(&self) -> &str {
        match self {
            Self::Place(r) => &r.name,
            Self::HousingSpot(r) => &r.title,
            Self::Roommate(r) => &r.name,
            Self::GroupEvent(r) => &r.title,
            Self::Trip(r) => &r.destination,
        }
    }

    pub fn photos(&self) -> &[ImageRef] {
        match self {
            Self::Place(r) => &r.photos,
            Self::HousingSpot(r) => &r.photos,
            Self::Roommate(r) => &r.photos,
            Self::GroupEvent(r) => &r.photos,
            Self::Trip(r) => &r.photos,
        }
    }
}
