//! Group events: meetups other travellers can join.

use super::defaults::{parse_amount, RecordDefaults};
use super::selections::GroupActivity;
use super::RecordId;
use crate::draft::{Coordinate, Draft, Field, ImageRef};
use crate::step::{FieldSpec, StepDefinition};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupEvent {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub activity: GroupActivity,
    pub meeting_point: String,
    pub coordinate: Option<Coordinate>,
    pub starts_on: Option<NaiveDate>,
    pub capacity: u32,
    pub description: String,
    pub photos: Vec<ImageRef>,
}

/// Activity, When & where, About.
pub(crate) fn steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::from_specs(
            "Activity",
            vec![
                FieldSpec::text(Field::Title),
                FieldSpec::choice::<GroupActivity>(Field::Activity),
            ],
        ),
        StepDefinition::from_specs(
            "When & where",
            vec![
                FieldSpec::text(Field::MeetingPoint),
                FieldSpec::optional(Field::Coordinate),
                FieldSpec::date(Field::StartsOn),
                FieldSpec::positive_int(Field::Capacity),
            ],
        ),
        StepDefinition::from_specs(
            "About",
            vec![
                FieldSpec::text(Field::Description),
                FieldSpec::optional(Field::Photos),
            ],
        ),
    ]
}

impl GroupEvent {
    pub(crate) fn from_draft(draft: &Draft, defaults: &RecordDefaults) -> Self {
        Self {
            id: RecordId::new(),
            created_at: Utc::now(),
            title: draft.text(Field::Title).trim().to_string(),
            activity: draft
                .choice(Field::Activity)
                .unwrap_or(GroupActivity::Other),
            meeting_point: draft.text(Field::MeetingPoint).trim().to_string(),
            coordinate: draft.coordinate(Field::Coordinate),
            starts_on: draft.date(Field::StartsOn),
            capacity: parse_amount(draft.text(Field::Capacity)),
            description: draft.text(Field::Description).trim().to_string(),
            photos: defaults.photos(draft, Field::Photos),
        }
    }
}
