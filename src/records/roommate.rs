//! Roommate profiles: people looking for a place to share.

use super::defaults::{parse_amount, RecordDefaults};
use super::{Contact, RecordId};
use crate::draft::{Draft, Field, ImageRef};
use crate::step::{FieldSpec, StepDefinition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Roommate {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub age: u32,
    pub budget: u32,
    pub period: String,
    pub preferred_area: String,
    pub bio: Option<String>,
    pub contact: Contact,
    pub tags: Vec<String>,
    pub photos: Vec<ImageRef>,
}

/// Profile, Preferences.
pub(crate) fn steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::from_specs(
            "Profile",
            vec![
                FieldSpec::text(Field::Name),
                FieldSpec::non_negative_int(Field::Age),
                FieldSpec::non_negative_int(Field::Budget),
                FieldSpec::optional(Field::Photos),
            ],
        ),
        StepDefinition::from_specs(
            "Preferences",
            vec![
                FieldSpec::text(Field::Area),
                FieldSpec::contact(),
                FieldSpec::optional(Field::Bio),
                FieldSpec::optional(Field::Tags),
            ],
        ),
    ]
}

impl Roommate {
    pub(crate) fn from_draft(draft: &Draft, defaults: &RecordDefaults) -> Self {
        Self {
            id: RecordId::new(),
            created_at: Utc::now(),
            name: draft.text(Field::Name).trim().to_string(),
            age: parse_amount(draft.text(Field::Age)),
            budget: parse_amount(draft.text(Field::Budget)),
            period: defaults.period(draft),
            preferred_area: draft.text(Field::Area).trim().to_string(),
            bio: draft.non_blank(Field::Bio),
            contact: Contact::from_draft(draft),
            tags: defaults.tags_or(draft, Field::Tags, &defaults.roommate_tags),
            photos: defaults.photos(draft, Field::Photos),
        }
    }
}
