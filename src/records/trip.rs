//! Trips: a destination and the dates the user will be there.

use super::defaults::RecordDefaults;
use super::RecordId;
use crate::core::Guard;
use crate::draft::{Draft, Field, ImageRef};
use crate::step::{FieldSpec, StepDefinition};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub destination: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
    pub notes: Option<String>,
    pub photos: Vec<ImageRef>,
}

/// A single step. The end date, when given, may not precede the start.
pub(crate) fn steps() -> Vec<StepDefinition> {
    let fields = vec![
        FieldSpec::text(Field::Destination),
        FieldSpec::date(Field::StartsOn),
        FieldSpec::optional(Field::EndsOn),
        FieldSpec::optional(Field::Notes),
    ];
    let guard =
        Guard::all(fields.iter().map(FieldSpec::guard).collect()).and(Guard::new(dates_in_order));
    vec![StepDefinition::new("Trip", fields, guard)]
}

fn dates_in_order(draft: &Draft) -> bool {
    match (draft.date(Field::StartsOn), draft.date(Field::EndsOn)) {
        (Some(start), Some(end)) => end >= start,
        _ => true,
    }
}

impl Trip {
    pub(crate) fn from_draft(draft: &Draft, defaults: &RecordDefaults) -> Self {
        let created_at = Utc::now();
        Self {
            id: RecordId::new(),
            created_at,
            destination: draft.text(Field::Destination).trim().to_string(),
            city: draft.non_blank(Field::City),
            country: draft.non_blank(Field::Country),
            starts_on: draft
                .date(Field::StartsOn)
                .unwrap_or_else(|| created_at.date_naive()),
            ends_on: draft.date(Field::EndsOn),
            notes: draft.non_blank(Field::Notes),
            photos: defaults.photos(draft, Field::Photos),
        }
    }
}
