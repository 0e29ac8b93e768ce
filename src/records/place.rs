//! Places: cafes, viewpoints, beaches and other spots worth visiting.

use super::defaults::RecordDefaults;
use super::selections::PlaceCategory;
use super::RecordId;
use crate::draft::{Coordinate, Draft, Field, ImageRef};
use crate::step::{FieldSpec, StepDefinition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub category: PlaceCategory,
    pub address: String,
    pub coordinate: Option<Coordinate>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub description: String,
    pub photos: Vec<ImageRef>,
    pub tags: Vec<String>,
}

/// Basics, Location, Details.
pub(crate) fn steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::from_specs(
            "Basics",
            vec![
                FieldSpec::text(Field::Name),
                FieldSpec::choice::<PlaceCategory>(Field::Category),
            ],
        ),
        StepDefinition::from_specs(
            "Location",
            vec![
                FieldSpec::text(Field::Address),
                FieldSpec::optional(Field::Coordinate),
                FieldSpec::optional(Field::City),
                FieldSpec::optional(Field::Country),
            ],
        ),
        StepDefinition::from_specs(
            "Details",
            vec![
                FieldSpec::text(Field::Description),
                FieldSpec::optional(Field::Photos),
                FieldSpec::optional(Field::Tags),
            ],
        ),
    ]
}

impl Place {
    pub(crate) fn from_draft(draft: &Draft, defaults: &RecordDefaults) -> Self {
        Self {
            id: RecordId::new(),
            created_at: Utc::now(),
            name: draft.text(Field::Name).trim().to_string(),
            category: draft
                .choice(Field::Category)
                .unwrap_or(PlaceCategory::Other),
            address: draft.text(Field::Address).trim().to_string(),
            coordinate: draft.coordinate(Field::Coordinate),
            city: draft.non_blank(Field::City),
            country: draft.non_blank(Field::Country),
            description: draft.text(Field::Description).trim().to_string(),
            photos: defaults.photos(draft, Field::Photos),
            tags: defaults.tags_or(draft, Field::Tags, &[]),
        }
    }
}
