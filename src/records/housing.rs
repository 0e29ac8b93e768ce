//! Housing spots: rooms and flats offered for rent.

use super::defaults::{parse_amount, RecordDefaults};
use super::selections::{Availability, HousingType};
use super::{Contact, RecordId};
use crate::draft::{Coordinate, Draft, Field, ImageRef};
use crate::step::{FieldSpec, StepDefinition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HousingSpot {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub area: String,
    pub housing_type: HousingType,
    pub price: u32,
    pub period: String,
    pub address: String,
    pub coordinate: Option<Coordinate>,
    pub rating: u8,
    pub contact: Contact,
    pub availability: Availability,
    pub description: String,
    pub photos: Vec<ImageRef>,
    pub badges: Vec<String>,
}

/// Area, Basics, Details, Media.
pub(crate) fn steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::from_specs(
            "Area",
            vec![
                FieldSpec::text(Field::Area),
                FieldSpec::choice::<HousingType>(Field::HousingType),
            ],
        ),
        StepDefinition::from_specs(
            "Basics",
            vec![
                FieldSpec::text(Field::Title),
                FieldSpec::non_negative_int(Field::Price),
                FieldSpec::optional(Field::Period),
                FieldSpec::text(Field::Address),
                FieldSpec::optional(Field::Coordinate),
            ],
        ),
        StepDefinition::from_specs(
            "Details",
            vec![
                FieldSpec::range(Field::Rating, MIN_RATING, MAX_RATING),
                FieldSpec::contact(),
                FieldSpec::choice::<Availability>(Field::Availability),
            ],
        ),
        StepDefinition::from_specs(
            "Media",
            vec![
                FieldSpec::text(Field::Description),
                FieldSpec::at_least_one(Field::Photos),
                FieldSpec::at_least_one(Field::Badges),
            ],
        ),
    ]
}

impl HousingSpot {
    pub(crate) fn from_draft(draft: &Draft, defaults: &RecordDefaults) -> Self {
        let rating = draft
            .number(Field::Rating)
            .unwrap_or(MIN_RATING)
            .clamp(MIN_RATING, MAX_RATING);

        Self {
            id: RecordId::new(),
            created_at: Utc::now(),
            title: draft.text(Field::Title).trim().to_string(),
            area: draft.text(Field::Area).trim().to_string(),
            housing_type: draft
                .choice(Field::HousingType)
                .unwrap_or(HousingType::Apartment),
            price: parse_amount(draft.text(Field::Price)),
            period: defaults.period(draft),
            address: draft.text(Field::Address).trim().to_string(),
            coordinate: draft.coordinate(Field::Coordinate),
            rating: u8::try_from(rating).unwrap_or(MAX_RATING as u8),
            contact: Contact::from_draft(draft),
            availability: draft
                .choice(Field::Availability)
                .unwrap_or(Availability::Available),
            description: draft.text(Field::Description).trim().to_string(),
            photos: defaults.photos(draft, Field::Photos),
            badges: defaults.tags_or(draft, Field::Badges, &defaults.housing_badges),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_steps() {
        assert_eq!(steps().len(), 4);
    }

    #[test]
    fn details_need_rating_contact_and_availability() {
        let details = &steps()[2];
        let mut draft = Draft::new();
        draft.set_number(Field::Rating, 5);
        draft.select(Field::Availability, Availability::Available);
        assert!(!details.can_advance(&draft));

        draft.set_text(Field::Phone, "+351 912 345 678");
        assert!(details.can_advance(&draft));

        draft.set_number(Field::Rating, 6);
        assert!(!details.can_advance(&draft));
    }

    #[test]
    fn badges_fall_back_to_defaults() {
        let mut draft = Draft::new();
        draft.set_text(Field::Title, "Loft");
        draft.set_text(Field::Price, "950");

        let spot = HousingSpot::from_draft(&draft, &RecordDefaults::default());
        assert_eq!(spot.badges, vec!["Furnished", "Near metro"]);
        assert_eq!(spot.period, "mo");
        assert_eq!(spot.price, 950);
        assert_eq!(spot.rating, 1);
        assert_eq!(spot.photos.len(), 1);
    }

    #[test]
    fn price_must_fit_the_record() {
        let basics = &steps()[1];
        let mut draft = Draft::new();
        draft.set_text(Field::Title, "Penthouse");
        draft.set_text(Field::Address, "Avenida da Liberdade 1");

        draft.set_text(Field::Price, "4294967296");
        assert!(!basics.can_advance(&draft));

        draft.set_text(Field::Price, "4294967295");
        assert!(basics.can_advance(&draft));
        let spot = HousingSpot::from_draft(&draft, &RecordDefaults::default());
        assert_eq!(spot.price, u32::MAX);
    }
}
