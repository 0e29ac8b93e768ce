//! End-to-end housing listing: the user fills four steps, gets stopped by
//! an empty title on the way, and ends up with a saved housing spot.

use std::sync::Arc;
use trailhead::collab::{apply_placemark, Geocoder, CollaboratorError, LocationSync, Placemark};
use trailhead::config::WizardConfig;
use trailhead::draft::{Coordinate, Draft, Field, FieldValue, ImageRef};
use trailhead::records::{Availability, FinishedRecord, HousingType, RecordKind};
use trailhead::screen::{Screen, ScreenEvent, StaticCatalog};
use trailhead::step::FieldViolation;

struct LisbonGeocoder;

impl Geocoder for LisbonGeocoder {
    async fn reverse_geocode(&self, _coordinate: Coordinate) -> Result<Placemark, CollaboratorError> {
        Ok(Placemark {
            city: Some("Lisbon".into()),
            country: Some("Portugal".into()),
        })
    }
}

fn housing_screen() -> Screen<StaticCatalog> {
    let config = Arc::new(WizardConfig::default());
    let catalog = Arc::new(StaticCatalog::from_config(&config));
    Screen::new(catalog, RecordKind::HousingSpot, config)
}

#[test]
fn housing_listing_flow() {
    let mut screen = housing_screen();
    let wizard = screen.begin_compose().unwrap();
    let draft = wizard.draft_mut().unwrap();
    draft.set_text(Field::Area, "Alfama");
    draft.select(Field::HousingType, HousingType::Studio);
    assert_eq!(screen.advance().unwrap(), ScreenEvent::Moved { to: 1 });

    // An empty title blocks the Basics step
    let wizard = screen.wizard_mut().unwrap();
    let draft = wizard.draft_mut().unwrap();
    draft.set_text(Field::Title, "");
    draft.set_text(Field::Price, "1200");
    draft.set_text(Field::Address, "123 Main St");
    assert!(!wizard.can_advance());
    let violations = wizard.current_step().unwrap().violations(wizard.draft());
    assert_eq!(violations, vec![FieldViolation::Missing { field: Field::Title }]);
    assert_eq!(screen.advance().unwrap(), ScreenEvent::Blocked { step: 1 });
    assert_eq!(screen.wizard().unwrap().current_index(), Some(1));

    screen
        .wizard_mut()
        .unwrap()
        .draft_mut()
        .unwrap()
        .set_text(Field::Title, "Sunny Studio");
    assert_eq!(screen.advance().unwrap(), ScreenEvent::Moved { to: 2 });

    let draft = screen.wizard_mut().unwrap().draft_mut().unwrap();
    draft.set_number(Field::Rating, 5);
    draft.set_text(Field::Email, "host@example.com");
    draft.select(Field::Availability, Availability::Available);
    assert_eq!(screen.advance().unwrap(), ScreenEvent::Moved { to: 3 });

    let draft = screen.wizard_mut().unwrap().draft_mut().unwrap();
    draft.set_text(Field::Description, "Bright studio with a view over the river.");
    draft.add_image(Field::Photos, ImageRef::asset("studio-1.jpg"));
    draft.insert_tag(Field::Badges, "Balcony");

    let ScreenEvent::Saved(id) = screen.advance().unwrap() else {
        panic!("housing spot was not saved");
    };

    assert!(screen.wizard().is_none());
    let Some(FinishedRecord::HousingSpot(spot)) = screen.records().get(id) else {
        panic!("saved record is not a housing spot");
    };
    assert_eq!(spot.title, "Sunny Studio");
    assert_eq!(spot.price, 1200);
    assert_eq!(spot.period, "mo");
    assert_eq!(spot.address, "123 Main St");
    assert_eq!(spot.rating, 5);
    assert_eq!(spot.housing_type, HousingType::Studio);
    assert_eq!(spot.contact.email.as_deref(), Some("host@example.com"));
    assert_eq!(spot.badges, vec!["Balcony"]);
    assert_eq!(spot.photos, vec![ImageRef::asset("studio-1.jpg")]);
}

/// Every field of all four steps, filled validly.
fn fill_listing(draft: &mut Draft) {
    draft.set_text(Field::Area, "Alfama");
    draft.select(Field::HousingType, HousingType::Studio);
    draft.set_text(Field::Title, "Sunny Studio");
    draft.set_text(Field::Price, "1200");
    draft.set_text(Field::Address, "123 Main St");
    draft.set_number(Field::Rating, 5);
    draft.set_text(Field::Phone, "+351 912 345 678");
    draft.select(Field::Availability, Availability::Soon);
    draft.set_text(Field::Description, "Quiet street.");
    draft.add_image(Field::Photos, ImageRef::asset("studio-1.jpg"));
    draft.insert_tag(Field::Badges, "Balcony");
}

#[test]
fn oversized_price_is_never_saved_as_zero() {
    let mut screen = housing_screen();
    let draft = screen.begin_compose().unwrap().draft_mut().unwrap();
    fill_listing(draft);
    draft.set_text(Field::Price, "5000000000");

    assert_eq!(screen.jump_to_step(3).unwrap(), 3);
    assert_eq!(screen.advance().unwrap(), ScreenEvent::Blocked { step: 1 });
    assert!(screen.records().is_empty());

    let draft = screen.wizard_mut().unwrap().draft_mut().unwrap();
    draft.set_text(Field::Price, "4294967295");
    let ScreenEvent::Saved(id) = screen.advance().unwrap() else {
        panic!("listing was not saved");
    };
    let Some(FinishedRecord::HousingSpot(spot)) = screen.records().get(id) else {
        panic!("saved record is not a housing spot");
    };
    assert_eq!(spot.price, u32::MAX);
}

#[test]
fn unknown_housing_type_blocks_completion() {
    let mut screen = housing_screen();
    let draft = screen.begin_compose().unwrap().draft_mut().unwrap();
    fill_listing(draft);
    draft.set(Field::HousingType, FieldValue::Choice("castle".into()));

    assert!(!screen.wizard().unwrap().steps()[0].can_advance(screen.wizard().unwrap().draft()));
    screen.jump_to_step(3).unwrap();
    assert_eq!(screen.advance().unwrap(), ScreenEvent::Blocked { step: 0 });
    assert!(screen.records().is_empty());
}

#[test]
fn going_back_keeps_entered_fields() {
    let mut screen = housing_screen();
    let draft = screen.begin_compose().unwrap().draft_mut().unwrap();
    draft.set_text(Field::Area, "Graça");
    draft.select(Field::HousingType, HousingType::PrivateRoom);
    screen.advance().unwrap();

    assert_eq!(screen.retreat().unwrap(), 0);
    let wizard = screen.wizard().unwrap();
    assert_eq!(wizard.draft().text(Field::Area), "Graça");
    assert_eq!(
        wizard.draft().choice::<HousingType>(Field::HousingType),
        Some(HousingType::PrivateRoom)
    );
}

#[tokio::test]
async fn picked_location_fills_address_fields() {
    let mut screen = housing_screen();
    let wizard = screen.begin_compose().unwrap();
    let sync = LocationSync::with_config(LisbonGeocoder, &WizardConfig::default());
    let coordinate = Coordinate::new(38.7139, -9.1334);

    let placemark = sync.locate(coordinate).await.unwrap();
    apply_placemark(wizard.draft_mut().unwrap(), coordinate, &placemark);

    let draft = wizard.draft();
    assert_eq!(draft.coordinate(Field::Coordinate), Some(coordinate));
    assert_eq!(draft.text(Field::City), "Lisbon");
    assert_eq!(draft.text(Field::Country), "Portugal");
}
