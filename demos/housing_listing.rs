//! Housing Listing
//!
//! This example walks a housing screen through its four-step wizard, the
//! way a user listing a flat would.
//!
//! Key concepts:
//! - A screen opens one wizard at a time and keeps the saved records
//! - Step guards block advancing until required fields are valid
//! - Violations name every field that still needs attention
//! - Completing the last step builds the record and closes the wizard
//!
//! Run with: cargo run --example housing_listing

use std::sync::Arc;
use trailhead::config::WizardConfig;
use trailhead::draft::{Field, ImageRef, Selection};
use trailhead::records::{Availability, FinishedRecord, HousingType, RecordKind};
use trailhead::screen::{Screen, ScreenEvent, StaticCatalog};

fn main() {
    println!("=== Housing Listing Example ===\n");

    let config = Arc::new(WizardConfig::default());
    let catalog = Arc::new(StaticCatalog::from_config(&config));
    let mut screen = Screen::new(catalog, RecordKind::HousingSpot, config);
    println!("Listings on screen: {}", screen.records().len());
    println!("Suggested badges: {:?}", screen.suggested_tags());

    // Step 1: where and what
    let wizard = screen.begin_compose().unwrap();
    println!("\nOpened the {} wizard with {} steps", wizard.name(), wizard.step_count());
    let draft = wizard.draft_mut().unwrap();
    draft.set_text(Field::Area, "Alfama");
    draft.select(Field::HousingType, HousingType::Studio);
    println!("Advance: {:?}", screen.advance().unwrap());

    // Step 2: the title is still blank, so the step refuses
    let draft = screen.wizard_mut().unwrap().draft_mut().unwrap();
    draft.set_text(Field::Price, "1200");
    draft.set_text(Field::Address, "Rua dos Remédios 12");
    let wizard = screen.wizard().unwrap();
    if let Some(step) = wizard.current_step() {
        println!("\nStep '{}' problems:", step.label());
        for violation in step.violations(wizard.draft()) {
            println!("  - {violation}");
        }
    }
    println!("Advance: {:?}", screen.advance().unwrap());

    screen
        .wizard_mut()
        .unwrap()
        .draft_mut()
        .unwrap()
        .set_text(Field::Title, "Sunny studio by the river");
    println!("Advance after adding a title: {:?}", screen.advance().unwrap());

    // Step 3: rating, contact and availability
    let draft = screen.wizard_mut().unwrap().draft_mut().unwrap();
    draft.set_number(Field::Rating, 4);
    draft.set_text(Field::Email, "host@example.com");
    draft.select(Field::Availability, Availability::Soon);
    println!("Advance: {:?}", screen.advance().unwrap());

    // Step 4: description, photos and badges
    let draft = screen.wizard_mut().unwrap().draft_mut().unwrap();
    draft.set_text(Field::Description, "Quiet street, ten minutes from the tram.");
    draft.add_image(Field::Photos, ImageRef::asset("studio-1.jpg"));
    draft.insert_tag(Field::Badges, "Balcony");

    match screen.advance().unwrap() {
        ScreenEvent::Saved(id) => {
            println!("\nSaved listing {id}");
            if let Some(FinishedRecord::HousingSpot(spot)) = screen.records().get(id) {
                println!("  Title: {}", spot.title);
                println!("  Type: {}", spot.housing_type.label());
                println!("  Price: {}/{}", spot.price, spot.period);
                println!("  Availability: {}", spot.availability.label());
                println!("  Badges: {:?}", spot.badges);
            }
        }
        other => println!("\nListing was not saved: {other:?}"),
    }

    println!("Wizard still open: {}", screen.mode().is_composing());
    println!("Listings on screen: {}", screen.records().len());

    println!("\n=== Example Complete ===");
}
