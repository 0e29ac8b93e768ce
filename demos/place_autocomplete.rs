//! Place Autocomplete
//!
//! This example types a place name into an autocomplete front-end backed by
//! an in-memory search service whose short queries answer slowly.
//!
//! Key concepts:
//! - Every query supersedes the ones issued before it
//! - A late answer to an old query never replaces newer suggestions
//! - Visible suggestions are published on a watch channel
//! - Resolving a suggestion fills the draft's location field
//!
//! Run with: cargo run --example place_autocomplete

use std::time::Duration;
use trailhead::collab::{Autocomplete, CollaboratorError, Completion, CompletionToken, PlaceSearch};
use trailhead::config::WizardConfig;
use trailhead::draft::{Coordinate, Field};
use trailhead::records::RecordKind;

const PLACES: &[(&str, &str, f64, f64)] = &[
    ("Alfama", "Lisbon, Portugal", 38.7118, -9.1300),
    ("Alcântara", "Lisbon, Portugal", 38.7033, -9.1789),
    ("Albufeira", "Faro, Portugal", 37.0891, -8.2479),
];

/// Short fragments match more places, so they take longer to answer.
struct InMemorySearch;

impl PlaceSearch for InMemorySearch {
    async fn search(&self, fragment: &str) -> Result<Vec<Completion>, CollaboratorError> {
        let delay = if fragment.len() < 4 { 300 } else { 50 };
        tokio::time::sleep(Duration::from_millis(delay)).await;

        let needle = fragment.to_lowercase();
        Ok(PLACES
            .iter()
            .filter(|(title, ..)| title.to_lowercase().starts_with(&needle))
            .map(|(title, subtitle, ..)| Completion {
                title: title.to_string(),
                subtitle: subtitle.to_string(),
                token: CompletionToken(title.to_string()),
            })
            .collect())
    }

    async fn resolve(&self, token: &CompletionToken) -> Result<Coordinate, CollaboratorError> {
        PLACES
            .iter()
            .find(|(title, ..)| *title == token.0)
            .map(|(_, _, latitude, longitude)| Coordinate::new(*latitude, *longitude))
            .ok_or(CollaboratorError::NotFound)
    }
}

#[tokio::main]
async fn main() {
    println!("=== Place Autocomplete Example ===\n");

    let config = WizardConfig::default();
    let autocomplete = Autocomplete::with_config(InMemorySearch, &config);
    let mut updates = autocomplete.subscribe();

    // The user types "Al" and then "Alfama" before the first answer arrives
    let (short, long) = tokio::join!(autocomplete.query("Al"), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        autocomplete.query("Alfama").await
    });
    println!("Query 'Al': {short:?}");
    println!("Query 'Alfama': {long:?}");

    if updates.has_changed().unwrap_or(false) {
        let visible = updates.borrow_and_update().clone();
        println!("\nShowing {} suggestion(s) for '{}':", visible.items.len(), visible.query);
        for item in &visible.items {
            println!("  - {} ({})", item.title, item.subtitle);
        }
    }

    // Picking the suggestion fills the place wizard's location
    let mut wizard = RecordKind::Place.wizard(&config).unwrap();
    if let Some(picked) = autocomplete.current().items.first() {
        match autocomplete.resolve(picked).await {
            Some(coordinate) => {
                let draft = wizard.draft_mut().unwrap();
                draft.set_text(Field::Name, picked.title.as_str());
                draft.set_coordinate(Field::Coordinate, coordinate);
                println!("\nResolved {} to {:?}", picked.title, coordinate);
            }
            None => println!("\nCould not resolve {}", picked.title),
        }
    }

    // A blank fragment empties the list without searching
    println!("\nQuery '': {:?}", autocomplete.query("  ").await);
    println!("Suggestions left: {}", autocomplete.current().items.len());

    println!("\n=== Example Complete ===");
}
