//! Trailhead: multi-step creation wizards for a travel companion app
//!
//! Trailhead drives the "create a record" flows of a travel app: places,
//! group events, housing spots, roommate profiles and trips. Each flow is a
//! fixed sequence of steps over a mutable draft; guards decide when the user
//! may move on, and completing the last step turns the draft into an
//! immutable record.
//!
//! # Core Concepts
//!
//! - **Draft**: loosely typed field values entered so far
//! - **Steps**: a label, the fields shown, and a guard over the draft
//! - **Wizard**: current step, navigation and record building
//! - **Screen**: a record list that opens wizards and keeps their output
//! - **Collaborators**: geocoding, search, photos and maps behind traits,
//!   with timeouts and stale-result suppression
//!
//! # Example
//!
//! ```rust
//! use trailhead::config::WizardConfig;
//! use trailhead::draft::Field;
//! use trailhead::records::{FinishedRecord, RecordKind};
//! use trailhead::wizard::Advance;
//! use chrono::NaiveDate;
//!
//! let mut wizard = RecordKind::Trip.wizard(&WizardConfig::default()).unwrap();
//!
//! let draft = wizard.draft_mut().unwrap();
//! draft.set_text(Field::Destination, "Lisbon");
//! draft.set_date(Field::StartsOn, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
//!
//! match wizard.advance().unwrap() {
//!     Advance::Completed(FinishedRecord::Trip(trip)) => {
//!         assert_eq!(trip.destination, "Lisbon");
//!         assert!(trip.photos[0].is_placeholder());
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod collab;
pub mod config;
pub mod core;
pub mod draft;
pub mod records;
pub mod screen;
pub mod step;
pub mod telemetry;
pub mod wizard;

// Re-export commonly used types
pub use config::WizardConfig;
pub use self::core::{Guard, StepHistory, WizardPhase};
pub use draft::{Draft, Field, FieldValue};
pub use records::{FinishedRecord, RecordId, RecordKind};
pub use screen::{Screen, ScreenMode};
pub use step::{FieldSpec, FieldViolation, StepDefinition};
pub use wizard::{Advance, Wizard, WizardBuilder, WizardError};
