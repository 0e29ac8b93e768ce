//! List screens that launch wizards and collect their records.
//!
//! A screen shows the records of one kind and is either browsing them or
//! composing a new one. That is a single [`ScreenMode`], so "a wizard is
//! open" and "which wizard" can never disagree.

mod catalog;
mod collection;

pub use catalog::{CatalogProvider, StaticCatalog};
pub use collection::{InsertPosition, RecordCollection};

use crate::config::WizardConfig;
use crate::records::{FinishedRecord, RecordId, RecordKind};
use crate::wizard::{Advance, BuildError, Wizard, WizardError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("A {0} wizard is already open")]
    AlreadyComposing(RecordKind),

    #[error("No wizard is open")]
    NotComposing,

    /// The finished record is handed back so the caller can keep it.
    #[error("Record {} is already in the list", .0.id())]
    DuplicateRecord(Box<FinishedRecord>),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// What the screen is doing.
pub enum ScreenMode {
    Browsing,
    Composing(Box<Wizard<FinishedRecord>>),
}

impl ScreenMode {
    pub fn is_composing(&self) -> bool {
        matches!(self, Self::Composing(_))
    }
}

/// Outcome of driving the open wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenEvent {
    Moved { to: usize },
    Blocked { step: usize },
    /// The wizard finished and its record was added to the list
    Saved(RecordId),
    /// The wizard was closed without a record
    Dismissed,
}

/// A screen listing records of one kind.
pub struct Screen<C: CatalogProvider> {
    kind: RecordKind,
    catalog: Arc<C>,
    config: Arc<WizardConfig>,
    records: RecordCollection,
    mode: ScreenMode,
}

impl<C: CatalogProvider> Screen<C> {
    /// Open a screen seeded with the catalog's records for `kind`.
    pub fn new(catalog: Arc<C>, kind: RecordKind, config: Arc<WizardConfig>) -> Self {
        let mut records = RecordCollection::new();
        for record in catalog.records(kind) {
            if let Err(duplicate) = records.insert(record, InsertPosition::Append) {
                tracing::warn!(%kind, id = %duplicate.id(), "skipping duplicate catalog record");
            }
        }
        Self {
            kind,
            catalog,
            config,
            records,
            mode: ScreenMode::Browsing,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn mode(&self) -> &ScreenMode {
        &self.mode
    }

    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    pub fn suggested_tags(&self) -> Vec<String> {
        self.catalog.suggested_tags(self.kind)
    }

    /// Open a fresh wizard for this screen's kind.
    pub fn begin_compose(&mut self) -> Result<&mut Wizard<FinishedRecord>, ScreenError> {
        if self.mode.is_composing() {
            return Err(ScreenError::AlreadyComposing(self.kind));
        }
        let wizard = self.kind.wizard(&self.config)?;
        self.mode = ScreenMode::Composing(Box::new(wizard));
        self.wizard_mut()
    }

    pub fn wizard(&self) -> Option<&Wizard<FinishedRecord>> {
        match &self.mode {
            ScreenMode::Composing(wizard) => Some(wizard.as_ref()),
            ScreenMode::Browsing => None,
        }
    }

    pub fn wizard_mut(&mut self) -> Result<&mut Wizard<FinishedRecord>, ScreenError> {
        match &mut self.mode {
            ScreenMode::Composing(wizard) => Ok(wizard.as_mut()),
            ScreenMode::Browsing => Err(ScreenError::NotComposing),
        }
    }

    /// Advance the open wizard; a completed record is added to the list.
    pub fn advance(&mut self) -> Result<ScreenEvent, ScreenError> {
        let outcome = self.wizard_mut()?.advance()?;
        match outcome {
            Advance::Moved { to } => Ok(ScreenEvent::Moved { to }),
            Advance::Blocked { step } => Ok(ScreenEvent::Blocked { step }),
            Advance::Completed(record) => {
                self.mode = ScreenMode::Browsing;
                self.save(record).map(ScreenEvent::Saved)
            }
        }
    }

    pub fn retreat(&mut self) -> Result<usize, ScreenError> {
        Ok(self.wizard_mut()?.retreat()?)
    }

    pub fn jump_to_step(&mut self, index: usize) -> Result<usize, ScreenError> {
        Ok(self.wizard_mut()?.jump_to_step(index)?)
    }

    /// Close the open wizard, discarding its draft.
    pub fn cancel(&mut self) -> Result<ScreenEvent, ScreenError> {
        self.wizard_mut()?.cancel()?;
        self.mode = ScreenMode::Browsing;
        Ok(ScreenEvent::Dismissed)
    }

    fn save(&mut self, record: FinishedRecord) -> Result<RecordId, ScreenError> {
        let id = record.id();
        self.records
            .insert(record, InsertPosition::for_kind(self.kind))
            .map_err(|rejected| ScreenError::DuplicateRecord(Box::new(rejected)))?;
        tracing::info!(kind = %self.kind, %id, total = self.records.len(), "record saved");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{Draft, Field};
    use crate::records::RecordDefaults;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn screen(kind: RecordKind) -> Screen<StaticCatalog> {
        let config = Arc::new(WizardConfig::default());
        let catalog = Arc::new(StaticCatalog::from_config(&config));
        Screen::new(catalog, kind, config)
    }

    fn fill_trip(draft: &mut Draft, destination: &str) {
        draft.set_text(Field::Destination, destination);
        draft.set_date(
            Field::StartsOn,
            NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
        );
    }

    #[test]
    fn screen_starts_with_catalog_records() {
        let seeded = RecordKind::Trip.build(&Draft::new(), &RecordDefaults::default());
        let catalog = Arc::new(StaticCatalog::new().with_record(seeded.clone()));
        let screen = Screen::new(catalog, RecordKind::Trip, Arc::new(WizardConfig::default()));

        assert_eq!(screen.records().as_slice(), &[seeded]);
        assert!(!screen.mode().is_composing());
    }

    #[test]
    fn completed_trip_is_appended() {
        let seeded = RecordKind::Trip.build(&Draft::new(), &RecordDefaults::default());
        let catalog = Arc::new(StaticCatalog::new().with_record(seeded.clone()));
        let mut screen = Screen::new(catalog, RecordKind::Trip, Arc::new(WizardConfig::default()));

        let wizard = screen.begin_compose().unwrap();
        fill_trip(wizard.draft_mut().unwrap(), "Kyoto");
        let event = screen.advance().unwrap();

        let ScreenEvent::Saved(id) = event else {
            panic!("expected a saved record, got {event:?}");
        };
        assert!(screen.wizard().is_none());
        assert_eq!(screen.records().len(), 2);
        assert_eq!(screen.records().as_slice()[0], seeded);
        assert_eq!(screen.records().as_slice()[1].id(), id);
        assert_eq!(screen.records().as_slice()[1].title(), "Kyoto");
    }

    #[test]
    fn completed_roommate_is_prepended() {
        let mut screen = screen(RecordKind::Roommate);
        for name in ["Ana", "Bruno"] {
            let draft = screen.begin_compose().unwrap().draft_mut().unwrap();
            draft.set_text(Field::Name, name);
            draft.set_text(Field::Age, "29");
            draft.set_text(Field::Budget, "700");
            assert_eq!(screen.advance().unwrap(), ScreenEvent::Moved { to: 1 });

            let draft = screen.wizard_mut().unwrap().draft_mut().unwrap();
            draft.set_text(Field::Area, "Graça");
            draft.set_text(Field::Email, "hi@example.com");
            assert!(matches!(screen.advance().unwrap(), ScreenEvent::Saved(_)));
        }

        let titles: Vec<&str> = screen.records().iter().map(FinishedRecord::title).collect();
        assert_eq!(titles, vec!["Bruno", "Ana"]);
    }

    #[test]
    fn blocked_advance_keeps_wizard_open() {
        let mut screen = screen(RecordKind::Trip);
        screen.begin_compose().unwrap();

        assert_eq!(screen.advance().unwrap(), ScreenEvent::Blocked { step: 0 });
        assert!(screen.mode().is_composing());
        assert!(screen.records().is_empty());
    }

    #[test]
    fn cancel_adds_nothing() {
        let mut screen = screen(RecordKind::Trip);
        let wizard = screen.begin_compose().unwrap();
        fill_trip(wizard.draft_mut().unwrap(), "Lima");

        assert_eq!(screen.cancel().unwrap(), ScreenEvent::Dismissed);
        assert!(screen.records().is_empty());
        assert!(screen.wizard().is_none());
    }

    #[test]
    fn only_one_wizard_at_a_time() {
        let mut screen = screen(RecordKind::Place);
        screen.begin_compose().unwrap();
        assert!(matches!(
            screen.begin_compose(),
            Err(ScreenError::AlreadyComposing(RecordKind::Place))
        ));
    }

    #[test]
    fn driving_without_a_wizard_fails() {
        let mut screen = screen(RecordKind::Place);
        assert!(matches!(screen.advance(), Err(ScreenError::NotComposing)));
        assert!(matches!(screen.retreat(), Err(ScreenError::NotComposing)));
        assert!(matches!(screen.jump_to_step(1), Err(ScreenError::NotComposing)));
        assert!(matches!(screen.cancel(), Err(ScreenError::NotComposing)));
    }

    #[test]
    fn ids_stay_unique_across_a_session() {
        let mut screen = screen(RecordKind::Trip);
        for n in 0..20 {
            let wizard = screen.begin_compose().unwrap();
            fill_trip(wizard.draft_mut().unwrap(), &format!("Stop {n}"));
            screen.advance().unwrap();
        }

        let ids: HashSet<RecordId> = screen.records().iter().map(FinishedRecord::id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn duplicate_save_hands_the_record_back() {
        let mut screen = screen(RecordKind::Trip);
        let mut draft = Draft::new();
        fill_trip(&mut draft, "Porto");
        let record = RecordKind::Trip.build(&draft, &RecordDefaults::default());

        assert_eq!(screen.save(record.clone()).unwrap(), record.id());
        match screen.save(record.clone()) {
            Err(ScreenError::DuplicateRecord(rejected)) => assert_eq!(*rejected, record),
            other => panic!("expected a duplicate, got {other:?}"),
        }
        assert_eq!(screen.records().len(), 1);
    }

    #[test]
    fn jump_and_retreat_pass_through() {
        let mut screen = screen(RecordKind::HousingSpot);
        screen.begin_compose().unwrap();

        assert_eq!(screen.jump_to_step(10).unwrap(), 3);
        assert_eq!(screen.retreat().unwrap(), 2);
    }
}
