//! Read-only sample data injected into screens.

use crate::config::WizardConfig;
use crate::records::{FinishedRecord, RecordKind};
use std::collections::HashMap;

/// Source of existing records and tag suggestions.
pub trait CatalogProvider: Send + Sync {
    /// Records to show before the user creates any.
    fn records(&self, kind: RecordKind) -> Vec<FinishedRecord>;

    /// Tags or badges offered while composing a record of `kind`.
    fn suggested_tags(&self, kind: RecordKind) -> Vec<String>;
}

/// In-memory catalog.
///
/// # Example
///
/// ```rust
/// use trailhead::config::WizardConfig;
/// use trailhead::records::RecordKind;
/// use trailhead::screen::{CatalogProvider, StaticCatalog};
///
/// let catalog = StaticCatalog::from_config(&WizardConfig::default());
/// assert!(catalog.records(RecordKind::Place).is_empty());
/// assert!(catalog
///     .suggested_tags(RecordKind::HousingSpot)
///     .contains(&"Furnished".to_string()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    records: HashMap<RecordKind, Vec<FinishedRecord>>,
    tags: HashMap<RecordKind, Vec<String>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog offering the configured housing badges and roommate tags.
    pub fn from_config(config: &WizardConfig) -> Self {
        Self::new()
            .with_tags(RecordKind::HousingSpot, config.housing_badges.clone())
            .with_tags(RecordKind::Roommate, config.roommate_tags.clone())
    }

    pub fn with_record(mut self, record: FinishedRecord) -> Self {
        self.records.entry(record.kind()).or_default().push(record);
        self
    }

    pub fn with_tags(mut self, kind: RecordKind, tags: Vec<String>) -> Self {
        self.tags.insert(kind, tags);
        self
    }
}

impl CatalogProvider for StaticCatalog {
    fn records(&self, kind: RecordKind) -> Vec<FinishedRecord> {
        self.records.get(&kind).cloned().unwrap_or_default()
    }

    fn suggested_tags(&self, kind: RecordKind) -> Vec<String> {
        self.tags.get(&kind).cloned().unwrap_or_default()
    }
}
