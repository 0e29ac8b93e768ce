//! Ordered list of finished records shown by a screen.

use crate::records::{FinishedRecord, RecordId, RecordKind};
use std::collections::HashSet;

/// Where a newly finished record lands in the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertPosition {
    Prepend,
    Append,
}

impl InsertPosition {
    /// Newest-first for listings, chronological for groups and trips.
    pub fn for_kind(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Place | RecordKind::HousingSpot | RecordKind::Roommate => Self::Prepend,
            RecordKind::GroupEvent | RecordKind::Trip => Self::Append,
        }
    }
}

/// Records in display order. Ids are unique within a collection.
#[derive(Clone, Debug, Default)]
pub struct RecordCollection {
    records: Vec<FinishedRecord>,
    ids: HashSet<RecordId>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, handing it back if its id is already present.
    pub fn insert(
        &mut self,
        record: FinishedRecord,
        position: InsertPosition,
    ) -> Result<(), FinishedRecord> {
        if !self.ids.insert(record.id()) {
            return Err(record);
        }
        match position {
            InsertPosition::Prepend => self.records.insert(0, record),
            InsertPosition::Append => self.records.push(record),
        }
        Ok(())
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn get(&self, id: RecordId) -> Option<&FinishedRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn as_slice(&self) -> &[FinishedRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &FinishedRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
