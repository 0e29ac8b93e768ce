//! The mutable, per-wizard bag of input fields.
//!
//! A [`Draft`] holds whatever the user has typed or picked so far. Fields
//! are optional and loosely typed; step guards decide what is required and
//! the record builders decide how to read it.

mod selection;
mod values;

pub use selection::Selection;
pub use values::{Coordinate, ImageFormat, ImageRef};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Keys of every input field used by the creation flows.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Title,
    Category,
    Activity,
    HousingType,
    Area,
    Address,
    Coordinate,
    City,
    Country,
    Description,
    Photos,
    Tags,
    Badges,
    Price,
    Period,
    Rating,
    Phone,
    Email,
    Availability,
    MeetingPoint,
    StartsOn,
    EndsOn,
    Capacity,
    Age,
    Budget,
    Bio,
    Destination,
    Notes,
}

impl Field {
    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Title => "Title",
            Self::Category => "Category",
            Self::Activity => "Activity",
            Self::HousingType => "Type",
            Self::Area => "Area",
            Self::Address => "Address",
            Self::Coordinate => "Location",
            Self::City => "City",
            Self::Country => "Country",
            Self::Description => "Description",
            Self::Photos => "Photos",
            Self::Tags => "Tags",
            Self::Badges => "Badges",
            Self::Price => "Price",
            Self::Period => "Period",
            Self::Rating => "Rating",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Availability => "Availability",
            Self::MeetingPoint => "Meeting point",
            Self::StartsOn => "Start date",
            Self::EndsOn => "End date",
            Self::Capacity => "Max members",
            Self::Age => "Age",
            Self::Budget => "Budget",
            Self::Bio => "Bio",
            Self::Destination => "Destination",
            Self::Notes => "Notes",
        }
    }
}

/// A typed field value.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Number(i64),
    /// Key of a [`Selection`] option
    Choice(String),
    Date(NaiveDate),
    Coordinate(Coordinate),
    Images(Vec<ImageRef>),
    Tags(BTreeSet<String>),
}

/// In-progress input for one wizard.
///
/// Every mutation bumps [`revision`](Draft::revision), so UI layers can
/// memoise derived state keyed on it without ever reading a stale answer.
///
/// # Example
///
/// ```rust
/// use trailhead::draft::{Draft, Field};
///
/// let mut draft = Draft::new();
/// assert_eq!(draft.text(Field::Title), "");
///
/// draft.set_text(Field::Title, "Sunny Studio");
/// draft.insert_tag(Field::Badges, "Furnished");
///
/// assert_eq!(draft.text(Field::Title), "Sunny Studio");
/// assert_eq!(draft.tag_count(Field::Badges), 1);
/// assert_eq!(draft.revision(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    fields: BTreeMap<Field, FieldValue>,
    revision: u64,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, returning the previous one.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Option<FieldValue> {
        self.revision += 1;
        self.fields.insert(field, value)
    }

    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        self.set(field, FieldValue::Text(text.into()));
    }

    pub fn set_number(&mut self, field: Field, number: i64) {
        self.set(field, FieldValue::Number(number));
    }

    pub fn select<S: Selection>(&mut self, field: Field, option: S) {
        self.set(field, FieldValue::Choice(option.key().to_string()));
    }

    pub fn set_date(&mut self, field: Field, date: NaiveDate) {
        self.set(field, FieldValue::Date(date));
    }

    pub fn set_coordinate(&mut self, field: Field, coordinate: Coordinate) {
        self.set(field, FieldValue::Coordinate(coordinate));
    }

    pub fn set_images(&mut self, field: Field, images: Vec<ImageRef>) {
        self.set(field, FieldValue::Images(images));
    }

    /// Append an image, replacing any non-image value stored in `field`.
    pub fn add_image(&mut self, field: Field, image: ImageRef) {
        self.revision += 1;
        match self.fields.get_mut(&field) {
            Some(FieldValue::Images(images)) => images.push(image),
            _ => {
                self.fields.insert(field, FieldValue::Images(vec![image]));
            }
        }
    }

    /// Remove the image at `index`. Returns it if it existed.
    pub fn remove_image(&mut self, field: Field, index: usize) -> Option<ImageRef> {
        match self.fields.get_mut(&field) {
            Some(FieldValue::Images(images)) if index < images.len() => {
                self.revision += 1;
                Some(images.remove(index))
            }
            _ => None,
        }
    }

    /// Add a tag to a set field. Returns `false` if it was already present.
    pub fn insert_tag(&mut self, field: Field, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        let inserted = match self.fields.get_mut(&field) {
            Some(FieldValue::Tags(tags)) => tags.insert(tag),
            _ => {
                self.fields
                    .insert(field, FieldValue::Tags(BTreeSet::from([tag])));
                true
            }
        };
        if inserted {
            self.revision += 1;
        }
        inserted
    }

    /// Remove a tag from a set field. Returns `true` if it was present.
    pub fn remove_tag(&mut self, field: Field, tag: &str) -> bool {
        let removed = match self.fields.get_mut(&field) {
            Some(FieldValue::Tags(tags)) => tags.remove(tag),
            _ => false,
        };
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// Clear a field, returning its value.
    pub fn clear(&mut self, field: Field) -> Option<FieldValue> {
        let previous = self.fields.remove(&field);
        if previous.is_some() {
            self.revision += 1;
        }
        previous
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn is_set(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Text content of a field; empty when unset or not text.
    pub fn text(&self, field: Field) -> &str {
        match self.fields.get(&field) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Trimmed text, or `None` when blank.
    pub fn non_blank(&self, field: Field) -> Option<String> {
        let text = self.text(field).trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    pub fn number(&self, field: Field) -> Option<i64> {
        match self.fields.get(&field) {
            Some(FieldValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn choice<S: Selection>(&self, field: Field) -> Option<S> {
        match self.fields.get(&field) {
            Some(FieldValue::Choice(key)) => S::from_key(key),
            _ => None,
        }
    }

    pub fn date(&self, field: Field) -> Option<NaiveDate> {
        match self.fields.get(&field) {
            Some(FieldValue::Date(date)) => Some(*date),
            _ => None,
        }
    }

    pub fn coordinate(&self, field: Field) -> Option<Coordinate> {
        match self.fields.get(&field) {
            Some(FieldValue::Coordinate(c)) => Some(*c),
            _ => None,
        }
    }

    pub fn images(&self, field: Field) -> &[ImageRef] {
        match self.fields.get(&field) {
            Some(FieldValue::Images(images)) => images,
            _ => &[],
        }
    }

    pub fn tags(&self, field: Field) -> Option<&BTreeSet<String>> {
        match self.fields.get(&field) {
            Some(FieldValue::Tags(tags)) => Some(tags),
            _ => None,
        }
    }

    pub fn tag_count(&self, field: Field) -> usize {
        self.tags(field).map_or(0, BTreeSet::len)
    }

    /// Monotonic mutation counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of fields holding a value.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over set fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }
}
