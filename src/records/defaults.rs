//! Defaulting rules shared by the record builders.

use crate::config::WizardConfig;
use crate::draft::{Draft, Field, ImageRef};

/// Snapshot of the config values record builders fall back on.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordDefaults {
    pub placeholder_image: String,
    pub period: String,
    pub housing_badges: Vec<String>,
    pub roommate_tags: Vec<String>,
}

impl RecordDefaults {
    pub fn from_config(config: &WizardConfig) -> Self {
        Self {
            placeholder_image: config.placeholder_image.clone(),
            period: config.default_period.clone(),
            housing_badges: config.housing_badges.clone(),
            roommate_tags: config.roommate_tags.clone(),
        }
    }

    /// Images in `field`, or a single placeholder when there are none.
    pub fn photos(&self, draft: &Draft, field: Field) -> Vec<ImageRef> {
        let images = draft.images(field);
        if images.is_empty() {
            vec![ImageRef::placeholder(&self.placeholder_image)]
        } else {
            images.to_vec()
        }
    }

    /// Tags in `field`, or `fallback` when the set is missing or empty.
    pub fn tags_or(&self, draft: &Draft, field: Field, fallback: &[String]) -> Vec<String> {
        match draft.tags(field) {
            Some(tags) if !tags.is_empty() => tags.iter().cloned().collect(),
            _ => fallback.to_vec(),
        }
    }

    /// Rent cadence entered by the user, or the default.
    pub fn period(&self, draft: &Draft) -> String {
        draft
            .non_blank(Field::Period)
            .unwrap_or_else(|| self.period.clone())
    }
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self::from_config(&WizardConfig::default())
    }
}

/// Parse a whole-number text field, trusting earlier validation.
///
/// Anything unparsable reads as zero.
pub(crate) fn parse_amount(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}
