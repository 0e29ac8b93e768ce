//! Per-field rules a step is built from.

use crate::core::{validators, Guard};
use crate::draft::{Draft, Field, FieldValue, Selection};
use crate::step::violations::FieldViolation;

/// Requirement placed on a single field.
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    /// Shown on the step but never required
    Optional,
    /// Non-blank text
    Text,
    /// Text that parses to an integer `>= 0`
    NonNegativeInt,
    /// Text that parses to an integer `> 0`
    PositiveInt,
    /// One of the listed selection keys has been picked
    Choice { options: Vec<&'static str> },
    /// A calendar date has been picked
    Date,
    /// An image list or tag set with at least one entry
    AtLeastOne,
    /// A number inside `min..=max`
    Range { min: i64, max: i64 },
    /// Phone or email filled in
    Contact,
}

/// A field shown on a step together with its rule.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub field: Field,
    pub rule: Rule,
}

impl FieldSpec {
    pub fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }

    pub fn optional(field: Field) -> Self {
        Self::new(field, Rule::Optional)
    }

    pub fn text(field: Field) -> Self {
        Self::new(field, Rule::Text)
    }

    pub fn non_negative_int(field: Field) -> Self {
        Self::new(field, Rule::NonNegativeInt)
    }

    pub fn positive_int(field: Field) -> Self {
        Self::new(field, Rule::PositiveInt)
    }

    /// Require a valid option of `S`.
    pub fn choice<S: Selection>(field: Field) -> Self {
        let options = S::ALL.iter().map(Selection::key).collect();
        Self::new(field, Rule::Choice { options })
    }

    pub fn date(field: Field) -> Self {
        Self::new(field, Rule::Date)
    }

    pub fn at_least_one(field: Field) -> Self {
        Self::new(field, Rule::AtLeastOne)
    }

    pub fn range(field: Field, min: i64, max: i64) -> Self {
        Self::new(field, Rule::Range { min, max })
    }

    pub fn contact() -> Self {
        Self::new(Field::Phone, Rule::Contact)
    }

    /// Check the rule against the draft (pure).
    pub fn check(&self, draft: &Draft) -> Result<(), FieldViolation> {
        let field = self.field;
        let passed = match &self.rule {
            Rule::Optional => true,
            Rule::Text => validators::non_empty_string(draft.text(field)),
            Rule::NonNegativeInt => {
                let text = draft.text(field);
                if !validators::non_empty_string(text) {
                    return Err(FieldViolation::Missing { field });
                }
                if !validators::parses_as_non_negative_int(text) {
                    return Err(FieldViolation::NotANumber { field });
                }
                true
            }
            Rule::PositiveInt => {
                let text = draft.text(field);
                if !validators::non_empty_string(text) {
                    return Err(FieldViolation::Missing { field });
                }
                if !validators::parses_as_non_negative_int(text) {
                    return Err(FieldViolation::NotANumber { field });
                }
                if !validators::parses_as_positive_int(text) {
                    return Err(FieldViolation::NotPositive { field });
                }
                true
            }
            Rule::Choice { options } => {
                let picked = match draft.get(field) {
                    Some(FieldValue::Choice(key)) => options.iter().find(|o| **o == key.as_str()),
                    _ => None,
                };
                if !validators::is_set(&picked) && draft.is_set(field) {
                    return Err(FieldViolation::Invalid { field });
                }
                validators::is_set(&picked)
            }
            Rule::Date => {
                let date = draft.date(field);
                if !validators::is_set(&date) && draft.is_set(field) {
                    return Err(FieldViolation::Invalid { field });
                }
                validators::is_set(&date)
            }
            Rule::AtLeastOne => {
                let has_tags = draft.tags(field).is_some_and(validators::non_empty_set);
                if draft.images(field).is_empty() && !has_tags {
                    return Err(FieldViolation::Empty { field });
                }
                true
            }
            Rule::Range { min, max } => match draft.number(field) {
                Some(n) if validators::in_range(n, *min, *max) => true,
                Some(_) => {
                    return Err(FieldViolation::OutOfRange {
                        field,
                        min: *min,
                        max: *max,
                    })
                }
                None => false,
            },
            Rule::Contact => {
                if validators::has_at_least_one_contact(
                    draft.text(Field::Phone),
                    draft.text(Field::Email),
                ) {
                    true
                } else {
                    return Err(FieldViolation::NoContact);
                }
            }
        };

        if passed {
            Ok(())
        } else {
            Err(FieldViolation::Missing { field })
        }
    }

    /// Check if the field is satisfied.
    pub fn is_satisfied(&self, draft: &Draft) -> bool {
        self.check(draft).is_ok()
    }

    /// This rule as a draft guard.
    pub fn guard(&self) -> Guard<Draft> {
        let spec = self.clone();
        Guard::new(move |draft: &Draft| spec.is_satisfied(draft))
    }
}
