//! Property-based tests for wizard navigation and record building.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use std::collections::HashSet;
use std::sync::Arc;
use trailhead::config::WizardConfig;
use trailhead::core::NavigationCause;
use trailhead::draft::{Draft, Field, ImageRef};
use trailhead::records::{FinishedRecord, RecordDefaults, RecordKind};
use trailhead::screen::{Screen, StaticCatalog};
use trailhead::step::{FieldSpec, StepDefinition};
use trailhead::wizard::{Advance, Wizard, WizardBuilder, WizardError};
use proptest::prelude::*;

fn arbitrary_kind() -> impl Strategy<Value = RecordKind> {
    prop::sample::select(RecordKind::ALL.to_vec())
}

/// Wizard whose steps never refuse.
fn open_wizard(steps: usize) -> Wizard<usize> {
    WizardBuilder::new("open")
        .steps((0..steps).map(|i| {
            StepDefinition::from_specs(format!("Step {i}"), vec![FieldSpec::optional(Field::Notes)])
        }))
        .finalize(|draft: &Draft| draft.len())
        .build()
        .unwrap()
}

#[derive(Clone, Debug)]
enum Nav {
    Advance,
    Retreat,
    Jump(usize),
}

fn arbitrary_nav() -> impl Strategy<Value = Nav> {
    prop_oneof![
        Just(Nav::Advance),
        Just(Nav::Retreat),
        (0..8usize).prop_map(Nav::Jump),
    ]
}

proptest! {
    #[test]
    fn blocked_advance_changes_nothing(kind in arbitrary_kind(), target in 0..6usize) {
        let mut wizard = kind.wizard(&WizardConfig::default()).unwrap();
        let index = wizard.jump_to_step(target).unwrap();
        let transitions = wizard.history().transitions().len();

        let outcome = wizard.advance().unwrap();

        prop_assert!(outcome.is_blocked());
        prop_assert_eq!(wizard.current_index(), Some(index));
        prop_assert_eq!(wizard.history().transitions().len(), transitions);
    }

    #[test]
    fn jump_is_clamped(steps in 1..8usize, target in 0..32usize) {
        let mut wizard = open_wizard(steps);
        let landed = wizard.jump_to_step(target).unwrap();
        prop_assert_eq!(landed, target.min(steps - 1));
        prop_assert_eq!(wizard.current_index(), Some(landed));
    }

    #[test]
    fn retreat_then_advance_returns(steps in 2..8usize, target in 1..8usize) {
        let mut wizard = open_wizard(steps);
        wizard.draft_mut().unwrap().set_text(Field::Notes, "keep me");
        let index = wizard.jump_to_step(target).unwrap();
        let before = wizard.draft().clone();

        prop_assert_eq!(wizard.retreat().unwrap(), index - 1);
        prop_assert_eq!(wizard.advance().unwrap(), Advance::Moved { to: index });
        prop_assert_eq!(wizard.draft(), &before);
    }

    #[test]
    fn index_stays_in_range(steps in 1..6usize, moves in prop::collection::vec(arbitrary_nav(), 0..40)) {
        let mut wizard = open_wizard(steps);

        for nav in moves {
            if wizard.is_finished() {
                break;
            }
            match nav {
                Nav::Advance => { wizard.advance().unwrap(); }
                Nav::Retreat => { wizard.retreat().unwrap(); }
                Nav::Jump(i) => { wizard.jump_to_step(i).unwrap(); }
            }
            if let Some(index) = wizard.current_index() {
                prop_assert!(index < steps);
            }
        }

        let path = wizard.history().get_path();
        if !path.is_empty() {
            prop_assert_eq!(path.len(), wizard.history().transitions().len() + 1);
        }
    }

    #[test]
    fn cancel_at_any_step_yields_no_record(kind in arbitrary_kind(), target in 0..6usize) {
        let config = Arc::new(WizardConfig::default());
        let catalog = Arc::new(StaticCatalog::new());
        let mut screen = Screen::new(catalog, kind, config);

        let wizard = screen.begin_compose().unwrap();
        wizard.draft_mut().unwrap().set_text(Field::Notes, "discard me");
        screen.jump_to_step(target).unwrap();
        screen.cancel().unwrap();

        prop_assert!(screen.records().is_empty());
        prop_assert!(screen.wizard().is_none());

        let next = screen.begin_compose().unwrap();
        prop_assert!(next.draft().is_empty());
    }

    #[test]
    fn cancelled_wizard_refuses_navigation(kind in arbitrary_kind()) {
        let mut wizard = kind.wizard(&WizardConfig::default()).unwrap();
        wizard.cancel().unwrap();

        prop_assert!(wizard.phase().is_cancelled());
        prop_assert_eq!(wizard.history().count(NavigationCause::Cancel), 1);
        let advance_rejected = matches!(wizard.advance(), Err(WizardError::Finished { .. }));
        prop_assert!(advance_rejected);
        prop_assert!(wizard.draft().is_empty());
    }

    #[test]
    fn missing_photos_become_one_placeholder(kind in arbitrary_kind()) {
        let record = kind.build(&Draft::new(), &RecordDefaults::default());
        prop_assert_eq!(record.photos().len(), 1);
        prop_assert!(record.photos()[0].is_placeholder());
    }

    #[test]
    fn picked_photos_are_kept_in_order(kind in arbitrary_kind(), names in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let mut draft = Draft::new();
        for name in &names {
            draft.add_image(Field::Photos, ImageRef::asset(name.as_str()));
        }

        let record = kind.build(&draft, &RecordDefaults::default());
        let expected: Vec<ImageRef> = names.iter().map(|n| ImageRef::asset(n.as_str())).collect();
        prop_assert_eq!(record.photos(), expected.as_slice());
    }

    #[test]
    fn record_ids_are_unique(kinds in prop::collection::vec(arbitrary_kind(), 1..50)) {
        let defaults = RecordDefaults::default();
        let records: Vec<FinishedRecord> = kinds.iter().map(|k| k.build(&Draft::new(), &defaults)).collect();
        let ids: HashSet<_> = records.iter().map(FinishedRecord::id).collect();
        prop_assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn revision_never_decreases(texts in prop::collection::vec(".{0,12}", 0..20)) {
        let mut draft = Draft::new();
        let mut last = draft.revision();

        for (i, text) in texts.iter().enumerate() {
            if i % 3 == 2 {
                draft.clear(Field::Notes);
            } else {
                draft.set_text(Field::Notes, text.as_str());
            }
            prop_assert!(draft.revision() >= last);
            last = draft.revision();
        }
    }

    #[test]
    fn record_roundtrip_serialization(kind in arbitrary_kind()) {
        let record = kind.build(&Draft::new(), &RecordDefaults::default());
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: FinishedRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(record, deserialized);
    }
}
