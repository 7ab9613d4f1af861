//! Property-based tests for the wizard and the calculation history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use serde_json::{json, Value};
use thirtyhertz::history::{HistoryConfig, HistoryStore, Payload, SequentialIdGenerator};
use thirtyhertz::storage::MemoryStorage;
use thirtyhertz::wizard::{MultiField, WizardController, MUSIC_GENRES, PRIORITIES};

#[derive(Clone, Debug)]
enum Nav {
    Advance,
    Retreat,
    Restart,
}

prop_compose! {
    fn arbitrary_nav()(variant in 0..5u8) -> Nav {
        match variant {
            0 | 1 => Nav::Advance,
            2 | 3 => Nav::Retreat,
            _ => Nav::Restart,
        }
    }
}

prop_compose! {
    fn arbitrary_multi_field()(variant in 0..2u8) -> MultiField {
        if variant == 0 { MultiField::MusicGenres } else { MultiField::Priorities }
    }
}

prop_compose! {
    fn arbitrary_choice()(index in 0..MUSIC_GENRES.len() + PRIORITIES.len()) -> &'static str {
        MUSIC_GENRES.iter().chain(PRIORITIES).nth(index).copied().unwrap_or("Rock")
    }
}

fn arbitrary_payload() -> impl Strategy<Value = Payload> {
    prop::collection::btree_map(
        "[a-zA-Z]{1,8}",
        prop_oneof![
            any::<i64>().prop_map(Value::from),
            (-1.0e6..1.0e6f64).prop_map(Value::from),
            "[ -~]{0,12}".prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
            Just(json!({ "nested": [1, 2, 3] })),
        ],
        0..6,
    )
    .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn navigation_stays_in_bounds(ops in prop::collection::vec(arbitrary_nav(), 0..64)) {
        let mut wizard = WizardController::car_audio();
        let last = wizard.step_count() - 1;

        for op in ops {
            let before = wizard.current_index();
            match op {
                Nav::Advance => { wizard.advance(); }
                Nav::Retreat => { wizard.retreat(); }
                Nav::Restart => { wizard.restart(); }
            }
            let after = wizard.current_index();

            prop_assert!(after <= last);
            if !matches!(op, Nav::Restart) {
                prop_assert!(before.abs_diff(after) <= 1);
            }
        }
    }

    #[test]
    fn progress_matches_index(ops in prop::collection::vec(arbitrary_nav(), 0..32)) {
        let mut wizard = WizardController::car_audio();

        for op in ops {
            let before = wizard.progress_fraction();
            match op {
                Nav::Advance => {
                    wizard.advance();
                    prop_assert!(wizard.progress_fraction() >= before);
                }
                Nav::Retreat => {
                    wizard.retreat();
                    prop_assert!(wizard.progress_fraction() <= before);
                }
                Nav::Restart => wizard.restart(),
            }

            let expected = (wizard.current_index() + 1) as f64 / wizard.step_count() as f64;
            prop_assert_eq!(wizard.progress_fraction(), expected);
            prop_assert!(wizard.progress_fraction() > 0.0 && wizard.progress_fraction() <= 1.0);
        }
    }

    #[test]
    fn double_toggle_restores_field(
        setup in prop::collection::vec((arbitrary_multi_field(), arbitrary_choice()), 0..10),
        field in arbitrary_multi_field(),
        value in arbitrary_choice(),
    ) {
        let mut wizard = WizardController::car_audio();
        for (f, v) in setup {
            wizard.toggle_multi_field(f, v);
        }
        let before = wizard.form().clone();

        wizard.toggle_multi_field(field, value);
        wizard.toggle_multi_field(field, value);

        prop_assert_eq!(wizard.form(), &before);
    }

    #[test]
    fn multi_select_never_holds_duplicates(
        toggles in prop::collection::vec((arbitrary_multi_field(), arbitrary_choice()), 0..40)
    ) {
        let mut wizard = WizardController::car_audio();
        for (field, value) in toggles {
            wizard.toggle_multi_field(field, value);
        }

        for field in MultiField::ALL {
            let selected = wizard.form().selections(field);
            for (i, value) in selected.iter().enumerate() {
                prop_assert!(!selected[i + 1..].contains(value));
            }
        }
    }

    #[test]
    fn history_keeps_most_recent_within_bound(saves in 0..120usize, max in 1..60usize) {
        let mut history = HistoryStore::with_id_generator(
            MemoryStorage::new(),
            HistoryConfig::new().with_max_entries(max),
            SequentialIdGenerator::new(),
        );

        for i in 0..saves {
            let inputs: Payload = json!({ "run": i }).as_object().cloned().unwrap();
            history.save("box", inputs, Payload::new());
            prop_assert!(history.len() <= max);
        }

        prop_assert_eq!(history.len(), saves.min(max));
        for (position, record) in history.records().iter().enumerate() {
            prop_assert_eq!(&record.inputs["run"], &json!(saves - 1 - position));
        }
    }

    #[test]
    fn saved_records_survive_reload(
        runs in prop::collection::vec(("[a-z]{1,8}", arbitrary_payload(), arbitrary_payload()), 1..8)
    ) {
        let storage = MemoryStorage::new();
        let mut history = HistoryStore::open(storage.clone());

        for (kind, inputs, results) in runs {
            history.save(&kind, inputs, results);
        }

        let reloaded = HistoryStore::open(storage);
        prop_assert_eq!(reloaded.records(), history.records());
    }

    #[test]
    fn delete_of_unknown_id_changes_nothing(count in 0..10usize, probe in "[a-z]{3,12}") {
        let mut history = HistoryStore::open(MemoryStorage::new());
        for _ in 0..count {
            history.save("fuse", Payload::new(), Payload::new());
        }
        let before = history.records().to_vec();

        prop_assert!(!history.delete_by_id(&probe));
        prop_assert_eq!(history.records(), before.as_slice());
    }
}
