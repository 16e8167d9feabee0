//! Property tests over generated, possibly cyclic, definition tables.

use proptest::prelude::*;
use schemadiff_core::{
    DefinitionTable, DiffOptions, ElProperty, Model, ModelDiff, Property, RefExpansion,
};
use std::collections::BTreeSet;

const NAMES: [&str; 4] = ["A", "B", "C", "D"];
const FIELDS: [&str; 5] = ["f0", "f1", "f2", "f3", "f4"];

fn arb_property() -> impl Strategy<Value = Property> {
    prop_oneof![
        prop::sample::select(vec!["string", "integer", "boolean"]).prop_map(|t| Property::leaf(t)),
        // "Ghost" never resolves
        prop::sample::select(vec!["A", "B", "C", "D", "Ghost"])
            .prop_map(|name| Property::reference(name)),
    ]
}

fn arb_model() -> impl Strategy<Value = Model> {
    prop::collection::btree_map(prop::sample::select(FIELDS.to_vec()), arb_property(), 0..5)
        .prop_map(|properties| {
            properties
                .into_iter()
                .fold(Model::new(), |model, (name, property)| {
                    model.with_property(name, property)
                })
        })
}

fn arb_table() -> impl Strategy<Value = DefinitionTable> {
    prop::collection::vec(arb_model(), NAMES.len()).prop_map(|models| {
        DefinitionTable::from_definitions(NAMES.iter().copied().zip(models))
            .expect("generated names are distinct")
    })
}

fn assert_unique_paths(list: &[ElProperty]) -> Result<(), TestCaseError> {
    let mut seen = BTreeSet::new();
    for entry in list {
        prop_assert!(seen.insert(entry.el.as_str()), "duplicate path {}", entry.el);
    }
    Ok(())
}

proptest! {
    #[test]
    fn self_diff_is_empty(definitions in arb_table()) {
        let copy = definitions.clone();
        for name in NAMES {
            let mut diff = ModelDiff::with_definitions(&definitions, &copy);
            diff.diff_definitions(name, name).unwrap();
            prop_assert!(diff.is_empty(), "self-diff of {} produced {:?}", name, diff.into_result());
        }
    }

    #[test]
    fn diff_terminates_without_duplicate_paths(
        left in arb_table(),
        right in arb_table(),
        expand_all in any::<bool>(),
    ) {
        let ref_expansion = if expand_all { RefExpansion::All } else { RefExpansion::FirstOnly };
        for name in NAMES {
            let mut diff = ModelDiff::with_options(
                &left,
                &right,
                DiffOptions::default().with_ref_expansion(ref_expansion),
            );
            diff.diff_definitions(name, name).unwrap();
            assert_unique_paths(diff.increased())?;
            assert_unique_paths(diff.missing())?;
            assert_unique_paths(diff.changed())?;
        }
    }

    #[test]
    fn swapping_sides_swaps_increased_and_missing(
        left in arb_table(),
        right in arb_table(),
    ) {
        let options = DiffOptions::default().with_ref_expansion(RefExpansion::All);
        for name in NAMES {
            let mut forward = ModelDiff::with_options(&left, &right, options.clone());
            forward.diff_definitions(name, name).unwrap();
            let mut backward = ModelDiff::with_options(&right, &left, options.clone());
            backward.diff_definitions(name, name).unwrap();

            let forward = forward.into_result();
            let backward = backward.into_result();
            prop_assert_eq!(&forward.increased, &backward.missing);
            prop_assert_eq!(&forward.missing, &backward.increased);
            prop_assert_eq!(forward.changed.len(), backward.changed.len());
        }
    }
}
