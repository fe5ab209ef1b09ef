// Property-based tests for the reconciliation driver.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;
use weldmap_recon::model::{ComparisonOutcome, FieldKind, IgnoreReason};
use weldmap_recon::{reconcile, InspectorRecord, SurveyRecord, SurveyStore};

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// OR cell: mostly well formed, sometimes typo'd, blank, absent or junk.
fn arb_or_cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => (0u32..60, "[A-Da-d]{0,1}").prop_map(|(n, s)| Some(format!("OR{n:03}{s}"))),
        1 => (0u32..60).prop_map(|n| Some(format!("0R{n}"))),
        1 => Just(Some("   ".to_string())),
        1 => Just(None),
        1 => "[a-z -]{1,8}".prop_map(Some),
    ]
}

fn arb_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => "[A-Z]{1,2}[0-9]{1,3}[a-c]{0,1}".prop_map(Some),
        1 => Just(None),
    ]
}

fn arb_inspector() -> impl Strategy<Value = Vec<InspectorRecord>> {
    prop::collection::vec((arb_or_cell(), arb_value(), arb_value()), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (or_number, pipe_number, heat_number))| InspectorRecord {
                row_number: i + 1,
                or_number,
                pipe_number,
                heat_number,
            })
            .collect()
    })
}

fn arb_survey() -> impl Strategy<Value = SurveyStore> {
    prop::collection::vec(
        (
            prop::option::weighted(0.9, (0u32..60).prop_map(|n| n.to_string())),
            arb_value(),
            arb_value(),
            prop::bool::weighted(0.1),
        ),
        0..70,
    )
    .prop_map(|rows| {
        let slots = rows
            .into_iter()
            .enumerate()
            .map(|(i, (or_number, pipe_number, heat_number, hole))| {
                (!hole).then(|| SurveyRecord {
                    row_number: i + 1,
                    or_number,
                    pipe_number,
                    heat_number,
                })
            })
            .collect();
        SurveyStore::from_slots(slots)
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn every_record_yields_one_or_two_outcomes(
        inspector in arb_inspector(),
        survey in arb_survey(),
    ) {
        let out = reconcile(&inspector, &survey);
        for rec in &inspector {
            let mine: Vec<&ComparisonOutcome> =
                out.iter().filter(|o| o.inspector_row() == rec.row_number).collect();
            match mine.len() {
                1 => prop_assert!(!mine[0].is_field_result()),
                2 => {
                    let pipe_first = matches!(
                        mine[0],
                        ComparisonOutcome::FieldResult { field: FieldKind::PipeNumber, .. }
                    );
                    let heat_second = matches!(
                        mine[1],
                        ComparisonOutcome::FieldResult { field: FieldKind::HeatNumber, .. }
                    );
                    prop_assert!(pipe_first);
                    prop_assert!(heat_second);
                }
                n => prop_assert!(false, "row {} produced {} outcomes", rec.row_number, n),
            }
        }
    }

    #[test]
    fn output_follows_inspector_order(
        inspector in arb_inspector(),
        survey in arb_survey(),
    ) {
        let out = reconcile(&inspector, &survey);
        let rows: Vec<usize> = out.iter().map(|o| o.inspector_row()).collect();
        prop_assert!(rows.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn blank_codes_are_always_no_reference(
        inspector in arb_inspector(),
        survey in arb_survey(),
    ) {
        let out = reconcile(&inspector, &survey);
        for rec in inspector.iter().filter(|r| r.or_number_str().trim().is_empty()) {
            let mine: Vec<&ComparisonOutcome> =
                out.iter().filter(|o| o.inspector_row() == rec.row_number).collect();
            prop_assert_eq!(mine.len(), 1);
            let is_no_ref = matches!(
                mine[0],
                ComparisonOutcome::Ignored { reason: IgnoreReason::NoReferenceNumber, .. }
            );
            prop_assert!(is_no_ref);
        }
    }

    #[test]
    fn identical_values_are_consistent(
        n in 0usize..30,
        pipe in "[A-Z][0-9]{1,4}",
        heat in "[A-Z]{2}[0-9]{2}",
    ) {
        let survey: SurveyStore = (0..30)
            .map(|i| SurveyRecord::new(i, Some(i.to_string().as_str()), Some(pipe.as_str()), Some(heat.as_str())))
            .collect();
        let inspector = vec![InspectorRecord::new(
            0,
            Some(format!("OR{n}").as_str()),
            Some(pipe.to_lowercase().as_str()),
            Some(format!(" {heat} ").as_str()),
        )];
        let out = reconcile(&inspector, &survey);
        prop_assert_eq!(out.len(), 2);
        for o in &out {
            match o {
                ComparisonOutcome::FieldResult { field, discrepancy, value, .. } => {
                    prop_assert!(!discrepancy);
                    let expected = match field {
                        FieldKind::PipeNumber => pipe.to_lowercase(),
                        FieldKind::HeatNumber => format!(" {heat} "),
                    };
                    prop_assert_eq!(value, &expected);
                }
                _ => prop_assert!(false, "expected field results"),
            }
        }
    }
}
