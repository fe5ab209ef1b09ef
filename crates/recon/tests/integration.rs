use weldmap_recon::model::{ComparisonOutcome, FieldKind, IgnoreReason, MatchTier, ReconInput};
use weldmap_recon::{reconcile, run, InspectorRecord, SurveyRecord, SurveyStore};

/// Survey sheet whose slot `i` carries OR number `i` unless overridden.
fn numbered_survey(len: usize) -> Vec<SurveyRecord> {
    (0..len)
        .map(|i| {
            SurveyRecord::new(
                i + 3,
                Some(i.to_string().as_str()),
                Some(format!("P{i}").as_str()),
                Some(format!("H{i}").as_str()),
            )
        })
        .collect()
}

fn field_results(outcomes: &[ComparisonOutcome]) -> Vec<(FieldKind, bool, String)> {
    outcomes
        .iter()
        .filter_map(|o| match o {
            ComparisonOutcome::FieldResult {
                field,
                discrepancy,
                value,
                ..
            } => Some((*field, *discrepancy, value.clone())),
            _ => None,
        })
        .collect()
}

// -------------------------------------------------------------------------
// Worked examples
// -------------------------------------------------------------------------

#[test]
fn suffix_mismatch_reports_survey_pipe() {
    let mut survey = numbered_survey(50);
    survey[42].pipe_number = Some("A100".into());
    survey[42].heat_number = Some("HT1".into());
    let store = SurveyStore::from(survey);

    let inspector = vec![InspectorRecord::new(10, Some("OR0042A"), Some("A100x"), Some("HT1"))];
    let out = reconcile(&inspector, &store);

    assert_eq!(
        field_results(&out),
        vec![
            (FieldKind::PipeNumber, true, "A100".to_string()),
            (FieldKind::HeatNumber, false, "HT1".to_string()),
        ]
    );
}

#[test]
fn suffix_match_is_consistent() {
    let mut survey = numbered_survey(50);
    survey[42].pipe_number = Some("A100".into());
    let store = SurveyStore::from(survey);

    let inspector = vec![InspectorRecord::new(10, Some("OR0042A"), Some("A100A"), Some("H42"))];
    let out = reconcile(&inspector, &store);

    assert_eq!(
        field_results(&out),
        vec![
            (FieldKind::PipeNumber, false, "A100A".to_string()),
            (FieldKind::HeatNumber, false, "H42".to_string()),
        ]
    );
}

#[test]
fn typo_code_not_found() {
    let store = SurveyStore::from(numbered_survey(10));
    let inspector = vec![InspectorRecord::new(2, Some("0R15"), Some("P15"), Some("H15"))];
    let out = reconcile(&inspector, &store);
    assert_eq!(out.len(), 1);
    assert!(matches!(out[0], ComparisonOutcome::NotFound { inspector_row: 2, .. }));
}

#[test]
fn survey_codes_with_prefix_never_match() {
    let survey: Vec<SurveyRecord> = (0..5)
        .map(|i| SurveyRecord::new(i, Some(format!("OR{i}").as_str()), None, None))
        .collect();
    let store = SurveyStore::from(survey);
    let inspector = vec![InspectorRecord::new(0, Some("OR3"), None, None)];
    let out = reconcile(&inspector, &store);
    assert!(matches!(out[0], ComparisonOutcome::NotFound { .. }));
}

// -------------------------------------------------------------------------
// Lookup tiers
// -------------------------------------------------------------------------

#[test]
fn record_past_window_found_by_exhaustive_scan() {
    // Id 20 lives at slot 27: outside the direct slot and the [15, 25) window.
    let mut survey = numbered_survey(40);
    for rec in survey.iter_mut() {
        rec.or_number = Some(format!("x{}", rec.row_number));
    }
    survey[27].or_number = Some("20".into());
    let store = SurveyStore::from(survey);

    let inspector = vec![InspectorRecord::new(0, Some("OR20"), Some("P27"), Some("H27"))];
    let out = reconcile(&inspector, &store);

    assert_eq!(out.len(), 2);
    for o in &out {
        match o {
            ComparisonOutcome::FieldResult {
                survey_row,
                discrepancy,
                tier,
                ..
            } => {
                assert_eq!(*survey_row, 30);
                assert!(!discrepancy);
                assert_eq!(*tier, MatchTier::Exhaustive);
            }
            other => panic!("expected field result, got {other:?}"),
        }
    }
}

#[test]
fn shifted_survey_found_by_window() {
    // Two rows deleted from the top of the survey sheet.
    let survey: Vec<SurveyRecord> = numbered_survey(30).into_iter().skip(2).collect();
    let store = SurveyStore::from(survey);
    let inspector = vec![InspectorRecord::new(0, Some("OR12"), Some("P12"), Some("H12"))];
    let out = reconcile(&inspector, &store);
    assert!(matches!(
        out[0],
        ComparisonOutcome::FieldResult { tier: MatchTier::Windowed, discrepancy: false, .. }
    ));
}

#[test]
fn survey_holes_are_tolerated() {
    let mut slots: Vec<Option<SurveyRecord>> = numbered_survey(12).into_iter().map(Some).collect();
    slots[5] = None;
    slots[6] = None;
    let store = SurveyStore::from_slots(slots);

    let inspector = vec![
        InspectorRecord::new(0, Some("OR6"), Some("P6"), Some("H6")),
        InspectorRecord::new(1, Some("OR9"), Some("P9"), Some("H9")),
    ];
    let out = reconcile(&inspector, &store);
    assert!(matches!(out[0], ComparisonOutcome::NotFound { inspector_row: 0, .. }));
    assert!(matches!(
        out[1],
        ComparisonOutcome::FieldResult { tier: MatchTier::DirectSlot, .. }
    ));
}

// -------------------------------------------------------------------------
// Full run
// -------------------------------------------------------------------------

#[test]
fn mixed_sheet_end_to_end() {
    let input = ReconInput {
        inspector: vec![
            InspectorRecord::new(4, Some("OR1"), Some("P1"), Some("H1")),
            InspectorRecord::new(5, None, Some("P2"), Some("H2")),
            InspectorRecord::new(6, Some("weld 17"), None, None),
            InspectorRecord::new(7, Some("OR3B"), Some("P3b"), Some("h9")),
            InspectorRecord::new(8, Some("OR404"), Some("P4"), None),
        ],
        survey: SurveyStore::from(numbered_survey(6)),
    };
    let result = run(&input);

    let rows: Vec<usize> = result.outcomes.iter().map(|o| o.inspector_row()).collect();
    assert_eq!(rows, vec![4, 4, 5, 6, 7, 7, 8]);

    assert!(matches!(
        result.outcomes[2],
        ComparisonOutcome::Ignored { reason: IgnoreReason::NoReferenceNumber, .. }
    ));
    assert!(matches!(
        result.outcomes[3],
        ComparisonOutcome::Ignored { reason: IgnoreReason::InvalidFormat, .. }
    ));
    assert!(matches!(result.outcomes[6], ComparisonOutcome::NotFound { .. }));

    let s = &result.summary;
    assert_eq!(s.inspector_records, 5);
    assert_eq!(s.matched, 2);
    assert_eq!(s.pipe_discrepancies, 0);
    assert_eq!(s.heat_discrepancies, 1);
    assert_eq!(s.not_found, 1);
    assert_eq!(s.no_reference_number, 1);
    assert_eq!(s.invalid_format, 1);
    assert!(s.has_findings());
}

#[test]
fn result_serializes_with_tagged_outcomes() {
    let input = ReconInput {
        inspector: vec![
            InspectorRecord::new(0, Some("OR0"), Some("P0"), Some("H0")),
            InspectorRecord::new(1, Some(""), None, None),
        ],
        survey: SurveyStore::from(numbered_survey(1)),
    };
    let result = run(&input);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["summary"]["matched"], 1);
    assert_eq!(json["outcomes"][0]["kind"], "field_result");
    assert_eq!(json["outcomes"][0]["field"], "pipe_number");
    assert_eq!(json["outcomes"][0]["tier"], "direct_slot");
    assert_eq!(json["outcomes"][2]["kind"], "ignored");
    assert_eq!(json["outcomes"][2]["reason"], "no_reference_number");
}
