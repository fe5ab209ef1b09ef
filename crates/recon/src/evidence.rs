use crate::model::{ComparisonOutcome, FieldKind, IgnoreReason, MatchTier, ReconSummary};

/// Compute summary statistics from ordered outcomes.
///
/// A matched pair is counted once, on its pipe-number result.
pub fn compute_summary(outcomes: &[ComparisonOutcome]) -> ReconSummary {
    let mut summary = ReconSummary::default();

    for outcome in outcomes {
        match outcome {
            ComparisonOutcome::Ignored { reason, .. } => {
                summary.inspector_records += 1;
                match reason {
                    IgnoreReason::NoReferenceNumber => summary.no_reference_number += 1,
                    IgnoreReason::InvalidFormat => summary.invalid_format += 1,
                }
            }
            ComparisonOutcome::NotFound { .. } => {
                summary.inspector_records += 1;
                summary.not_found += 1;
            }
            ComparisonOutcome::FieldResult {
                field: FieldKind::PipeNumber,
                tier,
                ..
            } => {
                summary.inspector_records += 1;
                summary.matched += 1;
                if outcome.is_discrepancy() {
                    summary.pipe_discrepancies += 1;
                }
                match tier {
                    MatchTier::DirectSlot => summary.tiers.direct_slot += 1,
                    MatchTier::Windowed => summary.tiers.windowed += 1,
                    MatchTier::Exhaustive => summary.tiers.exhaustive += 1,
                }
            }
            ComparisonOutcome::FieldResult {
                field: FieldKind::HeatNumber,
                ..
            } => {
                if outcome.is_discrepancy() {
                    summary.heat_discrepancies += 1;
                }
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(row: usize, field: FieldKind, discrepancy: bool, tier: MatchTier) -> ComparisonOutcome {
        ComparisonOutcome::FieldResult {
            inspector_row: row,
            survey_row: row,
            field,
            discrepancy,
            value: String::new(),
            tier,
        }
    }

    #[test]
    fn summary_counts() {
        let outcomes = vec![
            field(0, FieldKind::PipeNumber, false, MatchTier::DirectSlot),
            field(0, FieldKind::HeatNumber, true, MatchTier::DirectSlot),
            field(1, FieldKind::PipeNumber, true, MatchTier::Exhaustive),
            field(1, FieldKind::HeatNumber, true, MatchTier::Exhaustive),
            ComparisonOutcome::NotFound {
                inspector_row: 2,
                pipe_number: None,
                heat_number: None,
            },
            ComparisonOutcome::Ignored {
                inspector_row: 3,
                reason: IgnoreReason::InvalidFormat,
                pipe_number: None,
                heat_number: None,
            },
            ComparisonOutcome::Ignored {
                inspector_row: 4,
                reason: IgnoreReason::NoReferenceNumber,
                pipe_number: None,
                heat_number: None,
            },
        ];
        let summary = compute_summary(&outcomes);
        assert_eq!(summary.inspector_records, 5);
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.pipe_discrepancies, 1);
        assert_eq!(summary.heat_discrepancies, 2);
        assert_eq!(summary.not_found, 1);
        assert_eq!(summary.invalid_format, 1);
        assert_eq!(summary.no_reference_number, 1);
        assert_eq!(summary.tiers.direct_slot, 1);
        assert_eq!(summary.tiers.exhaustive, 1);
        assert!(summary.has_findings());
    }

    #[test]
    fn clean_run_has_no_findings() {
        let outcomes = vec![
            field(0, FieldKind::PipeNumber, false, MatchTier::Windowed),
            field(0, FieldKind::HeatNumber, false, MatchTier::Windowed),
        ];
        let summary = compute_summary(&outcomes);
        assert_eq!(summary.tiers.windowed, 1);
        assert!(!summary.has_findings());
    }
}
