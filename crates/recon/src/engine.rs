use crate::compare::{compare_heat_numbers, compare_pipe_numbers, FieldVerdict};
use crate::evidence::compute_summary;
use crate::matcher::locate;
use crate::model::{
    ComparisonOutcome, FieldKind, IgnoreReason, InspectorRecord, MatchTier, ReconInput, ReconMeta,
    ReconResult, SurveyRecord,
};
use crate::reference::{is_blank, parse_reference_code};
use crate::survey::SurveyStore;

/// Run reconciliation over one inspector/survey pair. Returns ordered
/// outcomes + summary.
pub fn run(input: &ReconInput) -> ReconResult {
    let outcomes = reconcile(&input.inspector, &input.survey);
    let summary = compute_summary(&outcomes);

    log::info!(
        "reconciled {} inspector rows against {} survey rows: {} matched, {} not found",
        input.inspector.len(),
        input.survey.record_count(),
        summary.matched,
        summary.not_found,
    );

    ReconResult {
        meta: ReconMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        outcomes,
    }
}

/// Compare every inspector record against the survey, in inspector order.
///
/// Each record contributes one `Ignored`/`NotFound` outcome or exactly two
/// `FieldResult`s (pipe, then heat).
pub fn reconcile(inspector: &[InspectorRecord], survey: &SurveyStore) -> Vec<ComparisonOutcome> {
    let mut outcomes = Vec::with_capacity(inspector.len() * 2);
    for record in inspector {
        reconcile_record(record, survey, &mut outcomes);
    }
    outcomes
}

/// Append the outcome(s) for a single inspector record.
pub fn reconcile_record(
    record: &InspectorRecord,
    survey: &SurveyStore,
    outcomes: &mut Vec<ComparisonOutcome>,
) {
    if is_blank(record.or_number.as_deref()) {
        outcomes.push(ignored(record, IgnoreReason::NoReferenceNumber));
        return;
    }

    let breakdown = match parse_reference_code(record.or_number_str()) {
        Ok(b) => b,
        Err(err) => {
            log::warn!("[row {}] {}", record.row_number, err);
            outcomes.push(ignored(record, err.ignore_reason()));
            return;
        }
    };

    let Some((matched, tier)) = locate(&breakdown, survey) else {
        log::warn!(
            "[row {}] no matching OR number found for {}",
            record.row_number,
            record.or_number_str()
        );
        outcomes.push(ComparisonOutcome::NotFound {
            inspector_row: record.row_number,
            pipe_number: record.pipe_number.clone(),
            heat_number: record.heat_number.clone(),
        });
        return;
    };

    log::debug!(
        "[row {}] OR{} matched survey row {} ({:?})",
        record.row_number,
        breakdown.digits,
        matched.row_number,
        tier
    );

    let pipe = compare_pipe_numbers(record, matched, &breakdown);
    outcomes.push(field_result(record, matched, FieldKind::PipeNumber, pipe, tier));

    let heat = compare_heat_numbers(record, matched);
    outcomes.push(field_result(record, matched, FieldKind::HeatNumber, heat, tier));
}

fn ignored(record: &InspectorRecord, reason: IgnoreReason) -> ComparisonOutcome {
    ComparisonOutcome::Ignored {
        inspector_row: record.row_number,
        reason,
        pipe_number: record.pipe_number.clone(),
        heat_number: record.heat_number.clone(),
    }
}

fn field_result(
    inspector: &InspectorRecord,
    survey: &SurveyRecord,
    field: FieldKind,
    verdict: FieldVerdict,
    tier: MatchTier,
) -> ComparisonOutcome {
    ComparisonOutcome::FieldResult {
        inspector_row: inspector.row_number,
        survey_row: survey.row_number,
        field,
        discrepancy: verdict.discrepancy,
        value: verdict.value,
        tier,
    }
}
