use crate::model::{MatchTier, SurveyRecord};
use crate::reference::ReferenceCodeBreakdown;
use crate::survey::SurveyStore;

/// Slots examined on each side of the expected slot by the windowed scan.
pub const WINDOW_RADIUS: u64 = 5;

/// Strip leading zeros, then surrounding whitespace.
fn normalize_reference(value: &str) -> &str {
    value.trim_start_matches('0').trim()
}

/// Does `survey` carry the inspector's OR digits?
///
/// Compares the inspector's digit run against the survey's whole raw OR
/// string, so a survey entry written as `OR42` or `42A` never matches `42`.
/// Survey sheets store the bare number; keep it that way.
pub fn same_reference(digits: &str, survey: &SurveyRecord) -> bool {
    normalize_reference(digits) == normalize_reference(survey.or_number_str())
}

/// Tier 1: the record sitting at slot `numeric_id`.
pub fn find_direct<'a>(
    code: &ReferenceCodeBreakdown,
    store: &'a SurveyStore,
) -> Option<&'a SurveyRecord> {
    store
        .get(code.numeric_id)
        .filter(|candidate| same_reference(&code.digits, candidate))
}

/// Tier 2: slots `[numeric_id - 5, numeric_id + 5)`, clamped at zero.
/// Stops at the first empty slot.
pub fn find_windowed<'a>(
    code: &ReferenceCodeBreakdown,
    store: &'a SurveyStore,
) -> Option<&'a SurveyRecord> {
    let start = code.numeric_id.saturating_sub(WINDOW_RADIUS);
    let end = code.numeric_id.saturating_add(WINDOW_RADIUS);

    for slot in start..end {
        let candidate = store.get(slot)?;
        if same_reference(&code.digits, candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Tier 3: every record, top to bottom.
pub fn find_exhaustive<'a>(
    code: &ReferenceCodeBreakdown,
    store: &'a SurveyStore,
) -> Option<&'a SurveyRecord> {
    store
        .iter()
        .find(|candidate| same_reference(&code.digits, candidate))
}

/// Run the three tiers in order; first hit wins.
pub fn locate<'a>(
    code: &ReferenceCodeBreakdown,
    store: &'a SurveyStore,
) -> Option<(&'a SurveyRecord, MatchTier)> {
    if let Some(found) = find_direct(code, store) {
        return Some((found, MatchTier::DirectSlot));
    }
    if let Some(found) = find_windowed(code, store) {
        return Some((found, MatchTier::Windowed));
    }
    find_exhaustive(code, store).map(|found| (found, MatchTier::Exhaustive))
}
