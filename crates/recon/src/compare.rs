use crate::model::{InspectorRecord, SurveyRecord};
use crate::reference::ReferenceCodeBreakdown;

/// Stands in for the OR suffix when the code has none. Chosen so it never
/// equals a realistic difference token.
pub const NO_SUFFIX_SENTINEL: &str = "no-letter-appended";

/// Verdict for one field of a matched pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldVerdict {
    pub discrepancy: bool,
    /// Survey value on discrepancy, inspector value otherwise.
    pub value: String,
}

fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// What is left of the longer string once the shorter one is cut out of it.
///
/// A single literal removal of the first occurrence, not a character set
/// difference. On equal lengths `inspector` is removed from `survey`.
pub fn string_difference(inspector: &str, survey: &str) -> String {
    if inspector.chars().count() > survey.chars().count() {
        inspector.replacen(survey, "", 1)
    } else {
        survey.replacen(inspector, "", 1)
    }
}

/// Compare pipe numbers, tolerating the OR suffix letter on either side.
///
/// Spools cut into several pipes get `OR235A`, `OR235B`, ... and the pipe
/// number on one sheet often carries that letter while the other does not.
pub fn compare_pipe_numbers(
    inspector: &InspectorRecord,
    survey: &SurveyRecord,
    breakdown: &ReferenceCodeBreakdown,
) -> FieldVerdict {
    let ipn = inspector.pipe_number_str();
    let spn = survey.pipe_number_str();

    let diff = string_difference(&normalize(ipn), &normalize(spn));
    let expected_suffix = if breakdown.has_suffix() {
        breakdown.suffix_letters.to_lowercase()
    } else {
        NO_SUFFIX_SENTINEL.to_string()
    };
    let differ_by_letter_only = diff == expected_suffix;

    if !diff.is_empty() && !differ_by_letter_only {
        log::debug!(
            "[{}:{}] pipe number discrepancy: i-{} / s-{} ... {} / {}",
            inspector.row_number,
            survey.row_number,
            inspector.or_number_str(),
            survey.or_number_str(),
            ipn,
            spn
        );
        return FieldVerdict {
            discrepancy: true,
            value: spn.to_string(),
        };
    }

    FieldVerdict {
        discrepancy: false,
        value: ipn.to_string(),
    }
}

/// Compare heat numbers, ignoring case and surrounding whitespace.
pub fn compare_heat_numbers(inspector: &InspectorRecord, survey: &SurveyRecord) -> FieldVerdict {
    let ihn = inspector.heat_number_str();
    let shn = survey.heat_number_str();

    if normalize(ihn) != normalize(shn) {
        log::debug!(
            "[{}:{}] heat number discrepancy: i-{} / s-{} ... {} / {}",
            inspector.row_number,
            survey.row_number,
            inspector.or_number_str(),
            survey.or_number_str(),
            ihn,
            shn
        );
        return FieldVerdict {
            discrepancy: true,
            value: shn.to_string(),
        };
    }

    FieldVerdict {
        discrepancy: false,
        value: ihn.to_string(),
    }
}
