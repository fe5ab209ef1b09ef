use serde::Serialize;

use crate::survey::SurveyStore;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A single ingested weld-map row. Absent cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeldRecord {
    /// 0-based row in the source sheet.
    pub row_number: usize,
    pub or_number: Option<String>,
    pub pipe_number: Option<String>,
    pub heat_number: Option<String>,
}

impl WeldRecord {
    pub fn new(
        row_number: usize,
        or_number: Option<&str>,
        pipe_number: Option<&str>,
        heat_number: Option<&str>,
    ) -> Self {
        Self {
            row_number,
            or_number: or_number.map(str::to_string),
            pipe_number: pipe_number.map(str::to_string),
            heat_number: heat_number.map(str::to_string),
        }
    }

    pub fn or_number_str(&self) -> &str {
        self.or_number.as_deref().unwrap_or("")
    }

    pub fn pipe_number_str(&self) -> &str {
        self.pipe_number.as_deref().unwrap_or("")
    }

    pub fn heat_number_str(&self) -> &str {
        self.heat_number.as_deref().unwrap_or("")
    }
}

/// Row of the dataset being checked.
pub type InspectorRecord = WeldRecord;

/// Row of the reference dataset.
pub type SurveyRecord = WeldRecord;

/// Pre-loaded records for one run.
pub struct ReconInput {
    pub inspector: Vec<InspectorRecord>,
    pub survey: SurveyStore,
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    NoReferenceNumber,
    InvalidFormat,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoReferenceNumber => write!(f, "no_reference_number"),
            Self::InvalidFormat => write!(f, "invalid_format"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    PipeNumber,
    HeatNumber,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PipeNumber => write!(f, "pipe_number"),
            Self::HeatNumber => write!(f, "heat_number"),
        }
    }
}

/// Which lookup tier located the survey record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    DirectSlot,
    Windowed,
    Exhaustive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// The inspector row could not be used for lookup.
    Ignored {
        inspector_row: usize,
        reason: IgnoreReason,
        /// Inspector values echoed back for rendering.
        pipe_number: Option<String>,
        heat_number: Option<String>,
    },
    /// No survey record satisfied the reference predicate.
    NotFound {
        inspector_row: usize,
        pipe_number: Option<String>,
        heat_number: Option<String>,
    },
    /// One field of a matched pair.
    FieldResult {
        inspector_row: usize,
        survey_row: usize,
        field: FieldKind,
        discrepancy: bool,
        value: String,
        tier: MatchTier,
    },
}

impl ComparisonOutcome {
    pub fn inspector_row(&self) -> usize {
        match self {
            Self::Ignored { inspector_row, .. }
            | Self::NotFound { inspector_row, .. }
            | Self::FieldResult { inspector_row, .. } => *inspector_row,
        }
    }

    pub fn is_discrepancy(&self) -> bool {
        matches!(self, Self::FieldResult { discrepancy: true, .. })
    }

    pub fn is_field_result(&self) -> bool {
        matches!(self, Self::FieldResult { .. })
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub direct_slot: usize,
    pub windowed: usize,
    pub exhaustive: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconSummary {
    pub inspector_records: usize,
    pub matched: usize,
    pub pipe_discrepancies: usize,
    pub heat_discrepancies: usize,
    pub not_found: usize,
    pub no_reference_number: usize,
    pub invalid_format: usize,
    pub tiers: TierCounts,
}

impl ReconSummary {
    /// Records that need a human look: discrepant, unmatched or unusable.
    pub fn has_findings(&self) -> bool {
        self.pipe_discrepancies > 0
            || self.heat_discrepancies > 0
            || self.not_found > 0
            || self.no_reference_number > 0
            || self.invalid_format > 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconMeta {
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconResult {
    pub meta: ReconMeta,
    pub summary: ReconSummary,
    pub outcomes: Vec<ComparisonOutcome>,
}
