//! `weldmap-recon`: inspector/survey weld-map reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded records, returns ordered comparison
//! outcomes. No CLI or IO dependencies.

pub mod compare;
pub mod engine;
pub mod error;
pub mod evidence;
pub mod matcher;
pub mod model;
pub mod reference;
pub mod survey;

pub use engine::{reconcile, run};
pub use error::ReferenceError;
pub use model::{
    ComparisonOutcome, FieldKind, IgnoreReason, InspectorRecord, MatchTier, ReconInput,
    ReconResult, SurveyRecord, WeldRecord,
};
pub use reference::{parse_reference_code, ReferenceCodeBreakdown};
pub use survey::SurveyStore;
