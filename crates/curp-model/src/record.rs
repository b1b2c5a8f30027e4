//! Applicant rows and the catalog entries they join against.

use serde::{Deserialize, Serialize};

use crate::analysis::CurpAnalysis;

/// One applicant row from the registration table.
///
/// Sibling columns are passed through unvalidated; `average` stays raw text
/// until SQL generation decides whether it parses as a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    /// Raw identifier as found in the source.
    pub curp: String,
    /// School key (CCT, 10 characters when well-formed).
    pub school_code: String,
    /// Program key into the program catalog.
    pub program_code: String,
    /// Grade average, raw text.
    pub average: String,
}

/// Program catalog entry: program key to assigned numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Sequential 1-based id assigned on load.
    pub id: i64,
    pub code: String,
    pub name: String,
}

/// Campus catalog entry keyed by CCT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campus {
    /// Sequential 1-based id assigned on load.
    pub id: i64,
    pub cct: String,
    pub entity: String,
    pub municipality: String,
    pub locality: String,
    pub name: String,
    pub subsystem: String,
}

/// An applicant joined against both catalogs.
///
/// Lookup misses stay `None` and never remove the record from the batch;
/// the SQL sink renders them as `NULL`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedApplicant {
    pub record: ApplicantRecord,
    pub analysis: CurpAnalysis,
    pub program_id: Option<i64>,
    pub campus_id: Option<i64>,
    pub campus_entity: Option<String>,
    pub campus_municipality: Option<String>,
}
