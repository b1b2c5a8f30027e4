//! Configuration options for CURP validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use curp_model::SexPolicy;

/// Options controlling a validation run.
///
/// The reference date is injected once and shared by the whole batch: it
/// anchors both the age computation and the two-digit-year century pivot,
/// so every record in a run resolves against the same "as of" date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorOptions {
    /// Accepted sex codes (`H`/`M` or `H`/`M`/`X`).
    pub sex_policy: SexPolicy,
    /// The "as of" date for age and century inference.
    pub reference_date: NaiveDate,
}

impl ValidatorOptions {
    /// Options anchored at the given reference date, binary sex codes.
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            sex_policy: SexPolicy::Binary,
            reference_date,
        }
    }

    pub fn with_sex_policy(mut self, sex_policy: SexPolicy) -> Self {
        self.sex_policy = sex_policy;
        self
    }

    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }
}
