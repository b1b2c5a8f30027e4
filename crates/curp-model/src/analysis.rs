//! Validation results for a single identifier.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::CurpFields;
use crate::sex::Sex;

/// The component checks run over the leading 13 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Four alphabetic name letters at offsets 0..4.
    NameLetters,
    /// Six-digit calendar date at offsets 4..10.
    BirthDate,
    /// Sex code at offset 10.
    Sex,
    /// Entity code at offsets 11..13.
    Entity,
}

impl Check {
    /// All checks, in positional order.
    pub const ALL: [Check; 4] = [
        Check::NameLetters,
        Check::BirthDate,
        Check::Sex,
        Check::Entity,
    ];

    /// Report label for this check.
    pub fn label(&self) -> &'static str {
        match self {
            Check::NameLetters => "Letras iniciales",
            Check::BirthDate => "Fecha de nacimiento",
            Check::Sex => "Sexo",
            Check::Entity => "Entidad federativa",
        }
    }
}

/// A failed component check with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckFailure {
    pub check: Check,
    pub reason: String,
}

/// Overall outcome for one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// Structural match and all four component checks passed.
    Valid,
    /// At least two component checks passed, but not everything.
    Partial,
    /// Fewer than two component checks passed.
    Invalid,
}

impl ValidationStatus {
    /// Report label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            ValidationStatus::Valid => "VÁLIDA",
            ValidationStatus::Partial => "PARCIALMENTE VÁLIDA",
            ValidationStatus::Invalid => "INVÁLIDA",
        }
    }
}

/// Validation result for a single identifier.
///
/// Constructed fresh per input and immutable afterwards. Derived values are
/// best-effort: they are populated whenever the date digits allow it, even
/// when the record as a whole is invalid, so diagnostic reports can show
/// what the fields *would* mean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurpAnalysis {
    /// The input exactly as supplied.
    pub input: String,
    /// Trimmed, uppercased form all checks ran against.
    pub normalized: String,
    /// Character count of the normalized form.
    pub length: usize,
    pub fields: CurpFields,
    /// Whether the normalized form matched the full 18-character grammar.
    pub structural: bool,
    /// Component checks that passed, in positional order.
    pub passed: Vec<Check>,
    /// Component checks that failed, with reasons.
    pub failures: Vec<CheckFailure>,
    pub status: ValidationStatus,
    pub birth_date: Option<NaiveDate>,
    /// Whole years between birth date and the reference date.
    pub age: Option<i32>,
    pub sex: Option<Sex>,
    pub entity_name: Option<String>,
}

impl CurpAnalysis {
    pub fn is_valid(&self) -> bool {
        self.status == ValidationStatus::Valid
    }

    pub fn check_passed(&self, check: Check) -> bool {
        self.passed.contains(&check)
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Birth date as `DD/MM/YYYY`, when constructable.
    pub fn formatted_birth_date(&self) -> Option<String> {
        self.birth_date
            .map(|date| date.format("%d/%m/%Y").to_string())
    }

    /// Sex label, when the code parsed under the active policy.
    pub fn sex_label(&self) -> Option<&'static str> {
        self.sex.map(|sex| sex.label())
    }
}
