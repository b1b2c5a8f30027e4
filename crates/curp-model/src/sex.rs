//! Sex code at position 10 of a CURP.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Code `H` (Hombre).
    Male,
    /// Code `M` (Mujer).
    Female,
    /// Code `X`, accepted only under [`SexPolicy::Inclusive`].
    Nonbinary,
}

impl Sex {
    /// Parse a single-character sex code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'H' => Some(Sex::Male),
            'M' => Some(Sex::Female),
            'X' => Some(Sex::Nonbinary),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Sex::Male => 'H',
            Sex::Female => 'M',
            Sex::Nonbinary => 'X',
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Hombre",
            Sex::Female => "Mujer",
            Sex::Nonbinary => "No binario",
        }
    }
}

/// Which sex codes the validator accepts.
///
/// Registrations issued before the 2021 inclusive reform only carry `H`/`M`;
/// newer ones may carry `X`. Both are valid target populations, so the
/// accepted set is an explicit option rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SexPolicy {
    /// `H` and `M` only.
    #[default]
    Binary,
    /// `H`, `M`, and `X`.
    Inclusive,
}

impl SexPolicy {
    /// Whether a parsed sex is accepted under this policy.
    pub fn allows(&self, sex: Sex) -> bool {
        match self {
            SexPolicy::Binary => sex != Sex::Nonbinary,
            SexPolicy::Inclusive => true,
        }
    }

    /// The accepted code characters, in grammar order.
    pub fn codes(&self) -> &'static str {
        match self {
            SexPolicy::Binary => "HM",
            SexPolicy::Inclusive => "HMX",
        }
    }
}
