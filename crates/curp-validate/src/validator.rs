//! The configurable validator over raw identifier strings.

use curp_model::{
    Check, CheckFailure, CurpAnalysis, CurpFields, Sex, ValidationStatus, entity_name,
    is_entity_code,
};

use crate::date::{age_at, best_effort_birth_date, check_birth_date};
use crate::options::ValidatorOptions;
use crate::structure::matches_grammar;

/// Validates identifiers against one fixed set of options.
///
/// The validator holds no other state: every call builds a fresh
/// [`CurpAnalysis`], and records in a batch are independent of each other.
#[derive(Debug, Clone)]
pub struct CurpValidator {
    options: ValidatorOptions,
}

impl CurpValidator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Case/whitespace normalization applied before any check.
    pub fn normalize(input: &str) -> String {
        input.trim().to_uppercase()
    }

    /// Strict mode: structural match plus all four component checks.
    pub fn is_valid(&self, input: &str) -> bool {
        self.analyze(input).is_valid()
    }

    /// Diagnostic mode: extract everything extractable, run every component
    /// check independently, and compute best-effort derived values.
    ///
    /// Never fails, whatever the input looks like; missing data shows up as
    /// empty fields and check failures, not errors.
    pub fn analyze(&self, input: &str) -> CurpAnalysis {
        let normalized = Self::normalize(input);
        let length = normalized.chars().count();
        let fields = CurpFields::extract(&normalized);
        let structural = matches_grammar(&normalized, self.options.sex_policy);

        let mut passed = Vec::new();
        let mut failures = Vec::new();

        let letters = fields.name_letters();
        if letters.chars().count() == 4 && letters.chars().all(char::is_alphabetic) {
            passed.push(Check::NameLetters);
        } else {
            failures.push(CheckFailure {
                check: Check::NameLetters,
                reason: "Error en letras iniciales".to_string(),
            });
        }

        if fields.birth_date.is_empty() {
            failures.push(CheckFailure {
                check: Check::BirthDate,
                reason: "Fecha incompleta o faltante".to_string(),
            });
        } else {
            match check_birth_date(&fields.birth_date, self.options.reference_date) {
                Ok(()) => passed.push(Check::BirthDate),
                Err(reason) => failures.push(CheckFailure {
                    check: Check::BirthDate,
                    reason: format!("Fecha inválida: {reason}"),
                }),
            }
        }

        let sex = fields
            .sex_code
            .chars()
            .next()
            .and_then(Sex::from_code)
            .filter(|sex| self.options.sex_policy.allows(*sex));
        if fields.sex_code.is_empty() {
            failures.push(CheckFailure {
                check: Check::Sex,
                reason: "Sexo faltante".to_string(),
            });
        } else if sex.is_some() {
            passed.push(Check::Sex);
        } else {
            failures.push(CheckFailure {
                check: Check::Sex,
                reason: format!("Sexo inválido: {}", fields.sex_code),
            });
        }

        let entity = entity_name(&fields.entity_code).map(String::from);
        if fields.entity_code.chars().count() != 2 {
            failures.push(CheckFailure {
                check: Check::Entity,
                reason: "Entidad incompleta o faltante".to_string(),
            });
        } else if is_entity_code(&fields.entity_code) {
            passed.push(Check::Entity);
        } else {
            failures.push(CheckFailure {
                check: Check::Entity,
                reason: format!("Entidad inválida: {}", fields.entity_code),
            });
        }

        // Derived values are best-effort: attempted from the digits alone,
        // independent of whether the date check passed.
        let birth_date = best_effort_birth_date(&fields.birth_date, self.options.reference_date);
        let age = birth_date.map(|birth| age_at(birth, self.options.reference_date));

        let status = if structural && passed.len() == Check::ALL.len() {
            ValidationStatus::Valid
        } else if passed.len() >= 2 {
            ValidationStatus::Partial
        } else {
            ValidationStatus::Invalid
        };

        CurpAnalysis {
            input: input.to_string(),
            normalized,
            length,
            fields,
            structural,
            passed,
            failures,
            status,
            birth_date,
            age,
            sex,
            entity_name: entity,
        }
    }

    /// Analyze a batch, preserving input order.
    pub fn analyze_batch<I, S>(&self, inputs: I) -> Vec<CurpAnalysis>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|input| self.analyze(input.as_ref()))
            .collect()
    }
}
