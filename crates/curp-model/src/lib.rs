pub mod analysis;
pub mod entity;
pub mod fields;
pub mod record;
pub mod sex;

pub use analysis::{Check, CheckFailure, CurpAnalysis, ValidationStatus};
pub use entity::{entity_name, entity_table, is_entity_code};
pub use fields::{CURP_LENGTH, CurpFields, LEADING_LENGTH};
pub use record::{ApplicantRecord, Campus, EnrichedApplicant, Program};
pub use sex::{Sex, SexPolicy};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_counts_passed_checks() {
        let analysis = CurpAnalysis {
            input: "AAAA850101HDFLRS09".to_string(),
            normalized: "AAAA850101HDFLRS09".to_string(),
            length: 18,
            fields: CurpFields::extract("AAAA850101HDFLRS09"),
            structural: true,
            passed: vec![Check::NameLetters, Check::BirthDate, Check::Sex, Check::Entity],
            failures: vec![],
            status: ValidationStatus::Valid,
            birth_date: None,
            age: None,
            sex: Some(Sex::Male),
            entity_name: Some("Ciudad de México".to_string()),
        };
        assert!(analysis.is_valid());
        assert!(analysis.check_passed(Check::BirthDate));
        assert!(!analysis.has_failures());
    }

    #[test]
    fn analysis_serializes() {
        let analysis = CurpAnalysis {
            input: "short".to_string(),
            normalized: "SHORT".to_string(),
            length: 5,
            fields: CurpFields::extract("SHORT"),
            structural: false,
            passed: vec![],
            failures: vec![CheckFailure {
                check: Check::BirthDate,
                reason: "Fecha incompleta o faltante".to_string(),
            }],
            status: ValidationStatus::Invalid,
            birth_date: None,
            age: None,
            sex: None,
            entity_name: None,
        };
        let json = serde_json::to_string(&analysis).expect("serialize analysis");
        let round: CurpAnalysis = serde_json::from_str(&json).expect("deserialize analysis");
        assert_eq!(round.status, ValidationStatus::Invalid);
        assert_eq!(round.failures.len(), 1);
    }
}
