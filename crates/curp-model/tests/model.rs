//! Tests for curp-model types.

use curp_model::{
    ApplicantRecord, Check, CurpFields, Sex, SexPolicy, ValidationStatus, entity_name,
    entity_table,
};

#[test]
fn entity_table_is_closed_and_ordered() {
    let codes: Vec<&str> = entity_table().map(|(code, _)| code).collect();
    assert_eq!(codes.len(), 33);
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    assert_eq!(codes, sorted);
    assert!(codes.contains(&"NE"));
}

#[test]
fn entity_names_resolve() {
    assert_eq!(entity_name("JC"), Some("Jalisco"));
    assert_eq!(entity_name("MC"), Some("México"));
    assert_eq!(entity_name("ZZ"), None);
}

#[test]
fn status_serializes_lowercase() {
    let json = serde_json::to_string(&ValidationStatus::Partial).unwrap();
    assert_eq!(json, "\"partial\"");
    let round: ValidationStatus = serde_json::from_str(&json).unwrap();
    assert_eq!(round, ValidationStatus::Partial);
}

#[test]
fn status_labels() {
    assert_eq!(ValidationStatus::Valid.label(), "VÁLIDA");
    assert_eq!(ValidationStatus::Partial.label(), "PARCIALMENTE VÁLIDA");
    assert_eq!(ValidationStatus::Invalid.label(), "INVÁLIDA");
}

#[test]
fn check_order_is_positional() {
    assert_eq!(
        Check::ALL,
        [
            Check::NameLetters,
            Check::BirthDate,
            Check::Sex,
            Check::Entity
        ]
    );
}

#[test]
fn fields_roundtrip_through_serde() {
    let fields = CurpFields::extract("AAAA850101HDFLRS09");
    let json = serde_json::to_string(&fields).unwrap();
    let round: CurpFields = serde_json::from_str(&json).unwrap();
    assert_eq!(fields, round);
}

#[test]
fn sex_policy_defaults_to_binary() {
    assert_eq!(SexPolicy::default(), SexPolicy::Binary);
    assert!(!SexPolicy::default().allows(Sex::Nonbinary));
}

#[test]
fn applicant_record_defaults_are_empty() {
    let record = ApplicantRecord::default();
    assert!(record.curp.is_empty());
    assert!(record.average.is_empty());
}
