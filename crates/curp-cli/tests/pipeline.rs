//! Integration tests for the pipeline stage functions.

use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use curp_cli::pipeline::{
    load_applicants, load_campus_catalog, load_program_catalog, validate_records,
    validator_options,
};
use curp_model::ValidationStatus;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()
}

#[test]
fn csv_batch_flows_through_validation() {
    let file = create_temp_csv(
        "CURP,CCT,Carreras,Promedio\n\
         AAAA850101HDFLRS09,09DPT0001Z,101,8.5\n\
         AAAA850101HXXLRS09,09DPT0001Z,101,7.0\n\
         nonsense,,,\n",
    );
    let records = load_applicants(file.path(), "Aspirantes").unwrap();
    assert_eq!(records.len(), 3);

    let analyses = validate_records(&records, validator_options(Some(reference()), false));
    assert_eq!(analyses.len(), 3);
    assert_eq!(analyses[0].status, ValidationStatus::Valid);
    assert_eq!(analyses[1].status, ValidationStatus::Partial);
    assert_eq!(analyses[2].status, ValidationStatus::Invalid);
}

#[test]
fn validator_options_default_reference_is_today() {
    let options = validator_options(None, false);
    assert_eq!(options.reference_date, chrono::Local::now().date_naive());

    let pinned = validator_options(Some(reference()), true);
    assert_eq!(pinned.reference_date, reference());
    assert_eq!(pinned.sex_policy, curp_model::SexPolicy::Inclusive);
}

#[test]
fn absent_catalogs_default_to_empty() {
    let programs = load_program_catalog(None).unwrap();
    assert!(programs.is_empty());
    let campuses = load_campus_catalog(None).unwrap();
    assert!(campuses.is_empty());
}

#[test]
fn catalogs_load_from_csv() {
    let programs_file = create_temp_csv("101,Enfermería General\n205,Electromecánica\n");
    let programs = load_program_catalog(Some(programs_file.path())).unwrap();
    assert_eq!(programs.len(), 2);
    assert_eq!(programs.get("101").unwrap().id, 1);

    let campuses_file = create_temp_csv(
        "Ciudad de México,Iztapalapa,Iztapalapa,CBT 5,DGETI,09DPT0001Z\n",
    );
    let campuses = load_campus_catalog(Some(campuses_file.path())).unwrap();
    assert_eq!(campuses.len(), 1);
    assert!(campuses.get("09DPT0001Z").is_some());
}

#[test]
fn missing_source_is_a_fatal_error() {
    let result = load_applicants(std::path::Path::new("/nonexistent/aspirantes.csv"), "Hoja1");
    assert!(result.is_err());
}
