//! Batch enrichment: join validated applicants against the catalogs.

use curp_model::{ApplicantRecord, CurpAnalysis, EnrichedApplicant};

use crate::catalog::{CampusCatalog, ProgramCatalog};

/// Join one applicant against both catalogs.
///
/// Unmatched program or school keys leave the corresponding ids `None`;
/// the record itself always survives.
pub fn enrich_applicant(
    record: ApplicantRecord,
    analysis: CurpAnalysis,
    programs: &ProgramCatalog,
    campuses: &CampusCatalog,
) -> EnrichedApplicant {
    let program_id = programs.get(&record.program_code).map(|program| program.id);
    let campus = campuses.get(&record.school_code);
    EnrichedApplicant {
        program_id,
        campus_id: campus.map(|campus| campus.id),
        campus_entity: campus.map(|campus| campus.entity.clone()),
        campus_municipality: campus.map(|campus| campus.municipality.clone()),
        record,
        analysis,
    }
}

/// Join a whole batch, preserving order. `records` and `analyses` must be
/// parallel sequences produced from the same input rows.
pub fn enrich_batch(
    records: Vec<ApplicantRecord>,
    analyses: Vec<CurpAnalysis>,
    programs: &ProgramCatalog,
    campuses: &CampusCatalog,
) -> Vec<EnrichedApplicant> {
    records
        .into_iter()
        .zip(analyses)
        .map(|(record, analysis)| enrich_applicant(record, analysis, programs, campuses))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use curp_model::{Campus, Program};
    use curp_validate::{CurpValidator, ValidatorOptions};

    fn catalogs() -> (ProgramCatalog, CampusCatalog) {
        let programs = ProgramCatalog::new(vec![Program {
            id: 1,
            code: "101".to_string(),
            name: "Enfermería General".to_string(),
        }]);
        let campuses = CampusCatalog::new(vec![Campus {
            id: 7,
            cct: "09DPT0001Z".to_string(),
            entity: "Ciudad de México".to_string(),
            municipality: "Iztapalapa".to_string(),
            locality: "Iztapalapa".to_string(),
            name: "CBT 5".to_string(),
            subsystem: "DGETI".to_string(),
        }]);
        (programs, campuses)
    }

    fn analyze(curp: &str) -> CurpAnalysis {
        let options = ValidatorOptions::new(NaiveDate::from_ymd_opt(2025, 7, 10).unwrap());
        CurpValidator::new(options).analyze(curp)
    }

    #[test]
    fn matched_keys_attach_ids_and_names() {
        let (programs, campuses) = catalogs();
        let record = ApplicantRecord {
            curp: "AAAA850101HDFLRS09".to_string(),
            school_code: "09DPT0001Z".to_string(),
            program_code: "101".to_string(),
            average: "8.5".to_string(),
        };
        let enriched = enrich_applicant(record.clone(), analyze(&record.curp), &programs, &campuses);
        assert_eq!(enriched.program_id, Some(1));
        assert_eq!(enriched.campus_id, Some(7));
        assert_eq!(enriched.campus_entity.as_deref(), Some("Ciudad de México"));
        assert_eq!(enriched.campus_municipality.as_deref(), Some("Iztapalapa"));
    }

    #[test]
    fn unmatched_keys_stay_none_and_keep_the_record() {
        let (programs, campuses) = catalogs();
        let record = ApplicantRecord {
            curp: "AAAA850101HDFLRS09".to_string(),
            school_code: "99ZZZ9999Z".to_string(),
            program_code: "999".to_string(),
            average: String::new(),
        };
        let enriched = enrich_applicant(record.clone(), analyze(&record.curp), &programs, &campuses);
        assert_eq!(enriched.program_id, None);
        assert_eq!(enriched.campus_id, None);
        assert_eq!(enriched.campus_entity, None);
        assert_eq!(enriched.record.curp, record.curp);
    }

    #[test]
    fn batch_preserves_order() {
        let (programs, campuses) = catalogs();
        let records = vec![
            ApplicantRecord {
                curp: "AAAA850101HDFLRS09".to_string(),
                program_code: "101".to_string(),
                ..Default::default()
            },
            ApplicantRecord {
                curp: "bad".to_string(),
                ..Default::default()
            },
        ];
        let analyses = records.iter().map(|r| analyze(&r.curp)).collect();
        let enriched = enrich_batch(records, analyses, &programs, &campuses);
        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].program_id, Some(1));
        assert!(!enriched[1].analysis.is_valid());
    }
}
