//! Pipeline stage functions shared by the CLI commands.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{info, info_span};

use curp_ingest::{
    CampusCatalog, ProgramCatalog, load_campuses_csv, load_campuses_pdf, load_programs_csv,
    read_applicants_csv, read_applicants_xlsx,
};
use curp_model::{ApplicantRecord, CurpAnalysis};
use curp_report::AnalysisSummary;
use curp_validate::{CurpValidator, ValidatorOptions};

/// Whether a path looks like a spreadsheet workbook rather than CSV.
fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ext.eq_ignore_ascii_case("xlsx")
                || ext.eq_ignore_ascii_case("xlsm")
                || ext.eq_ignore_ascii_case("xls")
        })
        .unwrap_or(false)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Stage 1: read applicant rows from CSV or XLSX, by extension.
pub fn load_applicants(path: &Path, sheet: &str) -> Result<Vec<ApplicantRecord>> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let records = if is_workbook(path) {
        read_applicants_xlsx(path, sheet)
            .with_context(|| format!("read applicant workbook {}", path.display()))?
    } else {
        read_applicants_csv(path)
            .with_context(|| format!("read applicant CSV {}", path.display()))?
    };
    info!(
        rows = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(records)
}

/// Build validator options from CLI inputs; the reference date defaults to
/// today so every record in the run shares one "as of" date.
pub fn validator_options(reference_date: Option<NaiveDate>, inclusive_sex: bool) -> ValidatorOptions {
    let reference = reference_date.unwrap_or_else(|| Local::now().date_naive());
    let mut options = ValidatorOptions::new(reference);
    if inclusive_sex {
        options = options.with_sex_policy(curp_model::SexPolicy::Inclusive);
    }
    options
}

/// Stage 2: validate every record, preserving input order.
pub fn validate_records(
    records: &[ApplicantRecord],
    options: ValidatorOptions,
) -> Vec<CurpAnalysis> {
    let span = info_span!("validate", records = records.len());
    let _guard = span.enter();
    let start = Instant::now();
    let validator = CurpValidator::new(options);
    let analyses = validator.analyze_batch(records.iter().map(|record| record.curp.as_str()));
    let summary = AnalysisSummary::from_analyses(&analyses);
    info!(
        total = summary.total,
        valid = summary.valid,
        partial = summary.partial,
        invalid = summary.invalid,
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    analyses
}

/// Load the program catalog; absent path yields an empty catalog so the
/// enrichment join simply misses every key.
pub fn load_program_catalog(path: Option<&Path>) -> Result<ProgramCatalog> {
    match path {
        Some(path) => load_programs_csv(path)
            .with_context(|| format!("load program catalog {}", path.display())),
        None => Ok(ProgramCatalog::default()),
    }
}

/// Load the campus catalog from PDF or CSV, by extension.
pub fn load_campus_catalog(path: Option<&Path>) -> Result<CampusCatalog> {
    match path {
        Some(path) if is_pdf(path) => load_campuses_pdf(path)
            .with_context(|| format!("extract campus catalog from {}", path.display())),
        Some(path) => load_campuses_csv(path)
            .with_context(|| format!("load campus catalog {}", path.display())),
        None => Ok(CampusCatalog::default()),
    }
}
