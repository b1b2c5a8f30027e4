//! JSON exports.
//!
//! Two schemas: the plain per-record export mirroring the source columns,
//! and the enriched schema carrying derived and joined attributes. Both
//! include valid records only and preserve input order.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use curp_model::{ApplicantRecord, CurpAnalysis, EnrichedApplicant};

#[derive(Debug, Serialize)]
struct ValidRecord<'a> {
    #[serde(rename = "CURP")]
    curp: &'a str,
    #[serde(rename = "CCT")]
    cct: &'a str,
    #[serde(rename = "Carrera")]
    carrera: &'a str,
    #[serde(rename = "Promedio")]
    promedio: &'a str,
}

#[derive(Debug, Serialize)]
struct EnrichedRecord<'a> {
    curp: &'a str,
    sexo: Option<&'a str>,
    fecha_nacimiento: Option<String>,
    edad: Option<i32>,
    carrera_id: Option<i64>,
    plantel_id: Option<i64>,
    entidad: Option<&'a str>,
    municipio: Option<&'a str>,
    promedio: &'a str,
}

/// Plain export: `{CURP, CCT, Carrera, Promedio}` per valid record.
///
/// `records` and `analyses` must be the parallel outputs of one batch.
pub fn valid_records_json(
    records: &[ApplicantRecord],
    analyses: &[CurpAnalysis],
) -> Result<String> {
    let rows: Vec<ValidRecord<'_>> = records
        .iter()
        .zip(analyses)
        .filter(|(_, analysis)| analysis.is_valid())
        .map(|(record, analysis)| ValidRecord {
            curp: analysis.normalized.as_str(),
            cct: record.school_code.as_str(),
            carrera: record.program_code.as_str(),
            promedio: record.average.as_str(),
        })
        .collect();
    serde_json::to_string_pretty(&rows).context("serialize valid records")
}

/// Enriched export with derived and joined attributes per valid record.
pub fn enriched_records_json(enriched: &[EnrichedApplicant]) -> Result<String> {
    let rows: Vec<EnrichedRecord<'_>> = enriched
        .iter()
        .filter(|item| item.analysis.is_valid())
        .map(|item| EnrichedRecord {
            curp: item.analysis.normalized.as_str(),
            sexo: item.analysis.sex_label(),
            fecha_nacimiento: item.analysis.formatted_birth_date(),
            edad: item.analysis.age,
            carrera_id: item.program_id,
            plantel_id: item.campus_id,
            entidad: item.campus_entity.as_deref(),
            municipio: item.campus_municipality.as_deref(),
            promedio: item.record.average.as_str(),
        })
        .collect();
    serde_json::to_string_pretty(&rows).context("serialize enriched records")
}

/// Write a JSON document to a file.
pub fn write_json(path: &Path, json: &str) -> Result<()> {
    std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("write JSON export to {}", path.display()))
}
