//! Two-sheet styled XLSX analysis report.
//!
//! Sheet "Resumen" carries aggregate counts and percentages; sheet
//! "Análisis" has one row per record with per-field pass/fail coloring,
//! auto-fitted columns, and an auto-filter over the data range.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use curp_model::{Check, CurpAnalysis, ValidationStatus};

use crate::common::{date_placeholder, entity_placeholder, sex_placeholder};

const HEADER_BG: u32 = 0x002060;
const VALID_BG: u32 = 0xC6EFCE;
const VALID_FG: u32 = 0x006100;
const PARTIAL_BG: u32 = 0xFFEB9C;
const PARTIAL_FG: u32 = 0x9C5700;
const INVALID_BG: u32 = 0xFFC7CE;
const INVALID_FG: u32 = 0x9C0006;

const DETAIL_COLUMNS: &[&str] = &[
    "CURP Original",
    "Longitud",
    "Estado",
    "1er Apellido",
    "Vocal",
    "2do Apellido",
    "Nombre",
    "Fecha Nac",
    "Fecha Formato",
    "Edad",
    "Sexo Código",
    "Sexo",
    "Entidad Código",
    "Entidad",
    "Consonantes",
    "Homoclave",
    "Componentes Válidos",
    "Errores",
];

/// Aggregate counts over one analyzed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub total: usize,
    pub valid: usize,
    pub partial: usize,
    pub invalid: usize,
}

impl AnalysisSummary {
    pub fn from_analyses(analyses: &[CurpAnalysis]) -> Self {
        let mut summary = Self {
            total: analyses.len(),
            ..Self::default()
        };
        for analysis in analyses {
            match analysis.status {
                ValidationStatus::Valid => summary.valid += 1,
                ValidationStatus::Partial => summary.partial += 1,
                ValidationStatus::Invalid => summary.invalid += 1,
            }
        }
        summary
    }

    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }
}

struct CellStyles {
    header: Format,
    title: Format,
    section: Format,
    normal: Format,
    valid: Format,
    partial: Format,
    invalid: Format,
}

impl CellStyles {
    fn new() -> Self {
        let bordered = || Format::new().set_border(FormatBorder::Thin);
        Self {
            header: bordered()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(HEADER_BG))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            title: Format::new().set_bold().set_font_size(16),
            section: Format::new().set_bold().set_font_size(12),
            normal: bordered(),
            valid: bordered()
                .set_bold()
                .set_font_color(Color::RGB(VALID_FG))
                .set_background_color(Color::RGB(VALID_BG)),
            partial: bordered()
                .set_bold()
                .set_font_color(Color::RGB(PARTIAL_FG))
                .set_background_color(Color::RGB(PARTIAL_BG)),
            invalid: bordered()
                .set_bold()
                .set_font_color(Color::RGB(INVALID_FG))
                .set_background_color(Color::RGB(INVALID_BG)),
        }
    }

    fn for_status(&self, status: ValidationStatus) -> &Format {
        match status {
            ValidationStatus::Valid => &self.valid,
            ValidationStatus::Partial => &self.partial,
            ValidationStatus::Invalid => &self.invalid,
        }
    }

    fn for_check(&self, analysis: &CurpAnalysis, check: Check) -> &Format {
        if analysis.check_passed(check) {
            &self.valid
        } else {
            &self.invalid
        }
    }
}

/// Write the analysis workbook for one batch.
pub fn write_analysis_workbook(path: &Path, analyses: &[CurpAnalysis]) -> Result<()> {
    let styles = CellStyles::new();
    let summary = AnalysisSummary::from_analyses(analyses);

    let mut workbook = Workbook::new();
    write_summary_sheet(workbook.add_worksheet(), &summary, &styles)
        .context("build summary sheet")?;
    write_detail_sheet(workbook.add_worksheet(), analyses, &styles)
        .context("build detail sheet")?;
    workbook
        .save(path)
        .with_context(|| format!("write analysis workbook to {}", path.display()))?;
    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    summary: &AnalysisSummary,
    styles: &CellStyles,
) -> Result<()> {
    sheet.set_name("Resumen")?;
    sheet.write_string_with_format(0, 0, "RESUMEN DE ANÁLISIS DE CURP", &styles.title)?;
    sheet.write_string_with_format(2, 0, "ESTADÍSTICAS GENERALES", &styles.section)?;

    let counts: [(&str, usize); 4] = [
        ("Total de registros:", summary.total),
        ("CURPs válidas:", summary.valid),
        ("CURPs parcialmente válidas:", summary.partial),
        ("CURPs inválidas:", summary.invalid),
    ];
    for (offset, (label, count)) in counts.iter().enumerate() {
        let row = 4 + offset as u32;
        sheet.write_string(row, 0, *label)?;
        sheet.write_number(row, 1, *count as f64)?;
    }

    sheet.write_string_with_format(10, 0, "PORCENTAJES", &styles.section)?;
    let percentages: [(&str, usize); 3] = [
        ("CURPs válidas:", summary.valid),
        ("CURPs parcialmente válidas:", summary.partial),
        ("CURPs inválidas:", summary.invalid),
    ];
    for (offset, (label, count)) in percentages.iter().enumerate() {
        let row = 12 + offset as u32;
        sheet.write_string(row, 0, *label)?;
        sheet.write_string(row, 1, format!("{:.1}%", summary.percentage(*count)))?;
    }

    sheet.autofit();
    Ok(())
}

fn write_detail_sheet(
    sheet: &mut Worksheet,
    analyses: &[CurpAnalysis],
    styles: &CellStyles,
) -> Result<()> {
    sheet.set_name("Análisis")?;
    for (col, label) in DETAIL_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *label, &styles.header)?;
    }

    for (idx, analysis) in analyses.iter().enumerate() {
        let row = idx as u32 + 1;
        let status_format = styles.for_status(analysis.status);
        let letters = styles.for_check(analysis, Check::NameLetters);
        let date = styles.for_check(analysis, Check::BirthDate);
        let sex = styles.for_check(analysis, Check::Sex);
        let entity = styles.for_check(analysis, Check::Entity);

        let length = analysis.length.to_string();
        let formatted_date = date_placeholder(analysis);
        let sex_text = sex_placeholder(analysis);
        let entity_text = entity_placeholder(analysis);
        let passed = analysis
            .passed
            .iter()
            .map(|check| check.label())
            .collect::<Vec<_>>()
            .join(", ");
        let errors = analysis
            .failures
            .iter()
            .map(|failure| failure.reason.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let age = analysis
            .age
            .map(|age| age.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        let fields = &analysis.fields;
        let cells: [(&str, &Format); 18] = [
            (&analysis.input, status_format),
            (&length, status_format),
            (analysis.status.label(), status_format),
            (&fields.first_surname_initial, letters),
            (&fields.internal_vowel, letters),
            (&fields.second_surname_initial, letters),
            (&fields.given_name_initial, letters),
            (&fields.birth_date, date),
            (&formatted_date, date),
            (&age, date),
            (&fields.sex_code, sex),
            (&sex_text, sex),
            (&fields.entity_code, entity),
            (&entity_text, entity),
            (&fields.consonants, &styles.normal),
            (&fields.homoclave, &styles.normal),
            (&passed, &styles.normal),
            (&errors, &styles.normal),
        ];
        for (col, (value, format)) in cells.iter().enumerate() {
            sheet.write_string_with_format(row, col as u16, *value, format)?;
        }
    }

    let last_row = analyses.len() as u32;
    let last_col = (DETAIL_COLUMNS.len() - 1) as u16;
    sheet.autofilter(0, 0, last_row, last_col)?;
    sheet.autofit();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use curp_validate::{CurpValidator, ValidatorOptions};

    fn analyses() -> Vec<CurpAnalysis> {
        let options = ValidatorOptions::new(NaiveDate::from_ymd_opt(2025, 7, 10).unwrap());
        CurpValidator::new(options).analyze_batch([
            "AAAA850101HDFLRS09",
            "AAAA850101HXXLRS09",
            "junk",
        ])
    }

    #[test]
    fn summary_counts_statuses() {
        let summary = AnalysisSummary::from_analyses(&analyses());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.partial, 1);
        assert_eq!(summary.invalid, 1);
        assert!((summary.percentage(summary.valid) - 33.3).abs() < 0.1);
    }

    #[test]
    fn empty_summary_has_zero_percentages() {
        let summary = AnalysisSummary::from_analyses(&[]);
        assert_eq!(summary.percentage(summary.valid), 0.0);
    }

    #[test]
    fn writes_workbook_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analisis.xlsx");
        write_analysis_workbook(&path, &analyses()).unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
