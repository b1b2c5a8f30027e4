//! Applicant row sources.
//!
//! The registration table arrives either as CSV or as the original XLSX
//! workbook. Both readers resolve columns by header name
//! (case-insensitive), require only the identifier column, and coerce
//! every cell to text: numeric cells become their decimal representation,
//! blanks become empty strings. Rows are returned in source order.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use curp_model::ApplicantRecord;

use crate::error::{IngestError, Result};

/// Header names recognized for each applicant column.
const CURP_HEADERS: &[&str] = &["CURP"];
const SCHOOL_HEADERS: &[&str] = &["CCT"];
const PROGRAM_HEADERS: &[&str] = &["CARRERA", "CARRERAS"];
const AVERAGE_HEADERS: &[&str] = &["PROMEDIO"];

#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    curp: usize,
    school: Option<usize>,
    program: Option<usize>,
    average: Option<usize>,
}

fn resolve_columns(headers: &[String], path: &Path) -> Result<ColumnMap> {
    let find = |names: &[&str]| {
        headers.iter().position(|header| {
            let clean = header.trim().trim_start_matches('\u{feff}');
            names.iter().any(|name| clean.eq_ignore_ascii_case(name))
        })
    };
    let curp = find(CURP_HEADERS).ok_or_else(|| IngestError::MissingColumn {
        column: "CURP".to_string(),
        path: path.to_path_buf(),
    })?;
    Ok(ColumnMap {
        curp,
        school: find(SCHOOL_HEADERS),
        program: find(PROGRAM_HEADERS),
        average: find(AVERAGE_HEADERS),
    })
}

fn record_from_cells(cells: &[String], columns: ColumnMap) -> ApplicantRecord {
    let cell = |idx: Option<usize>| {
        idx.and_then(|idx| cells.get(idx))
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    };
    ApplicantRecord {
        curp: cell(Some(columns.curp)),
        school_code: cell(columns.school),
        program_code: cell(columns.program),
        average: cell(columns.average),
    }
}

/// Read applicant rows from a CSV file with a header row.
pub fn read_applicants_csv(path: &Path) -> Result<Vec<ApplicantRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| map_csv_open_error(e, path))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(str::to_string)
        .collect();
    let columns = resolve_columns(&headers, path)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cells: Vec<String> = row.iter().map(str::to_string).collect();
        records.push(record_from_cells(&cells, columns));
    }
    if records.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), rows = records.len(), "read applicant CSV");
    Ok(records)
}

/// Read applicant rows from an XLSX workbook sheet.
pub fn read_applicants_xlsx(path: &Path, sheet: &str) -> Result<Vec<ApplicantRecord>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| IngestError::SheetNotFound {
            sheet: sheet.to_string(),
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| IngestError::EmptyTable {
            path: path.to_path_buf(),
        })?
        .iter()
        .map(cell_to_string)
        .collect();
    let columns = resolve_columns(&headers, path)?;

    let mut records = Vec::new();
    for row in rows {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        records.push(record_from_cells(&cells, columns));
    }
    if records.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), sheet, rows = records.len(), "read applicant workbook");
    Ok(records)
}

/// Coerce a spreadsheet cell to text.
///
/// Numeric cells lose a trailing `.0` so an identifier typed as a number
/// round-trips as its digits.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(value) => value.trim().to_string(),
        Data::Float(value) => {
            if value.fract() == 0.0 && value.abs() < 1e15 {
                format!("{}", *value as i64)
            } else {
                value.to_string()
            }
        }
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::Empty | Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}

fn map_csv_open_error(error: csv::Error, path: &Path) -> IngestError {
    if let csv::ErrorKind::Io(io) = error.kind()
        && io.kind() == std::io::ErrorKind::NotFound
    {
        return IngestError::FileNotFound {
            path: path.to_path_buf(),
        };
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
