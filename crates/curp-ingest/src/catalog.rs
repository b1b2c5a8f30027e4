//! Program and campus lookup catalogs.
//!
//! Both catalogs assign sequential 1-based ids on load and expose keyed
//! lookups for the enrichment join. A key that is absent resolves to
//! `None`; missing keys never fail the lookup.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use curp_model::{Campus, Program};

use crate::error::{IngestError, Result};

/// CCT school keys: 2 digits, 3 letters, 4 digits, 1 letter.
static CCT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}[A-Z]{3}[0-9]{4}[A-Z]$").expect("valid CCT pattern"));

/// Columns in a campus catalog row, in source order.
const CAMPUS_COLUMNS: usize = 6;

/// Program catalog keyed by program code.
#[derive(Debug, Clone, Default)]
pub struct ProgramCatalog {
    programs: Vec<Program>,
    by_code: BTreeMap<String, usize>,
}

impl ProgramCatalog {
    pub fn new(programs: Vec<Program>) -> Self {
        let mut by_code = BTreeMap::new();
        for (idx, program) in programs.iter().enumerate() {
            by_code.entry(program.code.clone()).or_insert(idx);
        }
        Self { programs, by_code }
    }

    pub fn get(&self, code: &str) -> Option<&Program> {
        self.by_code
            .get(code.trim())
            .map(|idx| &self.programs[*idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Program> {
        self.programs.iter()
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

/// Campus catalog keyed by CCT.
#[derive(Debug, Clone, Default)]
pub struct CampusCatalog {
    campuses: Vec<Campus>,
    by_cct: BTreeMap<String, usize>,
}

impl CampusCatalog {
    pub fn new(campuses: Vec<Campus>) -> Self {
        let mut by_cct = BTreeMap::new();
        for (idx, campus) in campuses.iter().enumerate() {
            by_cct.entry(campus.cct.clone()).or_insert(idx);
        }
        Self { campuses, by_cct }
    }

    pub fn get(&self, cct: &str) -> Option<&Campus> {
        self.by_cct.get(cct.trim()).map(|idx| &self.campuses[*idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Campus> {
        self.campuses.iter()
    }

    pub fn len(&self) -> usize {
        self.campuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campuses.is_empty()
    }
}

/// Load the program catalog from a headerless two-column CSV (key, name).
///
/// Ids are assigned sequentially from 1 in file order; rows without both
/// columns are skipped. A BOM on the first key is stripped.
pub fn load_programs_csv(path: &Path) -> Result<ProgramCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| map_csv_open_error(e, path))?;

    let mut programs = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if row.len() < 2 {
            continue;
        }
        let code = row[0].trim().trim_start_matches('\u{feff}').to_string();
        let name = row[1].trim().to_string();
        if code.is_empty() {
            continue;
        }
        programs.push(Program {
            id: programs.len() as i64 + 1,
            code,
            name,
        });
    }
    if programs.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), programs = programs.len(), "loaded program catalog");
    Ok(ProgramCatalog::new(programs))
}

/// Load the campus catalog from a headerless CSV with columns
/// entity, municipality, locality, name, subsystem, CCT.
pub fn load_campuses_csv(path: &Path) -> Result<CampusCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| map_csv_open_error(e, path))?;

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell.trim().trim_start_matches('\u{feff}').to_string())
            .collect();
        rows.push(cells);
    }
    let campuses = campuses_from_rows(&rows);
    if campuses.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), campuses = campuses.len(), "loaded campus catalog");
    Ok(CampusCatalog::new(campuses))
}

/// Extract the campus catalog from a PDF.
///
/// `pdf-extract` flattens the table to text, so rows are recovered
/// line-by-line: columns split on runs of two or more spaces, header and
/// truncated lines skipped, and the CCT column validated for its
/// 10-character shape. Lines that do not look like catalog rows are
/// silently dropped, matching the tolerant behavior of the source tables.
pub fn load_campuses_pdf(path: &Path) -> Result<CampusCatalog> {
    let text = pdf_extract::extract_text(path).map_err(|e| IngestError::PdfExtract {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    static COLUMN_SPLIT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid split pattern"));

    let rows: Vec<Vec<String>> = text
        .lines()
        .map(|line| {
            COLUMN_SPLIT
                .split(line.trim())
                .map(str::to_string)
                .collect()
        })
        .collect();
    let campuses = campuses_from_rows(&rows);
    if campuses.is_empty() {
        warn!(path = %path.display(), "no campus rows recognized in PDF text");
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), campuses = campuses.len(), "extracted campus catalog from PDF");
    Ok(CampusCatalog::new(campuses))
}

/// Build campus entries from raw rows, skipping headers and malformed rows.
fn campuses_from_rows(rows: &[Vec<String>]) -> Vec<Campus> {
    let mut campuses = Vec::new();
    for cells in rows {
        if cells.len() < CAMPUS_COLUMNS {
            continue;
        }
        if cells[0].to_uppercase().contains("ENTIDAD") {
            continue;
        }
        if cells[..CAMPUS_COLUMNS].iter().any(String::is_empty) {
            continue;
        }
        let cct = cells[5].to_uppercase();
        if !is_cct(&cct) {
            continue;
        }
        campuses.push(Campus {
            id: campuses.len() as i64 + 1,
            cct,
            entity: cells[0].clone(),
            municipality: cells[1].clone(),
            locality: cells[2].clone(),
            name: cells[3].clone(),
            subsystem: cells[4].clone(),
        });
    }
    campuses
}

/// Whether a value has the 10-character CCT shape.
pub fn is_cct(value: &str) -> bool {
    value.len() == 10 && CCT_PATTERN.is_match(value)
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn loads_programs_with_sequential_ids() {
        let file = create_temp_csv("101,Enfermería General\n205,Electromecánica\n");
        let catalog = load_programs_csv(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        let program = catalog.get("205").unwrap();
        assert_eq!(program.id, 2);
        assert_eq!(program.name, "Electromecánica");
    }

    #[test]
    fn strips_bom_from_first_program_key() {
        let file = create_temp_csv("\u{feff}101,Enfermería General\n");
        let catalog = load_programs_csv(file.path()).unwrap();
        assert!(catalog.get("101").is_some());
    }

    #[test]
    fn program_lookup_misses_return_none() {
        let file = create_temp_csv("101,Enfermería General\n");
        let catalog = load_programs_csv(file.path()).unwrap();
        assert!(catalog.get("999").is_none());
    }

    #[test]
    fn loads_campuses_and_skips_headers() {
        let file = create_temp_csv(
            "ENTIDAD,MUNICIPIO,LOCALIDAD,NOMBRE,SUBSISTEMA,CCT\n\
             Ciudad de México,Iztapalapa,Iztapalapa,CBT 5,DGETI,09DPT0001Z\n\
             Jalisco,Guadalajara,Centro,Preparatoria 2,UDG,14EBH0002K\n\
             ,,,,,\n",
        );
        let catalog = load_campuses_csv(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        let campus = catalog.get("09DPT0001Z").unwrap();
        assert_eq!(campus.id, 1);
        assert_eq!(campus.entity, "Ciudad de México");
        assert_eq!(campus.municipality, "Iztapalapa");
    }

    #[test]
    fn rejects_rows_with_malformed_cct() {
        let file = create_temp_csv(
            "Ciudad de México,Iztapalapa,Iztapalapa,CBT 5,DGETI,TOOSHORT\n\
             Jalisco,Guadalajara,Centro,Preparatoria 2,UDG,14EBH0002K\n",
        );
        let catalog = load_campuses_csv(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn cct_shape() {
        assert!(is_cct("09DPT0001Z"));
        assert!(is_cct("14EBH0002K"));
        assert!(!is_cct("09dpt0001z"));
        assert!(!is_cct("09DPT001Z"));
        assert!(!is_cct("ABCDEFGHIJ"));
    }

    #[test]
    fn campuses_from_pdf_style_rows() {
        let rows = vec![
            vec!["ENTIDAD".to_string(), "MUNICIPIO".to_string()],
            vec![
                "Sonora".to_string(),
                "Hermosillo".to_string(),
                "Centro".to_string(),
                "CECyTE Sonora Plantel 1".to_string(),
                "CECyTE".to_string(),
                "26ETC0001F".to_string(),
            ],
            vec!["page 3 of 120".to_string()],
        ];
        let campuses = campuses_from_rows(&rows);
        assert_eq!(campuses.len(), 1);
        assert_eq!(campuses[0].cct, "26ETC0001F");
    }
}
