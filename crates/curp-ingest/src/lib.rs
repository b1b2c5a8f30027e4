//! Data ingestion: applicant rows, lookup catalogs, and enrichment.
//!
//! The validator core consumes plain strings; everything here is the
//! collaborator layer that sources those strings (CSV, XLSX, PDF) and joins
//! validated records against the program and campus catalogs.

pub mod applicants;
pub mod catalog;
pub mod enrich;
pub mod error;

pub use applicants::{read_applicants_csv, read_applicants_xlsx};
pub use catalog::{
    CampusCatalog, ProgramCatalog, is_cct, load_campuses_csv, load_campuses_pdf,
    load_programs_csv,
};
pub use enrich::{enrich_applicant, enrich_batch};
pub use error::{IngestError, Result};
