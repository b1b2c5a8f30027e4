//! Output generation for CURP batch runs.
//!
//! This crate provides the sinks consuming validated batches:
//!
//! - **Text**: flat comma-space list of the valid identifiers
//! - **JSON**: per-record exports, plain or enriched
//! - **SQL**: `INSERT` scripts for applicants, programs, and campuses
//! - **XLSX**: two-sheet styled analysis workbook

mod common;
mod json;
mod sql;
mod text;
mod xlsx;

pub use common::{date_placeholder, entity_placeholder, sex_placeholder};
pub use json::{enriched_records_json, valid_records_json, write_json};
pub use sql::{
    applicants_insert_sql, campuses_insert_sql, escape_sql, programs_insert_sql, sql_number,
};
pub use text::{valid_curps_line, write_valid_curps};
pub use xlsx::{AnalysisSummary, write_analysis_workbook};
