use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;
use comfy_table::Table;
use tracing::info;

use curp_ingest::enrich_batch;
use curp_report::{
    applicants_insert_sql, campuses_insert_sql, programs_insert_sql, valid_records_json,
    write_analysis_workbook, write_json, write_valid_curps,
};
use curp_validate::ValidatorOptions;

use crate::cli::{AnalyzeArgs, CatalogArgs, ExportArgs, SourceArgs, SqlArgs};
use crate::pipeline::{
    load_applicants, load_campus_catalog, load_program_catalog, validate_records,
    validator_options,
};
use crate::summary::{apply_table_style, print_batch_summary};

/// Export file names, kept stable for downstream consumers.
const VALID_TXT_NAME: &str = "curps_validas_18.txt";
const VALID_JSON_NAME: &str = "curps_validas_18_datos.json";

fn options_for(source: &SourceArgs) -> ValidatorOptions {
    validator_options(source.reference_date, source.inclusive_sex)
}

fn sibling_path(input: &Path, name: &str) -> PathBuf {
    input
        .parent()
        .map(|parent| parent.join(name))
        .unwrap_or_else(|| PathBuf::from(name))
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let records = load_applicants(&args.source.input, &args.source.sheet)?;
    let analyses = validate_records(&records, options_for(&args.source));
    print_batch_summary(&analyses);

    if args.dry_run {
        return Ok(());
    }
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| sibling_path(&args.source.input, "Analisis_CURP.xlsx"));
    write_analysis_workbook(&output, &analyses)?;
    info!(path = %output.display(), "analysis report written");
    println!("Report: {}", output.display());
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let records = load_applicants(&args.source.input, &args.source.sheet)?;
    let analyses = validate_records(&records, options_for(&args.source));
    print_batch_summary(&analyses);

    let out_dir = args
        .out_dir
        .clone()
        .or_else(|| args.source.input.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;

    let txt_path = out_dir.join(VALID_TXT_NAME);
    write_valid_curps(&txt_path, &analyses)?;
    let json_path = out_dir.join(VALID_JSON_NAME);
    write_json(&json_path, &valid_records_json(&records, &analyses)?)?;

    println!("Valid list: {}", txt_path.display());
    println!("JSON export: {}", json_path.display());
    Ok(())
}

pub fn run_sql(args: &SqlArgs) -> Result<()> {
    let records = load_applicants(&args.source.input, &args.source.sheet)?;
    let analyses = validate_records(&records, options_for(&args.source));
    print_batch_summary(&analyses);

    let programs = load_program_catalog(args.programs.as_deref())?;
    let campuses = load_campus_catalog(args.campuses.as_deref())?;
    let enriched = enrich_batch(records, analyses, &programs, &campuses);

    let sql = applicants_insert_sql(&enriched, Local::now().naive_local());
    std::fs::write(&args.output, sql)
        .with_context(|| format!("write SQL script to {}", args.output.display()))?;
    println!("SQL script: {}", args.output.display());
    Ok(())
}

pub fn run_catalog(args: &CatalogArgs) -> Result<()> {
    if args.programs.is_none() && args.campuses.is_none() {
        bail!("nothing to convert: pass --programs and/or --campuses");
    }
    let generated_at = Local::now().naive_local();

    if let Some(path) = &args.programs {
        let catalog = load_program_catalog(Some(path))?;
        let sql = programs_insert_sql(catalog.iter(), generated_at);
        std::fs::write(&args.programs_output, sql)
            .with_context(|| format!("write SQL script to {}", args.programs_output.display()))?;
        info!(programs = catalog.len(), path = %args.programs_output.display(), "program script written");
        println!("Program script: {}", args.programs_output.display());
    }

    if let Some(path) = &args.campuses {
        let catalog = load_campus_catalog(Some(path))?;
        let sql = campuses_insert_sql(catalog.iter(), generated_at);
        std::fs::write(&args.campuses_output, sql)
            .with_context(|| format!("write SQL script to {}", args.campuses_output.display()))?;
        info!(campuses = catalog.len(), path = %args.campuses_output.display(), "campus script written");
        println!("Campus script: {}", args.campuses_output.display());
    }
    Ok(())
}

pub fn run_entities() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Entity"]);
    apply_table_style(&mut table);
    for (code, name) in curp_model::entity_table() {
        table.add_row(vec![code, name]);
    }
    println!("{table}");
    Ok(())
}
