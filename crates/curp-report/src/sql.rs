//! SQL `INSERT` script generation.
//!
//! String values are single-quoted with embedded quotes doubled; numeric
//! fields are emitted unquoted, or as `NULL` when absent or unparseable.
//! Each script is one statement: a comma-joined tuple list terminated by a
//! single semicolon, preceded by a generated-at comment header.

use chrono::NaiveDateTime;

use curp_model::{Campus, EnrichedApplicant, Program};

/// Double embedded single quotes.
pub fn escape_sql(value: &str) -> String {
    value.replace('\'', "''")
}

fn quoted(value: &str) -> String {
    format!("'{}'", escape_sql(value))
}

fn quoted_or_null(value: Option<&str>) -> String {
    match value {
        Some(value) => quoted(value),
        None => "NULL".to_string(),
    }
}

/// Render raw text as a SQL number, or `NULL` when it does not parse.
pub fn sql_number(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.parse::<f64>().is_ok() {
        trimmed.to_string()
    } else {
        "NULL".to_string()
    }
}

fn id_or_null(id: Option<i64>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "NULL".to_string(),
    }
}

fn script_header(title: &str, total_label: &str, total: usize, generated_at: NaiveDateTime) -> String {
    format!(
        "-- {title}\n-- Automatically generated: {}\n-- Total {total_label}: {total}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    )
}

/// `INSERT` script for the program catalog.
pub fn programs_insert_sql<'a, I>(programs: I, generated_at: NaiveDateTime) -> String
where
    I: IntoIterator<Item = &'a Program>,
{
    let values: Vec<String> = programs
        .into_iter()
        .map(|program| {
            format!(
                "({}, {}, {})",
                program.id,
                quoted(&program.code),
                quoted(&program.name)
            )
        })
        .collect();

    let mut sql = script_header(
        "SQL script to insert careers",
        "careers",
        values.len(),
        generated_at,
    );
    sql.push_str("-- Table: Carreras (CarreraId, ClaveCarrera, NombreCarrera)\n");
    sql.push_str("INSERT INTO Carreras (CarreraId, ClaveCarrera, NombreCarrera) VALUES\n");
    sql.push_str(&values.join(",\n"));
    sql.push_str(";\n\n-- End of script\n");
    sql
}

/// `INSERT` script for the campus catalog.
pub fn campuses_insert_sql<'a, I>(campuses: I, generated_at: NaiveDateTime) -> String
where
    I: IntoIterator<Item = &'a Campus>,
{
    let values: Vec<String> = campuses
        .into_iter()
        .map(|campus| {
            format!(
                "({}, {}, {}, {}, {}, {}, {})",
                campus.id,
                quoted(&campus.cct),
                quoted(&campus.entity),
                quoted(&campus.municipality),
                quoted(&campus.locality),
                quoted(&campus.name),
                quoted(&campus.subsystem)
            )
        })
        .collect();

    let mut sql = script_header(
        "SQL script to insert campuses",
        "campuses",
        values.len(),
        generated_at,
    );
    sql.push_str(
        "-- Table: Planteles (PlantelId, Cct, Entidad, Municipio, Localidad, NombrePlantel, Subsistema)\n",
    );
    sql.push_str(
        "INSERT INTO Planteles (PlantelId, Cct, Entidad, Municipio, Localidad, NombrePlantel, Subsistema) VALUES\n",
    );
    sql.push_str(&values.join(",\n"));
    sql.push_str(";\n\n-- End of script\n");
    sql
}

/// `INSERT` script for enriched applicants (valid records only).
///
/// Missing lookups and unparseable averages become `NULL`; the record
/// itself is never dropped for a failed join.
pub fn applicants_insert_sql(enriched: &[EnrichedApplicant], generated_at: NaiveDateTime) -> String {
    let values: Vec<String> = enriched
        .iter()
        .filter(|item| item.analysis.is_valid())
        .map(|item| {
            let analysis = &item.analysis;
            let sex_code = analysis.sex.map(|sex| sex.code().to_string());
            let birth = analysis
                .birth_date
                .map(|date| date.format("%Y-%m-%d").to_string());
            format!(
                "({}, {}, {}, {}, {}, {}, {})",
                quoted(&analysis.normalized),
                sex_code.as_deref().map_or("NULL".to_string(), quoted),
                quoted_or_null(birth.as_deref()),
                analysis.age.map_or("NULL".to_string(), |age| age.to_string()),
                sql_number(&item.record.average),
                id_or_null(item.program_id),
                id_or_null(item.campus_id)
            )
        })
        .collect();

    let mut sql = script_header(
        "SQL script to insert applicants",
        "applicants",
        values.len(),
        generated_at,
    );
    sql.push_str(
        "-- Table: Aspirantes (Curp, Sexo, FechaNacimiento, Edad, Promedio, CarreraId, PlantelId)\n",
    );
    if values.is_empty() {
        sql.push_str("-- No valid records\n");
        return sql;
    }
    sql.push_str(
        "INSERT INTO Aspirantes (Curp, Sexo, FechaNacimiento, Edad, Promedio, CarreraId, PlantelId) VALUES\n",
    );
    sql.push_str(&values.join(",\n"));
    sql.push_str(";\n\n-- End of script\n");
    sql
}
