//! Shared rendering helpers for the report sinks.

use curp_model::{Check, CurpAnalysis};

/// Reason recorded for a failed check, if any.
fn failure_reason(analysis: &CurpAnalysis, check: Check) -> Option<&str> {
    analysis
        .failures
        .iter()
        .find(|failure| failure.check == check)
        .map(|failure| failure.reason.as_str())
}

/// Display text for the formatted birth date column.
///
/// Best-effort dates render as `DD/MM/YYYY`; failures fall back to the
/// recorded reason so the report says *why* the cell is empty.
pub fn date_placeholder(analysis: &CurpAnalysis) -> String {
    if let Some(formatted) = analysis.formatted_birth_date() {
        return formatted;
    }
    failure_reason(analysis, Check::BirthDate)
        .unwrap_or("Fecha inválida")
        .to_string()
}

/// Display text for the readable sex column.
pub fn sex_placeholder(analysis: &CurpAnalysis) -> String {
    if let Some(label) = analysis.sex_label() {
        return label.to_string();
    }
    failure_reason(analysis, Check::Sex)
        .unwrap_or("Sexo faltante")
        .to_string()
}

/// Display text for the readable entity column.
pub fn entity_placeholder(analysis: &CurpAnalysis) -> String {
    if let Some(name) = &analysis.entity_name {
        return name.clone();
    }
    failure_reason(analysis, Check::Entity)
        .unwrap_or("Entidad incompleta o faltante")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use curp_validate::{CurpValidator, ValidatorOptions};

    fn analyze(input: &str) -> CurpAnalysis {
        let options = ValidatorOptions::new(NaiveDate::from_ymd_opt(2025, 7, 10).unwrap());
        CurpValidator::new(options).analyze(input)
    }

    #[test]
    fn valid_record_renders_values() {
        let analysis = analyze("AAAA850101HDFLRS09");
        assert_eq!(date_placeholder(&analysis), "01/01/1985");
        assert_eq!(sex_placeholder(&analysis), "Hombre");
        assert_eq!(entity_placeholder(&analysis), "Ciudad de México");
    }

    #[test]
    fn failures_render_reasons() {
        let analysis = analyze("AAAA851301ZQQLRS09");
        assert!(date_placeholder(&analysis).contains("Mes inválido"));
        assert_eq!(sex_placeholder(&analysis), "Sexo inválido: Z");
        assert_eq!(entity_placeholder(&analysis), "Entidad inválida: QQ");
    }

    #[test]
    fn empty_input_renders_missing_markers() {
        let analysis = analyze("");
        assert_eq!(date_placeholder(&analysis), "Fecha incompleta o faltante");
        assert_eq!(sex_placeholder(&analysis), "Sexo faltante");
        assert_eq!(entity_placeholder(&analysis), "Entidad incompleta o faltante");
    }
}
