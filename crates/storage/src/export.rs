use chrono::NaiveDate;
use fitplan_domain::{self as domain, Artifact, ExportFormat};

use crate::plan::Plan;

pub const CSV_HEADER: [&str; 6] = ["Deň", "Cvik", "Sval", "Série", "Opakovania", "Vybavenie"];

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("invalid UTF-8 in CSV output: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Pretty printed JSON with two spaces of indentation and camel case field names.
pub fn export_json(plan: &domain::GeneratedPlan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Plan::from(plan))
}

/// One row per planned exercise. Fields are quoted only where needed.
pub fn export_csv(plan: &domain::GeneratedPlan) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new().from_writer(vec![]);
    writer.write_record(CSV_HEADER)?;
    for day in &plan.schedule {
        for exercise in &day.exercises {
            let equipment = exercise
                .equipment
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            writer.write_record([
                day.name.as_str(),
                exercise.name.as_str(),
                exercise.muscle.as_ref(),
                exercise.sets.to_string().as_str(),
                exercise.reps.as_str(),
                equipment.as_str(),
            ])?;
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn export(
    plan: &domain::GeneratedPlan,
    format: ExportFormat,
    date: NaiveDate,
) -> Result<Artifact, ExportError> {
    let content = match format {
        ExportFormat::Json => export_json(plan)?,
        ExportFormat::Csv => export_csv(plan)?,
        ExportFormat::Text => domain::export_text(plan),
    };
    Ok(Artifact::new(plan, format, date, content))
}
