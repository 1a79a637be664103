use chrono::NaiveDate;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{GeneratedPlan, WriteError};

pub trait ArtifactSink {
    fn write_artifact(&self, artifact: &Artifact) -> Result<(), WriteError>;
}

#[derive(
    AsRefStr, Display, EnumIter, EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    #[strum(to_string = "txt", serialize = "text")]
    Text,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "txt",
        }
    }

    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Text => "text/plain",
        }
    }
}

/// Serialized plan ready to be handed to an [`ArtifactSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl Artifact {
    #[must_use]
    pub fn new(
        plan: &GeneratedPlan,
        format: ExportFormat,
        date: NaiveDate,
        content: String,
    ) -> Self {
        Self {
            filename: suggested_filename(&plan.name, format, date),
            mime_type: format.mime_type(),
            content,
        }
    }
}

/// `{name}_{date}.{extension}` with whitespace in the name replaced by underscores.
///
/// Path separators are replaced by hyphens, as split names like `Push/Pull/Legs` are part of plan
/// names.
#[must_use]
pub fn suggested_filename(name: &str, format: ExportFormat, date: NaiveDate) -> String {
    let name = name
        .chars()
        .map(|c| match c {
            c if c.is_whitespace() => '_',
            '/' | '\\' => '-',
            c => c,
        })
        .collect::<String>();
    format!(
        "{name}_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

#[must_use]
pub fn export_text(plan: &GeneratedPlan) -> String {
    let mut lines = vec![
        plan.name.clone(),
        "=".repeat(plan.name.chars().count()),
        format!(
            "Štýl: {} | Frekvencia: {} | Split: {}",
            plan.style_name, plan.frequency_name, plan.split_type
        ),
        format!(
            "Cviky: {} | Série: {} | Odhadovaný čas: {} min",
            plan.stats.total_exercises, plan.stats.total_sets, plan.stats.estimated_duration
        ),
    ];

    for day in &plan.schedule {
        lines.push(String::new());
        lines.push(format!("--- {} ---", day.name));
        if day.exercises.is_empty() {
            lines.push(String::from("(žiadne cviky)"));
        }
        for (i, exercise) in day.exercises.iter().enumerate() {
            let annotation = match exercise.equipment {
                Some(equipment) => format!("{}, {}", exercise.muscle.name(), equipment.name()),
                None => exercise.muscle.name().to_string(),
            };
            lines.push(format!(
                "{}. {}: {}x {} ({annotation})",
                i + 1,
                exercise.name,
                exercise.sets,
                exercise.reps
            ));
            lines.push(format!("   Pauza: {}", exercise.rest));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{DayPlan, Difficulty, Equipment, Muscle, PlanStats, PlannedExercise};

    static PLAN: std::sync::LazyLock<GeneratedPlan> = std::sync::LazyLock::new(|| {
        let schedule = vec![
            DayPlan {
                name: String::from("Push"),
                exercises: vec![
                    PlannedExercise {
                        name: String::from("Bench Press"),
                        muscle: Muscle::Chest,
                        equipment: Some(Equipment::Barbell),
                        difficulty: Difficulty::Intermediate,
                        sets: 4,
                        reps: String::from("8-12"),
                        rest: String::from("60-90s"),
                        tips: vec![String::from("A")],
                    },
                    PlannedExercise {
                        name: String::from("Arm Circles"),
                        muscle: Muscle::Shoulders,
                        equipment: None,
                        difficulty: Difficulty::Beginner,
                        sets: 4,
                        reps: String::from("8-12"),
                        rest: String::from("60-90s"),
                        tips: vec![],
                    },
                ],
            },
            DayPlan {
                name: String::from("Legs, heavy"),
                exercises: vec![PlannedExercise {
                    name: String::from("Squat \"low bar\""),
                    muscle: Muscle::Quads,
                    equipment: Some(Equipment::PullUpBar),
                    difficulty: Difficulty::Advanced,
                    sets: 3,
                    reps: String::from("3-6"),
                    rest: String::from("120-180s"),
                    tips: vec![],
                }],
            },
        ];
        GeneratedPlan {
            name: String::from("Kulturistika Push/Pull/Legs"),
            style_name: String::from("Kulturistika"),
            frequency_name: String::from("6-7x týždenne"),
            split_type: String::from("Push/Pull/Legs"),
            stats: PlanStats::from_schedule(&schedule),
            schedule,
            weekly_rotation: vec![],
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        }
    });

    #[rstest]
    #[case("Môj plán", ExportFormat::Json, "Môj_plán_2024-03-01.json")]
    #[case(
        "Kulturistika Push/Pull/Legs",
        ExportFormat::Csv,
        "Kulturistika_Push-Pull-Legs_2024-03-01.csv"
    )]
    #[case(" A  B ", ExportFormat::Text, "_A__B__2024-03-01.txt")]
    fn test_suggested_filename(
        #[case] name: &str,
        #[case] format: ExportFormat,
        #[case] expected: &str,
    ) {
        assert_eq!(
            suggested_filename(name, format, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            expected
        );
    }

    #[rstest]
    #[case("json", ExportFormat::Json)]
    #[case("CSV", ExportFormat::Csv)]
    #[case("text", ExportFormat::Text)]
    #[case("txt", ExportFormat::Text)]
    fn test_export_format_from_str(#[case] key: &str, #[case] expected: ExportFormat) {
        assert_eq!(key.parse::<ExportFormat>(), Ok(expected));
    }

    #[test]
    fn test_artifact_new() {
        let artifact = Artifact::new(
            &PLAN,
            ExportFormat::Csv,
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            String::from("A"),
        );
        assert_eq!(
            artifact,
            Artifact {
                filename: String::from("Kulturistika_Push-Pull-Legs_2024-03-02.csv"),
                mime_type: "text/csv",
                content: String::from("A"),
            }
        );
    }

    #[test]
    fn test_export_text() {
        assert_eq!(
            export_text(&PLAN),
            "Kulturistika Push/Pull/Legs\n\
             ===========================\n\
             Štýl: Kulturistika | Frekvencia: 6-7x týždenne | Split: Push/Pull/Legs\n\
             Cviky: 3 | Série: 11 | Odhadovaný čas: 28 min\n\
             \n\
             --- Push ---\n\
             1. Bench Press: 4x 8-12 (Hrudník, Veľká činka)\n   \
             Pauza: 60-90s\n\
             2. Arm Circles: 4x 8-12 (Ramená)\n   \
             Pauza: 60-90s\n\
             \n\
             --- Legs, heavy ---\n\
             1. Squat \"low bar\": 3x 3-6 (Predné stehná, Hrazda)\n   \
             Pauza: 120-180s\n"
        );
    }

    #[test]
    fn test_export_text_empty_day() {
        let plan = GeneratedPlan {
            schedule: vec![DayPlan {
                name: String::from("Rest"),
                exercises: vec![],
            }],
            ..PLAN.clone()
        };
        assert!(export_text(&plan).ends_with("--- Rest ---\n(žiadne cviky)\n"));
    }
}
