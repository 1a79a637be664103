use std::{collections::BTreeMap, fs, path::Path};

use fitplan_domain as domain;
use log::debug;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    #[serde(default)]
    equipment: Option<String>,
    difficulty: String,
    #[serde(default)]
    modes: Vec<String>,
    #[serde(default)]
    tips: Vec<String>,
}

/// Parse a catalog that maps muscle keys to lists of exercises.
///
/// Exercises without `modes` are kept, but are not available in any mode.
pub fn load_catalog(
    json: &str,
) -> Result<BTreeMap<domain::Muscle, Vec<domain::ExerciseRecord>>, CatalogError> {
    let entries: BTreeMap<String, Vec<Entry>> = serde_json::from_str(json)?;
    let mut catalog = BTreeMap::new();

    for (key, exercises) in entries {
        let muscle = key
            .parse::<domain::Muscle>()
            .map_err(|_| CatalogError::Muscle(key.clone()))?;
        let records = exercises
            .into_iter()
            .map(|entry| record(muscle, entry))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("loaded {} exercises for {muscle}", records.len());
        catalog.insert(muscle, records);
    }

    Ok(catalog)
}

pub fn load_catalog_file(
    path: &Path,
) -> Result<BTreeMap<domain::Muscle, Vec<domain::ExerciseRecord>>, CatalogError> {
    load_catalog(&fs::read_to_string(path)?)
}

fn record(muscle: domain::Muscle, entry: Entry) -> Result<domain::ExerciseRecord, CatalogError> {
    let equipment = entry
        .equipment
        .map(|value| {
            value
                .parse::<domain::Equipment>()
                .map_err(|_| CatalogError::Equipment {
                    exercise: entry.name.clone(),
                    value,
                })
        })
        .transpose()?;
    let difficulty = entry
        .difficulty
        .parse::<domain::Difficulty>()
        .map_err(|_| CatalogError::Difficulty {
            exercise: entry.name.clone(),
            value: entry.difficulty.clone(),
        })?;
    let modes = entry
        .modes
        .into_iter()
        .map(|value| {
            value
                .parse::<domain::Mode>()
                .map_err(|_| CatalogError::Mode {
                    exercise: entry.name.clone(),
                    value,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(domain::ExerciseRecord {
        name: entry.name,
        muscle,
        equipment,
        difficulty,
        modes,
        tips: entry.tips,
    })
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("unknown muscle \"{0}\"")]
    Muscle(String),
    #[error("unknown equipment \"{value}\" of {exercise}")]
    Equipment { exercise: String, value: String },
    #[error("unknown difficulty \"{value}\" of {exercise}")]
    Difficulty { exercise: String, value: String },
    #[error("unknown mode \"{value}\" of {exercise}")]
    Mode { exercise: String, value: String },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use fitplan_domain::Catalog;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::tests::data::CATALOG_JSON;

    use super::*;

    #[test]
    fn test_load_catalog() {
        let catalog = load_catalog(CATALOG_JSON).unwrap();

        assert_eq!(
            catalog.keys().copied().collect::<Vec<_>>(),
            vec![domain::Muscle::Chest, domain::Muscle::LowerBack]
        );
        assert_eq!(
            catalog.lookup(domain::Muscle::Chest)[0],
            domain::ExerciseRecord {
                name: String::from("Bench Press"),
                muscle: domain::Muscle::Chest,
                equipment: Some(domain::Equipment::Barbell),
                difficulty: domain::Difficulty::Intermediate,
                modes: vec![domain::Mode::Bodybuilding],
                tips: vec![String::from("Lopatky stiahnuté")],
            }
        );
        assert_eq!(catalog.lookup(domain::Muscle::Chest)[1].equipment, None);
        assert!(catalog.lookup(domain::Muscle::Abs).is_empty());
    }

    #[test]
    fn test_load_catalog_missing_modes() {
        let catalog = load_catalog(CATALOG_JSON).unwrap();
        let floor_press = &catalog.lookup(domain::Muscle::Chest)[2];

        assert_eq!(floor_press.equipment, Some(domain::Equipment::Dumbbell));
        assert!(floor_press.modes.is_empty());
        assert_eq!(
            domain::browse(&catalog, domain::Muscle::Chest, domain::Mode::Bodybuilding)
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Bench Press", "Push-up"]
        );
    }

    #[rstest]
    #[case(r#"{"neck": []}"#, "unknown muscle \"neck\"")]
    #[case(
        r#"{"chest": [{"name": "A", "equipment": "rope", "difficulty": "beginner"}]}"#,
        "unknown equipment \"rope\" of A"
    )]
    #[case(
        r#"{"chest": [{"name": "A", "difficulty": "expert"}]}"#,
        "unknown difficulty \"expert\" of A"
    )]
    #[case(
        r#"{"chest": [{"name": "A", "difficulty": "beginner", "modes": ["yoga"]}]}"#,
        "unknown mode \"yoga\" of A"
    )]
    fn test_load_catalog_unknown_keys(#[case] json: &str, #[case] message: &str) {
        assert_eq!(load_catalog(json).unwrap_err().to_string(), message);
    }

    #[test]
    fn test_load_catalog_invalid_json() {
        assert!(matches!(
            load_catalog(r#"{"chest": [{"difficulty": "beginner"}]}"#),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_load_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();

        assert_eq!(
            load_catalog_file(file.path()).unwrap(),
            load_catalog(CATALOG_JSON).unwrap()
        );
        assert!(matches!(
            load_catalog_file(&file.path().with_extension("missing")),
            Err(CatalogError::Io(_))
        ));
    }
}
