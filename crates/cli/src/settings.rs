use std::path::PathBuf;

use ::log::LevelFilter;
use fitplan_domain::ExportFormat;
use fitplan_storage::file_system::{FileStorage, FileStorageError, Key};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "key")]
    pub default_format: ExportFormat,
    /// Directory for exported plans, the `exports` directory inside the data directory if unset.
    pub output_dir: Option<PathBuf>,
    #[serde(with = "key")]
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::Json,
            output_dir: None,
            log_level: LevelFilter::Warn,
        }
    }
}

pub fn read_settings(storage: &FileStorage) -> Result<Settings, FileStorageError> {
    storage.get_or_default(Key::Settings)
}

pub fn write_settings(storage: &FileStorage, settings: &Settings) -> Result<(), FileStorageError> {
    storage.set(Key::Settings, settings)
}

/// Values stored by their string key.
mod key {
    use std::{fmt::Display, str::FromStr};

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<T: Display, S: Serializer>(
        value: &T,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_settings_serde() {
        let settings = Settings {
            default_format: ExportFormat::Csv,
            output_dir: Some(PathBuf::from("/tmp/plans")),
            log_level: LevelFilter::Debug,
        };
        let serialized = json!(settings);
        assert_eq!(
            serialized,
            json!({"default_format": "csv", "output_dir": "/tmp/plans", "log_level": "DEBUG"})
        );
        assert_eq!(
            serde_json::from_value::<Settings>(serialized).unwrap(),
            settings
        );
    }

    #[test]
    fn test_settings_missing_fields() {
        assert_eq!(
            serde_json::from_value::<Settings>(json!({"default_format": "txt"})).unwrap(),
            Settings {
                default_format: ExportFormat::Text,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_settings_unknown_format() {
        assert!(serde_json::from_value::<Settings>(json!({"default_format": "pdf"})).is_err());
    }

    #[test]
    fn test_read_write_settings() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(read_settings(&storage).unwrap(), Settings::default());

        let settings = Settings {
            log_level: LevelFilter::Info,
            ..Settings::default()
        };
        write_settings(&storage, &settings).unwrap();
        assert_eq!(read_settings(&storage).unwrap(), settings);
    }
}
