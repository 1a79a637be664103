use std::{
    fs, io,
    path::{Path, PathBuf},
};

use fitplan_domain as domain;
use log::{debug, error, info};
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

use crate::plan::SavedPlan;

/// Key-value store keeping one JSON document per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
    export_dir: PathBuf,
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Key {
    Plans,
    Settings,
    Log,
}

impl FileStorage {
    /// Exported artifacts are written to the `exports` subdirectory unless configured otherwise.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            export_dir: root.join("exports"),
            root,
        }
    }

    #[must_use]
    pub fn with_export_dir(self, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
            ..self
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn export_path(&self, artifact: &domain::Artifact) -> PathBuf {
        self.export_dir.join(&artifact.filename)
    }

    fn path(&self, key: Key) -> PathBuf {
        self.root.join(format!("{}.json", key.as_ref()))
    }

    pub fn get<T: DeserializeOwned>(&self, key: Key) -> Result<T, FileStorageError> {
        let content = match fs::read_to_string(self.path(key)) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(FileStorageError::KeyNotFound(key.as_ref().to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Like [`FileStorage::get`], but a missing key yields the default value.
    pub fn get_or_default<T: DeserializeOwned + Default>(
        &self,
        key: Key,
    ) -> Result<T, FileStorageError> {
        match self.get(key) {
            Ok(value) => Ok(value),
            Err(FileStorageError::KeyNotFound(_)) => Ok(T::default()),
            Err(err) => Err(err),
        }
    }

    /// The value is written to a temporary file first, so a failed write never leaves a truncated
    /// document behind.
    pub fn set<T: Serialize + ?Sized>(&self, key: Key, value: &T) -> Result<(), FileStorageError> {
        fs::create_dir_all(&self.root)?;
        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(value)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    pub fn remove(&self, key: Key) -> Result<(), FileStorageError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(FileStorageError::KeyNotFound(key.as_ref().to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn read_saved_plans(&self) -> Result<Vec<SavedPlan>, domain::StorageError> {
        Ok(self.get_or_default(Key::Plans)?)
    }

    fn write_saved_plans(&self, plans: &[SavedPlan]) -> Result<(), domain::StorageError> {
        self.set(Key::Plans, plans).map_err(|err| {
            error!("failed to write plans: {err}");
            domain::StorageError::from(err)
        })
    }
}

impl domain::PlanRepository for FileStorage {
    fn read_plans(&self) -> Result<Vec<domain::SavedPlan>, domain::ReadError> {
        Ok(self
            .read_saved_plans()?
            .into_iter()
            .map(domain::SavedPlan::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(domain::StorageError::from)?)
    }

    fn read_plan(&self, id: domain::PlanID) -> Result<domain::SavedPlan, domain::ReadError> {
        let plan = self
            .read_saved_plans()?
            .into_iter()
            .find(|p| p.id == *id)
            .ok_or(domain::ReadError::NotFound)?;
        Ok(domain::SavedPlan::try_from(plan).map_err(domain::StorageError::from)?)
    }

    fn create_plan(
        &self,
        plan: domain::GeneratedPlan,
    ) -> Result<domain::SavedPlan, domain::CreateError> {
        let mut plans = self.read_saved_plans()?;
        let saved_plan = domain::SavedPlan {
            id: domain::PlanID::new(),
            plan,
        };
        if plans.iter().any(|p| p.id == *saved_plan.id) {
            return Err(domain::CreateError::Conflict);
        }
        plans.push(SavedPlan::from(&saved_plan));
        self.write_saved_plans(&plans)?;
        debug!("created plan {}", saved_plan.id);
        Ok(saved_plan)
    }

    fn delete_plan(&self, id: domain::PlanID) -> Result<domain::PlanID, domain::DeleteError> {
        let mut plans = self.read_saved_plans()?;
        let Some(index) = plans.iter().position(|p| p.id == *id) else {
            return Err(domain::DeleteError::NotFound);
        };
        plans.remove(index);
        self.write_saved_plans(&plans)?;
        debug!("deleted plan {id}");
        Ok(id)
    }
}

impl domain::ArtifactSink for FileStorage {
    fn write_artifact(&self, artifact: &domain::Artifact) -> Result<(), domain::WriteError> {
        let path = self.export_path(artifact);
        fs::create_dir_all(&self.export_dir)
            .and_then(|()| fs::write(&path, &artifact.content))
            .map_err(|err| {
                error!("failed to write {}: {err}", path.display());
                domain::StorageError::from(FileStorageError::from(err))
            })?;
        info!("exported {} ({})", path.display(), artifact.mime_type);
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum FileStorageError {
    #[error("key not found: {0}")]
    KeyNotFound(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<FileStorageError> for domain::StorageError {
    fn from(value: FileStorageError) -> Self {
        match value {
            FileStorageError::KeyNotFound(_) | FileStorageError::Io(_) => {
                domain::StorageError::Unavailable(value.to_string())
            }
            FileStorageError::Json(_) => domain::StorageError::Corrupt(value.to_string()),
        }
    }
}
