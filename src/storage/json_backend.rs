use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::submission::SubmittedApplication;
use crate::catalog::Catalog;
use crate::errors::AdoptionError;

use super::paths;

const TMP_SUFFIX: &str = "tmp";

/// File-system backend storing catalog data and submitted applications as
/// JSON documents.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    applications_dir: PathBuf,
}

impl JsonStorage {
    pub fn new_default() -> Result<Self, AdoptionError> {
        Self::with_applications_dir(paths::applications_dir())
    }

    pub fn with_applications_dir(dir: PathBuf) -> Result<Self, AdoptionError> {
        fs::create_dir_all(&dir)?;
        Ok(Self {
            applications_dir: dir,
        })
    }

    /// Loads a catalog snapshot from disk.
    pub fn load_catalog(path: &Path) -> Result<Catalog, AdoptionError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Archives a submitted application atomically by staging to a temporary
    /// file, returning the final path.
    pub fn archive_application(
        &self,
        application: &SubmittedApplication,
    ) -> Result<PathBuf, AdoptionError> {
        let path = self
            .applications_dir
            .join(format!("{}.json", application.id));
        let json = serde_json::to_string_pretty(application)?;
        let tmp = path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(path)
    }

    /// Loads an archived application by id.
    pub fn load_application(&self, id: &str) -> Result<SubmittedApplication, AdoptionError> {
        let path = self.applications_dir.join(format!("{id}.json"));
        if !path.exists() {
            return Err(AdoptionError::InvalidRef(format!(
                "application `{id}` not found"
            )));
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Ids of every archived application, sorted.
    pub fn list_applications(&self) -> Result<Vec<String>, AdoptionError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.applications_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationDraft;

    #[test]
    fn archive_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::with_applications_dir(dir.path().to_path_buf()).unwrap();

        let application = SubmittedApplication::new(ApplicationDraft::new(), Some("p-001".into()));
        let path = storage.archive_application(&application).unwrap();
        assert!(path.exists());

        let loaded = storage
            .load_application(&application.id.to_string())
            .unwrap();
        assert_eq!(loaded, application);
        assert_eq!(
            storage.list_applications().unwrap(),
            vec![application.id.to_string()]
        );
    }

    #[test]
    fn missing_application_is_an_invalid_ref() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::with_applications_dir(dir.path().to_path_buf()).unwrap();
        let err = storage.load_application("nope").unwrap_err();
        assert!(matches!(err, AdoptionError::InvalidRef(_)));
    }

    #[test]
    fn catalog_loads_from_a_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{
                "puppies": [{
                    "id": "p-001",
                    "name": "Biscuit",
                    "breed": "Golden Retriever",
                    "age": "10 weeks",
                    "gender": "female",
                    "size": "large",
                    "description": "",
                    "characteristics": [],
                    "imageUrl": "",
                    "status": "available"
                }],
                "successStories": [],
                "adoptionSteps": []
            }"#,
        )
        .unwrap();

        let catalog = JsonStorage::load_catalog(&path).unwrap();
        assert_eq!(catalog.puppies.len(), 1);
        assert!(catalog.puppy("p-001").is_some());
    }
}
