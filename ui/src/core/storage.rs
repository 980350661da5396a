//! Small key/value preference store.
//!
//! Web builds use `window.localStorage`. Native builds keep a JSON object in
//! the platform config directory (`preferences.json`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage failed: {0}")]
    Backend(String),
    #[cfg(not(target_arch = "wasm32"))]
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("preference file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub fn read_preference(key: &str) -> Result<Option<String>, StorageError> {
    #[cfg(target_arch = "wasm32")]
    {
        web::read(key)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        PreferenceFile::default_location()?.read(key)
    }
}

pub fn write_preference(key: &str, value: &str) -> Result<(), StorageError> {
    #[cfg(target_arch = "wasm32")]
    {
        web::write(key, value)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        PreferenceFile::default_location()?.write(key, value)
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::StorageError;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }

    pub(super) fn read(key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    pub(super) fn write(key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::PreferenceFile;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::StorageError;

    /// JSON object of string preferences on disk.
    #[derive(Debug, Clone)]
    pub struct PreferenceFile {
        path: PathBuf,
    }

    impl PreferenceFile {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn default_location() -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("ai", "FarmSmart", "farmsmart")
                .ok_or(StorageError::Unavailable)?;
            Ok(Self::new(dirs.config_dir().join("preferences.json")))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) => Ok(serde_json::from_str(&raw)?),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(err) => Err(err.into()),
            }
        }

        pub fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.load()?.remove(key))
        }

        pub fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            // Corrupt files are overwritten.
            let mut entries = self.load().unwrap_or_default();
            entries.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
            Ok(())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn scratch_file() -> PreferenceFile {
        let dir = std::env::temp_dir().join(format!("farmsmart-prefs-{}", uuid::Uuid::new_v4()));
        PreferenceFile::new(dir.join("preferences.json"))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let prefs = scratch_file();
        assert!(prefs.read("farmsmart.locale").unwrap().is_none());
    }

    #[test]
    fn writes_are_read_back() {
        let prefs = scratch_file();
        prefs.write("farmsmart.locale", "hi").unwrap();
        prefs.write("other", "value").unwrap();
        assert_eq!(prefs.read("farmsmart.locale").unwrap().as_deref(), Some("hi"));
        assert_eq!(prefs.read("other").unwrap().as_deref(), Some("value"));
        let _ = std::fs::remove_dir_all(prefs.path().parent().unwrap());
    }

    #[test]
    fn corrupt_file_is_reported_then_replaced() {
        let prefs = scratch_file();
        std::fs::create_dir_all(prefs.path().parent().unwrap()).unwrap();
        std::fs::write(prefs.path(), "not json").unwrap();

        assert!(matches!(
            prefs.read("farmsmart.locale"),
            Err(StorageError::Corrupt(_))
        ));

        prefs.write("farmsmart.locale", "en").unwrap();
        assert_eq!(prefs.read("farmsmart.locale").unwrap().as_deref(), Some("en"));
        let _ = std::fs::remove_dir_all(prefs.path().parent().unwrap());
    }
}
