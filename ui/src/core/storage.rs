//! Local persistence for user preferences.
//!
//! The browser build keeps preferences in `window.localStorage`; native builds
//! keep them in a small JSON file under the platform config directory. Both
//! are best-effort: callers log and carry on when they fail.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("stored preferences are corrupt: {0}")]
    Corrupt(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// String key/value persistence that survives a reload.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store. Clones share the same map, the way every page of an
/// origin shares one `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every operation (storage switched off or full).
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{PreferenceStore, StorageError};

    /// `window.localStorage`, looked up on every access.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage() -> Result<web_sys::Storage, StorageError> {
            web_sys::window()
                .ok_or(StorageError::Unavailable)?
                .local_storage()
                .map_err(|err| StorageError::Backend(format!("{err:?}")))?
                .ok_or(StorageError::Unavailable)
        }
    }

    impl PreferenceStore for LocalStorage {
        fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
            Self::storage()?
                .get_item(key)
                .map_err(|err| StorageError::Backend(format!("{err:?}")))
        }

        fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Backend(format!("{err:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;

    use super::{PreferenceStore, StorageError};

    const FILE_NAME: &str = "preferences.json";

    /// JSON object of string preferences stored in a single file.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `preferences.json` in the platform config directory, if one exists.
        pub fn in_config_dir() -> Option<Self> {
            ProjectDirs::from("in", "Kisan Bhasha Bandhu", "kisan-bhasha-bandhu")
                .map(|dirs| Self::at(dirs.config_dir().join(FILE_NAME)))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn staging_path(&self) -> PathBuf {
            let mut name = self.path.file_name().unwrap_or_default().to_os_string();
            name.push(".tmp");
            self.path.with_file_name(name)
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
            let raw = match fs::read_to_string(&self.path) {
                Ok(raw) => raw,
                Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
                Err(err) => return Err(err.into()),
            };
            serde_json::from_str(&raw).map_err(|err| StorageError::Corrupt(err.to_string()))
        }
    }

    impl PreferenceStore for FileStore {
        fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.read_all()?.remove(key))
        }

        fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            // A corrupt file is replaced; any other read failure keeps it untouched.
            let mut values = match self.read_all() {
                Ok(values) => values,
                Err(StorageError::Corrupt(reason)) => {
                    tracing::warn!(path = %self.path.display(), %reason, "replacing corrupt preferences");
                    BTreeMap::new()
                }
                Err(err) => return Err(err),
            };
            values.insert(key.to_string(), value.to_string());

            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(&values)
                .map_err(|err| StorageError::Backend(err.to_string()))?;

            // Write beside the target and rename so a failed write never truncates it.
            let staging = self.staging_path();
            fs::write(&staging, json)?;
            fs::rename(&staging, &self.path)?;
            Ok(())
        }
    }
}

/// The store the running platform persists preferences to.
pub fn default_store() -> Box<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(LocalStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::in_config_dir() {
            Some(store) => {
                tracing::debug!(path = %store.path().display(), "using file preference store");
                Box::new(store)
            }
            None => {
                tracing::warn!("no config directory; preferences will not survive a restart");
                Box::new(MemoryStore::new())
            }
        }
    }
}
