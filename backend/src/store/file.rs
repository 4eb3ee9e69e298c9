//! File-backed store persisting the key-value map as a single JSON document

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;

use super::{KeyValueStore, StoreError};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ConstructionQuotationBuilder";
const APP_NAME: &str = "QuotationBuilder";

const STORE_FILE: &str = "quotations.json";

/// Durable key-value store; the whole map is rewritten on every mutation,
/// which keeps the last-write-wins contract trivially true
pub struct FileStore {
    path: PathBuf,
    // serializes read-modify-write cycles between handlers
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store under the platform data directory, or under an
    /// explicit directory override
    pub fn open(data_dir: Option<&str>) -> Result<Self, StoreError> {
        let dir = match data_dir {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
                .ok_or(StoreError::StorageUnavailable)?
                .data_dir()
                .to_path_buf(),
        };
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(STORE_FILE),
            write_lock: Mutex::new(()),
        })
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
