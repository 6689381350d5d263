//! Secret map and persistence backends
//!
//! The persisted form is a JSON array of `[type, base64(key), base64(value)]`
//! records, in enumeration order.

use data_encoding::BASE64;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Default file used by [`JsonFileSecretStore`]
pub const DEFAULT_SECRETS_FILE: &str = "keys.json";

/// Errors from loading or saving secrets
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed secrets file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base64 in secrets file: {0}")]
    Encoding(#[from] data_encoding::DecodeError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Lookup key of a secret: the stack's security type tag plus its key bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretKey {
    pub sec_type: u8,
    pub key: Vec<u8>,
}

impl SecretKey {
    pub fn new(sec_type: u8, key: impl Into<Vec<u8>>) -> Self {
        Self {
            sec_type,
            key: key.into(),
        }
    }
}

/// Ordered secret map.
///
/// Enumeration order is insertion order; overwriting a key keeps its place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    entries: Vec<(SecretKey, Vec<u8>)>,
}

/// One persisted record: `[type, base64(key), base64(value)]`
#[derive(Debug, Serialize, Deserialize)]
struct SecretRecord(u8, String, String);

impl Secrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-key lookup
    pub fn get(&self, sec_type: u8, key: &[u8]) -> Option<&[u8]> {
        self.position(sec_type, key)
            .map(|i| self.entries[i].1.as_slice())
    }

    /// The `index`-th (0-based) secret of `sec_type`, in enumeration order
    pub fn nth_of_type(&self, sec_type: u8, index: usize) -> Option<&[u8]> {
        self.entries
            .iter()
            .filter(|(k, _)| k.sec_type == sec_type)
            .nth(index)
            .map(|(_, v)| v.as_slice())
    }

    /// Insert or overwrite a secret, returning the previous value
    pub fn insert(&mut self, sec_type: u8, key: &[u8], value: &[u8]) -> Option<Vec<u8>> {
        match self.position(sec_type, key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value.to_vec())),
            None => {
                self.entries
                    .push((SecretKey::new(sec_type, key), value.to_vec()));
                None
            }
        }
    }

    /// Remove a secret, returning its value if it existed
    pub fn remove(&mut self, sec_type: u8, key: &[u8]) -> Option<Vec<u8>> {
        self.position(sec_type, key)
            .map(|i| self.entries.remove(i).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SecretKey, &[u8])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Encode as the persisted JSON representation
    pub fn to_json(&self) -> StoreResult<String> {
        let records: Vec<SecretRecord> = self
            .entries
            .iter()
            .map(|(k, v)| SecretRecord(k.sec_type, BASE64.encode(&k.key), BASE64.encode(v)))
            .collect();
        Ok(serde_json::to_string(&records)?)
    }

    /// Decode the persisted JSON representation
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let records: Vec<SecretRecord> = serde_json::from_str(json)?;
        let mut secrets = Secrets::new();
        for SecretRecord(sec_type, key, value) in records {
            let key = BASE64.decode(key.as_bytes())?;
            let value = BASE64.decode(value.as_bytes())?;
            secrets.insert(sec_type, &key, &value);
        }
        Ok(secrets)
    }

    fn position(&self, sec_type: u8, key: &[u8]) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.sec_type == sec_type && k.key == key)
    }
}

/// Durable backing for bonding secrets.
///
/// Both operations are best-effort: the device treats a failed load as an
/// empty store and keeps its in-memory secrets when a save fails.
///
/// `save` runs synchronously inside event dispatch after every secret
/// change, so implementations must return promptly. A store on slow media
/// should queue the write and report success.
pub trait SecretStore {
    /// Load all persisted secrets
    fn load(&mut self) -> StoreResult<Secrets>;

    /// Persist the full secret map
    fn save(&mut self, secrets: &Secrets) -> StoreResult<()>;
}

/// Secret store backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSecretStore {
    path: PathBuf,
}

impl JsonFileSecretStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileSecretStore {
    fn default() -> Self {
        Self::new(DEFAULT_SECRETS_FILE)
    }
}

impl SecretStore for JsonFileSecretStore {
    fn load(&mut self) -> StoreResult<Secrets> {
        let json = fs::read_to_string(&self.path)?;
        Secrets::from_json(&json)
    }

    fn save(&mut self, secrets: &Secrets) -> StoreResult<()> {
        fs::write(&self.path, secrets.to_json()?)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    saved: Option<Secrets>,
    saves: usize,
    fail_saves: bool,
}

/// In-memory implementation of [`SecretStore`].
///
/// Clones share the same backing state, so a caller can keep a handle to
/// inspect what the device persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySecretStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `secrets`
    pub fn with_secrets(secrets: Secrets) -> Self {
        let store = Self::default();
        store.lock().saved = Some(secrets);
        store
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.lock().fail_saves = fail;
    }

    /// Last successfully saved map
    pub fn saved(&self) -> Option<Secrets> {
        self.lock().saved.clone()
    }

    /// Number of save attempts, failed ones included
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SecretStore for MemorySecretStore {
    fn load(&mut self) -> StoreResult<Secrets> {
        self.lock()
            .saved
            .clone()
            .ok_or_else(|| StoreError::Unavailable("nothing saved yet".into()))
    }

    fn save(&mut self, secrets: &Secrets) -> StoreResult<()> {
        let mut state = self.lock();
        state.saves += 1;
        if state.fail_saves {
            return Err(StoreError::Unavailable("saves disabled".into()));
        }
        state.saved = Some(secrets.clone());
        Ok(())
    }
}
