//! Session persistence
//!
//! The session lives in a flat key/value store (two keys, see
//! [`ROLE_KEY`] and [`USERNAME_KEY`]). Backends only implement
//! [`KeyValueStore`]; every key/value store is a [`SessionStore`] through
//! the blanket impl below.
//!
//! ```text
//! DashboardController ──▶ SessionStore (get / set / set_raw / clear)
//!                              │
//!                              ▼
//!                        KeyValueStore
//!               ┌──────────────┼──────────────┐
//!          MemoryStore     FileStore     localStorage (UI crate)
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::error::{SessionError, SessionResult};
use super::types::{Role, SessionRecord, DEFAULT_DISPLAY_USERNAME, ROLE_KEY, USERNAME_KEY};

/// Minimal string key/value storage, shaped like the browser `Storage` API
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> SessionResult<()>;
    fn remove_item(&mut self, key: &str) -> SessionResult<()>;
}

/// Read/write access to the persisted session record
pub trait SessionStore {
    /// Current record, `None` when neither key is stored
    fn get(&self) -> SessionResult<Option<SessionRecord>>;

    /// Overwrite both keys
    fn set(&mut self, record: &SessionRecord) -> SessionResult<()> {
        self.set_raw(record.role.as_str(), &record.username)
    }

    /// Overwrite both keys with the role text exactly as entered
    fn set_raw(&mut self, role: &str, username: &str) -> SessionResult<()>;

    /// Remove both keys
    fn clear(&mut self) -> SessionResult<()>;
}

impl<T: KeyValueStore> SessionStore for T {
    fn get(&self) -> SessionResult<Option<SessionRecord>> {
        let role = self.get_item(ROLE_KEY)?;
        let username = self.get_item(USERNAME_KEY)?;

        if role.is_none() && username.is_none() {
            return Ok(None);
        }

        // Either key alone is a valid, partially-defaulted session.
        let role = role.map(|raw| Role::parse(&raw)).unwrap_or_default();
        let username = username
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_DISPLAY_USERNAME.to_string());

        Ok(Some(SessionRecord { role, username }))
    }

    fn set_raw(&mut self, role: &str, username: &str) -> SessionResult<()> {
        self.set_item(ROLE_KEY, role)?;
        self.set_item(USERNAME_KEY, username)
    }

    fn clear(&mut self) -> SessionResult<()> {
        self.remove_item(ROLE_KEY)?;
        self.remove_item(USERNAME_KEY)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> SessionResult<()> {
        (**self).remove_item(key)
    }
}

/// Process-local store used by tests and the demo walkthrough
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> SessionResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> SessionResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// JSON object on disk, one entry per key
///
/// The file is re-read on every access so separate CLI invocations see
/// each other's writes. A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> SessionResult<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| SessionError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> SessionResult<()> {
        if items.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            };
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Readers never observe a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(items)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> SessionResult<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        tracing::trace!(path = ?self.path, key, "session key written");
        self.write_all(&items)
    }

    fn remove_item(&mut self, key: &str) -> SessionResult<()> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            tracing::trace!(path = ?self.path, key, "session key removed");
            self.write_all(&items)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get().unwrap(), None);

        store.set(&SessionRecord::new("staff", "alice")).unwrap();
        assert_eq!(store.get_item(ROLE_KEY).unwrap().as_deref(), Some("staff"));
        assert_eq!(store.get_item(USERNAME_KEY).unwrap().as_deref(), Some("alice"));

        let record = store.get().unwrap().unwrap();
        assert_eq!(record.role, Role::Staff);
        assert_eq!(record.username, "alice");
    }

    #[test]
    fn test_set_raw_keeps_empty_role() {
        let mut store = MemoryStore::new();
        store.set_raw("", "alice").unwrap();
        assert_eq!(store.get_item(ROLE_KEY).unwrap().as_deref(), Some(""));

        let record = store.get().unwrap().unwrap();
        assert_eq!(record.role, Role::Guest);
        assert_eq!(record.username, "alice");
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let mut store = MemoryStore::new();
        store.set(&SessionRecord::new("admin", "root")).unwrap();
        store.clear().unwrap();

        assert!(store.is_empty());
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_partial_session_defaults() {
        let mut store = MemoryStore::new();
        store.set_item(ROLE_KEY, "cashier").unwrap();
        let record = store.get().unwrap().unwrap();
        assert_eq!(record.role, Role::Cashier);
        assert_eq!(record.username, "User");

        let mut store = MemoryStore::new();
        store.set_item(USERNAME_KEY, "bob").unwrap();
        let record = store.get().unwrap().unwrap();
        assert_eq!(record.role, Role::Guest);
        assert_eq!(record.username, "bob");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let mut store = MemoryStore::new();
        store.set_item(ROLE_KEY, "").unwrap();
        store.set_item(USERNAME_KEY, "").unwrap();

        let record = store.get().unwrap().unwrap();
        assert_eq!(record, SessionRecord::anonymous());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut store = FileStore::new(&path);
        store.set(&SessionRecord::new("cashier", "carol")).unwrap();
        assert!(path.exists());

        let reopened = FileStore::new(&path);
        let record = reopened.get().unwrap().unwrap();
        assert_eq!(record.role, Role::Cashier);
        assert_eq!(record.username, "carol");

        let raw: BTreeMap<String, String> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.get(ROLE_KEY).map(String::as_str), Some("cashier"));
        assert_eq!(raw.get(USERNAME_KEY).map(String::as_str), Some("carol"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_file_store_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = FileStore::new(&path);
        store.set(&SessionRecord::new("admin", "root")).unwrap();
        store.clear().unwrap();

        assert!(!path.exists());
        assert_eq!(store.get().unwrap(), None);

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get(), Err(SessionError::Corrupt { .. })));
    }
}
