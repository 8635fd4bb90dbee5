//! Key-value slot stores backing the persistence adapter.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use directories::ProjectDirs;
use thiserror::Error;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "AssetTracker";
const APP_NAME: &str = "AssetTracker";

#[derive(Debug, Error)]
pub enum KvError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A store of independently-addressed string slots.
///
/// Writes replace the whole slot; readers never observe a partial value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError>;
}

/// One file per slot under a local directory.
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Store slots under the platform config directory for this app.
    pub fn open_default() -> Result<Self, KvError> {
        let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .ok_or(KvError::StorageUnavailable)?;
        Ok(Self::new(dirs.config_dir().to_path_buf()))
    }

    /// Store slots under an explicit directory; used by tests and embedders.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}

/// In-memory slots behind a shared handle, for tests and ephemeral
/// embedders. Clones observe the same slots, which lets a test reopen a
/// "restarted" tracker against surviving state. `Rc` rather than `Arc`
/// matches the single-threaded execution model.
#[derive(Clone, Debug, Default)]
pub struct MemoryKvStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Test double that refuses writes to selected slots, standing in for a
/// full or unavailable backing store.
#[cfg(test)]
pub(crate) mod testkv {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use super::{KeyValueStore, KvError, MemoryKvStore};

    #[derive(Clone, Default)]
    pub(crate) struct FailingKv {
        inner: MemoryKvStore,
        denied: Rc<RefCell<HashSet<String>>>,
    }

    impl FailingKv {
        pub(crate) fn deny(&self, slot: &str) {
            self.denied.borrow_mut().insert(slot.to_string());
        }

        pub(crate) fn allow(&self, slot: &str) {
            self.denied.borrow_mut().remove(slot);
        }
    }

    impl KeyValueStore for FailingKv {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
            if self.denied.borrow().contains(key) {
                return Err(KvError::StorageUnavailable);
            }
            self.inner.set(key, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_a_slot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileKvStore::new(dir.path().join("slots"));

        assert_eq!(store.get("assets.json"), None);
        store.set("assets.json", "[]").expect("write slot");
        assert_eq!(store.get("assets.json"), Some("[]".to_string()));
    }

    #[test]
    fn file_store_overwrites_whole_slot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileKvStore::new(dir.path().to_path_buf());

        store.set("counter.txt", "1").expect("write slot");
        store.set("counter.txt", "42").expect("rewrite slot");
        assert_eq!(store.get("counter.txt"), Some("42".to_string()));
    }

    #[test]
    fn memory_store_clones_share_slots() {
        let mut store = MemoryKvStore::default();
        let other = store.clone();

        store.set("counter.txt", "7").expect("write slot");
        assert_eq!(other.get("counter.txt"), Some("7".to_string()));
    }
}
