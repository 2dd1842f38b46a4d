use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::error;

use crate::domain::error::StoreError;
use crate::domain::post::Post;

/// Storage key of the original browser build, kept as the default file name.
pub const DEFAULT_SLOT: &str = "pb_posts.json";

/// The persistence slot: one value holding the whole serialized sequence.
pub trait PostStorage {
    /// Reads the persisted sequence. `Ok(None)` means the slot has never
    /// been written; unreadable or malformed data is an error, not `None`.
    fn load(&self) -> Result<Option<Vec<Post>>, StoreError>;

    /// Overwrites the slot with the full sequence.
    fn save(&self, posts: &[Post]) -> Result<(), StoreError>;
}

impl<T: PostStorage + ?Sized> PostStorage for &T {
    fn load(&self) -> Result<Option<Vec<Post>>, StoreError> {
        (**self).load()
    }

    fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        (**self).save(posts)
    }
}

/// Production slot: a single JSON file on disk.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PostStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<Post>>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                error!("failed to read {}: {}", self.path.display(), e);
                return Err(StoreError::Storage(format!(
                    "read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };
        let posts = serde_json::from_str(&raw).map_err(|e| {
            error!("malformed post data in {}: {}", self.path.display(), e);
            StoreError::Storage(format!("malformed post data: {}", e))
        })?;
        Ok(Some(posts))
    }

    fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(posts)
            .map_err(|e| StoreError::Storage(format!("serialize posts: {}", e)))?;
        fs::write(&self.path, raw).map_err(|e| {
            error!("failed to write {}: {}", self.path.display(), e);
            StoreError::Storage(format!("write {}: {}", self.path.display(), e))
        })
    }
}

/// Test double keeping the serialized blob in memory.
#[derive(Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: &[Post]) -> Self {
        let storage = Self::new();
        storage
            .save(posts)
            .expect("seeding memory storage cannot fail");
        storage
    }

    /// Pre-fills the slot with an arbitrary blob, valid or not.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: RefCell::new(Some(raw.to_string())),
        }
    }
}

impl PostStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<Post>>, StoreError> {
        match &*self.slot.borrow() {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| StoreError::Storage(format!("malformed post data: {}", e))),
            None => Ok(None),
        }
    }

    fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(posts)
            .map_err(|e| StoreError::Storage(format!("serialize posts: {}", e)))?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_posts;

    #[test]
    fn missing_file_is_an_empty_slot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join(DEFAULT_SLOT));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn file_round_trip_preserves_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join(DEFAULT_SLOT));
        let posts = seed_posts();

        storage.save(&posts).unwrap();
        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, posts);
    }

    #[test]
    fn malformed_file_surfaces_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SLOT);
        fs::write(&path, "{not json").unwrap();

        let storage = JsonFileStorage::new(path);
        assert!(matches!(storage.load(), Err(StoreError::Storage(_))));
    }

    #[test]
    fn unwritable_path_surfaces_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("missing").join(DEFAULT_SLOT));
        assert!(matches!(
            storage.save(&seed_posts()),
            Err(StoreError::Storage(_))
        ));
    }

    #[test]
    fn memory_round_trip_preserves_every_field() {
        let storage = MemoryStorage::new();
        let posts = seed_posts();

        assert!(storage.load().unwrap().is_none());
        storage.save(&posts).unwrap();
        assert_eq!(storage.load().unwrap().unwrap(), posts);
    }
}
