//! Demo audio blob storage
//!
//! Blobs are immutable once written: a key is generated exactly once and
//! never overwritten. Keys have the shape `<owner-id>/<timestamp>.<ext>`
//! and double as the public URL path under `/media/`.

use chrono::Utc;
use std::path::{Path, PathBuf};
use trackflow_common::{Error, Result};
use uuid::Uuid;

/// Accepted upload extensions
pub const ALLOWED_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "m4a", "ogg"];

/// Audio payload store
pub trait AudioStore: Send + Sync {
    /// Store a payload under a freshly generated key and return the key
    fn store(&self, owner_id: Uuid, ext: &str, bytes: &[u8]) -> Result<String>;

    /// Whether a payload exists under the given key
    fn exists(&self, key: &str) -> bool;

    /// Public read URL for a stored key
    fn public_url(&self, key: &str) -> String;
}

/// Filesystem-backed store rooted under the media directory
pub struct FsAudioStore {
    media_root: PathBuf,
}

impl FsAudioStore {
    pub fn new(media_root: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&media_root)
            .map_err(|e| Error::Storage(format!("Failed to create media directory: {}", e)))?;
        Ok(Self { media_root })
    }

    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    /// Generate the storage key for an upload
    fn make_key(owner_id: Uuid, timestamp_ms: i64, ext: &str) -> String {
        format!("{}/{}.{}", owner_id, timestamp_ms, ext)
    }

    /// Write bytes under a key, refusing to replace an existing blob
    fn write_new(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.resolve(key)?;
        if path.exists() {
            return Err(Error::Storage(format!(
                "Refusing to overwrite existing audio key: {}",
                key
            )));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("Failed to create owner directory: {}", e)))?;
        }
        std::fs::write(&path, bytes)
            .map_err(|e| Error::Storage(format!("Failed to write audio payload: {}", e)))?;
        Ok(())
    }

    /// Map a key to a path inside the media root, rejecting traversal
    fn resolve(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.starts_with('/')
            || key.split('/').any(|part| part.is_empty() || part == "." || part == "..")
        {
            return Err(Error::Storage(format!("Invalid audio key: {}", key)));
        }
        Ok(self.media_root.join(key))
    }
}

impl AudioStore for FsAudioStore {
    fn store(&self, owner_id: Uuid, ext: &str, bytes: &[u8]) -> Result<String> {
        let key = Self::make_key(owner_id, Utc::now().timestamp_millis(), ext);
        self.write_new(&key, bytes)?;
        Ok(key)
    }

    fn exists(&self, key: &str) -> bool {
        self.resolve(key).map(|p| p.is_file()).unwrap_or(false)
    }

    fn public_url(&self, key: &str) -> String {
        format!("/media/{}", key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store() -> (tempfile::TempDir, FsAudioStore) {
        let dir = tempdir().expect("tempdir");
        let store = FsAudioStore::new(dir.path().join("media")).expect("store");
        (dir, store)
    }

    #[test]
    fn test_store_and_exists() {
        let (_dir, store) = store();
        let owner = Uuid::new_v4();

        let key = store.store(owner, "mp3", b"riff").expect("store failed");
        assert!(key.starts_with(&format!("{}/", owner)));
        assert!(key.ends_with(".mp3"));
        assert!(store.exists(&key));
        assert_eq!(store.public_url(&key), format!("/media/{}", key));
    }

    #[test]
    fn test_existing_key_never_overwritten() {
        let (_dir, store) = store();
        let key = format!("{}/170000.mp3", Uuid::new_v4());

        store.write_new(&key, b"first").expect("first write failed");
        let second = store.write_new(&key, b"second");
        assert!(matches!(second, Err(Error::Storage(_))));

        // Original payload untouched
        let content = std::fs::read(store.media_root().join(&key)).expect("read failed");
        assert_eq!(content, b"first");
    }

    #[test]
    fn test_traversal_keys_rejected() {
        let (_dir, store) = store();
        assert!(!store.exists("../outside.mp3"));
        assert!(!store.exists("/etc/passwd"));
        assert!(store.write_new("a/../../x.mp3", b"x").is_err());
        assert!(store.write_new("", b"x").is_err());
    }

    #[test]
    fn test_key_shape() {
        let owner = Uuid::nil();
        let key = FsAudioStore::make_key(owner, 1700000000000, "wav");
        assert_eq!(
            key,
            "00000000-0000-0000-0000-000000000000/1700000000000.wav"
        );
    }
}
