use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use uuid::Uuid;

use business::domain::cart::storage::{CartStorage, StorageError};

/// Keeps each slot as `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write never leaves a half-written slot behind.
///
/// I/O is blocking `std::fs`, also when called from async handlers. A slot is
/// a single small file, so the call is kept inline rather than moved off the
/// runtime.
pub struct FileCartStorage {
    dir: PathBuf,
}

impl FileCartStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl CartStorage for FileCartStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                Err(StorageError::Unavailable)
            }
            Err(_) => Err(StorageError::ReadFailed),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|_| StorageError::Unavailable)?;

        let tmp = self.dir.join(format!(".{}.{}.tmp", key, Uuid::new_v4()));
        if fs::write(&tmp, value).is_err() {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::WriteFailed);
        }
        fs::rename(&tmp, self.slot_path(key)).map_err(|_| {
            let _ = fs::remove_file(&tmp);
            StorageError::WriteFailed
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use business::domain::cart::storage::CART_STORAGE_KEY;

    use super::*;

    #[test]
    fn should_return_none_when_slot_never_written() {
        let dir = tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path());

        assert!(storage.read(CART_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn should_read_back_what_was_written() {
        let dir = tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path());

        storage.write(CART_STORAGE_KEY, "[]").unwrap();
        storage
            .write(CART_STORAGE_KEY, r#"[{"productId":"a","quantity":2}]"#)
            .unwrap();

        assert_eq!(
            storage.read(CART_STORAGE_KEY).unwrap().as_deref(),
            Some(r#"[{"productId":"a","quantity":2}]"#)
        );
        assert!(dir.path().join("jinx_cart.json").exists());
    }

    #[test]
    fn should_create_missing_directory_on_write() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("state").join("carts");
        let storage = FileCartStorage::new(&nested);

        storage.write(CART_STORAGE_KEY, "[]").unwrap();

        assert_eq!(storage.read(CART_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn should_leave_no_temp_files_behind() {
        let dir = tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path());

        storage.write(CART_STORAGE_KEY, "[]").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["jinx_cart.json".to_string()]);
    }

    #[tokio::test]
    async fn should_complete_write_inline_on_current_thread_runtime() {
        let dir = tempdir().unwrap();
        let storage = FileCartStorage::new(dir.path());

        storage.write(CART_STORAGE_KEY, "[]").unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("jinx_cart.json")).unwrap(),
            "[]"
        );
    }

    #[test]
    fn should_fail_write_when_directory_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "x").unwrap();
        let storage = FileCartStorage::new(&blocker);

        assert!(storage.write(CART_STORAGE_KEY, "[]").is_err());
    }
}
