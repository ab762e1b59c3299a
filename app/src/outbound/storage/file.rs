//! File-backed session storage rooted in one capability directory.

use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use tracing::debug;

use super::atomic_io::write_atomic;
use super::validate_key;
use crate::domain::ports::{SessionStorage, SessionStorageError};

/// Stores each key as `<key>.json` inside a dedicated directory.
///
/// All file access goes through a `cap_std` [`Dir`], so keys cannot escape
/// the session directory.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    dir: Arc<Dir>,
}

impl FileSessionStorage {
    /// Open `path`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while creating or opening the directory.
    pub fn open(path: &Utf8Path) -> io::Result<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        debug!(path = %path, "session directory opened");
        Ok(Self { dir: Arc::new(dir) })
    }

    /// Wrap an already opened directory.
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    async fn run<T, F>(&self, key: &str, op: F) -> Result<T, SessionStorageError>
    where
        T: Send + 'static,
        F: FnOnce(&Dir, &str) -> io::Result<T> + Send + 'static,
    {
        validate_key(key)?;
        let dir = Arc::clone(&self.dir);
        let file_name = format!("{key}.json");
        tokio::task::spawn_blocking(move || op(&dir, &file_name))
            .await
            .map_err(|error| SessionStorageError::io(error.to_string()))?
            .map_err(|error| SessionStorageError::io(error.to_string()))
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, SessionStorageError> {
        self.run(key, |dir, file_name| match dir.read_to_string(file_name) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        })
        .await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), SessionStorageError> {
        let contents = value.to_owned();
        self.run(key, move |dir, file_name| {
            write_atomic(dir, file_name, &contents)
        })
        .await
    }

    async fn remove_item(&self, key: &str) -> Result<(), SessionStorageError> {
        self.run(key, |dir, file_name| match dir.remove_file(file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        })
        .await
    }
}
