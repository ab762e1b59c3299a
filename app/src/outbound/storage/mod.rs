//! Session storage adapters.

mod atomic_io;
mod file;
mod memory;

pub use file::FileSessionStorage;
pub use memory::MemorySessionStorage;

use crate::domain::ports::SessionStorageError;

/// Keys map onto file names, so only a conservative alphabet is accepted.
fn validate_key(key: &str) -> Result<(), SessionStorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(SessionStorageError::invalid_key(key))
    }
}
