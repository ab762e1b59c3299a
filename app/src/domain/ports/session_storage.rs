//! Driven port for the device key-value store backing the session.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by session storage backends.
    pub enum SessionStorageError {
        /// Reading or writing the backing store failed.
        Io { message: String } => "session storage io failed: {message}",
        /// The key is not usable by this backend.
        InvalidKey { key: String } => "session storage key is invalid: {key}",
    }
}

/// String key-value storage, shaped like on-device async storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Stored value for `key`, if any.
    async fn get_item(&self, key: &str) -> Result<Option<String>, SessionStorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), SessionStorageError>;

    /// Remove `key`; absent keys are not an error.
    async fn remove_item(&self, key: &str) -> Result<(), SessionStorageError>;
}
