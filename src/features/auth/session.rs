//! Session token storage. The token issued by face verification is the only
//! authorization signal the client has: present means signed in, absent means
//! signed out. It is opaque, never parsed, and must never be logged.

use crate::app_lib::AppError;

/// localStorage key holding the session token.
pub const SESSION_TOKEN_KEY: &str = "authToken";

/// Capability for reading and writing the session token.
pub trait SessionStore {
    /// Returns the stored token; empty values count as absent.
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> Result<(), AppError>;
    /// Best-effort removal; never fails from the caller's point of view.
    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// Session store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug)]
pub struct LocalStorageSessionStore {
    key: &'static str,
}

impl LocalStorageSessionStore {
    pub const fn new() -> Self {
        Self {
            key: SESSION_TOKEN_KEY,
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl Default for LocalStorageSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn get(&self) -> Option<String> {
        let value = Self::storage()?.get_item(self.key).ok()??;
        non_empty(value)
    }

    fn set(&self, token: &str) -> Result<(), AppError> {
        let storage = Self::storage()
            .ok_or_else(|| AppError::Storage("Browser storage is unavailable.".to_string()))?;
        storage
            .set_item(self.key, token)
            .map_err(|_| AppError::Storage("Could not save your session.".to_string()))
    }

    fn clear(&self) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(self.key).is_err() {
                    log::warn!("failed to remove session token from storage");
                }
            }
            None => log::warn!("browser storage unavailable while clearing session"),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
pub(crate) use memory::MemorySessionStore;
