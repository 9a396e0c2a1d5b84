use std::cell::RefCell;

use crate::{api::types::ApiError, config::TOKEN_STORAGE_KEY, utils::storage as storage_utils};

/// Read-only view of the persisted authentication token.
///
/// Writing and clearing the token belongs to the authentication service that
/// issues it; the dashboard only ever reads the slot.
pub trait TokenStore {
    /// `Ok(None)` means no token is stored. `Err` means the slot could not be
    /// read at all, which fails the request being built.
    fn read_token(&self) -> Result<Option<String>, ApiError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn read_token(&self) -> Result<Option<String>, ApiError> {
        let storage = storage_utils::local_storage().map_err(ApiError::storage)?;
        let token = storage
            .get_item(TOKEN_STORAGE_KEY)
            .map_err(|_| ApiError::storage("Failed to read token"))?;
        Ok(token.filter(|value| !value.trim().is_empty()))
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new(token: Option<&str>) -> Self {
        Self {
            token: RefCell::new(token.map(str::to_string)),
        }
    }

    pub fn set(&self, token: Option<&str>) {
        *self.token.borrow_mut() = token.map(str::to_string);
    }
}

impl TokenStore for MemoryTokenStore {
    fn read_token(&self) -> Result<Option<String>, ApiError> {
        Ok(self
            .token
            .borrow()
            .clone()
            .filter(|value| !value.trim().is_empty()))
    }
}

/// Token slot that can never be read, for exercising the failure path.
#[cfg(test)]
pub struct UnreadableTokenStore;

#[cfg(test)]
impl TokenStore for UnreadableTokenStore {
    fn read_token(&self) -> Result<Option<String>, ApiError> {
        Err(ApiError::storage("No localStorage"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_treats_blank_as_absent() {
        let store = MemoryTokenStore::new(Some("   "));
        assert_eq!(store.read_token().unwrap(), None);
        store.set(Some("abc"));
        assert_eq!(store.read_token().unwrap().as_deref(), Some("abc"));
        store.set(None);
        assert_eq!(store.read_token().unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn local_storage_store_fails_without_window() {
        let err = LocalStorageTokenStore.read_token().unwrap_err();
        assert_eq!(err.code, "STORAGE_ERROR");
    }
}
