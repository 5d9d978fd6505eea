// ============================================================================
// CREDENTIAL STORE - get/set/clear over a single storage key
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{window, Storage};

use crate::errors::StorageError;
use crate::models::StoredCredential;

/// Persistent home of the stored credential.
pub trait CredentialRepository {
    fn get(&self) -> Result<Option<StoredCredential>, StorageError>;
    fn set(&self, credential: &StoredCredential) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;

    fn has_credential(&self) -> bool {
        match self.get() {
            Ok(Some(credential)) => credential.is_present(),
            Ok(None) => false,
            Err(e) => {
                log::warn!("⚠️ [STORE] Could not read credential: {}", e);
                false
            }
        }
    }
}

fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage` under a fixed key.
#[derive(Debug, Clone)]
pub struct LocalStorageRepository {
    key: String,
}

impl LocalStorageRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        get_local_storage().ok_or(StorageError::Unavailable)
    }
}

impl CredentialRepository for LocalStorageRepository {
    fn get(&self) -> Result<Option<StoredCredential>, StorageError> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|_| StorageError::Read { key: self.key.clone() })?;
        Ok(raw.map(StoredCredential::from_stored))
    }

    fn set(&self, credential: &StoredCredential) -> Result<(), StorageError> {
        self.storage()?
            .set_item(&self.key, credential.as_str())
            .map_err(|_| StorageError::Write { key: self.key.clone() })?;
        log::info!("💾 [STORE] Credential saved under '{}'", self.key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|_| StorageError::Remove { key: self.key.clone() })?;
        log::info!("🗑️ [STORE] Credential '{}' removed", self.key);
        Ok(())
    }
}

/// Process-local repository. Clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    slot: Rc<RefCell<Option<String>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CredentialRepository for InMemoryRepository {
    fn get(&self) -> Result<Option<StoredCredential>, StorageError> {
        Ok(self.slot.borrow().clone().map(StoredCredential::from_stored))
    }

    fn set(&self, credential: &StoredCredential) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(credential.as_str().to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get(), Ok(None));
        assert!(!repo.has_credential());

        let credential = StoredCredential::from_response_body(r#"{"access":"a","refresh":"r"}"#);
        repo.set(&credential).expect("in-memory set");
        assert_eq!(repo.get(), Ok(Some(credential)));
        assert!(repo.has_credential());

        repo.clear().expect("in-memory clear");
        assert_eq!(repo.raw(), None);
        assert!(!repo.has_credential());
    }

    #[test]
    fn empty_string_is_not_a_credential() {
        let repo = InMemoryRepository::with_value("");
        assert!(!repo.has_credential());
    }

    #[test]
    fn clones_share_storage() {
        let repo = InMemoryRepository::new();
        let view = repo.clone();
        repo.set(&StoredCredential::from_stored("\"t\"".into())).expect("in-memory set");
        assert_eq!(view.raw().as_deref(), Some("\"t\""));
    }
}
