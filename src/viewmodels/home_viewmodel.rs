// ============================================================================
// HOME VIEWMODEL - Guard and logout for the protected view
// ============================================================================

use crate::config::AppConfig;
use crate::errors::StorageError;
use crate::models::StoredCredential;
use crate::router::{BrowserNavigator, Navigator, Route};
use crate::services::{CredentialRepository, LocalStorageRepository};

pub struct HomeViewModel<R, N> {
    repository: R,
    navigator: N,
}

pub type BrowserHomeViewModel = HomeViewModel<LocalStorageRepository, BrowserNavigator>;

impl BrowserHomeViewModel {
    pub fn browser(config: &AppConfig) -> Self {
        Self::new(
            LocalStorageRepository::new(config.credential_storage_key.clone()),
            BrowserNavigator::new(),
        )
    }
}

impl<R, N> HomeViewModel<R, N>
where
    R: CredentialRepository,
    N: Navigator,
{
    pub fn new(repository: R, navigator: N) -> Self {
        Self { repository, navigator }
    }

    /// The stored credential, or a redirect to `/` when there is none.
    pub fn on_mount(&self) -> Option<StoredCredential> {
        match self.repository.get() {
            Ok(Some(credential)) if credential.is_present() => Some(credential),
            Ok(_) => {
                log::info!("🔒 [HOME] No credential, back to login");
                self.navigator.navigate(Route::Login);
                None
            }
            Err(e) => {
                log::error!("❌ [HOME] Could not read credential: {}", e);
                self.navigator.navigate(Route::Login);
                None
            }
        }
    }

    /// Forget the credential and return to the login screen. Navigation
    /// only happens once the credential is gone.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.repository.clear()?;
        log::info!("👋 [HOME] Logged out");
        self.navigator.navigate(Route::Login);
        Ok(())
    }
}

/// First and last few characters of a token, for display.
pub fn mask_token(token: &str) -> String {
    const VISIBLE: usize = 6;
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= VISIBLE * 2 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..VISIBLE].iter().collect();
    let tail: String = chars[chars.len() - VISIBLE..].iter().collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryRepository;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        routes: Rc<RefCell<Vec<Route>>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.routes.borrow_mut().push(route);
        }
    }

    struct StuckRepository;

    impl CredentialRepository for StuckRepository {
        fn get(&self) -> Result<Option<StoredCredential>, StorageError> {
            Ok(Some(StoredCredential::from_stored("\"t\"".into())))
        }

        fn set(&self, _credential: &StoredCredential) -> Result<(), StorageError> {
            Ok(())
        }

        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Remove { key: "user".into() })
        }
    }

    #[test]
    fn mount_without_credential_goes_back_to_login() {
        let nav = RecordingNavigator::default();
        let vm = HomeViewModel::new(InMemoryRepository::new(), nav.clone());
        assert_eq!(vm.on_mount(), None);
        assert_eq!(*nav.routes.borrow(), vec![Route::Login]);
    }

    #[test]
    fn mount_with_credential_stays() {
        let nav = RecordingNavigator::default();
        let repo = InMemoryRepository::with_value(r#"{"access":"abc"}"#);
        let vm = HomeViewModel::new(repo, nav.clone());
        let credential = vm.on_mount().expect("credential present");
        assert_eq!(credential.access_token().as_deref(), Some("abc"));
        assert!(nav.routes.borrow().is_empty());
    }

    #[test]
    fn empty_stored_value_goes_back_to_login() {
        let nav = RecordingNavigator::default();
        let vm = HomeViewModel::new(InMemoryRepository::with_value(""), nav.clone());
        assert_eq!(vm.on_mount(), None);
        assert_eq!(*nav.routes.borrow(), vec![Route::Login]);
    }

    #[test]
    fn logout_clears_and_navigates() {
        let nav = RecordingNavigator::default();
        let repo = InMemoryRepository::with_value("\"t\"");
        let vm = HomeViewModel::new(repo.clone(), nav.clone());
        vm.logout().expect("in-memory clear");
        assert_eq!(repo.raw(), None);
        assert_eq!(*nav.routes.borrow(), vec![Route::Login]);
    }

    #[test]
    fn failed_logout_stays_on_home() {
        let nav = RecordingNavigator::default();
        let vm = HomeViewModel::new(StuckRepository, nav.clone());
        assert!(vm.logout().is_err());
        assert!(nav.routes.borrow().is_empty());
    }

    #[rstest]
    #[case("", "")]
    #[case("short", "*****")]
    #[case("eyJhbGciOiJIUzI1NiJ9.payload.sig", "eyJhbG…ad.sig")]
    fn masks_tokens(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(mask_token(token), expected);
    }
}
