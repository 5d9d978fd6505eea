// ============================================================================
// LOGIN VIEWMODEL - Submission flow (validate -> request -> persist -> navigate)
// ============================================================================
// Talks to the outside world only through the three ports it is built with,
// so the whole flow runs without a browser in tests.
// ============================================================================

use crate::config::AppConfig;
use crate::errors::LoginError;
use crate::models::{LoginRequest, StoredCredential};
use crate::router::{BrowserNavigator, Navigator, Route};
use crate::services::{AuthGateway, CredentialRepository, HttpAuthGateway, LocalStorageRepository};
use crate::state::{LoginState, ReactiveState};

/// What mounting the login screen resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    ShowForm,
    /// A credential was already stored; navigation to `/home` was issued.
    Redirected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    LoggedIn,
    /// A submission was still outstanding; nothing was sent.
    AlreadySubmitting,
}

pub struct LoginViewModel<G, R, N> {
    gateway: G,
    repository: R,
    navigator: N,
}

pub type BrowserLoginViewModel = LoginViewModel<HttpAuthGateway, LocalStorageRepository, BrowserNavigator>;

impl BrowserLoginViewModel {
    pub fn browser(config: &AppConfig) -> Self {
        Self::new(
            HttpAuthGateway::from_config(config),
            LocalStorageRepository::new(config.credential_storage_key.clone()),
            BrowserNavigator::new(),
        )
    }
}

impl<G, R, N> LoginViewModel<G, R, N>
where
    G: AuthGateway,
    R: CredentialRepository,
    N: Navigator,
{
    pub fn new(gateway: G, repository: R, navigator: N) -> Self {
        Self {
            gateway,
            repository,
            navigator,
        }
    }

    pub fn on_mount(&self) -> MountOutcome {
        if self.repository.has_credential() {
            log::info!("🔁 [LOGIN] Credential already stored, skipping form");
            self.navigator.navigate(Route::Home);
            MountOutcome::Redirected
        } else {
            MountOutcome::ShowForm
        }
    }

    /// Run one login attempt against `state`.
    ///
    /// On return the phase is `Succeeded` or `Failed`, unless another
    /// attempt was still outstanding, in which case nothing changes.
    pub async fn submit(&self, state: &ReactiveState<LoginState>) -> Result<SubmitOutcome, LoginError> {
        if state.with(LoginState::is_loading) {
            log::warn!("⚠️ [LOGIN] Submit ignored, a request is already outstanding");
            return Ok(SubmitOutcome::AlreadySubmitting);
        }

        state.update(LoginState::begin_attempt);
        let input = state.with(|s| s.input.clone());

        let request = match LoginRequest::try_from_input(&input) {
            Ok(request) => request,
            Err(e) => {
                log::info!("📝 [LOGIN] Form incomplete: {}", e);
                let err = LoginError::from(e);
                state.update(|s| s.fail(err.reason()));
                return Err(err);
            }
        };

        state.update(LoginState::start_submitting);

        match self.authenticate(&request).await {
            Ok(()) => {
                log::info!("✅ [LOGIN] '{}' logged in", request.username());
                state.update(LoginState::succeed);
                self.navigator.navigate(Route::Home);
                Ok(SubmitOutcome::LoggedIn)
            }
            Err(err) => {
                log::error!("❌ [LOGIN] Login failed: {}", err);
                state.update(|s| s.fail(err.reason()));
                Err(err)
            }
        }
    }

    async fn authenticate(&self, request: &LoginRequest) -> Result<(), LoginError> {
        let body = self.gateway.obtain_token(request).await?;
        let credential = StoredCredential::from_response_body(&body);
        self.repository.set(&credential)?;
        Ok(())
    }
}
