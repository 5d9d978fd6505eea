// ============================================================================
// AUTH SERVICE - Token endpoint over HTTP (stateless)
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::config::AppConfig;
use crate::errors::AuthError;
use crate::models::LoginRequest;

/// Exchanges credentials for a token payload.
#[async_trait(?Send)]
pub trait AuthGateway {
    /// Raw body of a 2xx answer. Anything else is an error.
    async fn obtain_token(&self, request: &LoginRequest) -> Result<String, AuthError>;
}

/// `POST {url}` with the credentials as JSON. `json()` sets
/// `Content-Type: application/json`.
pub fn token_request(url: &str, request: &LoginRequest) -> Result<Request, AuthError> {
    Request::post(url)
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| AuthError::Request(e.to_string()))
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Body of a 2xx answer, `AuthError::Status` for everything else.
pub fn response_to_result(status: u16, body: String) -> Result<String, AuthError> {
    if is_success(status) {
        Ok(body)
    } else {
        Err(AuthError::Status { status, body })
    }
}

#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    token_url: String,
}

impl HttpAuthGateway {
    pub fn new(token_url: impl Into<String>) -> Self {
        Self {
            token_url: token_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.token_url())
    }
}

#[async_trait(?Send)]
impl AuthGateway for HttpAuthGateway {
    async fn obtain_token(&self, request: &LoginRequest) -> Result<String, AuthError> {
        log::info!("🔐 [AUTH] POST {} for '{}'", self.token_url, request.username());

        let response = token_request(&self.token_url, request)?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if is_success(status) => return Err(AuthError::Body(e.to_string())),
            // The body of a rejection is only diagnostic.
            Err(_) => String::new(),
        };

        response_to_result(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, true)]
    #[case(201, true)]
    #[case(204, true)]
    #[case(299, true)]
    #[case(199, false)]
    #[case(301, false)]
    #[case(401, false)]
    #[case(500, false)]
    fn only_2xx_counts_as_success(#[case] status: u16, #[case] expected: bool) {
        assert_eq!(is_success(status), expected);
    }

    #[rstest]
    #[case(200)]
    #[case(201)]
    fn success_passes_body_through(#[case] status: u16) {
        let body = r#"{"access":"a","refresh":"r"}"#.to_string();
        assert_eq!(response_to_result(status, body.clone()), Ok(body));
    }

    #[rstest]
    #[case(401, r#"{"detail":"No active account found with the given credentials"}"#)]
    #[case(500, "")]
    fn rejection_keeps_status_and_body(#[case] status: u16, #[case] body: &str) {
        assert_eq!(
            response_to_result(status, body.to_string()),
            Err(AuthError::Status { status, body: body.to_string() })
        );
    }
}
