use std::fmt;

use serde::Serialize;

use crate::errors::ValidationError;

/// Raw form input, exactly as typed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialInput {
    pub username: String,
    pub password: String,
}

impl CredentialInput {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for CredentialInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialInput")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body of the token request: `{"username": ..., "password": ...}`.
///
/// Only emptiness is checked; whitespace is sent as typed.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

impl LoginRequest {
    pub fn try_from_input(input: &CredentialInput) -> Result<Self, ValidationError> {
        if input.username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        if input.password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(Self {
            username: input.username.clone(),
            password: input.password.clone(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Token endpoint response as persisted in the credential store.
///
/// The payload is opaque: whatever JSON the endpoint answered with is kept,
/// compactly re-serialized. A body that is not JSON is stored as a JSON
/// string literal so the stored value always parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential(String);

impl StoredCredential {
    pub fn from_response_body(body: &str) -> Self {
        let serialized = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => value.to_string(),
            Err(_) => serde_json::Value::String(body.to_string()).to_string(),
        };
        Self(serialized)
    }

    /// Wrap a value read back from the store, untouched.
    pub fn from_stored(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty stored string does not count as a credential.
    pub fn is_present(&self) -> bool {
        !self.0.is_empty()
    }

    /// `access` field of a token-pair response, if the payload has one.
    pub fn access_token(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.0).ok()?;
        value.get("access")?.as_str().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "x", ValidationError::EmptyUsername)]
    #[case("alice", "", ValidationError::EmptyPassword)]
    #[case("", "", ValidationError::EmptyUsername)]
    fn empty_fields_are_rejected(#[case] username: &str, #[case] password: &str, #[case] expected: ValidationError) {
        let input = CredentialInput::new(username, password);
        assert_eq!(LoginRequest::try_from_input(&input), Err(expected));
    }

    #[test]
    fn request_body_has_exactly_username_and_password() {
        let input = CredentialInput::new("alice", "s3cret");
        let request = LoginRequest::try_from_input(&input).expect("valid input");
        let body = serde_json::to_value(&request).expect("serializable");
        assert_eq!(body, serde_json::json!({ "username": "alice", "password": "s3cret" }));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let input = CredentialInput::new(" bob ", " ");
        let request = LoginRequest::try_from_input(&input).expect("non-empty input");
        assert_eq!(request.username(), " bob ");
        assert_eq!(request.password(), " ");
    }

    #[test]
    fn debug_output_hides_password() {
        let input = CredentialInput::new("alice", "hunter2");
        let request = LoginRequest::try_from_input(&input).expect("valid input");
        assert!(!format!("{:?}", input).contains("hunter2"));
        assert!(!format!("{:?}", request).contains("hunter2"));
    }

    #[test]
    fn json_body_is_stored_compactly() {
        let stored = StoredCredential::from_response_body("{\n  \"access\": \"a.b.c\",\n  \"refresh\": \"r\"\n}");
        assert_eq!(stored.as_str(), r#"{"access":"a.b.c","refresh":"r"}"#);
        assert_eq!(stored.access_token().as_deref(), Some("a.b.c"));
    }

    #[test]
    fn empty_stored_value_is_not_present() {
        assert!(!StoredCredential::from_stored(String::new()).is_present());
        assert!(StoredCredential::from_stored("\"\"".into()).is_present());
        assert!(StoredCredential::from_response_body("").is_present());
    }

    #[test]
    fn non_json_body_is_stored_as_string_literal() {
        let stored = StoredCredential::from_response_body("plain token");
        assert_eq!(stored.as_str(), "\"plain token\"");
        assert_eq!(stored.access_token(), None);

        let empty = StoredCredential::from_response_body("");
        assert_eq!(empty.as_str(), "\"\"");
    }
}
