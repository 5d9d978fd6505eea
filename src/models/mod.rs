pub mod auth;

pub use auth::{CredentialInput, LoginRequest, StoredCredential};
