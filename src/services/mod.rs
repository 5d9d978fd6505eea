pub mod auth_service;
pub mod credential_store;

pub use auth_service::{AuthGateway, HttpAuthGateway};
pub use credential_store::{CredentialRepository, InMemoryRepository, LocalStorageRepository};
