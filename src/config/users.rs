//! API user configuration.
//!
//! The service has a single in-memory user, read from `API_USERNAME` and
//! `API_PASSWORD` (defaults `user` / `password`) and granted the `USER` role.
//! Passwords are hashed with argon2 when the store is built; only the hash is
//! kept.

use crate::errors::{Error, Result};
use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use std::collections::HashMap;

/// Role required to delete employees.
pub const ROLE_USER: &str = "USER";

/// A username and plaintext password as presented by a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login name
    pub username: String,
    /// Plaintext password, never logged
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
struct StoredUser {
    password_hash: String,
    roles: Vec<String>,
}

/// Known users keyed by username.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: HashMap<String, StoredUser>,
}

impl UserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a user, hashing the password.
    pub fn add_user(&mut self, credentials: &Credentials, roles: &[&str]) -> Result<()> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(credentials.password.as_bytes(), &salt)
            .map_err(|e| Error::Config {
                message: format!("Failed to hash password: {e}"),
            })?
            .to_string();

        self.users.insert(
            credentials.username.clone(),
            StoredUser {
                password_hash,
                roles: roles.iter().map(ToString::to_string).collect(),
            },
        );
        Ok(())
    }

    /// Builds the store from `API_USERNAME` / `API_PASSWORD`.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials {
            username: std::env::var("API_USERNAME").unwrap_or_else(|_| "user".to_string()),
            password: std::env::var("API_PASSWORD").unwrap_or_else(|_| "password".to_string()),
        };

        let mut store = Self::new();
        store.add_user(&credentials, &[ROLE_USER])?;
        tracing::info!("Configured API user '{}'", credentials.username);
        Ok(store)
    }

    /// Returns the user's roles when the credentials match, `None` otherwise.
    #[must_use]
    pub fn authenticate(&self, credentials: &Credentials) -> Option<&[String]> {
        let user = self.users.get(&credentials.username)?;
        let parsed = PasswordHash::new(&user.password_hash).ok()?;
        Argon2::default()
            .verify_password(credentials.password.as_bytes(), &parsed)
            .ok()
            .map(|()| user.roles.as_slice())
    }
}
