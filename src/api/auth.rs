//! HTTP Basic authentication extractor.
//!
//! Stateless: credentials are checked on every request that asks for an
//! [`AuthenticatedUser`]. No sessions are created.

use super::{AppState, error::ApiError};
use crate::config::Credentials;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::warn;

/// Caller whose Basic credentials matched a configured user.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Login name from the accepted credentials
    pub username: String,
    roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Fails with [`ApiError::Forbidden`] unless the user holds `role`.
    pub fn require_role(&self, role: &str) -> Result<(), ApiError> {
        if self.roles.iter().any(|r| r == role) {
            Ok(())
        } else {
            warn!(username = %self.username, role, "Missing required role");
            Err(ApiError::Forbidden)
        }
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
        else {
            warn!(uri = %parts.uri, "Missing credentials");
            return Err(ApiError::Unauthorized);
        };

        let Some(credentials) = parse_basic(header) else {
            warn!(uri = %parts.uri, "Malformed Basic authorization header");
            return Err(ApiError::Unauthorized);
        };

        match state.users.authenticate(&credentials) {
            Some(roles) => Ok(Self {
                username: credentials.username,
                roles: roles.to_vec(),
            }),
            None => {
                warn!(uri = %parts.uri, username = %credentials.username, "Rejected credentials");
                Err(ApiError::Unauthorized)
            }
        }
    }
}

/// Decodes `Basic base64(username:password)`. The scheme is case-insensitive.
fn parse_basic(header: &str) -> Option<Credentials> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
