//! Credential store collaborator.
//!
//! The decision engine never reads storage itself. The gateway asks a
//! `CredentialStore` for the stored credential before each decision and hands
//! the result to the engine. Hosts with other persistence plug in their own.

use async_trait::async_trait;
use axum::http::{header, HeaderMap};

use crate::config::CredentialSection;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Stored credential for this request, if any. Empty values are `None`.
    async fn load(&self, headers: &HeaderMap) -> Option<String>;
}

/// Reads the credential carried by the request itself:
/// `Authorization: Bearer` (when enabled), then the configured cookie.
#[derive(Debug, Clone)]
pub struct RequestCredentialStore {
    cookie: String,
    bearer: bool,
}

impl RequestCredentialStore {
    pub fn new(cfg: &CredentialSection) -> Self {
        Self {
            cookie: cfg.cookie.clone(),
            bearer: cfg.bearer,
        }
    }

    fn from_bearer(&self, headers: &HeaderMap) -> Option<String> {
        if !self.bearer {
            return None;
        }
        let v = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        let (scheme, token) = v.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        non_empty(token.trim())
    }

    fn from_cookie(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.cookie)
            .and_then(|(_, value)| non_empty(value.trim().trim_matches('"')))
    }
}

#[async_trait]
impl CredentialStore for RequestCredentialStore {
    async fn load(&self, headers: &HeaderMap) -> Option<String> {
        self.from_bearer(headers).or_else(|| self.from_cookie(headers))
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
