//! Shared application state for the navGuard gateway.
//!
//! The access policy is compiled once from config and shared read-only by
//! every request. The credential store is swappable so embedding hosts can
//! bring their own persistence.

use std::sync::Arc;

use navguard_core::error::Result;
use navguard_core::AccessPolicy;

use crate::config::GatewayConfig;
use crate::store::{CredentialStore, RequestCredentialStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<dyn CredentialStore>,
}

struct AppStateInner {
    policy: AccessPolicy,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let routes = cfg.routes.compile()?;
        let policy = AccessPolicy::new(routes);
        let store: Arc<dyn CredentialStore> = Arc::new(RequestCredentialStore::new(&cfg.credential));

        tracing::info!(
            entry_point = %policy.routes().entry_point(),
            register = %policy.routes().register(),
            home = %policy.routes().home(),
            "access policy compiled"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { policy }),
            store,
        })
    }

    /// Replace the credential store collaborator.
    pub fn with_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.store = store;
        self
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.inner.policy
    }

    pub fn store(&self) -> &dyn CredentialStore {
        self.store.as_ref()
    }
}
