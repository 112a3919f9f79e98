//! Route classification.
//!
//! A path is Public when it is exactly one of the configured entry points,
//! and Private otherwise. Unknown paths are Private (fail-closed).

use crate::error::{NavGuardError, Result};

pub const DEFAULT_ENTRY_POINT: &str = "/login";
pub const DEFAULT_REGISTER: &str = "/register";
pub const DEFAULT_HOME: &str = "/";

/// Whether a route can be reached without a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Private,
}

/// The fixed paths the decision engine knows about.
///
/// `entry_point` and `register` form the Public set. `home` is where an
/// authenticated session is sent when it lands on the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entry_point: String,
    register: String,
    home: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            entry_point: DEFAULT_ENTRY_POINT.into(),
            register: DEFAULT_REGISTER.into(),
            home: DEFAULT_HOME.into(),
        }
    }
}

impl RouteTable {
    /// Build a table from overridden paths.
    ///
    /// Rejects relative paths, paths carrying pattern syntax (`:` or `*`,
    /// which a router would read as captures), a registration path equal to the entry point,
    /// and a home equal to the entry point (a valid session would be
    /// redirected onto the same path forever).
    pub fn new(
        entry_point: impl Into<String>,
        register: impl Into<String>,
        home: impl Into<String>,
    ) -> Result<Self> {
        let table = Self {
            entry_point: entry_point.into(),
            register: register.into(),
            home: home.into(),
        };

        for (name, p) in [
            ("entry_point", &table.entry_point),
            ("register", &table.register),
            ("home", &table.home),
        ] {
            if !p.starts_with('/') {
                return Err(NavGuardError::BadRequest(format!(
                    "routes.{name} must start with '/': {p}"
                )));
            }
            if p.contains([':', '*']) {
                return Err(NavGuardError::BadRequest(format!(
                    "routes.{name} must be a literal path (no ':' or '*'): {p}"
                )));
            }
        }
        if table.register == table.entry_point {
            return Err(NavGuardError::BadRequest(
                "routes.register must differ from routes.entry_point".into(),
            ));
        }
        if table.home == table.entry_point {
            return Err(NavGuardError::BadRequest(
                "routes.home must differ from routes.entry_point".into(),
            ));
        }
        Ok(table)
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }
    pub fn register(&self) -> &str {
        &self.register
    }
    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn is_entry_point(&self, path: &str) -> bool {
        path == self.entry_point
    }

    /// Total classification. Exact string match only.
    pub fn classify(&self, path: &str) -> RouteClass {
        if path == self.entry_point || path == self.register {
            RouteClass::Public
        } else {
            RouteClass::Private
        }
    }
}
