use serde::Deserialize;
use navguard_core::error::{NavGuardError, Result};
use navguard_core::route::{self, RouteTable};

/// Paths served by the gateway itself, outside the guard.
pub const RESERVED_PATHS: [&str; 2] = ["/healthz", "/v1/decide"];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub routes: RoutesSection,

    #[serde(default)]
    pub credential: CredentialSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NavGuardError::UnsupportedVersion);
        }

        let routes = self.routes.compile()?;
        for p in [routes.entry_point(), routes.register(), routes.home()] {
            if RESERVED_PATHS.contains(&p) {
                return Err(NavGuardError::BadRequest(format!(
                    "routes must not use a reserved gateway path: {p}"
                )));
            }
        }
        self.credential.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// Fixed navigation targets. `entry_point` + `register` are the public set.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutesSection {
    #[serde(default = "default_entry_point")]
    pub entry_point: String,
    #[serde(default = "default_register")]
    pub register: String,
    #[serde(default = "default_home")]
    pub home: String,
}

impl Default for RoutesSection {
    fn default() -> Self {
        Self {
            entry_point: default_entry_point(),
            register: default_register(),
            home: default_home(),
        }
    }
}

impl RoutesSection {
    pub fn compile(&self) -> Result<RouteTable> {
        RouteTable::new(&*self.entry_point, &*self.register, &*self.home)
    }
}

fn default_entry_point() -> String {
    route::DEFAULT_ENTRY_POINT.into()
}
fn default_register() -> String {
    route::DEFAULT_REGISTER.into()
}
fn default_home() -> String {
    route::DEFAULT_HOME.into()
}

/// Where the gateway looks for the stored credential on each request.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialSection {
    #[serde(default = "default_cookie")]
    pub cookie: String,

    /// Also accept `Authorization: Bearer <token>`. Checked before the cookie.
    #[serde(default = "default_bearer")]
    pub bearer: bool,
}

impl Default for CredentialSection {
    fn default() -> Self {
        Self {
            cookie: default_cookie(),
            bearer: default_bearer(),
        }
    }
}

impl CredentialSection {
    pub fn validate(&self) -> Result<()> {
        if self.cookie.is_empty() {
            return Err(NavGuardError::BadRequest("credential.cookie must not be empty".into()));
        }
        if self
            .cookie
            .chars()
            .any(|c| c == '=' || c == ';' || c == ',' || c.is_whitespace() || c.is_control())
        {
            return Err(NavGuardError::BadRequest(format!(
                "credential.cookie is not a valid cookie name: {}",
                self.cookie
            )));
        }
        Ok(())
    }
}

fn default_cookie() -> String {
    "token".into()
}
fn default_bearer() -> bool {
    true
}
