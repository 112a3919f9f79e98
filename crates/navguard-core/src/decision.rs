//! Access decision engine.
//!
//! Combines the route table and the credential validator into a single
//! verdict per navigation attempt. Stateless: the same inputs and `now`
//! always give the same verdict.

use std::time::SystemTime;

use crate::credential::is_valid;
use crate::route::{RouteClass, RouteTable};

/// Outcome of a navigation decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Let the navigation continue unmodified.
    Proceed,
    /// Send the navigation to this fixed path instead.
    Redirect(String),
}

/// Navigation access policy.
/// Construct once at startup, then share via Arc. Holds no per-call state.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    routes: RouteTable,
}

impl AccessPolicy {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        self.routes.classify(path)
    }

    /// Decide one navigation attempt.
    ///
    /// Rules are evaluated in order; the first match wins:
    /// 1. valid credential on the entry point -> home
    /// 2. no credential on a private route -> entry point
    /// 3. invalid credential on a private route -> entry point
    /// 4. otherwise proceed
    ///
    /// An invalid credential on the entry point therefore proceeds, so an
    /// expired session can sign in again. The stale credential is left as is.
    pub fn decide(&self, credential: Option<&str>, target: &str, now: SystemTime) -> Verdict {
        let credential = credential.filter(|t| !t.is_empty());
        let private = self.routes.classify(target) == RouteClass::Private;

        let Some(token) = credential else {
            if private {
                tracing::debug!(%target, "no credential on private route");
                return Verdict::Redirect(self.routes.entry_point().to_string());
            }
            return Verdict::Proceed;
        };

        let valid = is_valid(Some(token), now);

        if valid && self.routes.is_entry_point(target) {
            tracing::debug!(%target, "authenticated session on entry point");
            return Verdict::Redirect(self.routes.home().to_string());
        }

        if !valid && private {
            tracing::debug!(%target, "invalid credential on private route");
            return Verdict::Redirect(self.routes.entry_point().to_string());
        }

        Verdict::Proceed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    use super::*;

    const NOW: u64 = 1_700_000_000;

    fn now() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(NOW)
    }

    fn token(exp: u64) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#));
        format!("eyJhbGciOiJIUzI1NiJ9.{payload}.sig")
    }

    fn login() -> Verdict {
        Verdict::Redirect("/login".into())
    }

    #[test]
    fn no_credential() {
        let p = AccessPolicy::default();
        assert_eq!(p.decide(None, "/dashboard", now()), login());
        assert_eq!(p.decide(None, "/", now()), login());
        assert_eq!(p.decide(None, "/login", now()), Verdict::Proceed);
        assert_eq!(p.decide(None, "/register", now()), Verdict::Proceed);
        assert_eq!(p.decide(Some(""), "/dashboard", now()), login());
    }

    #[test]
    fn valid_credential() {
        let p = AccessPolicy::default();
        let t = token(NOW + 3600);
        assert_eq!(p.decide(Some(t.as_str()), "/login", now()), Verdict::Redirect("/".into()));
        assert_eq!(p.decide(Some(t.as_str()), "/dashboard", now()), Verdict::Proceed);
        assert_eq!(p.decide(Some(t.as_str()), "/register", now()), Verdict::Proceed);
    }

    #[test]
    fn expired_credential() {
        let p = AccessPolicy::default();
        let t = token(NOW);
        assert_eq!(p.decide(Some(t.as_str()), "/login", now()), Verdict::Proceed);
        assert_eq!(p.decide(Some(t.as_str()), "/register", now()), Verdict::Proceed);
        assert_eq!(p.decide(Some(t.as_str()), "/dashboard", now()), login());
    }

    #[test]
    fn malformed_credential_behaves_like_expired() {
        let p = AccessPolicy::default();
        assert_eq!(p.decide(Some("not-a-jwt"), "/login", now()), Verdict::Proceed);
        assert_eq!(p.decide(Some("not-a-jwt"), "/settings", now()), login());
    }

    #[test]
    fn custom_routes() {
        let routes = RouteTable::new("/signin", "/signup", "/app").unwrap();
        let p = AccessPolicy::new(routes);
        let t = token(NOW + 60);
        assert_eq!(p.decide(Some(t.as_str()), "/signin", now()), Verdict::Redirect("/app".into()));
        assert_eq!(p.decide(None, "/login", now()), Verdict::Redirect("/signin".into()));
    }

    #[test]
    fn decide_is_idempotent() {
        let p = AccessPolicy::default();
        let inputs = [
            (None, "/dashboard"),
            (Some(token(NOW + 1)), "/login"),
            (Some(token(NOW - 1)), "/dashboard"),
        ];
        for (cred, path) in &inputs {
            let a = p.decide(cred.as_deref(), path, now());
            let b = p.decide(cred.as_deref(), path, now());
            assert_eq!(a, b);
        }
    }
}
