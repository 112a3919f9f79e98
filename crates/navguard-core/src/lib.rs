//! navGuard core: route classification, credential validation, and the
//! navigation access decision.
//!
//! Everything here is pure with respect to its inputs. The current time is
//! passed in explicitly, the credential is passed in explicitly, and nothing is
//! retained between calls. Storage, transport, and clocks belong to the host.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! A hostile or truncated credential must never bring down the host: every
//! decode failure is normalized to "invalid".

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod credential;
pub mod decision;
pub mod error;
pub mod route;

pub use credential::{decode_claims, is_valid, Claims, DecodeError};
pub use decision::{AccessPolicy, Verdict};
/// Shared result type.
pub use error::{NavGuardError, Result};
pub use route::{RouteClass, RouteTable};
