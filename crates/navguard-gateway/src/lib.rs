//! navGuard gateway library entry.
//!
//! Hosts the navigation decision engine behind HTTP: strict config, a
//! credential store collaborator, the guard middleware, and the router. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod guard;
pub mod ops;
pub mod router;
pub mod store;
