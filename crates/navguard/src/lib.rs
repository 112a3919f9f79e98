//! Top-level facade crate for navGuard.
//!
//! Re-exports the decision core and the reference gateway so users can depend on a single crate.

pub mod core {
    pub use navguard_core::*;
}

pub mod gateway {
    pub use navguard_gateway::*;
}
