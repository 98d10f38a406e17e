//! social-ledger/crates/ledger-core/src/lib.rs
//!
//! The central domain logic for the social ledger: entities, the
//! `ActivityLedger` that records them, and the ports it depends on.

pub mod error;
pub mod ledger;
pub mod models;
pub mod policy;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use ledger::ActivityLedger;
pub use models::*;
pub use policy::*;
pub use traits::*;
