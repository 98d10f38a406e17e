//! # Core Traits (Ports)
//!
//! Seams the ledger depends on but does not own.

use chrono::{DateTime, Utc};

#[cfg(any(test, feature = "testing"))]
use mockall::automock;

/// Source of creation timestamps.
#[cfg_attr(any(test, feature = "testing"), automock)]
pub trait Clock: Send + Sync {
    /// Returns the current wall-clock instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
