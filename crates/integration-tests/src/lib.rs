//! Shared fixtures for the integration test binaries.

use chrono::{DateTime, Duration, TimeZone, Utc};
use ledger_core::{ActivityLedger, LedgerPolicy, MockClock, User};

/// Instant of the first stamp handed out by the fixture clocks.
pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 7, 1, 12, 0, 0).unwrap()
}

/// Advances one minute per sample, starting at [`start`].
pub fn minute_clock() -> MockClock {
    let mut clock = MockClock::new();
    let mut tick = 0;
    clock.expect_now().returning(move || {
        let now = start() + Duration::minutes(tick);
        tick += 1;
        now
    });
    clock
}

/// Always reports [`start`].
pub fn frozen_clock() -> MockClock {
    let mut clock = MockClock::new();
    clock.expect_now().return_const(start());
    clock
}

pub fn john() -> User {
    User::new(1, "John")
}

pub fn emily() -> User {
    User::new(2, "Emily")
}

/// A ledger on the minute clock with John and Emily registered.
pub fn seeded_ledger(policy: LedgerPolicy) -> ActivityLedger {
    let mut ledger = ActivityLedger::with_policy(minute_clock(), policy);
    ledger.register_user(john()).unwrap();
    ledger.register_user(emily()).unwrap();
    ledger
}
