//! Behavioral switches for [`ActivityLedger`](crate::ActivityLedger).

use serde::{Deserialize, Serialize};

use crate::models::User;

/// How a submitted [`User`] is matched against the registered users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipCheck {
    /// The whole record (id and name) must equal a registered user.
    #[default]
    Record,
    /// Any registered user with the same id counts.
    Id,
}

impl MembershipCheck {
    pub fn matches(self, registered: &User, candidate: &User) -> bool {
        match self {
            MembershipCheck::Record => registered == candidate,
            MembershipCheck::Id => registered.id == candidate.id,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerPolicy {
    pub membership: MembershipCheck,
    /// Off by default: duplicate ids are recorded silently.
    pub reject_duplicate_user_ids: bool,
}
