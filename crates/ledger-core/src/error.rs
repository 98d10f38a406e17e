//! # LedgerError
//!
//! Centralized error handling for the social ledger.
//! Every variant represents caller misuse; none are retried internally.

use std::fmt;

use thiserror::Error;

use crate::models::{PostId, UserId};

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Post,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => f.write_str("user"),
            EntityKind::Post => f.write_str("post"),
        }
    }
}

/// The primary error type for all ledger operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Referenced user or post is not recorded in the ledger
    #[error("{kind} not found with ID {id}")]
    NotFound { kind: EntityKind, id: u64 },

    /// The (user, post) pair already has a like
    #[error("post {post_id} already liked by user {user_id}")]
    DuplicateLike { user_id: UserId, post_id: PostId },

    /// Only raised when duplicate user ids are rejected by policy
    #[error("user with ID {id} is already registered")]
    DuplicateUser { id: UserId },
}

impl LedgerError {
    pub(crate) fn user_not_found(id: UserId) -> Self {
        LedgerError::NotFound { kind: EntityKind::User, id }
    }

    pub(crate) fn post_not_found(id: PostId) -> Self {
        LedgerError::NotFound { kind: EntityKind::Post, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::NotFound { .. })
    }
}

/// A specialized Result type for ledger logic.
pub type Result<T> = std::result::Result<T, LedgerError>;
