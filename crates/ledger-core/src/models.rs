//! # Domain Models
//!
//! These structs represent the core entities of the social ledger.
//! Every entity is immutable once recorded and references others by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = u64;
pub type PostId = u64;
pub type CommentId = u64;
pub type LikeId = u64;

/// A participant. The id is assigned by the caller, not by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// The fundamental unit of conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// 1-based, assigned in creation order
    pub id: PostId,
    pub user_id: UserId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub post_id: PostId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// At most one Like exists per (user_id, post_id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: LikeId,
    pub user_id: UserId,
    pub post_id: PostId,
    pub timestamp: DateTime<Utc>,
}

/// Discriminant of an [`Activity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Post,
    Comment,
    Like,
}

/// One entry of a user's activity feed.
///
/// Serialized as `{ "kind": "post" | "comment" | "like", "payload": { .. } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Activity {
    Post(Post),
    Comment(Comment),
    Like(Like),
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::Post(_) => ActivityKind::Post,
            Activity::Comment(_) => ActivityKind::Comment,
            Activity::Like(_) => ActivityKind::Like,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Activity::Post(p) => p.timestamp,
            Activity::Comment(c) => c.timestamp,
            Activity::Like(l) => l.timestamp,
        }
    }

    /// The author of the activity.
    pub fn user_id(&self) -> UserId {
        match self {
            Activity::Post(p) => p.user_id,
            Activity::Comment(c) => c.user_id,
            Activity::Like(l) => l.user_id,
        }
    }
}

/// Collection sizes, mostly for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
    pub likes: usize,
}
