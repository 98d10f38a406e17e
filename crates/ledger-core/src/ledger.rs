//! # ActivityLedger
//!
//! Append-only store of users, posts, comments and likes, plus the per-user
//! activity feed assembled from them.
//!
//! Every mutation validates first and appends last, so a failed call leaves
//! the ledger exactly as it was.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::{LedgerError, Result};
use crate::models::{
    Activity, Comment, LedgerStats, Like, Post, PostId, User, UserId,
};
use crate::policy::LedgerPolicy;
use crate::traits::{Clock, SystemClock};

/// Position of a recorded entity inside its collection.
#[derive(Debug, Clone, Copy)]
enum Event {
    Post(usize),
    Comment(usize),
    Like(usize),
}

pub struct ActivityLedger {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    likes: Vec<Like>,
    /// Creation order across all three activity collections.
    journal: Vec<Event>,
    clock: Box<dyn Clock>,
    policy: LedgerPolicy,
    last_stamp: Option<DateTime<Utc>>,
}

impl Default for ActivityLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ActivityLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityLedger")
            .field("stats", &self.stats())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl ActivityLedger {
    /// An empty ledger stamped by the system clock with the default policy.
    pub fn new() -> Self {
        Self::with_policy(SystemClock, LedgerPolicy::default())
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::with_policy(clock, LedgerPolicy::default())
    }

    pub fn with_policy(clock: impl Clock + 'static, policy: LedgerPolicy) -> Self {
        Self {
            users: Vec::new(),
            posts: Vec::new(),
            comments: Vec::new(),
            likes: Vec::new(),
            journal: Vec::new(),
            clock: Box::new(clock),
            policy,
            last_stamp: None,
        }
    }

    pub fn policy(&self) -> LedgerPolicy {
        self.policy
    }

    // ── Mutations ──────────────────────────────────────────────────────────

    /// Records a user. Duplicate ids are accepted unless the policy rejects them.
    pub fn register_user(&mut self, user: User) -> Result<()> {
        if self.policy.reject_duplicate_user_ids && self.find_user(user.id).is_some() {
            warn!(user_id = user.id, "rejected duplicate user id");
            return Err(LedgerError::DuplicateUser { id: user.id });
        }

        debug!(user_id = user.id, name = %user.name, "registered user");
        self.users.push(user);
        Ok(())
    }

    pub fn create_post(&mut self, user: &User, content: impl Into<String>) -> Result<Post> {
        self.ensure_member(user)?;

        let post = Post {
            id: self.posts.len() as PostId + 1,
            user_id: user.id,
            content: content.into(),
            timestamp: self.stamp(),
        };

        self.journal.push(Event::Post(self.posts.len()));
        self.posts.push(post.clone());
        debug!(post_id = post.id, user_id = post.user_id, "created post");
        Ok(post)
    }

    /// Comments on an existing post. The post is checked before the author.
    pub fn add_comment(
        &mut self,
        user: &User,
        post_id: PostId,
        content: impl Into<String>,
    ) -> Result<Comment> {
        self.ensure_post(post_id)?;
        self.ensure_member(user)?;

        let comment = Comment {
            id: self.comments.len() as u64 + 1,
            user_id: user.id,
            post_id,
            content: content.into(),
            timestamp: self.stamp(),
        };

        self.journal.push(Event::Comment(self.comments.len()));
        self.comments.push(comment.clone());
        debug!(comment_id = comment.id, user_id = comment.user_id, post_id, "added comment");
        Ok(comment)
    }

    pub fn like_post(&mut self, user: &User, post_id: PostId) -> Result<Like> {
        self.ensure_post(post_id)?;
        self.ensure_member(user)?;

        if self
            .likes
            .iter()
            .any(|l| l.user_id == user.id && l.post_id == post_id)
        {
            warn!(user_id = user.id, post_id, "post already liked by user");
            return Err(LedgerError::DuplicateLike { user_id: user.id, post_id });
        }

        let like = Like {
            id: self.likes.len() as u64 + 1,
            user_id: user.id,
            post_id,
            timestamp: self.stamp(),
        };

        self.journal.push(Event::Like(self.likes.len()));
        self.likes.push(like.clone());
        debug!(like_id = like.id, user_id = like.user_id, post_id, "liked post");
        Ok(like)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Everything `user_id` authored, most recent first.
    ///
    /// Items sharing a timestamp come out latest-created first.
    pub fn activity_feed(&self, user_id: UserId) -> Result<Vec<Activity>> {
        if self.find_user(user_id).is_none() {
            warn!(user_id, "activity feed requested for unknown user");
            return Err(LedgerError::user_not_found(user_id));
        }

        let mut feed: Vec<Activity> = self
            .journal
            .iter()
            .rev()
            .filter_map(|event| self.resolve(*event))
            .filter(|activity| activity.user_id() == user_id)
            .collect();

        // Stable, so ties keep the reverse-journal order above.
        feed.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

        debug!(user_id, items = feed.len(), "assembled activity feed");
        Ok(feed)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn likes(&self) -> &[Like] {
        &self.likes
    }

    /// First registered user carrying `id`.
    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn comments_on(&self, post_id: PostId) -> Vec<&Comment> {
        self.comments.iter().filter(|c| c.post_id == post_id).collect()
    }

    pub fn likes_on(&self, post_id: PostId) -> Vec<&Like> {
        self.likes.iter().filter(|l| l.post_id == post_id).collect()
    }

    pub fn like_count(&self, post_id: PostId) -> usize {
        self.likes.iter().filter(|l| l.post_id == post_id).count()
    }

    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            users: self.users.len(),
            posts: self.posts.len(),
            comments: self.comments.len(),
            likes: self.likes.len(),
        }
    }

    // ── Internals ──────────────────────────────────────────────────────────

    fn ensure_member(&self, user: &User) -> Result<()> {
        let membership = self.policy.membership;
        if self.users.iter().any(|u| membership.matches(u, user)) {
            Ok(())
        } else {
            warn!(user_id = user.id, ?membership, "user is not registered");
            Err(LedgerError::user_not_found(user.id))
        }
    }

    fn ensure_post(&self, post_id: PostId) -> Result<()> {
        if self.find_post(post_id).is_some() {
            Ok(())
        } else {
            warn!(post_id, "post not found");
            Err(LedgerError::post_not_found(post_id))
        }
    }

    /// Samples the clock, never going backwards from the previous stamp.
    fn stamp(&mut self) -> DateTime<Utc> {
        let now = self.clock.now();
        let stamp = match self.last_stamp {
            Some(prev) if now < prev => prev,
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }

    fn resolve(&self, event: Event) -> Option<Activity> {
        match event {
            Event::Post(i) => self.posts.get(i).cloned().map(Activity::Post),
            Event::Comment(i) => self.comments.get(i).cloned().map(Activity::Comment),
            Event::Like(i) => self.likes.get(i).cloned().map(Activity::Like),
        }
    }
}
