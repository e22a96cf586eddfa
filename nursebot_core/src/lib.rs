#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Conversation engine for the nursing-college admissions bot.
//!
//! The engine is a fixed script: each user message is classified as
//! affirmative, negative or unclear, and the session moves through the
//! admission topics according to the [`transition`] table. Replies come
//! from a static Hindi/English message bank.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod classify;
pub mod engine;
pub mod language;
pub mod messages;
pub mod stage;
pub mod transition;

pub use classify::{Outcome, classify};
pub use engine::{Turn, advance};
pub use language::Language;
pub use messages::{MessageKey, message};
pub use stage::Stage;
pub use transition::{Capture, Transition, transition};

/// Per-user conversation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub stage: Stage,
    pub admission_interested: Option<bool>,
    pub biology_studied: Option<bool>,
    /// Language of the most recent message.
    pub language: Option<Language>,
    /// Messages processed so far.
    pub turns: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            stage: Stage::Initial,
            admission_interested: None,
            biology_studied: None,
            language: None,
            turns: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record that a message was processed.
    pub fn touch(&mut self) {
        self.turns += 1;
        self.updated_at = Utc::now();
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.stage.is_terminal()
    }
}

/// Keyed store of sessions.
///
/// Lookups of unknown ids are not errors: `get_or_create` makes a fresh
/// session. Implementations decide whether `get_or_create` stores the new
/// session immediately; callers always `save` after a turn.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn get(&self, id: &str) -> anyhow::Result<Option<Session>>;
    async fn get_or_create(&self, id: &str) -> anyhow::Result<Session>;
    async fn save(&self, session: Session) -> anyhow::Result<()>;
    /// Remove a session. Returns whether it existed.
    async fn delete(&self, id: &str) -> anyhow::Result<bool>;
    async fn list(&self) -> anyhow::Result<Vec<String>>;
}

#[async_trait]
impl<T: SessionStorage + ?Sized> SessionStorage for Arc<T> {
    async fn get(&self, id: &str) -> anyhow::Result<Option<Session>> {
        (**self).get(id).await
    }

    async fn get_or_create(&self, id: &str) -> anyhow::Result<Session> {
        (**self).get_or_create(id).await
    }

    async fn save(&self, session: Session) -> anyhow::Result<()> {
        (**self).save(session).await
    }

    async fn delete(&self, id: &str) -> anyhow::Result<bool> {
        (**self).delete(id).await
    }

    async fn list(&self) -> anyhow::Result<Vec<String>> {
        (**self).list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new("abc");
        assert_eq!(session.id, "abc");
        assert_eq!(session.stage, Stage::Initial);
        assert_eq!(session.admission_interested, None);
        assert_eq!(session.biology_studied, None);
        assert_eq!(session.language, None);
        assert_eq!(session.turns, 0);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_touch_counts_turns() {
        let mut session = Session::new("abc");
        session.touch();
        session.touch();
        assert_eq!(session.turns, 2);
        assert!(session.updated_at >= session.created_at);
    }
}
