#![warn(
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

//! Session-aware driver for the admissions script.
//!
//! Front ends hand a `(session_id, message)` pair to the
//! [`ConversationManager`], which loads or creates the session, runs one
//! engine step, stores the result and returns the reply.

mod manager;

pub use manager::{ConversationError, ConversationManager, TurnResult};
