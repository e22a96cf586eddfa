//! One conversation step: detect, classify, transition, reply.

use serde::Serialize;
use tracing::debug;

use crate::transition::{Capture, transition};
use crate::{Language, MessageKey, Outcome, Session, Stage, classify, message};

/// Everything that happened during one call to [`advance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub language: Language,
    pub outcome: Outcome,
    pub from: Stage,
    pub to: Stage,
    pub message: MessageKey,
    pub response: &'static str,
}

/// Advance `session` by one user message.
///
/// Never fails: empty or unrecognised text classifies as unclear and gets a
/// clarification. The detected language replaces whatever the session had.
#[must_use]
pub fn advance(mut session: Session, text: &str) -> (Session, Turn) {
    let language = Language::detect(text);
    let outcome = classify(text);
    let from = session.stage;
    let step = transition(from, outcome);

    match step.capture {
        Some(Capture::AdmissionInterested(v)) => session.admission_interested = Some(v),
        Some(Capture::BiologyStudied(v)) => session.biology_studied = Some(v),
        None => {}
    }

    session.stage = step.next;
    session.language = Some(language);
    session.touch();

    debug!(
        "Session {}: {from} --{outcome}--> {} ({language})",
        session.id, step.next
    );

    let turn = Turn {
        language,
        outcome,
        from,
        to: step.next,
        message: step.message,
        response: message(step.message, language),
    };

    (session, turn)
}
