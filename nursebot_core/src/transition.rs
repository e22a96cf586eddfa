//! The conversation transition table.
//!
//! `transition` is a pure function of (stage, outcome). The whole matrix can
//! be listed with [`table`] for inspection and reporting.

use serde::{Deserialize, Serialize};

use crate::{MessageKey, Outcome, Stage};

/// An answer recorded on the session as a side effect of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capture {
    AdmissionInterested(bool),
    BiologyStudied(bool),
}

/// Result of looking up one cell of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub next: Stage,
    pub message: MessageKey,
    pub capture: Option<Capture>,
}

impl Transition {
    const fn to(next: Stage, message: MessageKey) -> Self {
        Self {
            next,
            message,
            capture: None,
        }
    }

    const fn capturing(mut self, capture: Capture) -> Self {
        self.capture = Some(capture);
        self
    }

    /// Whether this transition leaves the stage unchanged.
    #[must_use]
    pub fn is_self_loop(&self, from: Stage) -> bool {
        self.next == from
    }
}

/// Look up the transition for `outcome` at `stage`.
#[must_use]
pub const fn transition(stage: Stage, outcome: Outcome) -> Transition {
    match (stage, outcome) {
        // The greeting advances on anything.
        (Stage::Initial, _) => Transition::to(
            Stage::AdmissionInterest,
            MessageKey::Prompt(Stage::AdmissionInterest),
        ),

        (Stage::AdmissionInterest, Outcome::Affirmative) => Transition::to(
            Stage::BiologyCheck,
            MessageKey::Prompt(Stage::BiologyCheck),
        )
        .capturing(Capture::AdmissionInterested(true)),
        (Stage::AdmissionInterest, Outcome::Negative) => {
            Transition::to(Stage::End, MessageKey::End)
                .capturing(Capture::AdmissionInterested(false))
        }

        (Stage::BiologyCheck, Outcome::Affirmative) => Transition::to(
            Stage::ProgramDetails,
            MessageKey::Prompt(Stage::ProgramDetails),
        )
        .capturing(Capture::BiologyStudied(true)),
        // Biology is a hard prerequisite: stay on the question.
        (Stage::BiologyCheck, Outcome::Negative) => {
            Transition::to(Stage::BiologyCheck, MessageKey::BiologyRequired)
                .capturing(Capture::BiologyStudied(false))
        }

        (
            Stage::ProgramDetails
            | Stage::FeeStructure
            | Stage::HostelFacilities
            | Stage::CollegeLocation
            | Stage::Recognition
            | Stage::ClinicalTraining
            | Stage::Scholarship
            | Stage::TotalSeats,
            Outcome::Affirmative,
        ) => Transition::to(stage.next(), MessageKey::Prompt(stage.next())),
        (
            Stage::ProgramDetails
            | Stage::FeeStructure
            | Stage::HostelFacilities
            | Stage::CollegeLocation
            | Stage::Recognition
            | Stage::ClinicalTraining
            | Stage::Scholarship
            | Stage::TotalSeats,
            Outcome::Negative,
        ) => Transition::to(Stage::End, MessageKey::End),

        (
            Stage::AdmissionInterest
            | Stage::BiologyCheck
            | Stage::ProgramDetails
            | Stage::FeeStructure
            | Stage::HostelFacilities
            | Stage::CollegeLocation
            | Stage::Recognition
            | Stage::ClinicalTraining
            | Stage::Scholarship
            | Stage::TotalSeats,
            Outcome::Unclear,
        ) => Transition::to(stage, MessageKey::Clarification(stage)),

        (Stage::Eligibility, _) => Transition::to(Stage::End, MessageKey::Final),
        (Stage::End, _) => Transition::to(Stage::End, MessageKey::End),
    }
}

/// Every (stage, outcome) cell of the table, in script order.
#[must_use]
pub fn table() -> Vec<(Stage, Outcome, Transition)> {
    Stage::ALL
        .into_iter()
        .flat_map(|stage| {
            Outcome::ALL
                .into_iter()
                .map(move |outcome| (stage, outcome, transition(stage, outcome)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_stage() -> impl Strategy<Value = Stage> {
        proptest::sample::select(Stage::ALL.to_vec())
    }

    fn arb_outcome() -> impl Strategy<Value = Outcome> {
        prop_oneof![
            Just(Outcome::Affirmative),
            Just(Outcome::Negative),
            Just(Outcome::Unclear),
        ]
    }

    #[test]
    fn test_table_is_complete() {
        assert_eq!(table().len(), Stage::ALL.len() * Outcome::ALL.len());
    }

    #[test]
    fn test_happy_path_visits_every_topic() {
        let mut stage = Stage::Initial;
        let mut visited = vec![stage];
        while stage != Stage::End {
            stage = transition(stage, Outcome::Affirmative).next;
            visited.push(stage);
        }
        assert_eq!(visited, Stage::ALL.to_vec());
    }

    #[test]
    fn test_only_biology_rejection_captures_false_and_loops() {
        let t = transition(Stage::BiologyCheck, Outcome::Negative);
        assert!(t.is_self_loop(Stage::BiologyCheck));
        assert_eq!(t.message, MessageKey::BiologyRequired);
        assert_eq!(t.capture, Some(Capture::BiologyStudied(false)));
    }

    #[test]
    fn test_captures() {
        assert_eq!(
            transition(Stage::AdmissionInterest, Outcome::Affirmative).capture,
            Some(Capture::AdmissionInterested(true))
        );
        assert_eq!(
            transition(Stage::AdmissionInterest, Outcome::Negative).capture,
            Some(Capture::AdmissionInterested(false))
        );
        assert_eq!(
            transition(Stage::BiologyCheck, Outcome::Affirmative).capture,
            Some(Capture::BiologyStudied(true))
        );
        let captured: Vec<_> = table()
            .into_iter()
            .filter(|(_, _, t)| t.capture.is_some())
            .collect();
        assert_eq!(captured.len(), 4);
    }

    #[test]
    fn test_negative_exits_from_topics() {
        for stage in Stage::ALL
            .into_iter()
            .filter(|s| *s >= Stage::ProgramDetails && *s <= Stage::TotalSeats)
        {
            let t = transition(stage, Outcome::Negative);
            assert_eq!(t.next, Stage::End, "{stage}");
            assert_eq!(t.message, MessageKey::End);
        }
    }

    #[test]
    fn test_eligibility_always_closes() {
        for outcome in Outcome::ALL {
            let t = transition(Stage::Eligibility, outcome);
            assert_eq!(t.next, Stage::End);
            assert_eq!(t.message, MessageKey::Final);
        }
    }

    proptest! {
        #[test]
        fn stage_never_regresses(stage in arb_stage(), outcome in arb_outcome()) {
            prop_assert!(transition(stage, outcome).next >= stage);
        }

        #[test]
        fn self_loops_are_unclear_biology_or_end(stage in arb_stage(), outcome in arb_outcome()) {
            let t = transition(stage, outcome);
            if t.is_self_loop(stage) {
                prop_assert!(
                    outcome == Outcome::Unclear
                        || stage == Stage::End
                        || (stage == Stage::BiologyCheck && outcome == Outcome::Negative)
                );
            }
        }

        #[test]
        fn end_is_absorbing(outcome in arb_outcome()) {
            let t = transition(Stage::End, outcome);
            prop_assert_eq!(t.next, Stage::End);
            prop_assert_eq!(t.message, MessageKey::End);
        }
    }
}
