//! Session turn state machine.
//!
//! A session alternates between two states per turn: idle while waiting
//! for input, processing while a submission is being interpreted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The turn-taking state of a conversation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Waiting for the next submission.
    #[default]
    Idle,

    /// A submission is being interpreted; further submissions are rejected
    /// until the turn completes.
    Processing,
}

impl SessionState {
    /// Returns true if a new submission can be accepted in this state.
    pub fn accepts_submission(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a submission is currently being interpreted.
    pub fn is_processing(&self) -> bool {
        matches!(self, Self::Processing)
    }
}

impl StateMachine for SessionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionState::*;
        matches!(
            (self, target),
            // Accepted submission starts a turn
            (Idle, Processing) |
            // Extraction completed, turn finished
            (Processing, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionState::*;
        match self {
            Idle => vec![Processing],
            Processing => vec![Idle],
        }
    }
}
