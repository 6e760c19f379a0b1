//! First-class submission actions and the duel error type.
//!
//! Submissions are domain events, not side effects. They carry the acting
//! side together with its move and can be validated, serialized, and
//! logged independently of execution.

use super::types::{Move, Role};
use serde::{Deserialize, Serialize};

/// A submission in the duel: one side committing to a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Submission {
    /// The side making the submission.
    pub role: Role,
    /// The move being committed.
    pub choice: Move,
}

impl Submission {
    /// Creates a new submission.
    pub fn new(role: Role, choice: Move) -> Self {
        Self { role, choice }
    }

    /// Returns the submitting side.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the committed move.
    pub fn choice(&self) -> Move {
        self.choice
    }
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.role, self.choice)
    }
}

/// Error that can occur when advancing a duel.
///
/// Every variant signals a collaborator bug: the caller acted outside the
/// one legal action for the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DuelError {
    /// The acting side is not the legal next actor for the current phase.
    #[display("It's not the {}'s turn to act", _0)]
    OutOfTurn(Role),

    /// Both moves are already in; no further submissions are legal.
    #[display("Duel is already resolved")]
    DuelOver,

    /// Finalization requires both moves to be present.
    #[display("Duel is not resolved yet")]
    NotResolved,

    /// The duel was already marked official.
    #[display("Duel is already finalized")]
    AlreadyFinalized,
}

impl std::error::Error for DuelError {}
