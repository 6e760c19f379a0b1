//! Phase and outcome reporting for a duel.

use super::types::Role;
use serde::{Deserialize, Serialize};

/// Phase of a duel, derived from which moves are present.
///
/// Phases progress strictly forward: `Opening` to `AwaitingResponse` to
/// `Resolved`, with no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No moves yet. The attacker opens.
    Opening,
    /// The attacker has committed. The defender answers.
    AwaitingResponse,
    /// Both moves are in. Only finalization remains.
    Resolved,
}

/// Outcome of a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One or both moves are still missing.
    Pending,
    /// One side beat the other.
    Winner(Role),
    /// Both sides played the same move.
    Draw,
}

impl Outcome {
    /// Returns the winning side, if there is one.
    pub fn winner(&self) -> Option<Role> {
        match self {
            Outcome::Winner(role) => Some(*role),
            Outcome::Pending | Outcome::Draw => None,
        }
    }

    /// Returns true if the duel tied.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true if the duel is still undecided.
    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Pending => write!(f, "Still fighting it out"),
            Outcome::Winner(role) => write!(f, "The {} wins", role),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
