//! The duel state machine.
//!
//! Every value is an immutable snapshot. Submitting a move or finalizing
//! returns the successor snapshot instead of mutating in place, so each
//! outbound message carries one complete state and history is never
//! rewritten.

use super::action::{DuelError, Submission};
use super::phases::{Outcome, Phase};
use super::rules;
use super::types::{Move, Role};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Full protocol state for one round of play between two parties.
///
/// The variants encode which moves have been submitted, so the combination
/// no legal play can reach (a defender move without an attacker move) and
/// a finalized flag ahead of both moves cannot be represented at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Duel {
    /// No moves yet.
    Opening,
    /// The attacker has committed; waiting on the defender.
    AwaitingResponse {
        /// The attacker's move.
        attacker: Move,
    },
    /// Both moves are in.
    Resolved {
        /// The attacker's move.
        attacker: Move,
        /// The defender's move.
        defender: Move,
        /// Whether a participant marked the duel officially closed.
        finalized: bool,
    },
}

impl Duel {
    /// Creates a fresh duel with no moves submitted.
    pub fn new() -> Self {
        Duel::Opening
    }

    /// Submits the next move, returning the successor snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DuelError::OutOfTurn`] when the submitting side is not
    /// the legal next actor, and [`DuelError::DuelOver`] once both moves
    /// are in.
    #[instrument]
    pub fn submit(self, action: Submission) -> Result<Self, DuelError> {
        match (self, action.role) {
            (Duel::Opening, Role::Attacker) => Ok(Duel::AwaitingResponse {
                attacker: action.choice,
            }),
            (Duel::Opening, Role::Defender) => Err(DuelError::OutOfTurn(Role::Defender)),
            (Duel::AwaitingResponse { attacker }, Role::Defender) => Ok(Duel::Resolved {
                attacker,
                defender: action.choice,
                finalized: false,
            }),
            (Duel::AwaitingResponse { .. }, Role::Attacker) => {
                Err(DuelError::OutOfTurn(Role::Attacker))
            }
            (Duel::Resolved { .. }, _) => Err(DuelError::DuelOver),
        }
    }

    /// Marks a resolved duel as officially closed.
    ///
    /// Finalizing is a metadata act: it never changes the computed result.
    ///
    /// # Errors
    ///
    /// Returns [`DuelError::NotResolved`] before both moves are in, and
    /// [`DuelError::AlreadyFinalized`] when the flag was already set.
    #[instrument]
    pub fn finalize(self) -> Result<Self, DuelError> {
        match self {
            Duel::Resolved {
                finalized: true, ..
            } => Err(DuelError::AlreadyFinalized),
            Duel::Resolved {
                attacker, defender, ..
            } => Ok(Duel::Resolved {
                attacker,
                defender,
                finalized: true,
            }),
            Duel::Opening | Duel::AwaitingResponse { .. } => Err(DuelError::NotResolved),
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        match self {
            Duel::Opening => Phase::Opening,
            Duel::AwaitingResponse { .. } => Phase::AwaitingResponse,
            Duel::Resolved { .. } => Phase::Resolved,
        }
    }

    /// Computes the outcome fresh from the stored moves.
    pub fn result(&self) -> Outcome {
        match self {
            Duel::Resolved {
                attacker, defender, ..
            } => rules::decide(*attacker, *defender),
            Duel::Opening | Duel::AwaitingResponse { .. } => Outcome::Pending,
        }
    }

    /// Returns the side expected to act next, if any.
    pub fn turn(&self) -> Option<Role> {
        match self {
            Duel::Opening => Some(Role::Attacker),
            Duel::AwaitingResponse { .. } => Some(Role::Defender),
            Duel::Resolved { .. } => None,
        }
    }

    /// Returns the attacker's move, if submitted.
    pub fn attacker_move(&self) -> Option<Move> {
        match self {
            Duel::Opening => None,
            Duel::AwaitingResponse { attacker } | Duel::Resolved { attacker, .. } => {
                Some(*attacker)
            }
        }
    }

    /// Returns the defender's move, if submitted.
    pub fn defender_move(&self) -> Option<Move> {
        match self {
            Duel::Resolved { defender, .. } => Some(*defender),
            Duel::Opening | Duel::AwaitingResponse { .. } => None,
        }
    }

    /// Returns true once a participant marked the duel official.
    pub fn finalized(&self) -> bool {
        matches!(
            self,
            Duel::Resolved {
                finalized: true,
                ..
            }
        )
    }

    /// Reassembles a duel from individually decoded fields.
    ///
    /// Returns `None` for the combination no legal play can reach: a
    /// defender move without an attacker move.
    pub(super) fn from_parts(
        attacker: Option<Move>,
        defender: Option<Move>,
        finalized: bool,
    ) -> Option<Self> {
        match (attacker, defender) {
            (None, Some(_)) => None,
            (None, None) => Some(Duel::Opening),
            (Some(attacker), None) => Some(Duel::AwaitingResponse { attacker }),
            (Some(attacker), Some(defender)) => Some(Duel::Resolved {
                attacker,
                defender,
                finalized,
            }),
        }
    }
}

impl Default for Duel {
    fn default() -> Self {
        Self::new()
    }
}
