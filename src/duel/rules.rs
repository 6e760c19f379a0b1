//! Outcome rules for the duel.
//!
//! Pure functions over submitted moves, kept apart from state storage.

use super::phases::Outcome;
use super::types::{Move, Role};
use tracing::instrument;

/// Returns true if `attack` beats `defense`.
///
/// Rock crushes scissor, scissor cuts paper, paper wraps rock.
#[instrument]
pub(super) fn beats(attack: Move, defense: Move) -> bool {
    matches!(
        (attack, defense),
        (Move::Rock, Move::Scissor) | (Move::Scissor, Move::Paper) | (Move::Paper, Move::Rock)
    )
}

/// Decides the outcome between two present moves.
#[instrument]
pub(super) fn decide(attack: Move, defense: Move) -> Outcome {
    if attack == defense {
        Outcome::Draw
    } else if beats(attack, defense) {
        Outcome::Winner(Role::Attacker)
    } else {
        Outcome::Winner(Role::Defender)
    }
}
