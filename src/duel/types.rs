//! Core domain types for the duel.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// A participant's choice in the duel.
///
/// The `strum` tokens double as the canonical wire spelling: lowercase,
/// singular `scissor`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Move {
    /// Crushes scissor.
    Rock,
    /// Wraps rock.
    Paper,
    /// Cuts paper.
    Scissor,
}

impl Move {
    /// Parses one of the canonical tokens `rock`, `paper`, `scissor`.
    ///
    /// Anything else yields `None`. The parse is total and never panics,
    /// so malformed wire input degrades to an absent field.
    pub fn parse(token: &str) -> Option<Self> {
        Self::from_str(token).ok()
    }
}

/// One of the two fixed sides of a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Opens the duel with the first move.
    Attacker,
    /// Answers the attacker's move.
    Defender,
}

impl Role {
    /// Returns the opposite side.
    pub fn opponent(self) -> Self {
        match self {
            Role::Attacker => Role::Defender,
            Role::Defender => Role::Attacker,
        }
    }
}
