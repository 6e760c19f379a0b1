//! Decider library - rock/paper/scissors duels carried inside shareable links.
//!
//! The entire state of a duel travels as a URL embedded in chat messages.
//! Each participant's client decodes the incoming link, asks the duel for
//! its phase and outcome to know what is legal next, and encodes an updated
//! link when the local user acts.
//!
//! # Architecture
//!
//! - **Duel**: finite-state turn machine over two submitted moves
//! - **Codec**: lossless mapping between a duel and its link
//! - **Transport**: capability seam the hosting messenger implements
//!
//! # Example
//!
//! ```
//! use decider::{codec, Duel, Move, Role, Submission};
//!
//! # fn example() -> Result<(), decider::DuelError> {
//! let duel = Duel::new().submit(Submission::new(Role::Attacker, Move::Rock))?;
//! let link = codec::encode(&duel);
//! assert_eq!(codec::decode(&link), Some(duel));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod duel;
mod transport;

// Crate-level exports - link codec
pub use duel::codec;

// Crate-level exports - duel types
pub use duel::{Duel, DuelError, Move, Outcome, Phase, Role, Submission};

// Crate-level exports - transport seam
pub use transport::LinkTransport;
