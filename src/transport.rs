//! Delivery seam between the protocol core and its hosting messenger.

use anyhow::Result;
use url::Url;

/// Trait for channels that can carry a duel link to the other participant.
///
/// The core only produces encoded links; attaching one to an outbound
/// message is the messenger's job, and the core never calls this trait
/// itself. Implementations must hand each participant links in a
/// consistent order, and a receiver always treats the most recently
/// received link as authoritative.
pub trait LinkTransport {
    /// Delivers one encoded snapshot to the other participant.
    fn deliver(&mut self, link: &Url) -> Result<()>;
}
