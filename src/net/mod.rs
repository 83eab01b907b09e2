//! Group transport seam between widgets and whatever carries their frames.
//!
//! Widgets only see [`GroupTransport`]: `send` broadcasts a frame to the
//! other members of the group, `poll` drains frames that arrived since the
//! last frame tick. Delivery is fire-and-forget with no acknowledgment.

pub mod group;

pub use group::{GroupHub, GroupPeer};

use frames::Frame;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("peer {0} is no longer a member of the group")]
    NotJoined(String),
    #[error("group membership lock poisoned")]
    Poisoned,
}

pub trait GroupTransport {
    /// Broadcast `frame` to every other member of the group.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if this peer can no longer reach the group.
    fn send(&self, frame: &Frame) -> Result<(), TransportError>;

    /// Frames received since the last poll, in arrival order.
    fn poll(&mut self) -> Vec<Frame>;

    /// Group this transport is joined to.
    fn group_id(&self) -> &str;

    /// This peer's identity within the group.
    fn peer_id(&self) -> &str;
}
