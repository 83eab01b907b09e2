//! In-process group relay.
//!
//! DESIGN
//! ======
//! `GroupHub` keeps one unbounded channel per member. A send encodes the
//! frame once and pushes the bytes to every member except the sender, the
//! way board broadcasts exclude the originating client. Members drain their
//! inbox on their own frame tick, so delivery is asynchronous relative to
//! the sender but always observed on the receiver's thread.
//!
//! ERROR HANDLING
//! ==============
//! A member whose receiver was dropped is pruned on the next broadcast.
//! Inbound bytes that fail to decode are logged and skipped.

#[cfg(test)]
#[path = "group_test.rs"]
mod tests;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use frames::{Frame, decode_frame, encode_frame};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{GroupTransport, TransportError};

type Members = HashMap<String, mpsc::UnboundedSender<Vec<u8>>>;

#[derive(Clone, Debug)]
pub struct GroupHub {
    group_id: String,
    members: Arc<Mutex<Members>>,
}

impl GroupHub {
    #[must_use]
    pub fn new(group_id: Uuid) -> Self {
        Self { group_id: group_id.to_string(), members: Arc::new(Mutex::new(HashMap::new())) }
    }

    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Add a new member with a fresh peer id.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Poisoned`] if the membership lock is poisoned.
    pub fn join(&self) -> Result<GroupPeer, TransportError> {
        let peer_id = Uuid::new_v4().to_string();
        let (tx, rx) = mpsc::unbounded_channel();
        self.members
            .lock()
            .map_err(|_| TransportError::Poisoned)?
            .insert(peer_id.clone(), tx);
        info!(group_id = %self.group_id, %peer_id, "peer joined group");
        Ok(GroupPeer { hub: self.clone(), peer_id, inbox: rx })
    }

    /// Number of current members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.lock().map_or(0, |m| m.len())
    }

    fn broadcast(&self, from: &str, frame: &Frame) -> Result<usize, TransportError> {
        let mut members = self.members.lock().map_err(|_| TransportError::Poisoned)?;
        if !members.contains_key(from) {
            return Err(TransportError::NotJoined(from.to_owned()));
        }

        let bytes = encode_frame(frame);
        let mut delivered = 0;
        members.retain(|peer_id, tx| {
            if peer_id == from {
                return true;
            }
            if tx.send(bytes.clone()).is_err() {
                warn!(group_id = %self.group_id, %peer_id, "pruning member with closed inbox");
                return false;
            }
            delivered += 1;
            true
        });
        debug!(group_id = %self.group_id, syscall = %frame.syscall, delivered, "frame broadcast");
        Ok(delivered)
    }

    fn remove(&self, peer_id: &str) -> bool {
        self.members.lock().map_or(false, |mut m| m.remove(peer_id).is_some())
    }
}

/// One member's endpoint into a [`GroupHub`].
#[derive(Debug)]
pub struct GroupPeer {
    hub: GroupHub,
    peer_id: String,
    inbox: mpsc::UnboundedReceiver<Vec<u8>>,
}

impl GroupPeer {
    /// Leave the group. Frames already queued for this peer are discarded.
    pub fn leave(self) {
        if self.hub.remove(&self.peer_id) {
            info!(group_id = %self.hub.group_id, peer_id = %self.peer_id, "peer left group");
        }
    }
}

impl GroupTransport for GroupPeer {
    fn send(&self, frame: &Frame) -> Result<(), TransportError> {
        self.hub.broadcast(&self.peer_id, frame).map(|_| ())
    }

    fn poll(&mut self) -> Vec<Frame> {
        let mut frames = Vec::new();
        while let Ok(bytes) = self.inbox.try_recv() {
            match decode_frame(&bytes) {
                Ok(frame) => frames.push(frame),
                Err(e) => warn!(peer_id = %self.peer_id, error = %e, "dropping undecodable frame"),
            }
        }
        frames
    }

    fn group_id(&self) -> &str {
        &self.hub.group_id
    }

    fn peer_id(&self) -> &str {
        &self.peer_id
    }
}

impl Drop for GroupPeer {
    fn drop(&mut self) {
        self.hub.remove(&self.peer_id);
    }
}
