//! Restart/timer messages exchanged by the group.
//!
//! On the wire a message is the flat object `{ "flag": bool, "time": number }`.
//! `flag = true` is a reset and `time` is ignored; `flag = false` carries a new
//! countdown duration in `time`. Received durations are not range-checked.

#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use frames::Frame;
use serde::{Deserialize, Serialize};

/// Syscall carried by every restart-menu frame.
pub const SESSION_RESTART_SYSCALL: &str = "session:restart";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionMessage {
    /// Reinitialize the surface, the timer display and the paired controls.
    Reset,
    /// Replace the countdown duration.
    TimeUpdate(f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct WireMessage {
    #[serde(default)]
    flag: bool,
    #[serde(default)]
    time: f32,
}

impl From<SessionMessage> for WireMessage {
    fn from(message: SessionMessage) -> Self {
        match message {
            SessionMessage::Reset => Self { flag: true, time: 0.0 },
            SessionMessage::TimeUpdate(time) => Self { flag: false, time },
        }
    }
}

impl From<WireMessage> for SessionMessage {
    fn from(wire: WireMessage) -> Self {
        if wire.flag { Self::Reset } else { Self::TimeUpdate(wire.time) }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("unexpected syscall for restart menu: {0}")]
    UnexpectedSyscall(String),
    #[error("malformed restart message: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionMessage {
    /// Wire JSON object for this message.
    #[must_use]
    pub fn to_json(self) -> serde_json::Value {
        let wire = WireMessage::from(self);
        serde_json::json!({ "flag": wire.flag, "time": wire.time })
    }

    /// Parse a wire JSON object.
    ///
    /// Missing fields take their defaults (`false`, `0`).
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::Json`] when `flag` or `time` is mistyped.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, MessageError> {
        let wire = WireMessage::deserialize(value)?;
        Ok(wire.into())
    }

    /// Wrap this message in a frame addressed to `group_id`.
    #[must_use]
    pub fn to_frame(self, group_id: &str, from: &str) -> Frame {
        Frame::new(SESSION_RESTART_SYSCALL, group_id, Some(from), self.to_json())
    }

    /// Extract a message from a received frame.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::UnexpectedSyscall`] for frames meant for another
    /// widget and [`MessageError::Json`] for malformed payloads.
    pub fn from_frame(frame: &Frame) -> Result<Self, MessageError> {
        if frame.syscall != SESSION_RESTART_SYSCALL {
            return Err(MessageError::UnexpectedSyscall(frame.syscall.clone()));
        }
        Self::from_json(&frame.data)
    }
}
