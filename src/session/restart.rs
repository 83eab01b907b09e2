//! Restart/timer widget shared by every peer in a session.
//!
//! DESIGN
//! ======
//! Collaborators are injected at construction instead of being looked up by
//! name: the drawing surface (mutable `timer`, reinitializable), the timer
//! display, up to two optional paired controls, the presentation-mode flag
//! and the group transport.
//!
//! Echo suppression is carried by [`ChangeSource`]. A local slider edit is
//! `Local` and is broadcast; a duration applied from a peer is `Remote` and
//! is only applied. There is no shared "updating" flag to get out of sync.
//!
//! Last message applied wins. There is no ordering, de-duplication or replay
//! protection beyond what the transport provides.

#[cfg(test)]
#[path = "restart_test.rs"]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;

use frames::Frame;
use tracing::{debug, info, warn};

use super::SessionError;
use super::message::SessionMessage;
use crate::config::{SessionConfig, TIMER_MAX_SECS, TIMER_MIN_SECS};
use crate::net::GroupTransport;
use crate::slider::{ChangeSource, Slider, ValueChanged};

/// Scene object shared between widgets on one peer.
pub type Shared<T> = Rc<RefCell<T>>;

/// Anything that can be put back into its initial state.
pub trait Reinitialize {
    fn reinitialize(&mut self);
}

/// The collaborative drawing surface.
pub trait DrawingSurface: Reinitialize {
    /// Whole-second countdown duration used by the surface.
    fn set_timer(&mut self, seconds: f32);
}

/// Externally owned "presentation mode active" flag.
pub trait PresentationFlag {
    fn is_active(&self) -> bool;
}

impl PresentationFlag for std::cell::Cell<bool> {
    fn is_active(&self) -> bool {
        self.get()
    }
}

/// Collaborators the widget drives.
pub struct RestartWiring {
    pub surface: Shared<dyn DrawingSurface>,
    pub timer: Shared<dyn Reinitialize>,
    pub left: Option<Shared<dyn Reinitialize>>,
    pub right: Option<Shared<dyn Reinitialize>>,
    pub presentation: Rc<dyn PresentationFlag>,
}

pub struct RestartMenu<T: GroupTransport> {
    time: Slider,
    wiring: RestartWiring,
    transport: T,
}

impl<T: GroupTransport> RestartMenu<T> {
    /// Create the widget with the timer slider in [10, 300].
    ///
    /// The slider starts hidden; the first [`RestartMenu::tick`] syncs it
    /// with presentation mode.
    #[must_use]
    pub fn new(config: &SessionConfig, wiring: RestartWiring, transport: T) -> Self {
        let mut time = Slider::new(TIMER_MIN_SECS, TIMER_MAX_SECS, config.timer_default_secs);
        time.set_active(false);
        Self { time, wiring, transport }
    }

    /// Countdown duration currently shown by the slider.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time.value()
    }

    #[must_use]
    pub fn slider(&self) -> &Slider {
        &self.time
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Local edit of the timer slider: apply to the surface, then broadcast.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Transport`] if the broadcast could not be sent.
    /// The local surface is updated either way.
    pub fn edit_time(&mut self, value: f32) -> Result<(), SessionError> {
        match self.time.set_value(value, ChangeSource::Local) {
            Some(change) => self.on_time_changed(change),
            None => Ok(()),
        }
    }

    /// Local reset button: reset this peer, then tell the group.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Transport`] if the broadcast could not be sent.
    pub fn press_reset(&mut self) -> Result<(), SessionError> {
        self.reset();
        self.broadcast(SessionMessage::Reset)
    }

    /// Apply a message received from the group. Never rebroadcasts.
    pub fn process_message(&mut self, message: SessionMessage) {
        match message {
            SessionMessage::Reset => self.reset(),
            SessionMessage::TimeUpdate(value) => {
                // The surface takes the sender's value as-is; only the slider clamps.
                self.apply_surface_timer(value);
                if let Some(change) = self.time.set_value(value, ChangeSource::Remote) {
                    if let Err(e) = self.on_time_changed(change) {
                        warn!(error = %e, "remote time update failed");
                    }
                }
            }
        }
    }

    /// Decode and apply a received frame.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Message`] for frames that are not restart
    /// messages or carry a malformed payload.
    pub fn handle_frame(&mut self, frame: &Frame) -> Result<(), SessionError> {
        let message = SessionMessage::from_frame(frame)?;
        self.process_message(message);
        Ok(())
    }

    /// Per-frame update: apply everything that arrived, then show the timer
    /// slider only while presentation mode is active.
    pub fn tick(&mut self) {
        for frame in self.transport.poll() {
            if let Err(e) = self.handle_frame(&frame) {
                warn!(frame_id = %frame.id, syscall = %frame.syscall, error = %e, "ignoring frame");
            }
        }
        self.time.set_active(self.wiring.presentation.is_active());
    }

    /// Every timer slider change lands here. Only local edits are shared
    /// with the group; remote ones were already applied by the sender.
    fn on_time_changed(&mut self, change: ValueChanged) -> Result<(), SessionError> {
        match change.source {
            ChangeSource::Local => {
                self.apply_surface_timer(change.value);
                self.broadcast(SessionMessage::TimeUpdate(change.value))
            }
            ChangeSource::Remote => {
                debug!(time = change.value, "applied remote time update");
                Ok(())
            }
        }
    }

    fn apply_surface_timer(&self, value: f32) {
        self.wiring.surface.borrow_mut().set_timer(value.round_ties_even());
    }

    fn reset(&mut self) {
        self.wiring.surface.borrow_mut().reinitialize();
        self.wiring.timer.borrow_mut().reinitialize();
        for control in [&self.wiring.left, &self.wiring.right].into_iter().flatten() {
            control.borrow_mut().reinitialize();
        }
        info!(group_id = %self.transport.group_id(), "session reset");
    }

    fn broadcast(&self, message: SessionMessage) -> Result<(), SessionError> {
        let frame = message.to_frame(self.transport.group_id(), self.transport.peer_id());
        self.transport.send(&frame).map_err(|e| {
            warn!(error = %e, "restart broadcast failed");
            SessionError::from(e)
        })
    }
}
