//! Session restart/timer widget and its group messages.

pub mod message;
pub mod restart;

pub use message::{MessageError, SESSION_RESTART_SYSCALL, SessionMessage};
pub use restart::{DrawingSurface, PresentationFlag, Reinitialize, RestartMenu, RestartWiring, Shared};

use crate::net::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Message(#[from] MessageError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
