//! Collaborative whiteboard widgets: the color/brush panel and the session
//! restart/timer menu, independent of any UI toolkit.
//!
//! The panel publishes color and brush-size changes to drawing canvases
//! through [`signal::Emitter`]. The restart menu keeps a countdown duration
//! and reset signal in sync across a group of peers over a
//! [`net::GroupTransport`].

pub mod color;
pub mod config;
pub mod control_panel;
pub mod gradient;
pub mod net;
pub mod palette;
pub mod session;
pub mod signal;
pub mod slider;

pub use color::{Color, Color32, Hsv};
pub use config::{ConfigError, PanelConfig, SessionConfig, WidgetConfig};
pub use control_panel::ControlPanel;
pub use gradient::Channel;
pub use palette::Palette;
pub use session::{RestartMenu, SessionError, SessionMessage};
pub use slider::{ChangeSource, Slider};
