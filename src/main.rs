//! Headless two-peer session: drives both widgets through a scripted
//! sequence of edits over an in-process group and logs what each peer sees.

use std::cell::{Cell, RefCell};
use std::process::ExitCode;
use std::rc::Rc;

use tracing::{error, info};
use uuid::Uuid;
use whiteboard::net::{GroupHub, GroupPeer};
use whiteboard::session::{DrawingSurface, Reinitialize, RestartWiring, Shared};
use whiteboard::{Channel, ControlPanel, RestartMenu, SessionError, WidgetConfig};

struct Board {
    name: &'static str,
    timer: f32,
}

impl Reinitialize for Board {
    fn reinitialize(&mut self) {
        info!(board = self.name, "board cleared");
    }
}

impl DrawingSurface for Board {
    fn set_timer(&mut self, seconds: f32) {
        self.timer = seconds;
        info!(board = self.name, seconds, "board timer set");
    }
}

struct Countdown(&'static str);

impl Reinitialize for Countdown {
    fn reinitialize(&mut self) {
        info!(timer = self.0, "countdown restarted");
    }
}

struct Peer {
    panel: ControlPanel,
    menu: RestartMenu<GroupPeer>,
    board: Shared<Board>,
}

fn peer(name: &'static str, config: &WidgetConfig, hub: &GroupHub, presenting: bool) -> Result<Peer, SessionError> {
    let board = Rc::new(RefCell::new(Board { name, timer: 0.0 }));
    let wiring = RestartWiring {
        surface: board.clone(),
        timer: Rc::new(RefCell::new(Countdown(name))),
        left: None,
        right: None,
        presentation: Rc::new(Cell::new(presenting)),
    };
    let menu = RestartMenu::new(&config.session, wiring, hub.join()?);

    let panel = ControlPanel::new(&config.panel);
    panel.on_color_changed(move |color| info!(peer = name, color = %color.to_hex(), "brush color"));
    panel.on_size_changed(move |size| info!(peer = name, size, "brush size"));

    Ok(Peer { panel, menu, board })
}

fn run(config: &WidgetConfig) -> Result<(), SessionError> {
    let hub = GroupHub::new(Uuid::new_v4());
    let mut alice = peer("alice", config, &hub, true)?;
    let mut bob = peer("bob", config, &hub, false)?;

    alice.panel.set_channel(Channel::Saturation, 1.0);
    alice.panel.set_channel(Channel::Value, 1.0);
    alice.panel.save_current_color();
    alice.panel.set_brush_size(3.0);
    alice.panel.use_eraser();
    alice.panel.use_brush();

    alice.menu.edit_time(90.0)?;
    alice.menu.tick();
    bob.menu.tick();
    info!(
        alice = alice.board.borrow().timer,
        bob = bob.board.borrow().timer,
        bob_slider_visible = bob.menu.slider().is_active(),
        "timers after remote update"
    );

    bob.menu.press_reset()?;
    alice.menu.tick();
    bob.menu.tick();
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            error!(error = %e, "failed to read .env");
        }
    }

    let config = match WidgetConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid widget configuration");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session failed");
            ExitCode::FAILURE
        }
    }
}
