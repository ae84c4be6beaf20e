//! Render loop on the main thread.
//!
//! Prints every snapshot that differs from the last one and returns once the
//! logic thread reports that it stopped.

use crate::models::KeyBindings;
use crate::render::draw::draw_frame;
use crate::shared::snapshot::RenderState;
use crate::system::bus::SystemBus;
use crossbeam_channel::select;
use std::io::{self, Write};

pub struct App {
    bus: SystemBus,
    keys: KeyBindings,
    last_state: RenderState,
}

impl App {
    pub fn new(bus: SystemBus, keys: KeyBindings) -> Self {
        Self {
            bus,
            keys,
            last_state: RenderState::Empty,
        }
    }

    /// Runs the render loop (blocking).
    pub fn run(bus: SystemBus, keys: KeyBindings) {
        let mut app = App::new(bus, keys);
        log::info!("RENDER: Loop started");
        app.event_loop();
        log::info!("RENDER: Loop stopped");
    }

    fn event_loop(&mut self) {
        let render_rx = self.bus.render_rx.clone();
        let exit_rx = self.bus.exit_rx.clone();
        loop {
            select! {
                recv(render_rx) -> msg => match msg {
                    Ok(state) => self.present(state),
                    Err(_) => break,
                },
                recv(exit_rx) -> _ => break,
            }
        }
    }

    fn present(&mut self, state: RenderState) {
        let lines = draw_frame(&self.last_state, &state, &self.keys);
        self.last_state = state;
        if lines.is_empty() {
            return;
        }

        let mut out = io::stdout().lock();
        for line in lines {
            if let Err(e) = writeln!(out, "{}", line) {
                log::error!("RENDER: Failed to write to stdout: {}", e);
                return;
            }
        }
        let _ = out.flush();
    }
}
