//! Input threads: reading stdin and routing typed commands.

pub mod events;
pub mod manager;

use crate::input::events::RawInputEvent;
use crate::input::manager::InputManager;
use crate::system::bus::{SystemBus, SystemEvent};
use std::io::BufRead;
use std::thread;

/// Spawns the thread that forwards stdin lines to the input thread.
///
/// End of input is treated as a quit request.
pub fn start_stdin_reader(bus: SystemBus) {
    thread::Builder::new()
        .name("Stdin Thread".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::error!("INPUT: Failed to read stdin: {}", e);
                        break;
                    }
                };
                if bus.raw_input_tx.send(RawInputEvent::new(line)).is_err() {
                    return;
                }
            }

            log::info!("INPUT: Stdin closed");
            if let Err(e) = bus.sys_tx.send(SystemEvent::Quit) {
                log::error!("INPUT: Failed to send quit (Logic thread died?): {}", e);
            }
        })
        .expect("Failed to spawn Stdin thread");
}

/// Spawns the thread turning raw lines into game actions.
pub fn start_thread(bus: SystemBus, manager: InputManager) {
    thread::Builder::new()
        .name("Input Thread".to_string())
        .spawn(move || {
            log::info!("INPUT: Thread started");

            // Blocking loop: wait for a line, handle it, repeat.
            while let Ok(raw_event) = bus.raw_input_rx.recv() {
                if let Some(action) = manager.process(raw_event)
                    && let Err(e) = bus.action_tx.send(action)
                {
                    log::error!("INPUT: Failed to send action (Logic thread died?): {}", e);
                    break;
                }
            }

            log::info!("INPUT: Thread stopped");
        })
        .expect("Failed to spawn Input thread");
}
