//! Logic thread module for game state management and updates.
//!
//! This module contains the main game loop that runs at a fixed tick rate.
//! It is the only thread that touches the screen states, so the countdown
//! ticks and the button presses are applied one after the other.

use crate::models::SettingsState;
use crate::state::GlobalState;
use crate::system::bus::{SystemBus, SystemEvent};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Target ticks per second for the logic thread.
const TPS: u64 = 60;

/// Upper bound on catch-up steps per pass.
const MAX_STEPS: u32 = 10;

/// Spawns the main logic thread that handles game state updates.
///
/// This thread runs a fixed-timestep game loop that:
/// 1. Processes actions from the input thread
/// 2. Handles system events (quit)
/// 3. Updates the active screen at a fixed rate
/// 4. Sends render snapshots to the render loop
pub fn start_thread(bus: SystemBus, settings: SettingsState) -> JoinHandle<()> {
    thread::Builder::new()
        .name("Logic Thread".to_string())
        .spawn(move || {
            log::info!("LOGIC: Thread started");
            let mut state = GlobalState::new(settings);
            run(&bus, &mut state);

            state.shutdown();
            if let Err(e) = bus.exit_tx.send(()) {
                log::error!("LOGIC: Failed to notify render loop: {}", e);
            }
            log::info!("LOGIC: Thread stopped");
        })
        .expect("Failed to spawn Logic thread")
}

fn run(bus: &SystemBus, state: &mut GlobalState) {
    let mut accumulator = Duration::ZERO;
    let mut last_time = Instant::now();
    let target_dt = Duration::from_nanos(1_000_000_000 / TPS);

    // Show the first word right away.
    let _ = bus.render_tx.try_send(state.create_snapshot());

    loop {
        // 1. Process input actions
        while let Ok(action) = bus.action_rx.try_recv() {
            state.handle_action(action);
        }

        // 2. Handle system events
        while let Ok(sys_evt) = bus.sys_rx.try_recv() {
            match sys_evt {
                SystemEvent::Quit => {
                    log::info!("LOGIC: Quit received...");
                    return;
                }
            }
        }

        if state.should_exit() {
            return;
        }

        // 3. Fixed-timestep update loop
        let current_time = Instant::now();
        accumulator += current_time - last_time;
        last_time = current_time;

        let mut loops = 0;
        while accumulator >= target_dt && loops < MAX_STEPS {
            state.update(target_dt);
            accumulator -= target_dt;
            loops += 1;
        }

        // 4. Send render snapshot only if we updated
        if loops > 0 {
            let _ = bus.render_tx.try_send(state.create_snapshot());
        }

        // Nothing to do until the next step is due.
        if loops == 0 {
            thread::sleep(Duration::from_millis(1));
        }
    }
}
