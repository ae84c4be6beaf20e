//! Shared channel infrastructure between system threads.
//!
//! The `SystemBus` provides a centralized communication hub for all threads
//! in the application, using lock-free channels for message passing.

use crate::input::events::{GameAction, RawInputEvent};
use crate::shared::snapshot::RenderState;
use crossbeam_channel::{Receiver, Sender, bounded, unbounded};

/// System-level events sent to the logic thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEvent {
    /// Input closed or shutdown requested.
    Quit,
}

/// Aggregates the cross-thread communication channels.
///
/// The `SystemBus` is the central hub for inter-thread communication,
/// providing channels for:
/// - Raw lines from the stdin reader
/// - Game actions from the input thread
/// - Render snapshots to the render loop
/// - System events (quit)
/// - The logic thread's exit notice
#[derive(Clone)]
pub struct SystemBus {
    /// Stdin → Input: typed lines.
    pub raw_input_tx: Sender<RawInputEvent>,
    pub raw_input_rx: Receiver<RawInputEvent>,

    /// Input → Logic: processed game actions.
    pub action_tx: Sender<GameAction>,
    pub action_rx: Receiver<GameAction>,

    /// Logic → Render: screen snapshots.
    pub render_tx: Sender<RenderState>,
    pub render_rx: Receiver<RenderState>,

    /// Stdin → Logic: system events.
    pub sys_tx: Sender<SystemEvent>,
    pub sys_rx: Receiver<SystemEvent>,

    /// Logic → Render: the logic thread has stopped.
    pub exit_tx: Sender<()>,
    pub exit_rx: Receiver<()>,
}

impl SystemBus {
    /// Creates a new system bus with all channels initialized.
    pub fn new() -> Self {
        let (raw_input_tx, raw_input_rx) = unbounded();
        let (action_tx, action_rx) = unbounded();

        // Bounded render channel: max 2 frames queued to limit latency
        let (render_tx, render_rx) = bounded(2);

        let (sys_tx, sys_rx) = unbounded();
        let (exit_tx, exit_rx) = unbounded();

        Self {
            raw_input_tx,
            raw_input_rx,
            action_tx,
            action_rx,
            render_tx,
            render_rx,
            sys_tx,
            sys_rx,
            exit_tx,
            exit_rx,
        }
    }
}

impl Default for SystemBus {
    fn default() -> Self {
        Self::new()
    }
}
