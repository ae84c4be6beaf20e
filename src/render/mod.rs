//! Terminal rendering of screen snapshots.

pub mod app;
pub mod draw;
