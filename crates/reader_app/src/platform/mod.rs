//! Terminal platform layer: wires the pure core to the artifact engine,
//! the preference store and the crossterm/ratatui presentation.
mod app;
mod effects;
mod input;
mod logging;
mod persistence;
mod ui;

pub use app::run_app;
