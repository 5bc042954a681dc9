//! Terminal front end for two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Input**: [`KeyMap`] turns key presses into [`termtoe_core::Command`]s
//! - **Loop**: [`run_loop`] feeds commands to the game and redraws
//! - **UI**: [`draw`] renders a read-only view of the game state
//! - **Config**: [`TuiConfig`] from an optional TOML file plus CLI overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod input;
mod logging;
mod tui;
mod ui;

pub use app::run_loop;
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, ThemeConfig, TuiConfig};
pub use input::KeyMap;
pub use logging::init_tracing;
pub use tui::run;
pub use ui::{Theme, board_lines, draw};
