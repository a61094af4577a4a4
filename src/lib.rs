//! Rewind - two-player tic-tac-toe with a time-travel move history.
//!
//! The game model lives in [`rewind_core`]; this crate is the presentation
//! layer around it.
//!
//! # Architecture
//!
//! - **Config**: optional `rewind.toml` for logging and list order
//! - **TUI**: interactive ratatui front end
//! - **Script**: headless runs that print the resulting game as text or JSON
//!
//! # Example
//!
//! ```
//! use rewind::{ScriptRequest, run_script};
//! use rewind_core::MoveListOrder;
//!
//! let request = ScriptRequest::new(vec![0, 1, 4, 2, 8], None, MoveListOrder::Ascending);
//! let output = run_script(&request, false)?;
//! assert!(output.contains("Winner: X"));
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod script;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, RewindConfig};
pub use render::render_text;
pub use script::{ScriptRequest, run_script};
