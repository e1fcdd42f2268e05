//! Command-line front end for the Formwright engine.
//!
//! Each invocation opens the saved form, applies one command and exits. The
//! engine autosaves after every change, so the next invocation picks up where
//! this one left off.

mod args;
mod commands;
mod config;
mod render;

pub use args::{Cli, Command};
pub use commands::{parse_input, run};
pub use config::CliConfig;
pub use render::render_form;
