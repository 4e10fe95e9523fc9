//! Command-line front end for strictly_tris.
//!
//! `serve` runs the REST API; `play` drives a scripted game against a running
//! server and prints each board the way a person would read it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod driver;
mod render;
mod script;

pub use cli::{Cli, Command, PlayArgs, ServeArgs};
pub use driver::play;
pub use render::{Verdict, render_board};
pub use script::{Script, ScriptError, ScriptedMove, load_moves};
