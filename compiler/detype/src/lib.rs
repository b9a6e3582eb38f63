//! detype command-line front end.
//!
//! Reads TypeScript/Flow source from a file or stdin, strips the type
//! syntax with [`detype_strip`] and writes plain JavaScript.
//!
//! ```text
//! Cli (clap) ──► Config ──► commands::run ──► input::read_source
//!                                 │                   │
//!                                 │           detype_strip::strip_types_with
//!                                 │                   │
//!                                 └──────────► input::write_output
//! ```

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod input;
mod tracing_setup;

pub use cli::Cli;
pub use config::{Config, Input, Output};
pub use error::CliError;
pub use tracing_setup::init_tracing;
