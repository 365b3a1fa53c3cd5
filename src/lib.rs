#![forbid(unsafe_code)]

//! cli-template: a starting point for command-line tools
//!
//! Ships three sample commands (`greet`, `info`, `list-items`) wired through
//! an explicit command registry, with output written to injected sinks so
//! every command can be exercised in-process.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

// Re-export error types for convenient access
pub use error::CliError;

pub use cli::App;
pub use config::{GreetConfig, InfoRecord, ListConfig};
