//! CLI argument parsing and command dispatch

pub mod args;
pub mod common;
pub mod greet;
pub mod info;
pub mod list_items;
pub mod registry;

// Re-export types for convenient access
pub use args::{ColorChoice, GlobalArgs, GreetArgs, InfoArgs, ListItemsArgs};
pub use registry::{CommandSpec, Registry};

use crate::error::CliError;
use clap::{ArgMatches, FromArgMatches};
use common::EXIT_SUCCESS;
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use termcolor::{StandardStream, WriteColor};

/// The command dispatcher
///
/// Parses an argument vector against the registry, runs the selected
/// command, and turns the outcome into a process exit status.
#[derive(Debug)]
pub struct App {
    registry: Registry,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Dispatcher over the built-in commands
    pub fn new() -> Self {
        Self::with_registry(Registry::builtin())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run against the process's stdout and stderr
    ///
    /// Also installs the logger, honoring `--verbose` and `RUST_LOG`.
    pub fn run<I, T>(&self, args: I) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match self.registry.root_command().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) => {
                let _ = e.print();
                return e.exit_code();
            }
        };

        let global = match GlobalArgs::from_arg_matches(&matches) {
            Ok(global) => global,
            Err(e) => {
                let _ = e.print();
                return e.exit_code();
            }
        };
        init_logging(global.verbose);

        let mut out = StandardStream::stdout(global.color.resolve(io::stdout().is_terminal()));
        let mut err = StandardStream::stderr(global.color.resolve(io::stderr().is_terminal()));
        self.execute(&matches, &mut out, &mut err)
    }

    /// Run against caller-supplied sinks
    ///
    /// Help, version and parse errors are written as plain text to `out` or
    /// `err`, following where clap would send them.
    pub fn run_with<I, T>(
        &self,
        args: I,
        out: &mut dyn WriteColor,
        err: &mut dyn WriteColor,
    ) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.registry.root_command().try_get_matches_from(args) {
            Ok(matches) => self.execute(&matches, out, err),
            Err(e) => report_parse_error(&e, out, err),
        }
    }

    fn execute(
        &self,
        matches: &ArgMatches,
        out: &mut dyn WriteColor,
        err: &mut dyn WriteColor,
    ) -> i32 {
        match self.execute_inner(matches, out) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                log::error!("{}", e);
                let _ = writeln!(err, "Error: {}", e);
                e.exit_code()
            }
        }
    }

    fn execute_inner(
        &self,
        matches: &ArgMatches,
        out: &mut dyn WriteColor,
    ) -> Result<(), CliError> {
        self.registry.dispatch(matches, out)?;
        out.flush()?;
        Ok(())
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn WriteColor, err: &mut dyn WriteColor) -> i32 {
    let rendered = e.render();
    if e.use_stderr() {
        let _ = write!(err, "{}", rendered);
        let _ = err.flush();
    } else {
        let _ = write!(out, "{}", rendered);
        let _ = out.flush();
    }
    e.exit_code()
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
