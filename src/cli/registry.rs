//! Command registry
//!
//! A plain table mapping each command name to the clap schema for its
//! arguments and the handler that runs it. The table is built once at
//! startup; the root clap `Command` is assembled from it.

use crate::cli::args::GlobalArgs;
use crate::cli::{greet, info, list_items};
use crate::config::{PROJECT_DESCRIPTION, PROJECT_NAME, PROJECT_VERSION};
use crate::error::CliError;
use clap::{ArgMatches, Args};
use termcolor::WriteColor;

/// Runs a command against its parsed sub-matches
pub type Handler = fn(&ArgMatches, &mut dyn WriteColor) -> Result<(), CliError>;

/// One registered command
#[derive(Clone, Copy)]
pub struct CommandSpec {
    /// Name matched against the first positional token
    pub name: &'static str,
    /// One-line help shown in the command list
    pub about: &'static str,
    /// Adds the command's arguments to a bare clap `Command`
    pub schema: fn(clap::Command) -> clap::Command,
    pub handler: Handler,
}

impl CommandSpec {
    /// Build the clap subcommand for this entry
    pub fn command(&self) -> clap::Command {
        (self.schema)(clap::Command::new(self.name)).about(self.about)
    }
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("about", &self.about)
            .finish_non_exhaustive()
    }
}

/// Registry of all known commands, in registration order
#[derive(Debug, Default)]
pub struct Registry {
    commands: Vec<CommandSpec>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in commands
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(greet::spec());
        registry.register(info::spec());
        registry.register(list_items::spec());
        registry
    }

    /// Add a command, replacing any existing entry with the same name
    pub fn register(&mut self, spec: CommandSpec) {
        match self.commands.iter_mut().find(|c| c.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.commands.push(spec),
        }
    }

    /// Look up a command by exact name
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Assemble the top-level clap command
    ///
    /// A bare invocation prints help; flags without a subcommand are an error.
    /// Either way the exit status is non-zero.
    pub fn root_command(&self) -> clap::Command {
        let root = clap::Command::new(PROJECT_NAME)
            .version(PROJECT_VERSION)
            .about(format!("{} - {}", PROJECT_NAME, PROJECT_DESCRIPTION))
            .subcommand_required(true)
            .arg_required_else_help(true);
        let root = GlobalArgs::augment_args(root);

        self.commands
            .iter()
            .fold(root, |root, spec| root.subcommand(spec.command()))
    }

    /// Run the handler for the subcommand selected in `matches`
    pub fn dispatch(&self, matches: &ArgMatches, out: &mut dyn WriteColor) -> Result<(), CliError> {
        let Some((name, sub_matches)) = matches.subcommand() else {
            return Err(CliError::MissingCommand);
        };
        let spec = self
            .get(name)
            .ok_or_else(|| CliError::UnknownCommand(name.to_string()))?;

        log::debug!("dispatching '{}'", spec.name);
        (spec.handler)(sub_matches, out)
    }
}
