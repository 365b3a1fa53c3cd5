//! CLI argument definitions using clap
//!
//! Each command owns one `Args` struct. The registry attaches these to the
//! subcommands it builds, so the structs are the option schema.

use crate::config::{DEFAULT_COUNT, DEFAULT_NAME, GreetConfig, ListConfig};
use clap::{Args, ValueEnum};

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl ColorChoice {
    /// Resolve to a termcolor choice for a stream
    ///
    /// termcolor's own `Auto` only looks at `TERM`/`NO_COLOR`, so `Auto`
    /// turns into `Never` here when the stream is not a terminal.
    pub fn resolve(self, is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
            ColorChoice::Auto | ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Always => termcolor::ColorChoice::Always,
        }
    }
}

/// Flags accepted before or after any subcommand
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Output coloring
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GreetArgs {
    /// Name to greet
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Number of greetings
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: u64,
}

impl From<GreetArgs> for GreetConfig {
    fn from(args: GreetArgs) -> Self {
        GreetConfig {
            name: args.name,
            count: args.count,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct InfoArgs {}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ListItemsArgs {
    /// Items to list
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,
}

impl From<ListItemsArgs> for ListConfig {
    fn from(args: ListItemsArgs) -> Self {
        ListConfig { items: args.items }
    }
}
