//! Per-command configuration
//!
//! Parsed arguments are converted into these plain structs before a handler
//! runs. Defaults live here as named constants and are shared with the clap
//! definitions in [`crate::cli::args`].

/// Placeholder project name shown by `info` and `--version`
pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");

/// Project version
pub const PROJECT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line project description
pub const PROJECT_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default `--name` for `greet`
pub const DEFAULT_NAME: &str = "World";

/// Default `--count` for `greet`
pub const DEFAULT_COUNT: u64 = 1;

/// Settings for the `greet` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetConfig {
    /// Who to greet
    pub name: String,
    /// How many greeting lines to write; zero writes nothing
    pub count: u64,
}

impl Default for GreetConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            count: DEFAULT_COUNT,
        }
    }
}

/// Settings for the `list-items` command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListConfig {
    /// Items in the order they were given
    pub items: Vec<String>,
}

impl ListConfig {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Fixed project metadata rendered by `info`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoRecord {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

impl InfoRecord {
    /// The record for this build
    pub const fn current() -> Self {
        Self {
            name: PROJECT_NAME,
            version: PROJECT_VERSION,
            description: PROJECT_DESCRIPTION,
        }
    }

    /// `(property, value)` pairs in display order
    pub fn rows(&self) -> [(&'static str, &'static str); 3] {
        [
            ("Name", self.name),
            ("Version", self.version),
            ("Description", self.description),
        ]
    }
}
