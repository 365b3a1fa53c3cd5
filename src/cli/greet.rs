//! Greet command implementation
//!
//! Writes `Hello, <name>!` once per requested repetition.

use crate::cli::args::GreetArgs;
use crate::cli::registry::CommandSpec;
use crate::config::GreetConfig;
use crate::error::CliError;
use crate::output::{success_style, write_styled_line};
use clap::{ArgMatches, Args, FromArgMatches};
use std::io;
use termcolor::WriteColor;

pub fn spec() -> CommandSpec {
    CommandSpec {
        name: "greet",
        about: "Greet someone",
        schema: GreetArgs::augment_args,
        handler,
    }
}

fn handler(matches: &ArgMatches, out: &mut dyn WriteColor) -> Result<(), CliError> {
    let config = GreetConfig::from(GreetArgs::from_arg_matches(matches)?);
    run_greet(&config, out)?;
    Ok(())
}

/// Text of a single greeting line
pub fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Run the greet command
///
/// A count of zero writes nothing.
pub fn run_greet(config: &GreetConfig, out: &mut dyn WriteColor) -> io::Result<()> {
    log::debug!("greeting '{}' {} time(s)", config.name, config.count);

    let line = greeting(&config.name);
    let style = success_style();
    for _ in 0..config.count {
        write_styled_line(out, &line, &style)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn greet_plain(name: &str, count: u64) -> String {
        let config = GreetConfig {
            name: name.to_string(),
            count,
        };
        let mut buffer = Buffer::no_color();
        run_greet(&config, &mut buffer).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_greeting_text() {
        assert_eq!(greeting("World"), "Hello, World!");
        assert_eq!(greeting(""), "Hello, !");
    }

    #[test]
    fn test_default_config() {
        let mut buffer = Buffer::no_color();
        run_greet(&GreetConfig::default(), &mut buffer).unwrap();
        assert_eq!(buffer.as_slice(), b"Hello, World!\n");
    }

    #[test]
    fn test_custom_name() {
        assert_eq!(greet_plain("Rust", 1), "Hello, Rust!\n");
    }

    #[test]
    fn test_repeats_count_times() {
        for count in [0u64, 1, 2, 5, 17] {
            let output = greet_plain("World", count);
            assert_eq!(output.lines().count() as u64, count);
            assert!(output.lines().all(|l| l == "Hello, World!"));
        }
    }

    #[test]
    fn test_zero_count_writes_nothing() {
        assert_eq!(greet_plain("World", 0), "");
    }

    #[test]
    fn test_colored_output_is_green() {
        let mut buffer = Buffer::ansi();
        run_greet(&GreetConfig::default(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(text.contains("\x1b[32m"));
        assert!(text.contains("Hello, World!"));
    }

    #[test]
    fn test_spec() {
        let spec = spec();
        assert_eq!(spec.name, "greet");
        let cmd = spec.command();
        assert!(cmd.get_arguments().any(|a| a.get_id() == "name"));
        assert!(cmd.get_arguments().any(|a| a.get_id() == "count"));
    }
}
