//! List-items command implementation
//!
//! Echoes its positional arguments as a numbered list.

use crate::cli::args::ListItemsArgs;
use crate::cli::registry::CommandSpec;
use crate::config::ListConfig;
use crate::error::CliError;
use crate::output::{heading_style, notice_style, write_line, write_styled_line};
use clap::{ArgMatches, Args, FromArgMatches};
use std::io;
use termcolor::WriteColor;

pub const EMPTY_MESSAGE: &str = "No items provided!";
pub const HEADER: &str = "Items:";

pub fn spec() -> CommandSpec {
    CommandSpec {
        name: "list-items",
        about: "List items provided as arguments",
        schema: ListItemsArgs::augment_args,
        handler,
    }
}

fn handler(matches: &ArgMatches, out: &mut dyn WriteColor) -> Result<(), CliError> {
    let config = ListConfig::from(ListItemsArgs::from_arg_matches(matches)?);
    run_list_items(&config, out)?;
    Ok(())
}

/// Format one list entry; `index` is 1-based
pub fn format_item(index: usize, item: &str) -> String {
    format!("  {}. {}", index, item)
}

/// Run the list-items command
pub fn run_list_items(config: &ListConfig, out: &mut dyn WriteColor) -> io::Result<()> {
    if config.is_empty() {
        log::debug!("no items given");
        return write_styled_line(out, EMPTY_MESSAGE, &notice_style());
    }

    log::debug!("listing {} item(s)", config.items.len());
    write_styled_line(out, HEADER, &heading_style())?;
    for (i, item) in config.items.iter().enumerate() {
        write_line(out, &format_item(i + 1, item))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn list_plain(items: &[&str]) -> String {
        let config = ListConfig {
            items: items.iter().map(|s| s.to_string()).collect(),
        };
        let mut buffer = Buffer::no_color();
        run_list_items(&config, &mut buffer).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_list_message() {
        assert_eq!(list_plain(&[]), "No items provided!\n");
    }

    #[test]
    fn test_numbered_items() {
        let output = list_plain(&["apple", "banana", "cherry"]);
        assert_eq!(
            output,
            "Items:\n  1. apple\n  2. banana\n  3. cherry\n"
        );
    }

    #[test]
    fn test_single_item() {
        assert_eq!(list_plain(&["only"]), "Items:\n  1. only\n");
    }

    #[test]
    fn test_items_kept_verbatim() {
        let output = list_plain(&["two words", "", "ünïcode"]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["Items:", "  1. two words", "  2. ", "  3. ünïcode"]);
    }

    #[test]
    fn test_duplicate_items_listed_twice() {
        let output = list_plain(&["x", "x"]);
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_format_item() {
        assert_eq!(format_item(1, "apple"), "  1. apple");
        assert_eq!(format_item(10, "ten"), "  10. ten");
    }

    #[test]
    fn test_empty_message_is_yellow() {
        let mut buffer = Buffer::ansi();
        run_list_items(&ListConfig::default(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(text.contains("\x1b[33m"));
    }
}
