//! Info command implementation
//!
//! Renders the fixed project metadata as a two-column table.

use crate::cli::args::InfoArgs;
use crate::cli::registry::CommandSpec;
use crate::config::InfoRecord;
use crate::error::CliError;
use crate::output::Table;
use clap::{ArgMatches, Args};
use comfy_table::{Attribute, Cell, Color};
use std::io;
use termcolor::WriteColor;

pub fn spec() -> CommandSpec {
    CommandSpec {
        name: "info",
        about: "Display project information",
        schema: InfoArgs::augment_args,
        handler,
    }
}

fn handler(_matches: &ArgMatches, out: &mut dyn WriteColor) -> Result<(), CliError> {
    run_info(&InfoRecord::current(), out)?;
    Ok(())
}

/// Build the `Property | Value` table for a record
pub fn info_table(record: &InfoRecord) -> Table {
    let mut table = Table::new().with_title(format!("{} Info", record.name));
    table.set_header([
        Cell::new("Property").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    for (property, value) in record.rows() {
        table.add_row([
            Cell::new(property).fg(Color::Cyan),
            Cell::new(value).fg(Color::Magenta),
        ]);
    }
    table
}

/// Run the info command
pub fn run_info(record: &InfoRecord, out: &mut dyn WriteColor) -> io::Result<()> {
    log::debug!("rendering info for {} {}", record.name, record.version);
    info_table(record).render(out)
}
