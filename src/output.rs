//! Output helpers for writing styled text to a [`WriteColor`] sink
//!
//! Handlers never talk to stdout directly. They receive a sink so the binary
//! can hand them a terminal stream and tests can hand them a buffer.

pub mod table;

pub use table::Table;

use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Bold green, used for greetings
pub fn success_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Green)).set_bold(true);
    spec
}

/// Yellow, used for notices such as an empty item list
pub fn notice_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Yellow));
    spec
}

/// Bold without color, used for headers
pub fn heading_style() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_bold(true);
    spec
}

/// Write `text` in `style`, resetting before the line break
pub fn write_styled_line(
    out: &mut dyn WriteColor,
    text: &str,
    style: &ColorSpec,
) -> io::Result<()> {
    write_styled(out, text, style)?;
    writeln!(out)
}

/// Write `text` in `style` without a line break
pub fn write_styled(out: &mut dyn WriteColor, text: &str, style: &ColorSpec) -> io::Result<()> {
    if style.is_none() {
        return write!(out, "{}", text);
    }
    out.set_color(style)?;
    write!(out, "{}", text)?;
    out.reset()
}

/// Write an unstyled line
pub fn write_line(out: &mut dyn WriteColor, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text)
}
