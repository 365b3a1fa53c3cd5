//! Titled tables on top of comfy-table
//!
//! comfy-table handles layout and cell widths; this module adds an optional
//! title centered over the table and decides per sink whether cell styles
//! are emitted.

use super::write_styled;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Row};
use std::io;
use termcolor::{ColorSpec, WriteColor};

/// Table with an optional title line
#[derive(Debug, Clone)]
pub struct Table {
    title: Option<String>,
    inner: comfy_table::Table,
    rows: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        let mut inner = comfy_table::Table::new();
        inner.load_preset(UTF8_FULL);
        Self {
            title: None,
            inner,
            rows: 0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_header<I, C>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.inner.set_header(to_row(cells));
        self
    }

    /// Append a row; short rows are padded, extra cells add columns
    pub fn add_row<I, C>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.inner.add_row(to_row(cells));
        self.rows += 1;
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Render the table into `out`
    ///
    /// Cell colors are emitted only when the sink supports color.
    pub fn render(&self, out: &mut dyn WriteColor) -> io::Result<()> {
        let mut table = self.inner.clone();
        if out.supports_color() {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        let rendered = table.to_string();

        if let Some(title) = &self.title {
            let width = rendered.lines().next().map_or(0, |l| l.chars().count());
            let indent = width.saturating_sub(title.chars().count()) / 2;
            write!(out, "{}", " ".repeat(indent))?;
            let mut style = ColorSpec::new();
            style.set_italic(true);
            write_styled(out, title, &style)?;
            writeln!(out)?;
        }

        writeln!(out, "{}", rendered)
    }
}

fn to_row<I, C>(cells: I) -> Row
where
    I: IntoIterator<Item = C>,
    C: Into<Cell>,
{
    Row::from(cells.into_iter().map(Into::into).collect::<Vec<Cell>>())
}
