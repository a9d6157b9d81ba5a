//! Console implementation of the grid display capability.
//!
//! `ConsoleGrid` renders the top of the dataset as a fixed-width text table on
//! stdout: one header line, a rule, then up to `height_rows` body rows
//! starting at the current scroll offset. Cell tones map to ANSI colors unless
//! colors are disabled. A pipe separates the frozen leading columns from the
//! scrollable rest, echoing the pinned-columns layout of a real grid widget.

use std::io::{self, Write};

use bond_common::columns::{CellTone, ColumnSpec};
use bond_common::display::{GridDisplay, GridOptions};
use bond_common::record::QuoteRecord;
use bond_common::Result;

/// Text-table renderer writing to stdout.
pub struct ConsoleGrid {
    columns: Vec<ColumnSpec>,
    options: GridOptions,
    offset: usize,
    color: bool,
}

impl ConsoleGrid {
    /// New grid; `color` enables ANSI cell tones.
    pub fn new(color: bool) -> Self {
        ConsoleGrid {
            columns: Vec::new(),
            options: GridOptions::default(),
            offset: 0,
            color,
        }
    }

    fn header_line(&self) -> String {
        let mut line = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            push_separated(&mut line, i, self.options.frozen_cols);
            line.push_str(&pad(col.title, col.width));
        }
        line
    }

    fn format_row(&self, record: &QuoteRecord) -> String {
        let mut line = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            push_separated(&mut line, i, self.options.frozen_cols);
            let value = record.field(col.field);
            let cell = pad(&col.format(&value), col.width);
            if self.color {
                line.push_str(&paint(col.tone_of(&value), &cell));
            } else {
                line.push_str(&cell);
            }
        }
        line
    }

    fn draw(&self, records: &[QuoteRecord]) -> Result<()> {
        let mut out = io::stdout().lock();
        let header = self.header_line();
        writeln!(out)?;
        writeln!(out, "{}", header)?;
        writeln!(out, "{}", "-".repeat(header.chars().count()))?;
        let end = (self.offset + self.options.height_rows).min(records.len());
        let start = self.offset.min(end);
        for record in &records[start..end] {
            writeln!(out, "{}", self.format_row(record))?;
        }
        writeln!(
            out,
            "[{} rows, showing {}..{}]",
            records.len(),
            start,
            end
        )?;
        out.flush()?;
        Ok(())
    }
}

impl GridDisplay for ConsoleGrid {
    fn render(
        &mut self,
        records: &[QuoteRecord],
        columns: &[ColumnSpec],
        options: GridOptions,
    ) -> Result<()> {
        self.columns = columns.to_vec();
        self.options = options;
        self.offset = 0;
        self.draw(records)
    }

    fn replace_dataset(&mut self, records: &[QuoteRecord]) -> Result<()> {
        self.draw(records)
    }

    fn scroll_to(&mut self, index: usize) -> Result<()> {
        self.offset = index;
        Ok(())
    }
}

fn push_separated(line: &mut String, index: usize, frozen_cols: usize) {
    if index > 0 {
        if index == frozen_cols {
            line.push_str(" | ");
        } else {
            line.push(' ');
        }
    }
}

/// Truncate to `width` characters, then right-pad with spaces.
fn pad(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated)
}

fn paint(tone: CellTone, text: &str) -> String {
    let code = match tone {
        CellTone::Neutral => return text.to_string(),
        CellTone::Cool => "32",
        CellTone::Warm => "33",
        CellTone::Hot => "31",
    };
    format!("\x1b[{}m{}\x1b[0m", code, text)
}
