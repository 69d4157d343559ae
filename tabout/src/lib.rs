//! This crate provides some helpers to present tabular data in
//! fixed width columns, one row at a time, so that arbitrarily
//! long tables can be streamed to the output without first
//! being collected in memory.
//!
//! Widths are measured in terminal cells rather than bytes, so
//! that wide characters such as emoji line up with their neighbors.
use unicode_width::UnicodeWidthStr;

/// Describes the alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Describes a column
#[derive(Debug, Clone)]
pub struct Column {
    /// The name of the column; this is the column header text
    pub name: String,
    /// How the column should be aligned
    pub alignment: Alignment,
    /// The width of the column in cells.  Text that is wider than
    /// this is emitted as-is and pushes the rest of the row over.
    pub width: usize,
}

impl Column {
    pub fn new(name: &str, alignment: Alignment, width: usize) -> Self {
        Self {
            name: name.to_string(),
            alignment,
            width,
        }
    }
}

fn emit_column<W: std::io::Write>(
    text: &str,
    max_width: usize,
    alignment: Alignment,
    is_last: bool,
    output: &mut W,
) -> Result<(), std::io::Error> {
    let pad = max_width.saturating_sub(text.width());
    let (left_pad, right_pad) = match alignment {
        Alignment::Left => (0, pad),
        Alignment::Center => {
            let left_pad = pad / 2;
            // for odd-length columns, take care to use the remaining
            // length rather than just assuming that the right_pad
            // will have the same value as the left_pad
            (left_pad, pad - left_pad)
        }
        Alignment::Right => (pad, 0),
    };
    // Don't leave trailing whitespace at the end of the line
    let right_pad = if is_last { 0 } else { right_pad };

    write!(output, "{:left_pad$}{}{:right_pad$}", "", text, "")
}

/// Emits rows of fixed width columns to an output stream.
/// If a given row has more cells than there are columns, the
/// extra cells are emitted left aligned with no padding.
pub struct TableWriter<W: std::io::Write> {
    columns: Vec<Column>,
    output: W,
}

impl<W: std::io::Write> TableWriter<W> {
    pub fn new(columns: Vec<Column>, output: W) -> Self {
        Self { columns, output }
    }

    pub fn write_row<S: AsRef<str>>(&mut self, row: &[S]) -> Result<(), std::io::Error> {
        for (idx, cell) in row.iter().enumerate() {
            let (width, alignment) = self
                .columns
                .get(idx)
                .map(|c| (c.width, c.alignment))
                .unwrap_or((0, Alignment::Left));

            if idx > 0 {
                write!(self.output, " ")?;
            }

            emit_column(
                cell.as_ref(),
                width,
                alignment,
                idx + 1 == row.len(),
                &mut self.output,
            )?;
        }
        writeln!(self.output)
    }

    /// Emit the column names
    pub fn write_header(&mut self) -> Result<(), std::io::Error> {
        let names: Vec<String> = self.columns.iter().map(|c| c.name.clone()).collect();
        self.write_row(&names)
    }

    /// Emit a horizontal rule under each column.  A column with no
    /// fixed width gets a rule as wide as its name.
    pub fn write_separator(&mut self) -> Result<(), std::io::Error> {
        let rules: Vec<String> = self
            .columns
            .iter()
            .map(|c| "─".repeat(c.width.max(c.name.width())))
            .collect();
        self.write_row(&rules)
    }

    pub fn write_blank_line(&mut self) -> Result<(), std::io::Error> {
        writeln!(self.output)
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: std::io::Write> std::io::Write for TableWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.output.flush()
    }
}
