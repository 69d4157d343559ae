use std::io::Write;
use tabout::{Alignment, Column, TableWriter};
use unicode_blocks::{BlockRange, EncodedChar, Encoding};

const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

fn encoded_columns() -> Vec<Column> {
    vec![
        Column::new("Decimal", Alignment::Right, 9),
        Column::new(Encoding::Utf32Be.name(), Alignment::Right, 9),
        Column::new(Encoding::Utf8.name(), Alignment::Right, 9),
        Column::new(Encoding::Utf16Le.name(), Alignment::Right, 9),
        Column::new("Char", Alignment::Right, 6),
        Column::new("Block", Alignment::Right, 8),
        Column::new("Block description", Alignment::Left, 24),
    ]
}

/// Control characters would be interpreted by the terminal rather
/// than displayed, so show a placeholder instead
fn glyph(c: char) -> char {
    if c.is_control() {
        REPLACEMENT_CHARACTER
    } else {
        c
    }
}

fn record_row(record: &EncodedChar) -> [String; 7] {
    [
        record.decimal.to_string(),
        record.utf32be.clone(),
        record.utf8.clone(),
        record.utf16le.clone(),
        glyph(record.glyph).to_string(),
        format!("{:03}", record.block_order),
        record.block_description.clone(),
    ]
}

fn write_top<W: Write>(table: &mut TableWriter<W>) -> std::io::Result<()> {
    table.write_blank_line()?;
    table.write_header()?;
    table.write_separator()
}

pub fn write_block_list<'a, W: Write>(
    mut out: W,
    blocks: impl Iterator<Item = &'a BlockRange>,
) -> std::io::Result<()> {
    for block in blocks {
        writeln!(out, "{block}")?;
    }
    Ok(())
}

/// Emit every record of a block, bracketed by headers and followed
/// by a summary of the block itself
pub fn write_block<W: Write>(
    out: W,
    block: &BlockRange,
    records: impl Iterator<Item = EncodedChar>,
) -> std::io::Result<()> {
    let mut table = TableWriter::new(encoded_columns(), out);
    write_top(&mut table)?;
    for record in records {
        table.write_row(&record_row(&record))?;
    }
    table.write_separator()?;
    table.write_header()?;
    writeln!(table, "\n{block}\n")
}

pub fn write_lookup<W: Write>(out: W, records: &[EncodedChar]) -> std::io::Result<()> {
    let mut table = TableWriter::new(encoded_columns(), out);
    write_top(&mut table)?;
    for record in records {
        table.write_row(&record_row(record))?;
    }
    table.flush()
}
