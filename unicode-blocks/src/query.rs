//! Composes block classification and the encodings into the
//! records that the command line tool reports.
use crate::blocks::{BlockRange, BlockTable};
use crate::encoding::{self, hex, scalar, Encoding};
use crate::error::Result;

/// Everything that gets reported about a single code point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedChar {
    pub decimal: u32,
    pub utf32be: String,
    pub utf8: String,
    pub utf16le: String,
    pub glyph: char,
    /// The 1-based block order, or -1 when the code point isn't in any block
    pub block_order: i64,
    pub block_description: String,
}

impl EncodedChar {
    pub fn new(table: &BlockTable, code_point: u32) -> Result<Self> {
        let glyph = scalar(code_point)?;
        let block = table.find_block(code_point);
        Ok(Self {
            decimal: code_point,
            utf32be: hex(&Encoding::Utf32Be.encode(code_point)?),
            utf8: hex(&Encoding::Utf8.encode(code_point)?),
            utf16le: hex(&Encoding::Utf16Le.encode(code_point)?),
            glyph,
            block_order: block.order(),
            block_description: block.description().to_string(),
        })
    }
}

/// One of the ways that a code point can be specified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointInput {
    /// A hexadecimal literal such as `1F600`
    Hex(String),
    Decimal(u32),
    /// Literal text; every character in it is looked up
    Characters(String),
}

impl PointInput {
    pub fn code_points(&self) -> Result<Vec<u32>> {
        Ok(match self {
            Self::Hex(s) => vec![encoding::from_hex_string(s)?],
            Self::Decimal(d) => vec![*d],
            Self::Characters(s) => s.chars().map(encoding::from_character).collect(),
        })
    }
}

pub struct QueryEngine<'a> {
    table: &'a BlockTable,
}

impl<'a> QueryEngine<'a> {
    pub fn new(table: &'a BlockTable) -> Self {
        Self { table }
    }

    pub fn list_blocks(&self) -> impl Iterator<Item = &'a BlockRange> {
        self.table.iter()
    }

    /// Validate the 1-based `index` and return the block along with a
    /// lazy sequence of records for each encodable code point in it
    pub fn expand_block(
        &self,
        index: usize,
    ) -> Result<(&'a BlockRange, impl Iterator<Item = EncodedChar> + 'a)> {
        let table = self.table;
        let block = table.block(index)?;
        let records = block
            .code_points()
            .filter_map(move |code_point| EncodedChar::new(table, code_point).ok());
        Ok((block, records))
    }

    /// Resolve each input to records. A surrogate or out of range value
    /// is an error here, unlike during block expansion.
    pub fn lookup(&self, inputs: &[PointInput]) -> Result<Vec<EncodedChar>> {
        let mut records = vec![];
        for input in inputs {
            for code_point in input.code_points()? {
                records.push(EncodedChar::new(self.table, code_point)?);
            }
        }
        Ok(records)
    }
}
