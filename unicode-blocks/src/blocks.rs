//! The unicode block table, as published in the UCD `Blocks.txt`.
//!
//! Each non-comment line of that file looks like:
//!
//! ```text
//! 0000..007F; Basic Latin
//! ```
//!
//! Blocks are numbered from 1 in the order that they appear in the
//! file, which the file itself keeps in ascending code point order.
use crate::encoding::is_surrogate;
use crate::error::{Error, Result};
use std::path::Path;

/// Code points below this are C0 controls and are never displayed,
/// so every block starts at this value at the earliest.
pub const MIN_DISPLAY_CODE_POINT: u32 = 32;

/// The label used when a code point doesn't belong to any block
pub const NOT_FOUND_DESCRIPTION: &str = "Not found in any block range";

/// The order reported for a code point that doesn't belong to any block
pub const NOT_FOUND_ORDER: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRange {
    /// First code point, inclusive
    pub begin: u32,
    /// Last code point, inclusive
    pub end: u32,
    pub description: String,
    /// 1-based position in the source file
    pub order: usize,
}

impl BlockRange {
    pub fn contains(&self, code_point: u32) -> bool {
        code_point >= self.begin && code_point <= self.end
    }

    /// Every code point in the block that can be encoded, which is
    /// all of them save for the surrogates
    pub fn code_points(&self) -> impl Iterator<Item = u32> {
        (self.begin..=self.end).filter(|&code_point| {
            if is_surrogate(code_point) {
                log::trace!("skipping surrogate {code_point:#x}");
                false
            } else {
                true
            }
        })
    }

    /// Parse a single line of the block definitions.
    /// `line_number` is only used for error reporting.
    fn parse(line: &str, line_number: usize, order: usize) -> Result<Self> {
        let bad = |reason: &str| Error::Parse {
            line: line_number,
            text: line.to_string(),
            reason: reason.to_string(),
        };

        let (range, description) = line
            .split_once("; ")
            .ok_or_else(|| bad("missing \"; \" separator"))?;
        let (begin, end) = range
            .split_once("..")
            .ok_or_else(|| bad("missing \"..\" separator"))?;

        let parse_codepoint = |s: &str| {
            u32::from_str_radix(s.trim(), 16)
                .map_err(|err| bad(&format!("invalid code point {s:?}: {err}")))
        };
        // A range that ends below the clamp becomes empty; it keeps its
        // order slot but never matches anything.
        let begin = parse_codepoint(begin)?.max(MIN_DISPLAY_CODE_POINT);
        let end = parse_codepoint(end)?;

        Ok(Self {
            begin,
            end,
            description: description.trim().to_string(),
            order,
        })
    }
}

impl std::fmt::Display for BlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}. [{:#x}..{:#x}] {}",
            self.order, self.begin, self.end, self.description
        )
    }
}

/// The outcome of classifying a code point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMatch<'a> {
    Found { order: usize, description: &'a str },
    NotFound,
}

impl<'a> BlockMatch<'a> {
    pub fn order(&self) -> i64 {
        match *self {
            Self::Found { order, .. } => order as i64,
            Self::NotFound => NOT_FOUND_ORDER,
        }
    }

    pub fn description(&self) -> &'a str {
        match *self {
            Self::Found { description, .. } => description,
            Self::NotFound => NOT_FOUND_DESCRIPTION,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockTable {
    ranges: Vec<BlockRange>,
}

impl BlockTable {
    /// Parse the text of a `Blocks.txt` file.
    /// Any malformed line fails the whole table.
    pub fn parse(data: &str) -> Result<Self> {
        let mut ranges = vec![];
        let mut order = 0;

        for (idx, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            order += 1;
            ranges.push(BlockRange::parse(line, idx + 1, order)?);
        }

        log::debug!("parsed {} unicode blocks", ranges.len());
        Ok(Self { ranges })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BlockRange> {
        self.ranges.iter()
    }

    /// Returns the block with the 1-based `index`
    pub fn block(&self, index: usize) -> Result<&BlockRange> {
        index
            .checked_sub(1)
            .and_then(|idx| self.ranges.get(idx))
            .ok_or(Error::BlockOutOfRange {
                index,
                count: self.len(),
            })
    }

    /// Every encodable code point in the block with the 1-based `index`.
    /// The iterator is lazy; call this again to start over.
    pub fn expand(&self, index: usize) -> Result<impl Iterator<Item = u32>> {
        Ok(self.block(index)?.code_points())
    }

    /// Classify `code_point`. The table is small enough that a linear
    /// scan is fine, and it means that if the data ever has overlapping
    /// ranges, the earliest one wins.
    pub fn find_block(&self, code_point: u32) -> BlockMatch<'_> {
        self.ranges
            .iter()
            .find(|range| range.contains(code_point))
            .map(|range| BlockMatch::Found {
                order: range.order,
                description: &range.description,
            })
            .unwrap_or(BlockMatch::NotFound)
    }
}

impl<'a> IntoIterator for &'a BlockTable {
    type Item = &'a BlockRange;
    type IntoIter = std::slice::Iter<'a, BlockRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use k9::assert_equal as assert_eq;

    const SAMPLE: &str = "# Blocks-sample.txt
#
# Start Code..End Code; Block Name

0000..007F; Basic Latin
0080..00FF; Latin-1 Supplement

# a comment in the middle doesn't count
0041..005A; Basic Latin Letters
1F600..1F64F; Emoticons
";

    #[test]
    fn parse_sample() {
        let table = BlockTable::parse(SAMPLE).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.block(1).unwrap(),
            &BlockRange {
                begin: 0x20,
                end: 0x7f,
                description: "Basic Latin".to_string(),
                order: 1,
            }
        );
        assert_eq!(table.block(4).unwrap().begin, 0x1f600);
        let orders: Vec<usize> = table.iter().map(|r| r.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    #[test]
    fn display() {
        let table = BlockTable::parse(SAMPLE).unwrap();
        assert_eq!(
            table.block(1).unwrap().to_string(),
            "1. [0x20..0x7f] Basic Latin"
        );
        assert_eq!(
            table.block(4).unwrap().to_string(),
            "4. [0x1f600..0x1f64f] Emoticons"
        );
    }

    #[test]
    fn first_match_wins() {
        let table = BlockTable::parse(SAMPLE).unwrap();
        // 0x42 is in both "Basic Latin" and the overlapping third line
        assert_eq!(
            table.find_block(0x42),
            BlockMatch::Found {
                order: 1,
                description: "Basic Latin"
            }
        );
    }

    #[test]
    fn letters_block() {
        let table = BlockTable::parse("0041..005A; Basic Latin Letters").unwrap();
        let found = table.find_block(0x42);
        assert_eq!(found.order(), 1);
        assert_eq!(found.description(), "Basic Latin Letters");

        let table = BlockTable::parse(
            "0000..001F; C0\n0020..0040; Punctuation\n0041..005A; Basic Latin Letters",
        )
        .unwrap();
        assert_eq!(
            table.find_block(0x42),
            BlockMatch::Found {
                order: 3,
                description: "Basic Latin Letters"
            }
        );
    }

    #[test]
    fn not_found() {
        let table = BlockTable::parse(SAMPLE).unwrap();
        for code_point in [0x10, 0xd800, 0x1f650, 0x10ffff] {
            let found = table.find_block(code_point);
            assert_eq!(found, BlockMatch::NotFound);
            assert_eq!(found.order(), -1);
            assert_eq!(found.description(), "Not found in any block range");
        }
    }

    #[test]
    fn clamps_begin() {
        let table = BlockTable::parse("0000..007F; Basic Latin\n0010..00FF; Mixed").unwrap();
        assert_eq!(table.block(1).unwrap().begin, 32);
        assert_eq!(table.block(2).unwrap().begin, 32);
        assert_eq!(table.find_block(0x1f), BlockMatch::NotFound);
    }

    #[test]
    fn clamped_empty_range_keeps_its_slot() {
        let table = BlockTable::parse("0000..001F; C0\n0020..007F; Basic Latin").unwrap();
        assert_eq!(table.len(), 2);

        let c0 = table.block(1).unwrap();
        assert_eq!(c0.begin, 32);
        assert_eq!(c0.end, 0x1f);
        assert_eq!(c0.to_string(), "1. [0x20..0x1f] C0");
        assert!(!c0.contains(0x10));
        assert!(!c0.contains(0x20));
        assert_eq!(table.expand(1).unwrap().count(), 0);

        assert_eq!(table.find_block(0x10), BlockMatch::NotFound);
        assert_eq!(table.find_block(0x41).order(), 2);
    }

    #[test]
    fn malformed_lines() {
        for (data, line) in [
            ("0000..007F Basic Latin", 1),
            ("# header\n0000-007F; Basic Latin", 2),
            ("0000..007F; Basic Latin\n\n00G0..00FF; Latin-1", 3),
            ("..007F; Basic Latin", 1),
        ] {
            match BlockTable::parse(data) {
                Err(Error::Parse { line: l, .. }) => {
                    assert_eq!(l, line);
                }
                other => panic!("expected a parse error for {data:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn block_bounds() {
        let table = BlockTable::parse(SAMPLE).unwrap();
        for index in [0, 5, usize::MAX] {
            assert!(matches!(
                table.block(index),
                Err(Error::BlockOutOfRange { count: 4, .. })
            ));
            assert!(table.expand(index).is_err());
        }
    }

    #[test]
    fn expand_is_restartable() {
        let table = BlockTable::parse("0041..0043; ABC").unwrap();
        let first: Vec<u32> = table.expand(1).unwrap().collect();
        let second: Vec<u32> = table.expand(1).unwrap().collect();
        assert_eq!(first, vec![0x41, 0x42, 0x43]);
        assert_eq!(first, second);
    }

    #[test]
    fn expand_skips_surrogates() {
        let table = BlockTable::parse("D7FE..E001; Straddles the surrogates").unwrap();
        let points: Vec<u32> = table.expand(1).unwrap().collect();
        assert_eq!(points, vec![0xd7fe, 0xd7ff, 0xe000, 0xe001]);
    }
}
