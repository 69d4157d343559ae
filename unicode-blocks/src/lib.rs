//! Classify code points against the unicode block table and show
//! how they are encoded in UTF-8, UTF-16LE and UTF-32BE.
//!
//! ```no_run
//! use unicode_blocks::{source, PointInput, QueryEngine};
//!
//! let table = source::load(&source::default_blocks_path(), source::BLOCKS_URL)?;
//! let engine = QueryEngine::new(&table);
//! for record in engine.lookup(&[PointInput::Characters("é".to_string())])? {
//!     println!("{} is in {}", record.utf8, record.block_description);
//! }
//! # Ok::<(), unicode_blocks::Error>(())
//! ```
pub mod blocks;
pub mod encoding;
pub mod error;
pub mod query;
pub mod source;

pub use blocks::{BlockMatch, BlockRange, BlockTable};
pub use encoding::Encoding;
pub use error::{Error, Result};
pub use query::{EncodedChar, PointInput, QueryEngine};
