//! Well-Known Text.
//!
//! [`WktReader`] parses the OGC tagged text plus the `LINEARRING` tag, `M`-suffixed
//! measured tags, ISO `Z`/`M`/`ZM` dimension words and an optional `SRID=<n>;`
//! prefix. [`WktWriter`] emits the same grammar, optionally pretty printed.

mod reader;
mod tokenizer;
mod writer;

pub use reader::WktReader;
pub use writer::WktWriter;

use crate::Geometry;
use anyhow::Result;

/// Parses `text` with a default factory.
pub fn parse_wkt(text: &str) -> Result<Geometry> {
	WktReader::default().read(text)
}

/// Formats `geometry` on a single line.
pub fn to_wkt(geometry: &Geometry) -> Result<String> {
	WktWriter::new().write(geometry)
}
