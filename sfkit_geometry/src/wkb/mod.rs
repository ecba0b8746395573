//! Well-known binary in the standard, proposed (extended) and PostGIS dialects.
//!
//! The writer picks the dialect from [`WkbWriterOptions`] or, if none is set, from
//! the geometry itself (see [`WkbFormat::detect`]). The reader accepts all of them.

mod format;
mod reader;
mod writer;

pub use format::*;
pub use reader::WkbReader;
pub use writer::{WkbWriter, WkbWriterOptions};

use crate::Geometry;
use anyhow::Result;
use sfkit_core::Blob;

/// Encodes with the auto-detected dialect in little-endian order.
pub fn to_wkb(geometry: &Geometry) -> Result<Blob> {
	WkbWriter::default().write(geometry)
}

pub fn parse_wkb(bytes: &[u8]) -> Result<Geometry> {
	WkbReader::default().read(bytes)
}
