//! Byte-level iteration and small text-parsing helpers for hand-written parsers.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
