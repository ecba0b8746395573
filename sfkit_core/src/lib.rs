//! Low-level building blocks shared by the sfkit crates: an order-aware byte buffer,
//! a byte blob with hex encoding and a byte iterator for hand-written text parsers.

pub mod byte_iterator;
pub mod io;
pub mod types;

pub use types::Blob;
