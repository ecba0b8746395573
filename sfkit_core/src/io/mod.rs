//! Byte-order aware readers and writers for fixed-width binary values.

mod byte_order;
mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_blob;

pub use byte_order::*;
pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_writer::*;
pub use value_writer_blob::*;
