//! An in-memory [`ValueWriter`] that grows its buffer explicitly.
//!
//! The capacity starts at [`MIN_CAPACITY`] bytes and doubles until a write fits.
//! Bytes already written are never moved out of order or dropped by a resize.

use super::{ByteOrder, ValueWriter};
use crate::Blob;
use std::io::{self, Write};

/// Smallest capacity the buffer allocates once something is written.
pub const MIN_CAPACITY: usize = 256;

struct GrowableBuffer {
	data: Vec<u8>,
	capacity: usize,
}

impl GrowableBuffer {
	fn with_capacity(capacity: usize) -> Self {
		let capacity = capacity.max(MIN_CAPACITY);
		Self {
			data: Vec::with_capacity(capacity),
			capacity,
		}
	}

	fn grow_for(&mut self, additional: usize) {
		let needed = self.data.len() + additional;
		if needed <= self.capacity {
			return;
		}
		let mut capacity = self.capacity.max(MIN_CAPACITY);
		while capacity < needed {
			capacity *= 2;
		}
		log::trace!("growing value buffer from {} to {capacity} bytes", self.capacity);
		self.data.reserve_exact(capacity - self.data.len());
		self.capacity = capacity;
	}
}

impl Write for GrowableBuffer {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.grow_for(buf.len());
		self.data.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Writes values into an in-memory buffer that can be turned into a [`Blob`].
pub struct ValueWriterBlob {
	buffer: GrowableBuffer,
	order: ByteOrder,
}

impl ValueWriterBlob {
	#[must_use]
	pub fn new(order: ByteOrder) -> ValueWriterBlob {
		ValueWriterBlob::with_capacity(order, MIN_CAPACITY)
	}

	/// Creates a writer with an initial capacity, raised to [`MIN_CAPACITY`] if smaller.
	#[must_use]
	pub fn with_capacity(order: ByteOrder, capacity: usize) -> ValueWriterBlob {
		ValueWriterBlob {
			buffer: GrowableBuffer::with_capacity(capacity),
			order,
		}
	}

	#[must_use]
	pub fn new_le() -> ValueWriterBlob {
		ValueWriterBlob::new(ByteOrder::LittleEndian)
	}

	#[must_use]
	pub fn new_be() -> ValueWriterBlob {
		ValueWriterBlob::new(ByteOrder::BigEndian)
	}

	/// Current capacity of the buffer in bytes.
	pub fn capacity(&self) -> usize {
		self.buffer.capacity
	}

	/// Bytes written so far.
	pub fn as_slice(&self) -> &[u8] {
		&self.buffer.data
	}

	/// Discards everything written, keeping the allocated capacity.
	pub fn reset(&mut self) {
		self.buffer.data.clear();
	}

	pub fn into_blob(self) -> Blob {
		Blob::from(self.buffer.data)
	}
}

impl Default for ValueWriterBlob {
	fn default() -> Self {
		ValueWriterBlob::new_le()
	}
}

impl ValueWriter for ValueWriterBlob {
	fn get_writer(&mut self) -> &mut dyn Write {
		&mut self.buffer
	}

	fn position(&mut self) -> u64 {
		self.buffer.data.len() as u64
	}

	fn order(&self) -> ByteOrder {
		self.order
	}

	fn set_order(&mut self, order: ByteOrder) {
		self.order = order;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;

	#[test]
	fn starts_with_minimum_capacity() {
		assert_eq!(ValueWriterBlob::new_le().capacity(), 256);
		assert_eq!(ValueWriterBlob::with_capacity(ByteOrder::BigEndian, 16).capacity(), 256);
		assert_eq!(ValueWriterBlob::with_capacity(ByteOrder::BigEndian, 1000).capacity(), 1000);
	}

	#[test]
	fn doubles_until_write_fits() -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		for i in 0..32 {
			writer.write_f64(f64::from(i))?;
		}
		assert_eq!(writer.capacity(), 256);
		writer.write_u8(0xFF)?;
		assert_eq!(writer.capacity(), 512);
		writer.write_slice(&[0; 2000])?;
		assert_eq!(writer.capacity(), 4096);
		Ok(())
	}

	#[test]
	fn growth_preserves_written_bytes() -> Result<()> {
		let mut writer = ValueWriterBlob::new_be();
		for i in 0..100 {
			writer.write_i32(i)?;
		}
		let blob = writer.into_blob();
		assert_eq!(blob.len(), 400);
		assert_eq!(&blob.as_slice()[..8], &[0, 0, 0, 0, 0, 0, 0, 1]);
		assert_eq!(&blob.as_slice()[396..], &[0, 0, 0, 99]);
		Ok(())
	}

	#[test]
	fn reset_clears_content() -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		writer.write_i64(7)?;
		assert_eq!(writer.position(), 8);
		writer.reset();
		assert!(writer.is_empty());
		writer.write_u8(1)?;
		assert_eq!(writer.as_slice(), &[1]);
		Ok(())
	}
}
