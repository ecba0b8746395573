use super::{ByteOrder, SeekRead, ValueReader};
use anyhow::{Result, bail};
use std::io::Cursor;

/// Reads values from a borrowed byte slice.
pub struct ValueReaderSlice<'a> {
	cursor: Cursor<&'a [u8]>,
	len: u64,
	order: ByteOrder,
}

impl<'a> ValueReaderSlice<'a> {
	#[must_use]
	pub fn new(slice: &'a [u8], order: ByteOrder) -> ValueReaderSlice<'a> {
		ValueReaderSlice {
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
			order,
		}
	}

	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a> {
		ValueReaderSlice::new(slice, ByteOrder::LittleEndian)
	}

	#[must_use]
	pub fn new_be(slice: &'a [u8]) -> ValueReaderSlice<'a> {
		ValueReaderSlice::new(slice, ByteOrder::BigEndian)
	}
}

impl SeekRead for Cursor<&[u8]> {}

impl ValueReader for ValueReaderSlice<'_> {
	fn get_reader(&mut self) -> &mut dyn SeekRead {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}

	fn set_position(&mut self, position: u64) -> Result<()> {
		if position > self.len {
			bail!("set position {position} outside length {}", self.len)
		}
		self.cursor.set_position(position);
		Ok(())
	}

	fn order(&self) -> ByteOrder {
		self.order
	}

	fn set_order(&mut self, order: ByteOrder) {
		self.order = order;
	}
}
