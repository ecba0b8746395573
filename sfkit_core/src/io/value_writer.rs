//! The `ValueWriter` trait writes fixed-width values to a destination.
//!
//! Like [`ValueReader`](super::ValueReader), every typed write exists as an
//! order-implicit `write_T` that follows [`ValueWriter::order`], and as the
//! order-explicit `write_T_le` / `write_T_be`.

use super::ByteOrder;
use crate::Blob;
use anyhow::Result;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::Write;

macro_rules! write_methods {
	($ty:ty, $write:ident, $write_le:ident, $write_be:ident, $byteorder_fn:ident) => {
		#[doc = concat!("Writes a `", stringify!($ty), "` in the writer's current byte order.")]
		fn $write(&mut self, value: $ty) -> Result<()> {
			match self.order() {
				ByteOrder::LittleEndian => self.$write_le(value),
				ByteOrder::BigEndian => self.$write_be(value),
			}
		}

		#[doc = concat!("Writes a little-endian `", stringify!($ty), "`.")]
		fn $write_le(&mut self, value: $ty) -> Result<()> {
			Ok(self.get_writer().$byteorder_fn::<LittleEndian>(value)?)
		}

		#[doc = concat!("Writes a big-endian `", stringify!($ty), "`.")]
		fn $write_be(&mut self, value: $ty) -> Result<()> {
			Ok(self.get_writer().$byteorder_fn::<BigEndian>(value)?)
		}
	};
}

/// A trait for writing values with a switchable byte order.
pub trait ValueWriter {
	/// Returns a mutable reference to the underlying writer.
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Returns the current write position.
	fn position(&mut self) -> u64;

	/// Byte order used by the order-implicit `write_*` methods.
	fn order(&self) -> ByteOrder;

	fn set_order(&mut self, order: ByteOrder);

	/// Returns `true` if nothing has been written yet.
	fn is_empty(&mut self) -> bool {
		self.position() == 0
	}

	fn write_u8(&mut self, value: u8) -> Result<()> {
		Ok(self.get_writer().write_u8(value)?)
	}

	/// Writes a slice of bytes.
	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		self.get_writer().write_all(buf)?;
		Ok(())
	}

	/// Writes the contents of a [`Blob`].
	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.write_slice(blob.as_slice())
	}

	write_methods!(i16, write_i16, write_i16_le, write_i16_be, write_i16);
	write_methods!(i32, write_i32, write_i32_le, write_i32_be, write_i32);
	write_methods!(i64, write_i64, write_i64_le, write_i64_be, write_i64);
	write_methods!(u32, write_u32, write_u32_le, write_u32_be, write_u32);
	write_methods!(f32, write_f32, write_f32_le, write_f32_be, write_f32);
	write_methods!(f64, write_f64, write_f64_le, write_f64_be, write_f64);
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	struct MockValueWriter {
		cursor: Cursor<Vec<u8>>,
		order: ByteOrder,
	}

	impl MockValueWriter {
		fn new(order: ByteOrder) -> Self {
			Self {
				cursor: Cursor::new(Vec::new()),
				order,
			}
		}

		fn into_inner(self) -> Vec<u8> {
			self.cursor.into_inner()
		}
	}

	impl ValueWriter for MockValueWriter {
		fn get_writer(&mut self) -> &mut dyn Write {
			&mut self.cursor
		}

		fn position(&mut self) -> u64 {
			self.cursor.position()
		}

		fn order(&self) -> ByteOrder {
			self.order
		}

		fn set_order(&mut self, order: ByteOrder) {
			self.order = order;
		}
	}

	#[test]
	fn implicit_order_follows_setting() -> Result<()> {
		let mut writer = MockValueWriter::new(ByteOrder::LittleEndian);
		writer.write_i32(1)?;
		writer.set_order(ByteOrder::BigEndian);
		writer.write_i32(1)?;
		assert_eq!(writer.into_inner(), vec![1, 0, 0, 0, 0, 0, 0, 1]);
		Ok(())
	}

	#[test]
	fn explicit_orders_ignore_setting() -> Result<()> {
		let mut writer = MockValueWriter::new(ByteOrder::BigEndian);
		writer.write_f64_le(1.0)?;
		writer.write_i16_le(-2)?;
		writer.write_u32_be(0x0102_0304)?;
		assert_eq!(
			writer.into_inner(),
			vec![
				0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F, 0xFE, 0xFF, 0x01, 0x02, 0x03, 0x04
			]
		);
		Ok(())
	}

	#[test]
	fn single_and_long() -> Result<()> {
		let mut writer = MockValueWriter::new(ByteOrder::LittleEndian);
		writer.write_f32(1.0)?;
		writer.write_i64_be(-1)?;
		assert_eq!(
			writer.into_inner(),
			vec![0x00, 0x00, 0x80, 0x3F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
		);
		Ok(())
	}

	#[test]
	fn bytes_and_blobs() -> Result<()> {
		let mut writer = MockValueWriter::new(ByteOrder::LittleEndian);
		assert!(writer.is_empty());
		writer.write_u8(0xAB)?;
		writer.write_blob(&Blob::from(vec![0x01, 0x02]))?;
		writer.write_slice(b"hi")?;
		assert_eq!(writer.position(), 5);
		assert_eq!(writer.into_inner(), vec![0xAB, 0x01, 0x02, b'h', b'i']);
		Ok(())
	}
}
