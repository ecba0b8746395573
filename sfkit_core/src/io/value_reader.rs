//! The `ValueReader` trait reads fixed-width values from a seekable source.
//!
//! Every typed read exists in three forms: `read_T` follows the reader's current
//! [`ByteOrder`], `read_T_le` and `read_T_be` force an order. A read that would run
//! past the end fails before touching the cursor, so the position is unchanged
//! after an error.
//!
//! ```rust
//! use sfkit_core::io::{ByteOrder, ValueReader, ValueReaderSlice};
//!
//! let data = [0x01, 0x02, 0x03, 0x04];
//! let mut reader = ValueReaderSlice::new_le(&data);
//! assert_eq!(reader.read_i16().unwrap(), 0x0201);
//! reader.set_order(ByteOrder::BigEndian);
//! assert_eq!(reader.read_i16().unwrap(), 0x0304);
//! assert!(reader.read_u8().is_err());
//! ```

use super::ByteOrder;
use crate::Blob;
use anyhow::{Result, bail};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{Read, Seek};

/// A simple alias for types implementing both `Seek` and `Read`.
pub trait SeekRead: Seek + Read {}

macro_rules! read_methods {
	($ty:ty, $width:expr, $read:ident, $read_le:ident, $read_be:ident, $byteorder_fn:ident) => {
		#[doc = concat!("Reads a `", stringify!($ty), "` in the reader's current byte order.")]
		fn $read(&mut self) -> Result<$ty> {
			match self.order() {
				ByteOrder::LittleEndian => self.$read_le(),
				ByteOrder::BigEndian => self.$read_be(),
			}
		}

		#[doc = concat!("Reads a little-endian `", stringify!($ty), "`.")]
		fn $read_le(&mut self) -> Result<$ty> {
			self.ensure_remaining($width)?;
			Ok(self.get_reader().$byteorder_fn::<LittleEndian>()?)
		}

		#[doc = concat!("Reads a big-endian `", stringify!($ty), "`.")]
		fn $read_be(&mut self) -> Result<$ty> {
			self.ensure_remaining($width)?;
			Ok(self.get_reader().$byteorder_fn::<BigEndian>()?)
		}
	};
}

/// A trait for reading values with a switchable byte order.
pub trait ValueReader {
	/// Returns the underlying reader to access raw bytes.
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Returns the total length of the readable data.
	fn len(&self) -> u64;

	/// Returns the current position within the readable data.
	fn position(&mut self) -> u64;

	/// Sets the current position. Positions beyond the end are rejected.
	fn set_position(&mut self, position: u64) -> Result<()>;

	/// Byte order used by the order-implicit `read_*` methods.
	fn order(&self) -> ByteOrder;

	fn set_order(&mut self, order: ByteOrder);

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn remaining(&mut self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Fails unless at least `width` bytes are left to read.
	fn ensure_remaining(&mut self, width: u64) -> Result<()> {
		let position = self.position();
		let remaining = self.remaining();
		if remaining < width {
			bail!("cannot read {width} bytes at position {position}: only {remaining} bytes left");
		}
		Ok(())
	}

	fn read_u8(&mut self) -> Result<u8> {
		self.ensure_remaining(1)?;
		Ok(self.get_reader().read_u8()?)
	}

	/// Reads `length` raw bytes into a [`Blob`].
	fn read_blob(&mut self, length: u64) -> Result<Blob> {
		self.ensure_remaining(length)?;
		let mut blob = Blob::new_sized(usize::try_from(length)?);
		self.get_reader().read_exact(blob.as_mut_slice())?;
		Ok(blob)
	}

	read_methods!(i16, 2, read_i16, read_i16_le, read_i16_be, read_i16);
	read_methods!(i32, 4, read_i32, read_i32_le, read_i32_be, read_i32);
	read_methods!(i64, 8, read_i64, read_i64_le, read_i64_be, read_i64);
	read_methods!(u32, 4, read_u32, read_u32_le, read_u32_be, read_u32);
	read_methods!(f32, 4, read_f32, read_f32_le, read_f32_be, read_f32);
	read_methods!(f64, 8, read_f64, read_f64_le, read_f64_be, read_f64);
}
