//! This module provides the [`Blob`] struct, a wrapper around [`Vec<u8>`] used as the
//! output of binary encoders and as input of binary decoders.
//!
//! # Examples
//!
//! ```rust
//! use sfkit_core::Blob;
//!
//! let blob = Blob::from(&[0x01, 0x01, 0x00, 0x00, 0x00]);
//! assert_eq!(blob.len(), 5);
//! assert_eq!(blob.as_hex(), "0101000000");
//! assert_eq!(Blob::from_hex("0101000000").unwrap(), blob);
//! ```

use anyhow::{Result, bail};
use std::fmt::Debug;
use std::ops::Range;

/// A simple wrapper around [`Vec<u8>`] that provides additional methods for working with byte data.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Creates a zero-filled `Blob` of the given length.
	#[must_use]
	pub fn new_sized(length: usize) -> Blob {
		Blob(vec![0u8; length])
	}

	/// Decodes a hexadecimal string. Whitespace is ignored, both cases are accepted.
	pub fn from_hex(text: &str) -> Result<Blob> {
		let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
		if digits.len() % 2 != 0 {
			bail!("hex string has an odd number of digits ({})", digits.len());
		}
		let mut bytes = Vec::with_capacity(digits.len() / 2);
		for (index, pair) in digits.chunks_exact(2).enumerate() {
			let high = hex_value(pair[0], index * 2)?;
			let low = hex_value(pair[1], index * 2 + 1)?;
			bytes.push((high << 4) | low);
		}
		Ok(Blob(bytes))
	}

	#[must_use]
	pub fn range(&self, range: Range<usize>) -> &[u8] {
		&self.0[range]
	}

	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_slice()
	}

	pub fn as_mut_slice(&mut self) -> &mut [u8] {
		self.0.as_mut_slice()
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the bytes as uppercase hexadecimal digits without separators,
	/// the usual text embedding of WKB.
	#[must_use]
	pub fn as_hex(&self) -> String {
		use std::fmt::Write;
		let mut text = String::with_capacity(self.0.len() * 2);
		for byte in &self.0 {
			let _ = write!(text, "{byte:02X}");
		}
		text
	}

	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

fn hex_value(digit: u8, position: usize) -> Result<u8> {
	match digit {
		b'0'..=b'9' => Ok(digit - b'0'),
		b'a'..=b'f' => Ok(digit - b'a' + 10),
		b'A'..=b'F' => Ok(digit - b'A' + 10),
		_ => bail!("invalid hex digit '{}' at position {position}", char::from(digit)),
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(item: &[u8; N]) -> Self {
		Blob(item.to_vec())
	}
}

/// Implements [`Debug`] by printing the byte length and hexadecimal representation of the bytes.
impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({}): {}", self.0.len(), self.as_hex())
	}
}
