//! The byte order of a binary record, as declared by the leading byte of every WKB geometry.

use anyhow::{Result, bail};
use serde::Deserialize;
use std::fmt;

/// Byte order of multi-byte values.
///
/// The discriminants are the values of the WKB order byte.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
	#[serde(alias = "be", alias = "big")]
	BigEndian = 0,
	#[default]
	#[serde(alias = "le", alias = "little")]
	LittleEndian = 1,
}

impl ByteOrder {
	/// Decodes a WKB order byte.
	pub fn from_wkb_byte(byte: u8) -> Result<Self> {
		match byte {
			0 => Ok(ByteOrder::BigEndian),
			1 => Ok(ByteOrder::LittleEndian),
			_ => bail!("invalid byte order byte {byte:#04x}, expected 0 or 1"),
		}
	}

	pub fn as_wkb_byte(self) -> u8 {
		self as u8
	}

	/// Parses `le`/`little`/`littleendian` and `be`/`big`/`bigendian`, ignoring case.
	pub fn parse_str(value: &str) -> Result<Self> {
		match value.to_ascii_lowercase().as_str() {
			"le" | "little" | "littleendian" => Ok(ByteOrder::LittleEndian),
			"be" | "big" | "bigendian" => Ok(ByteOrder::BigEndian),
			_ => bail!("unknown byte order '{value}', expected 'le' or 'be'"),
		}
	}
}

impl fmt::Display for ByteOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ByteOrder::BigEndian => "big-endian",
			ByteOrder::LittleEndian => "little-endian",
		})
	}
}
