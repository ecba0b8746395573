//! Small parsing helpers built on top of [`ByteIterator`](super::iterator::ByteIterator).
//!
//! - `parse_word` reads a run of ASCII letters, digits and underscores
//! - `parse_number_as_string` and `parse_number_as<T>` read decimal numbers with optional exponent
//!
//! The word and number parsers use the [`#[context]`](sfkit_derive::context) attribute, so errors carry
//! a note on what was being parsed. They leave the iterator at the first byte they did not use.

use super::iterator::ByteIterator;
use anyhow::{Error, Result};
use sfkit_derive::context;
use std::str::FromStr;

/// Returns true for bytes that may start a word.
#[inline]
pub fn is_word_start(byte: u8) -> bool {
	byte.is_ascii_alphabetic() || byte == b'_'
}

/// Read a word (`[A-Za-z_][A-Za-z0-9_]*`) and return it unchanged.
///
/// ```
/// # use sfkit_core::byte_iterator::{ByteIterator, parse_word};
/// let mut it = ByteIterator::from_str("Point(1 2)");
/// assert_eq!(parse_word(&mut it).unwrap(), "Point");
/// assert_eq!(it.peek(), Some(b'('));
/// ```
#[context("while parsing a word")]
pub fn parse_word(iter: &mut ByteIterator) -> Result<String> {
	let mut word = Vec::with_capacity(16);
	match iter.peek() {
		Some(b) if is_word_start(b) => {}
		_ => return Err(iter.format_error("expected a letter")),
	}
	while let Some(b) = iter.peek() {
		if !(b.is_ascii_alphanumeric() || b == b'_') {
			break;
		}
		word.push(b);
		iter.advance();
	}
	String::from_utf8(word).map_err(Error::from)
}

/// Parse a decimal number and return its textual representation.
///
/// Accepts an optional sign, digits with an optional fraction (`1`, `1.5`, `.5`, `1.`),
/// and an optional exponent (`e`/`E` with optional sign). At least one mantissa digit
/// is required.
///
/// ```
/// # use sfkit_core::byte_iterator::{ByteIterator, parse_number_as_string};
/// let mut it = ByteIterator::from_str("-12.3e+4,");
/// assert_eq!(parse_number_as_string(&mut it).unwrap(), "-12.3e+4");
/// ```
#[context("while parsing a number")]
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	let mut number = Vec::with_capacity(24);

	if let Some(b'+' | b'-') = iter.peek() {
		number.push(iter.expect_next_byte()?);
	}

	let mut mantissa_digits = 0usize;
	while let Some(b'0'..=b'9') = iter.peek() {
		mantissa_digits += 1;
		number.push(iter.expect_next_byte()?);
	}

	if let Some(b'.') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		while let Some(b'0'..=b'9') = iter.peek() {
			mantissa_digits += 1;
			number.push(iter.expect_next_byte()?);
		}
		if let Some(b'.') = iter.peek() {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if mantissa_digits == 0 {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'e' | b'E') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		if let Some(b'+' | b'-') = iter.peek() {
			number.push(iter.expect_next_byte()?);
		}
		let mut exponent_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			exponent_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !exponent_digits {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	String::from_utf8(number).map_err(Error::from)
}

/// Parse a number and convert it to `R` via `FromStr`.
///
/// ```
/// # use sfkit_core::byte_iterator::{ByteIterator, parse_number_as};
/// let mut it = ByteIterator::from_str("4326;");
/// let n: i32 = parse_number_as(&mut it).unwrap();
/// assert_eq!(n, 4326);
/// ```
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;

	fn get_reader(s: &str) -> ByteIterator<'_> {
		ByteIterator::from_str(s)
	}

	#[rstest]
	#[case("POINT(", "POINT")]
	#[case("multipolygon ((", "multipolygon")]
	#[case("POINTM EMPTY", "POINTM")]
	#[case("srid_1=", "srid_1")]
	fn words(#[case] text: &str, #[case] expected: &str) {
		let mut iter = get_reader(text);
		assert_eq!(parse_word(&mut iter).unwrap(), expected);
	}

	#[test]
	fn word_must_start_with_letter() {
		let mut iter = get_reader("1POINT");
		assert!(parse_word(&mut iter).is_err());
		assert_eq!(iter.offset(), 0);
	}

	#[rstest]
	#[case("123", "123")]
	#[case("-123", "-123")]
	#[case("+1.5)", "+1.5")]
	#[case(".5 ", ".5")]
	#[case("-.5,", "-.5")]
	#[case("1. ", "1.")]
	#[case("3e4", "3e4")]
	#[case("-123.45E+6xyz", "-123.45E+6")]
	#[case("1e-300", "1e-300")]
	fn numbers(#[case] text: &str, #[case] expected: &str) {
		let mut iter = get_reader(text);
		assert_eq!(parse_number_as_string(&mut iter).unwrap(), expected);
	}

	#[rstest]
	#[case("1.2.3")]
	#[case("123e")]
	#[case("123e+")]
	#[case("e123")]
	#[case("-")]
	#[case(".")]
	#[case("")]
	fn invalid_numbers(#[case] text: &str) {
		let mut iter = get_reader(text);
		assert!(parse_number_as_string(&mut iter).is_err());
	}

	#[test]
	fn numbers_as_types() -> Result<()> {
		assert_relative_eq!(parse_number_as::<f64>(&mut get_reader("-0.123E3"))?, -123.0);
		assert_relative_eq!(parse_number_as::<f64>(&mut get_reader("2e-10"))?, 2e-10);
		assert_eq!(parse_number_as::<i32>(&mut get_reader("-4326"))?, -4326);
		assert!(parse_number_as::<i32>(&mut get_reader("12.5")).is_err());
		Ok(())
	}
}
