//! A cursor over the bytes of a string or a reader, with one byte of look-ahead.
//!
//! Text given as a `&str` is walked in place. A reader is pulled in chunks; a failed
//! read ends the input and is reported by [`ByteIterator::check_read_error`].

use anyhow::{Error, Result, anyhow};
use std::{
	borrow::Cow,
	io::{ErrorKind, Read},
};

const CHUNK_SIZE: usize = 8192;

pub struct ByteIterator<'a> {
	chunk: Cow<'a, [u8]>,
	/// Index of the peeked byte in `chunk`.
	index: usize,
	/// Bytes in the chunks before the current one.
	consumed: usize,
	reader: Option<Box<dyn Read + 'a>>,
	read_error: Option<std::io::Error>,
}

impl<'a> ByteIterator<'a> {
	pub fn from_reader(reader: impl Read + 'a) -> Self {
		let mut iter = ByteIterator {
			chunk: Cow::Owned(Vec::new()),
			index: 0,
			consumed: 0,
			reader: Some(Box::new(reader)),
			read_error: None,
		};
		iter.refill();
		iter
	}

	pub fn from_str(text: &'a str) -> Self {
		ByteIterator {
			chunk: Cow::Borrowed(text.as_bytes()),
			index: 0,
			consumed: 0,
			reader: None,
			read_error: None,
		}
	}

	fn refill(&mut self) {
		let Some(reader) = self.reader.as_mut() else {
			return;
		};
		self.consumed += self.chunk.len();
		self.index = 0;

		let buffer = self.chunk.to_mut();
		buffer.resize(CHUNK_SIZE, 0);
		let result = loop {
			match reader.read(buffer) {
				Err(error) if error.kind() == ErrorKind::Interrupted => {}
				result => break result,
			}
		};
		match result {
			Ok(length) => buffer.truncate(length),
			Err(error) => {
				buffer.clear();
				self.read_error = Some(error);
			}
		}
		if buffer.is_empty() {
			self.reader = None;
		}
	}

	/// An error at the offset of the peeked byte.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		anyhow!("{msg} at position {}", self.offset())
	}

	/// Fails if the input ended because the reader returned an error.
	pub fn check_read_error(&mut self) -> Result<()> {
		match self.read_error.take() {
			Some(error) => Err(Error::from(error).context(format!("cannot read input at position {}", self.offset()))),
			None => Ok(()),
		}
	}

	/// Zero-based offset of the peeked byte in the input.
	#[inline]
	#[must_use]
	pub fn offset(&self) -> usize {
		self.consumed + self.index
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.chunk.get(self.index).copied()
	}

	#[inline]
	pub fn advance(&mut self) {
		if self.index < self.chunk.len() {
			self.index += 1;
			if self.index == self.chunk.len() {
				self.refill();
			}
		}
	}

	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		self.advance();
		byte
	}

	pub fn expect_next_byte(&mut self) -> Result<u8> {
		self.consume().ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while self.peek().is_some_and(|byte| byte.is_ascii_whitespace()) {
			self.advance();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::{self, Cursor};

	fn drain(mut iter: ByteIterator) -> Vec<u8> {
		std::iter::from_fn(|| iter.consume()).collect()
	}

	#[test]
	fn peek_and_consume() {
		let mut b = ByteIterator::from_reader(Cursor::new(vec![b'1', b'2', b'3']));

		assert_eq!(b.peek(), Some(b'1'));
		assert_eq!(b.offset(), 0);
		assert_eq!(b.consume(), Some(b'1'));
		assert_eq!(b.peek(), Some(b'2'));
		assert_eq!(b.offset(), 1);
		assert_eq!(b.consume(), Some(b'2'));
		assert_eq!(b.consume(), Some(b'3'));
		assert_eq!(b.offset(), 3);
		assert_eq!(b.peek(), None);
		assert_eq!(b.consume(), None);
		assert_eq!(b.offset(), 3);
	}

	#[test]
	fn unexpected_end() {
		let mut b = ByteIterator::from_str("AB");
		assert_eq!(b.expect_next_byte().unwrap(), b'A');
		assert_eq!(b.expect_next_byte().unwrap(), b'B');
		assert_eq!(
			b.expect_next_byte().unwrap_err().to_string(),
			"unexpected end at position 2"
		);
	}

	#[test]
	fn skip_whitespace() {
		let mut b = ByteIterator::from_str(" \t\nAB");
		b.skip_whitespace();
		assert_eq!(b.offset(), 3);
		assert_eq!(b.consume(), Some(b'A'));

		let mut b = ByteIterator::from_str("  ");
		b.skip_whitespace();
		assert_eq!(b.peek(), None);
	}

	#[test]
	fn reader_crosses_chunk_boundaries() {
		let text = "0123456789".repeat(CHUNK_SIZE / 4);
		let mut b = ByteIterator::from_reader(text.as_bytes());
		for _ in 0..CHUNK_SIZE + 3 {
			b.advance();
		}
		assert_eq!(b.offset(), CHUNK_SIZE + 3);
		assert_eq!(b.peek(), Some(b'5'));
		assert_eq!(drain(b).len(), text.len() - CHUNK_SIZE - 3);
	}

	#[test]
	fn empty_input() {
		assert_eq!(ByteIterator::from_str("").peek(), None);
		assert_eq!(ByteIterator::from_reader(io::empty()).peek(), None);
	}

	struct FailingReader(usize);

	impl Read for FailingReader {
		fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
			if self.0 == 0 {
				return Err(io::Error::other("disk on fire"));
			}
			let length = self.0.min(buf.len());
			buf[..length].fill(b'x');
			self.0 -= length;
			Ok(length)
		}
	}

	#[test]
	fn read_errors_are_kept() {
		let mut b = ByteIterator::from_reader(FailingReader(3));
		assert_eq!(drain_by_ref(&mut b), b"xxx");
		let error = b.check_read_error().unwrap_err();
		assert_eq!(format!("{error:#}"), "cannot read input at position 3: disk on fire");
		assert!(b.check_read_error().is_ok());
	}

	fn drain_by_ref(iter: &mut ByteIterator) -> Vec<u8> {
		std::iter::from_fn(|| iter.consume()).collect()
	}
}
