//! Splits WKT text into words, numbers and punctuation.

use crate::GeometryError;
use anyhow::Result;
use sfkit_core::byte_iterator::{ByteIterator, is_word_start, parse_number_as_string, parse_word};
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
	/// Upper-cased word.
	Word(String),
	Number(f64),
	Open,
	Close,
	Comma,
	Equals,
	Semicolon,
	Eof,
}

impl Display for TokenKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			TokenKind::Word(word) => write!(f, "word '{word}'"),
			TokenKind::Number(number) => write!(f, "number {number}"),
			TokenKind::Open => f.write_str("'('"),
			TokenKind::Close => f.write_str("')'"),
			TokenKind::Comma => f.write_str("','"),
			TokenKind::Equals => f.write_str("'='"),
			TokenKind::Semicolon => f.write_str("';'"),
			TokenKind::Eof => f.write_str("end of input"),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
	pub kind: TokenKind,
	/// Byte offset where the token starts.
	pub position: usize,
}

impl Token {
	/// A parse error saying that `expected` was wanted instead of this token.
	pub fn unexpected(&self, expected: &str) -> anyhow::Error {
		GeometryError::parse(expected, self.kind.to_string(), self.position).into()
	}
}

/// One tokenizer per parse; it holds at most one token of look-ahead.
pub struct Tokenizer<'a> {
	iter: ByteIterator<'a>,
	peeked: Option<Token>,
}

impl<'a> Tokenizer<'a> {
	pub fn new(iter: ByteIterator<'a>) -> Self {
		Self { iter, peeked: None }
	}

	pub fn from_str(text: &'a str) -> Self {
		Self::new(ByteIterator::from_str(text))
	}

	pub fn peek_token(&mut self) -> Result<&Token> {
		let token = match self.peeked.take() {
			Some(token) => token,
			None => self.scan()?,
		};
		Ok(self.peeked.insert(token))
	}

	pub fn next_token(&mut self) -> Result<Token> {
		match self.peeked.take() {
			Some(token) => Ok(token),
			None => self.scan(),
		}
	}

	fn scan(&mut self) -> Result<Token> {
		self.iter.skip_whitespace();
		let position = self.iter.offset();
		let kind = match self.iter.peek() {
			None => {
				self.iter.check_read_error()?;
				TokenKind::Eof
			}
			Some(byte) => match byte {
				b'(' => self.punctuation(TokenKind::Open),
				b')' => self.punctuation(TokenKind::Close),
				b',' => self.punctuation(TokenKind::Comma),
				b'=' => self.punctuation(TokenKind::Equals),
				b';' => self.punctuation(TokenKind::Semicolon),
				b'0'..=b'9' | b'+' | b'-' | b'.' => {
					let text = parse_number_as_string(&mut self.iter)
						.map_err(|_| GeometryError::parse("number", "malformed number", position))?;
					let value = text
						.parse::<f64>()
						.map_err(|_| GeometryError::parse("number", format!("malformed number '{text}'"), position))?;
					TokenKind::Number(value)
				}
				b if is_word_start(b) => TokenKind::Word(parse_word(&mut self.iter)?.to_ascii_uppercase()),
				b => {
					return Err(GeometryError::parse("token", format!("character '{}'", b as char), position).into());
				}
			},
		};
		Ok(Token { kind, position })
	}

	fn punctuation(&mut self, kind: TokenKind) -> TokenKind {
		self.iter.advance();
		kind
	}
}
