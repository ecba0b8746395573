//! Typed error kinds of the geometry kernel.
//!
//! Public functions return `anyhow::Result`; the kernel's own failures are a
//! [`GeometryError`] inside the `anyhow::Error`, so callers can inspect them with
//! `err.downcast_ref::<GeometryError>()` even after context has been added.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometryError {
	/// Unexpected token or element while parsing text.
	#[error("parse error at position {position}: expected {expected}, found {found}")]
	Parse {
		expected: String,
		found: String,
		position: usize,
	},
	/// The geometry or dialect has no encoding in the requested format.
	#[error("{format} format does not exist for this geometry ({geometry_type})")]
	UnsupportedGeometry { format: String, geometry_type: String },
	/// A constructor rejected its input.
	#[error("invalid geometry structure: {0}")]
	InvalidStructure(String),
	#[error("index {index} out of bounds for {len} elements")]
	IndexOutOfBounds { index: usize, len: usize },
}

impl GeometryError {
	pub fn parse(expected: impl Into<String>, found: impl Into<String>, position: usize) -> Self {
		GeometryError::Parse {
			expected: expected.into(),
			found: found.into(),
			position,
		}
	}

	pub fn unsupported(format: impl Into<String>, geometry_type: impl ToString) -> Self {
		GeometryError::UnsupportedGeometry {
			format: format.into(),
			geometry_type: geometry_type.to_string(),
		}
	}

	pub fn invalid(message: impl Into<String>) -> Self {
		GeometryError::InvalidStructure(message.into())
	}

	/// Fails when a reader is about to descend below [`MAX_NESTING_DEPTH`].
	pub fn check_depth(depth: usize, position: usize) -> Result<(), Self> {
		if depth > MAX_NESTING_DEPTH {
			Err(GeometryError::parse(
				format!("at most {MAX_NESTING_DEPTH} nested geometries"),
				format!("nesting depth {depth}"),
				position,
			))
		} else {
			Ok(())
		}
	}
}

/// Deepest nesting of collections accepted by the WKT, WKB and GML readers.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Returns the [`GeometryError`] carried by an `anyhow::Error`, if any.
pub fn geometry_error(err: &anyhow::Error) -> Option<&GeometryError> {
	err.downcast_ref::<GeometryError>()
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Context;

	#[test]
	fn messages() {
		assert_eq!(
			GeometryError::parse("number", "word 'EMPTY'", 7).to_string(),
			"parse error at position 7: expected number, found word 'EMPTY'"
		);
		assert_eq!(
			GeometryError::unsupported("WKB Custom", "Point").to_string(),
			"WKB Custom format does not exist for this geometry (Point)"
		);
		assert_eq!(
			GeometryError::IndexOutOfBounds { index: 3, len: 2 }.to_string(),
			"index 3 out of bounds for 2 elements"
		);
	}

	#[test]
	fn downcast_through_context() {
		let result: anyhow::Result<()> = Err(GeometryError::invalid("ring not closed").into());
		let err = result.context("while reading").context("while converting").unwrap_err();
		assert_eq!(
			geometry_error(&err),
			Some(&GeometryError::InvalidStructure("ring not closed".to_string()))
		);
	}
}
