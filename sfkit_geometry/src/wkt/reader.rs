use super::tokenizer::{Token, TokenKind, Tokenizer};
use crate::{
	Coordinate, CoordinateType, Geometry, GeometryError, GeometryFactory, GeometryTrait, GeometryType, LineString,
	LinearRing, Point, Polygon,
};
use anyhow::Result;
use sfkit_core::byte_iterator::ByteIterator;
use sfkit_derive::context;
use std::io::Read;

/// Parses Well-Known Text, optionally preceded by `SRID=<int>;`.
///
/// ```
/// use sfkit_geometry::{GeometryFactory, GeometryTrait, wkt::WktReader};
///
/// let g = WktReader::new(GeometryFactory::default()).read("SRID=4326;POINT (1 2)").unwrap();
/// assert_eq!(g.srid(), Some(4326));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct WktReader {
	factory: GeometryFactory,
	apply_precision: bool,
}

/// Ordinates seen while parsing, used to set the coordinate type of the result.
#[derive(Default)]
struct Dimensions {
	has_z: bool,
	has_m: bool,
}

impl WktReader {
	pub fn new(factory: GeometryFactory) -> Self {
		Self {
			factory,
			apply_precision: true,
		}
	}

	/// Whether parsed coordinates are snapped to the factory's precision model. On by default.
	pub fn with_precision(mut self, apply_precision: bool) -> Self {
		self.apply_precision = apply_precision;
		self
	}

	#[context("while parsing WKT")]
	pub fn read(&self, text: &str) -> Result<Geometry> {
		self.parse(Tokenizer::from_str(text))
	}

	#[context("while parsing WKT")]
	pub fn read_from(&self, reader: impl Read) -> Result<Geometry> {
		self.parse(Tokenizer::new(ByteIterator::from_reader(reader)))
	}

	fn parse(&self, tokenizer: Tokenizer<'_>) -> Result<Geometry> {
		let mut parser = Parser {
			tokenizer,
			factory: self.factory,
			apply_precision: self.apply_precision,
			dimensions: Dimensions::default(),
		};

		let srid = parser.parse_srid()?;
		let mut geometry = parser.parse_tagged(0, false)?;
		let token = parser.tokenizer.next_token()?;
		if token.kind != TokenKind::Eof {
			return Err(token.unexpected("end of input"));
		}

		let coordinate_type = CoordinateType::from_flags(parser.dimensions.has_z, parser.dimensions.has_m);
		if coordinate_type != self.factory.coordinate_type {
			geometry.set_factory_recursive(self.factory.with_coordinate_type(coordinate_type));
		}
		if srid.is_some() {
			geometry.set_srid(srid);
		}
		Ok(geometry)
	}
}

impl Default for WktReader {
	fn default() -> Self {
		Self::new(GeometryFactory::default())
	}
}

struct Parser<'a> {
	tokenizer: Tokenizer<'a>,
	factory: GeometryFactory,
	apply_precision: bool,
	dimensions: Dimensions,
}

impl Parser<'_> {
	fn expect(&mut self, kind: &TokenKind) -> Result<Token> {
		let token = self.tokenizer.next_token()?;
		if &token.kind == kind {
			Ok(token)
		} else {
			Err(token.unexpected(&kind.to_string()))
		}
	}

	fn next_number(&mut self) -> Result<f64> {
		let token = self.tokenizer.next_token()?;
		match token.kind {
			TokenKind::Number(value) => Ok(value),
			_ => Err(token.unexpected("number")),
		}
	}

	fn peek_is_number(&mut self) -> Result<bool> {
		Ok(matches!(self.tokenizer.peek_token()?.kind, TokenKind::Number(_)))
	}

	fn peek_is_word(&mut self, word: &str) -> Result<bool> {
		Ok(matches!(&self.tokenizer.peek_token()?.kind, TokenKind::Word(w) if w == word))
	}

	/// `EMPTY` or `(`; returns true for `EMPTY`.
	fn parse_empty_or_open(&mut self) -> Result<bool> {
		let token = self.tokenizer.next_token()?;
		match &token.kind {
			TokenKind::Word(word) if word == "EMPTY" => Ok(true),
			TokenKind::Open => Ok(false),
			_ => Err(token.unexpected("'EMPTY' or '('")),
		}
	}

	/// `,` continues a list and returns true, `)` ends it and returns false.
	fn parse_comma_or_close(&mut self) -> Result<bool> {
		let token = self.tokenizer.next_token()?;
		match token.kind {
			TokenKind::Comma => Ok(true),
			TokenKind::Close => Ok(false),
			_ => Err(token.unexpected("',' or ')'")),
		}
	}

	fn parse_srid(&mut self) -> Result<Option<i32>> {
		if !self.peek_is_word("SRID")? {
			return Ok(None);
		}
		self.tokenizer.next_token()?;
		self.expect(&TokenKind::Equals)?;
		let token = self.tokenizer.next_token()?;
		let srid = match token.kind {
			TokenKind::Number(value) if value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX) => value as i32,
			_ => return Err(token.unexpected("integer SRID")),
		};
		self.expect(&TokenKind::Semicolon)?;
		Ok(Some(srid))
	}

	/// Reads `<TAG>[M] [Z|M|ZM] (EMPTY | body)`.
	///
	/// `depth` counts the enclosing collections. Without its own dimension marker a
	/// geometry is measured when its collection is.
	fn parse_tagged(&mut self, depth: usize, parent_measured: bool) -> Result<Geometry> {
		let factory = self.factory;
		let token = self.tokenizer.next_token()?;
		GeometryError::check_depth(depth, token.position)?;
		let word = match &token.kind {
			TokenKind::Word(word) => word.clone(),
			_ => return Err(token.unexpected("geometry tag")),
		};
		let (geometry_type, mut measured) = match GeometryType::from_wkt_tag(&word) {
			Some(geometry_type) => (geometry_type, false),
			None => match word.strip_suffix('M').and_then(GeometryType::from_wkt_tag) {
				Some(geometry_type) => (geometry_type, true),
				None => return Err(token.unexpected("geometry tag")),
			},
		};

		if !measured {
			let dimension = match &self.tokenizer.peek_token()?.kind {
				TokenKind::Word(w) if w == "Z" => Some(false),
				TokenKind::Word(w) if w == "M" || w == "ZM" => Some(true),
				_ => None,
			};
			if let Some(is_measured) = dimension {
				self.tokenizer.next_token()?;
				measured = is_measured;
			} else {
				measured = parent_measured;
			}
		}
		if measured {
			self.dimensions.has_m = true;
		}

		if self.parse_empty_or_open()? {
			return Ok(factory.create_empty(geometry_type));
		}

		Ok(match geometry_type {
			GeometryType::Point => {
				let coordinate = self.parse_coordinate(measured)?;
				self.expect(&TokenKind::Close)?;
				factory.create_point(coordinate).into()
			}
			GeometryType::LineString => factory.create_line_string(self.parse_coordinate_run(measured)?).into(),
			GeometryType::LinearRing => factory.create_linear_ring(self.parse_coordinate_run(measured)?)?.into(),
			GeometryType::Polygon => self.parse_polygon_body(measured)?.into(),
			GeometryType::MultiPoint => {
				let mut points = Vec::new();
				loop {
					points.push(self.parse_multi_point_member(measured)?);
					if !self.parse_comma_or_close()? {
						break;
					}
				}
				factory.create_multi_point(points).into()
			}
			GeometryType::MultiLineString => {
				let mut lines = Vec::new();
				loop {
					lines.push(self.parse_line_string_text(measured)?);
					if !self.parse_comma_or_close()? {
						break;
					}
				}
				factory.create_multi_line_string(lines).into()
			}
			GeometryType::MultiPolygon => {
				let mut polygons = Vec::new();
				loop {
					polygons.push(self.parse_polygon_text(measured)?);
					if !self.parse_comma_or_close()? {
						break;
					}
				}
				factory.create_multi_polygon(polygons).into()
			}
			GeometryType::GeometryCollection => {
				let mut geometries = Vec::new();
				loop {
					geometries.push(self.parse_tagged(depth + 1, measured)?);
					if !self.parse_comma_or_close()? {
						break;
					}
				}
				factory.create_geometry_collection(geometries).into()
			}
		})
	}

	/// `x y`, `x y z`, `x y m` (measured) or `x y z m`.
	fn parse_coordinate(&mut self, measured: bool) -> Result<Coordinate> {
		let x = self.next_number()?;
		let y = self.next_number()?;
		let mut coordinate = Coordinate::new(x, y);
		if self.peek_is_number()? {
			let third = self.next_number()?;
			if self.peek_is_number()? {
				coordinate.z = Some(third);
				coordinate.m = Some(self.next_number()?);
				self.dimensions.has_m = true;
			} else if measured {
				coordinate.m = Some(third);
			} else {
				coordinate.z = Some(third);
			}
		}
		if coordinate.z.is_some() {
			self.dimensions.has_z = true;
		}
		if self.apply_precision {
			self.factory.apply_precision(&mut coordinate);
		}
		Ok(coordinate)
	}

	/// Coordinates up to and including the closing `)`; the `(` is already consumed.
	fn parse_coordinate_run(&mut self, measured: bool) -> Result<Vec<Coordinate>> {
		let mut coordinates = Vec::new();
		loop {
			coordinates.push(self.parse_coordinate(measured)?);
			if !self.parse_comma_or_close()? {
				return Ok(coordinates);
			}
		}
	}

	fn parse_line_string_text(&mut self, measured: bool) -> Result<LineString> {
		let factory = self.factory;
		if self.parse_empty_or_open()? {
			return Ok(factory.create_line_string(vec![]));
		}
		Ok(factory.create_line_string(self.parse_coordinate_run(measured)?))
	}

	fn parse_ring_text(&mut self, measured: bool) -> Result<LinearRing> {
		let factory = self.factory;
		if self.parse_empty_or_open()? {
			return factory.create_linear_ring(vec![]);
		}
		factory.create_linear_ring(self.parse_coordinate_run(measured)?)
	}

	fn parse_polygon_text(&mut self, measured: bool) -> Result<Polygon> {
		let factory = self.factory;
		if self.parse_empty_or_open()? {
			return Ok(factory.create_polygon_empty());
		}
		self.parse_polygon_body(measured)
	}

	/// Rings after the polygon's `(`: the shell first, then the holes.
	fn parse_polygon_body(&mut self, measured: bool) -> Result<Polygon> {
		let factory = self.factory;
		let shell = self.parse_ring_text(measured)?;
		let mut holes = Vec::new();
		while self.parse_comma_or_close()? {
			holes.push(self.parse_ring_text(measured)?);
		}
		factory.create_polygon(shell, holes)
	}

	/// Accepts `(x y)`, bare `x y` and `EMPTY`.
	fn parse_multi_point_member(&mut self, measured: bool) -> Result<Point> {
		let factory = self.factory;
		if self.peek_is_number()? {
			return Ok(factory.create_point(self.parse_coordinate(measured)?));
		}
		if self.parse_empty_or_open()? {
			return Ok(factory.create_point_empty());
		}
		let coordinate = self.parse_coordinate(measured)?;
		self.expect(&TokenKind::Close)?;
		Ok(factory.create_point(coordinate))
	}
}
