use crate::{
	Coordinate, Geometry, GeometryTrait, GeometryType, LineString, LinearRing, Point, Polygon, PrecisionModel,
};
use anyhow::Result;
use serde::Deserialize;
use std::fmt::Write;

/// In pretty mode a coordinate run breaks its line before every tenth coordinate.
const COORDINATES_PER_LINE: usize = 10;

/// Writes Well-Known Text.
///
/// Numbers go through the geometry's precision model, so they never use
/// scientific notation. Geometries with an SRID get a `SRID=<n>;` prefix.
///
/// ```
/// use sfkit_geometry::{Coordinate, GeometryFactory, wkt::WktWriter};
///
/// let point = GeometryFactory::default().create_point(Coordinate::new(1.0, 2.5));
/// assert_eq!(WktWriter::new().write(&point.into()).unwrap(), "POINT (1 2.5)");
/// ```
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WktWriter {
	pretty: bool,
	indent: usize,
}

impl Default for WktWriter {
	fn default() -> Self {
		Self {
			pretty: false,
			indent: 2,
		}
	}
}

impl WktWriter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Puts nested components on their own, indented lines.
	pub fn pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}

	/// Spaces per nesting level in pretty mode.
	pub fn indent(mut self, indent: usize) -> Self {
		self.indent = indent;
		self
	}

	pub fn write(&self, geometry: &Geometry) -> Result<String> {
		let mut text = String::new();
		self.write_to(geometry, &mut text)?;
		Ok(text)
	}

	pub fn write_to(&self, geometry: &Geometry, out: &mut dyn Write) -> Result<()> {
		if let Some(srid) = geometry.srid() {
			write!(out, "SRID={srid};")?;
		}
		let emitter = Emitter {
			writer: self,
			precision: geometry.factory().precision_model,
			measured: geometry.coordinate_type().is_measured(),
		};
		emitter.write_tagged(geometry, 0, out)?;
		Ok(())
	}
}

struct Emitter<'a> {
	writer: &'a WktWriter,
	precision: PrecisionModel,
	measured: bool,
}

impl Emitter<'_> {
	fn write_tagged(&self, geometry: &Geometry, level: usize, out: &mut dyn Write) -> std::fmt::Result {
		out.write_str(geometry.geometry_type().wkt_tag())?;
		if self.measured {
			out.write_char('M')?;
		}
		out.write_char(' ')?;
		if geometry.is_empty() && geometry.geometry_type() != GeometryType::GeometryCollection {
			return out.write_str("EMPTY");
		}
		match geometry {
			Geometry::Point(g) => self.write_point_text(g, level, out),
			Geometry::LineString(g) => self.write_coordinates(g.as_slice(), level, out),
			Geometry::LinearRing(g) => self.write_coordinates(g.as_slice(), level, out),
			Geometry::Polygon(g) => self.write_polygon_text(g, level, out),
			Geometry::MultiPoint(g) => {
				out.write_char('(')?;
				for (i, point) in g.iter().enumerate() {
					if i > 0 {
						self.separator(coordinate_run_break(i, level), out)?;
					}
					self.write_point_text(point, level, out)?;
				}
				out.write_char(')')
			}
			Geometry::MultiLineString(g) => {
				out.write_char('(')?;
				for (i, line) in g.iter().enumerate() {
					if i > 0 {
						self.separator(Some(level + 1), out)?;
					}
					self.write_line_string_text(line, level + 1, out)?;
				}
				out.write_char(')')
			}
			Geometry::MultiPolygon(g) => {
				out.write_char('(')?;
				for (i, polygon) in g.iter().enumerate() {
					if i > 0 {
						self.separator(Some(level + 1), out)?;
					}
					self.write_polygon_text(polygon, level + 1, out)?;
				}
				out.write_char(')')
			}
			Geometry::GeometryCollection(g) => {
				if g.num_geometries() == 0 {
					return out.write_str("EMPTY");
				}
				out.write_char('(')?;
				for (i, member) in g.iter().enumerate() {
					if i > 0 {
						self.separator(Some(level + 1), out)?;
					}
					let emitter = Emitter {
						measured: member.coordinate_type().is_measured(),
						..*self
					};
					emitter.write_tagged(member, level + 1, out)?;
				}
				out.write_char(')')
			}
		}
	}

	fn write_point_text(&self, point: &Point, _level: usize, out: &mut dyn Write) -> std::fmt::Result {
		match point.coordinate() {
			Some(c) => {
				out.write_char('(')?;
				self.write_coordinate(c, out)?;
				out.write_char(')')
			}
			None => out.write_str("EMPTY"),
		}
	}

	fn write_line_string_text(&self, line: &LineString, level: usize, out: &mut dyn Write) -> std::fmt::Result {
		if line.as_slice().is_empty() {
			return out.write_str("EMPTY");
		}
		self.write_coordinates(line.as_slice(), level, out)
	}

	fn write_ring_text(&self, ring: &LinearRing, level: usize, out: &mut dyn Write) -> std::fmt::Result {
		if ring.as_slice().is_empty() {
			return out.write_str("EMPTY");
		}
		self.write_coordinates(ring.as_slice(), level, out)
	}

	fn write_polygon_text(&self, polygon: &Polygon, level: usize, out: &mut dyn Write) -> std::fmt::Result {
		if polygon.is_empty() {
			return out.write_str("EMPTY");
		}
		out.write_char('(')?;
		self.write_ring_text(polygon.exterior_ring(), level, out)?;
		for hole in polygon.interior_rings() {
			self.separator(Some(level + 1), out)?;
			self.write_ring_text(hole, level + 1, out)?;
		}
		out.write_char(')')
	}

	fn write_coordinates(&self, coordinates: &[Coordinate], level: usize, out: &mut dyn Write) -> std::fmt::Result {
		out.write_char('(')?;
		for (i, c) in coordinates.iter().enumerate() {
			if i > 0 {
				self.separator(coordinate_run_break(i, level), out)?;
			}
			self.write_coordinate(c, out)?;
		}
		out.write_char(')')
	}

	/// `x y [z] [m]`; the measure is only written for measured geometries.
	fn write_coordinate(&self, c: &Coordinate, out: &mut dyn Write) -> std::fmt::Result {
		out.write_str(&self.precision.format_number(c.x))?;
		out.write_char(' ')?;
		out.write_str(&self.precision.format_number(c.y))?;
		if let Some(z) = c.z {
			out.write_char(' ')?;
			out.write_str(&self.precision.format_number(z))?;
		}
		if self.measured
			&& let Some(m) = c.m
		{
			out.write_char(' ')?;
			out.write_str(&self.precision.format_number(m))?;
		}
		Ok(())
	}

	/// `, ` between list items. In pretty mode a `line_break` level turns it into `,`
	/// followed by a new line indented to that level.
	fn separator(&self, line_break: Option<usize>, out: &mut dyn Write) -> std::fmt::Result {
		match line_break {
			Some(level) if self.writer.pretty => {
				out.write_str(",\n")?;
				for _ in 0..level * self.writer.indent {
					out.write_char(' ')?;
				}
				Ok(())
			}
			_ => out.write_str(", "),
		}
	}
}

fn coordinate_run_break(index: usize, level: usize) -> Option<usize> {
	(index % COORDINATES_PER_LINE == 0).then_some(level + 2)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CoordinateType, GeometryFactory, wkt::WktReader};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn roundtrip(text: &str) -> String {
		let geometry = WktReader::default().read(text).unwrap();
		WktWriter::new().write(&geometry).unwrap()
	}

	#[rstest]
	#[case("POINT (1 2)")]
	#[case("POINT (1.5 -2.25 3)")]
	#[case("LINESTRING (1 2, 3 4)")]
	#[case("LINEARRING (0 0, 1 0, 1 1, 0 0)")]
	#[case("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 2 4, 4 4, 4 2, 2 2))")]
	#[case("MULTIPOINT ((1 2), (3 4))")]
	#[case("MULTILINESTRING ((0 0, 1 1), (2 2, 3 3))")]
	#[case("MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)), ((5 5, 6 5, 6 6, 5 5)))")]
	#[case("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))")]
	#[case("POINTM (1 2 3)")]
	#[case("LINESTRINGM (1 2 3 4, 5 6 7 8)")]
	#[case("POLYGON EMPTY")]
	#[case("POINT EMPTY")]
	#[case("GEOMETRYCOLLECTION EMPTY")]
	#[case("MULTIPOINT ((1 2), EMPTY)")]
	#[case("SRID=4326;POINT (1 2)")]
	fn format_is_stable(#[case] text: &str) {
		assert_eq!(roundtrip(text), text);
	}

	#[test]
	fn normalizes_input_form() {
		assert_eq!(roundtrip("multipoint(1 2,3 4)"), "MULTIPOINT ((1 2), (3 4))");
		assert_eq!(roundtrip("Point Z (1 2 3)"), "POINT (1 2 3)");
		assert_eq!(roundtrip("POINT (1e3 0.000001)"), "POINT (1000 0.000001)");
	}

	#[test]
	fn parse_of_write_keeps_coordinates() {
		let factory = GeometryFactory::default();
		let line: Geometry = factory
			.create_line_string(vec![
				Coordinate::new(0.1, 0.2),
				Coordinate::new(1.0 / 3.0, -2.0 / 3.0),
				Coordinate::new(1e-7, 123456789.125),
			])
			.into();
		let text = WktWriter::new().write(&line).unwrap();
		let parsed = WktReader::new(factory).read(&text).unwrap();
		assert_eq!(parsed.geometry_type(), line.geometry_type());
		assert_eq!(parsed.coordinates(), line.coordinates());
	}

	#[test]
	fn fixed_precision_trims_digits() {
		let factory = GeometryFactory::new(PrecisionModel::fixed(1000.0), CoordinateType::Xy);
		let point: Geometry = factory.create_point(Coordinate::new(1.0 / 3.0, 2.0)).into();
		assert_eq!(WktWriter::new().write(&point).unwrap(), "POINT (0.3333 2)");
	}

	#[test]
	fn pretty_polygon() {
		let geometry = WktReader::default()
			.read("MULTIPOLYGON (((0 0, 10 0, 10 10, 0 0), (1 1, 2 1, 2 2, 1 1)), ((20 20, 30 20, 30 30, 20 20)))")
			.unwrap();
		let text = WktWriter::new().pretty(true).write(&geometry).unwrap();
		assert_eq!(
			text,
			"MULTIPOLYGON (((0 0, 10 0, 10 10, 0 0),\n    (1 1, 2 1, 2 2, 1 1)),\n  ((20 20, 30 20, 30 30, 20 20)))"
		);
	}

	#[test]
	fn pretty_breaks_long_runs() {
		let coordinates: Vec<Coordinate> = (0..12).map(|i| Coordinate::new(f64::from(i), 0.0)).collect();
		let line: Geometry = GeometryFactory::default().create_line_string(coordinates).into();
		let text = WktWriter::new().pretty(true).indent(1).write(&line).unwrap();
		assert_eq!(
			text,
			"LINESTRING (0 0, 1 0, 2 0, 3 0, 4 0, 5 0, 6 0, 7 0, 8 0, 9 0,\n  10 0, 11 0)"
		);
	}

	#[test]
	fn pretty_collection() {
		let geometry = WktReader::default()
			.read("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))")
			.unwrap();
		let text = WktWriter::new().pretty(true).write(&geometry).unwrap();
		assert_eq!(text, "GEOMETRYCOLLECTION (POINT (1 2),\n  LINESTRING (0 0, 1 1))");
	}

	#[test]
	fn pretty_lines_have_no_trailing_spaces() {
		let geometry = WktReader::default()
			.read("MULTILINESTRING ((0 0, 1 1), (2 2, 3 3), (4 4, 5 5))")
			.unwrap();
		let text = WktWriter::new().pretty(true).write(&geometry).unwrap();
		assert_eq!(text, "MULTILINESTRING ((0 0, 1 1),\n  (2 2, 3 3),\n  (4 4, 5 5))");
		assert!(text.lines().all(|line| !line.ends_with(' ')));
	}
}
