use super::{EPSG_URL_PREFIX, GML_NAMESPACE};
use crate::{
	Coordinate, Geometry, GeometryError, GeometryTrait, LineString, LinearRing, Point, Polygon, PrecisionModel,
};
use anyhow::Result;
use itertools::Itertools;
use quick_xml::{
	Writer,
	events::{BytesEnd, BytesStart, BytesText, Event},
};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GmlVersion {
	#[default]
	Gml2,
	/// Reserved; writing fails.
	Gml3,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GmlWriterOptions {
	pub version: GmlVersion,
	/// Verbose `<coord><X/><Y/></coord>` elements instead of compact `<coordinates>`.
	/// Measured geometries always use them, since `<coordinates>` has no place for M.
	pub use_coord: bool,
	/// Namespace prefix for every element and attribute; the root declares it.
	pub prefix: Option<String>,
	/// Writes `srsName` as `http://www.opengis.net/gml/srs/epsg.xml#<srid>` instead of the bare number.
	pub use_epsg_srs: bool,
	pub tuple_separator: String,
	pub ordinate_separator: String,
	pub pretty: bool,
}

impl Default for GmlWriterOptions {
	fn default() -> Self {
		Self {
			version: GmlVersion::Gml2,
			use_coord: false,
			prefix: Some(String::from("gml")),
			use_epsg_srs: false,
			tuple_separator: String::from(" "),
			ordinate_separator: String::from(","),
			pretty: false,
		}
	}
}

/// Serializes geometries as GML 2 fragments.
///
/// ```
/// use sfkit_geometry::{gml::GmlWriter, wkt::parse_wkt};
///
/// let xml = GmlWriter::default().write(&parse_wkt("POINT (1 2)").unwrap()).unwrap();
/// assert_eq!(
/// 	xml,
/// 	r#"<gml:Point xmlns:gml="http://www.opengis.net/gml"><gml:coordinates>1,2</gml:coordinates></gml:Point>"#
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct GmlWriter {
	options: GmlWriterOptions,
}

impl GmlWriter {
	pub fn new(options: GmlWriterOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &GmlWriterOptions {
		&self.options
	}

	pub fn write(&self, geometry: &Geometry) -> Result<String> {
		if self.options.version == GmlVersion::Gml3 {
			return Err(GeometryError::unsupported("GML 3", geometry.geometry_type()).into());
		}
		let mut emitter = Emitter {
			writer: if self.options.pretty {
				Writer::new_with_indent(Vec::new(), b' ', 2)
			} else {
				Writer::new(Vec::new())
			},
			options: &self.options,
			precision: geometry.factory().precision_model,
			use_coord: self.options.use_coord || geometry.coordinate_type().is_measured(),
		};
		emitter.write_geometry(geometry, true)?;
		Ok(String::from_utf8(emitter.writer.into_inner())?)
	}
}

struct Emitter<'a> {
	writer: Writer<Vec<u8>>,
	options: &'a GmlWriterOptions,
	precision: PrecisionModel,
	use_coord: bool,
}

impl Emitter<'_> {
	fn name(&self, local: &str) -> String {
		match &self.options.prefix {
			Some(prefix) => format!("{prefix}:{local}"),
			None => local.to_string(),
		}
	}

	fn start(&mut self, local: &str) -> Result<()> {
		let name = self.name(local);
		self.writer.write_event(Event::Start(BytesStart::new(name)))?;
		Ok(())
	}

	fn end(&mut self, local: &str) -> Result<()> {
		let name = self.name(local);
		self.writer.write_event(Event::End(BytesEnd::new(name)))?;
		Ok(())
	}

	fn text_element(&mut self, local: &str, text: &str) -> Result<()> {
		self.start(local)?;
		self.writer.write_event(Event::Text(BytesText::new(text)))?;
		self.end(local)
	}

	/// The opening tag of a geometry, carrying the namespace declaration on the root
	/// and `srsName`/`gid` where the geometry has them.
	fn open_geometry(&mut self, local: &str, geometry: &dyn GeometryTrait, root: bool, empty: bool) -> Result<()> {
		let mut start = BytesStart::new(self.name(local));
		if root && let Some(prefix) = &self.options.prefix {
			start.push_attribute((format!("xmlns:{prefix}").as_str(), GML_NAMESPACE));
		}
		if let Some(srid) = geometry.srid() {
			let value = if self.options.use_epsg_srs {
				format!("{EPSG_URL_PREFIX}{srid}")
			} else {
				srid.to_string()
			};
			start.push_attribute((self.name("srsName").as_str(), value.as_str()));
		}
		if let Some(gid) = geometry.gid() {
			start.push_attribute((self.name("gid").as_str(), gid));
		}
		if empty {
			self.writer.write_event(Event::Empty(start))?;
		} else {
			self.writer.write_event(Event::Start(start))?;
		}
		Ok(())
	}

	fn write_geometry(&mut self, geometry: &Geometry, root: bool) -> Result<()> {
		match geometry {
			Geometry::Point(point) => self.write_point(point, root),
			Geometry::LineString(line) => self.write_line_string(line, root),
			Geometry::LinearRing(ring) => self.write_ring(ring, root),
			Geometry::Polygon(polygon) => self.write_polygon(polygon, root),
			Geometry::MultiPoint(multi) => {
				self.write_members("MultiPoint", "pointMember", multi, root, multi.iter(), Self::write_point)
			}
			Geometry::MultiLineString(multi) => self.write_members(
				"MultiLineString",
				"lineStringMember",
				multi,
				root,
				multi.iter(),
				Self::write_line_string,
			),
			Geometry::MultiPolygon(multi) => {
				self.write_members("MultiPolygon", "polygonMember", multi, root, multi.iter(), Self::write_polygon)
			}
			Geometry::GeometryCollection(collection) => self.write_members(
				"MultiGeometry",
				"geometryMember",
				collection,
				root,
				collection.iter(),
				Self::write_geometry,
			),
		}
	}

	/// GML 2 has no encoding for empty primitives.
	fn check_not_empty(geometry: &dyn GeometryTrait) -> Result<()> {
		if geometry.is_empty() {
			return Err(GeometryError::unsupported("GML 2", geometry.geometry_type()).into());
		}
		Ok(())
	}

	fn write_point(&mut self, point: &Point, root: bool) -> Result<()> {
		Self::check_not_empty(point)?;
		self.open_geometry("Point", point, root, false)?;
		self.write_coordinates(&point.coordinates())?;
		self.end("Point")
	}

	fn write_line_string(&mut self, line: &LineString, root: bool) -> Result<()> {
		Self::check_not_empty(line)?;
		self.open_geometry("LineString", line, root, false)?;
		self.write_coordinates(line.as_slice())?;
		self.end("LineString")
	}

	fn write_ring(&mut self, ring: &LinearRing, root: bool) -> Result<()> {
		Self::check_not_empty(ring)?;
		self.open_geometry("LinearRing", ring, root, false)?;
		self.write_coordinates(ring.as_slice())?;
		self.end("LinearRing")
	}

	fn write_polygon(&mut self, polygon: &Polygon, root: bool) -> Result<()> {
		Self::check_not_empty(polygon)?;
		self.open_geometry("Polygon", polygon, root, false)?;
		self.start("outerBoundaryIs")?;
		self.write_ring(polygon.exterior_ring(), false)?;
		self.end("outerBoundaryIs")?;
		for hole in polygon.interior_rings() {
			self.start("innerBoundaryIs")?;
			self.write_ring(hole, false)?;
			self.end("innerBoundaryIs")?;
		}
		self.end("Polygon")
	}

	fn write_members<'g, T: 'g>(
		&mut self,
		local: &str,
		member: &str,
		geometry: &dyn GeometryTrait,
		root: bool,
		members: impl ExactSizeIterator<Item = &'g T>,
		write_member: impl Fn(&mut Self, &T, bool) -> Result<()>,
	) -> Result<()> {
		if members.len() == 0 {
			return self.open_geometry(local, geometry, root, true);
		}
		self.open_geometry(local, geometry, root, false)?;
		for g in members {
			self.start(member)?;
			write_member(self, g, false)?;
			self.end(member)?;
		}
		self.end(local)
	}

	fn write_coordinates(&mut self, coordinates: &[Coordinate]) -> Result<()> {
		if self.use_coord {
			for c in coordinates {
				self.start("coord")?;
				self.text_element("X", &self.precision.format_number(c.x))?;
				self.text_element("Y", &self.precision.format_number(c.y))?;
				if let Some(z) = c.z {
					self.text_element("Z", &self.precision.format_number(z))?;
				}
				if let Some(m) = c.m {
					self.text_element("M", &self.precision.format_number(m))?;
				}
				self.end("coord")?;
			}
			return Ok(());
		}

		let text = coordinates
			.iter()
			.map(|c| {
				let mut tuple = format!(
					"{}{}{}",
					self.precision.format_number(c.x),
					self.options.ordinate_separator,
					self.precision.format_number(c.y)
				);
				if let Some(z) = c.z {
					tuple.push_str(&self.options.ordinate_separator);
					tuple.push_str(&self.precision.format_number(z));
				}
				tuple
			})
			.join(&self.options.tuple_separator);

		let mut start = BytesStart::new(self.name("coordinates"));
		if self.options.ordinate_separator != "," {
			start.push_attribute(("cs", self.options.ordinate_separator.as_str()));
		}
		if self.options.tuple_separator != " " {
			start.push_attribute(("ts", self.options.tuple_separator.as_str()));
		}
		self.writer.write_event(Event::Start(start))?;
		self.writer.write_event(Event::Text(BytesText::new(&text)))?;
		self.end("coordinates")
	}
}
