use super::EPSG_URL_PREFIX;
use crate::{
	Coordinate, CoordinateType, Geometry, GeometryError, GeometryFactory, GeometryTrait, LineString, LinearRing,
	Point, Polygon,
};
use anyhow::Result;
use quick_xml::{
	Reader,
	escape::resolve_predefined_entity,
	events::{BytesRef, BytesStart, Event},
};
use serde::Deserialize;
use sfkit_derive::context;

/// Separators of the compact `<coordinates>` encoding, unless the element sets `cs`/`ts`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GmlReaderOptions {
	pub tuple_separator: String,
	pub ordinate_separator: String,
}

impl Default for GmlReaderOptions {
	fn default() -> Self {
		Self {
			tuple_separator: String::from(" "),
			ordinate_separator: String::from(","),
		}
	}
}

/// Pull-parses GML 2 geometry elements out of an XML document.
///
/// Elements are matched by local name, so any namespace prefix is accepted.
/// Geometries that cannot be built, such as a line with a single coordinate or
/// a polygon without an outer boundary, are discarded rather than reported.
///
/// ```
/// use sfkit_geometry::{GeometryTrait, gml::GmlReader};
///
/// let xml = r#"<gml:Point srsName="EPSG:4326"><gml:coordinates>1,2</gml:coordinates></gml:Point>"#;
/// let point = GmlReader::default().read(xml).unwrap().unwrap();
/// assert_eq!(point.srid(), Some(4326));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GmlReader {
	factory: GeometryFactory,
	options: GmlReaderOptions,
}

impl GmlReader {
	pub fn new(factory: GeometryFactory, options: GmlReaderOptions) -> Self {
		Self { factory, options }
	}

	/// The first geometry element of the document, or `None` if there is none or it was discarded.
	#[context("while parsing GML")]
	pub fn read(&self, xml: &str) -> Result<Option<Geometry>> {
		let mut parser = Parser::new(xml, self);
		match parser.next_geometry_element()? {
			Some(element) => parser.parse_root(element),
			None => Ok(None),
		}
	}

	/// Every outermost geometry element of the document, e.g. one per feature member.
	#[context("while parsing GML")]
	pub fn read_all(&self, xml: &str) -> Result<Vec<Geometry>> {
		let mut parser = Parser::new(xml, self);
		let mut geometries = Vec::new();
		while let Some(element) = parser.next_geometry_element()? {
			if let Some(geometry) = parser.parse_root(element)? {
				geometries.push(geometry);
			}
		}
		Ok(geometries)
	}
}

/// Extracts the EPSG code from `srsName` values like `EPSG:4326`,
/// `http://www.opengis.net/gml/srs/epsg.xml#4326` or a bare `4326`.
pub fn parse_srs_name(value: &str) -> Option<i32> {
	let value = value.trim();
	let lower = value.to_ascii_lowercase();
	let code = if lower.starts_with(EPSG_URL_PREFIX) {
		&value[EPSG_URL_PREFIX.len()..]
	} else if lower.starts_with("epsg:") {
		&value[5..]
	} else {
		value
	};
	code.trim().parse().ok()
}

struct Element {
	name: String,
	attributes: Vec<(String, String)>,
	empty: bool,
	position: usize,
}

impl Element {
	fn attribute(&self, name: &str) -> Option<&str> {
		self
			.attributes
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}
}

enum Node {
	Open(Element),
	Text(String),
	Close,
	Eof,
}

fn is_geometry_element(name: &str) -> bool {
	matches!(
		name,
		"Point" | "LineString" | "LinearRing" | "Polygon" | "MultiPoint" | "MultiLineString" | "MultiPolygon" | "MultiGeometry"
	)
}

struct Parser<'a> {
	reader: Reader<&'a [u8]>,
	factory: GeometryFactory,
	options: &'a GmlReaderOptions,
	/// Geometry elements currently open.
	depth: usize,
}

impl<'a> Parser<'a> {
	fn new(xml: &'a str, gml: &'a GmlReader) -> Self {
		Self {
			reader: Reader::from_str(xml),
			factory: gml.factory,
			options: &gml.options,
			depth: 0,
		}
	}

	fn next_node(&mut self) -> Result<Node> {
		loop {
			let position = self.reader.buffer_position() as usize;
			let event = self
				.reader
				.read_event()
				.map_err(|err| xml_error(&err, position))?;
			return Ok(match event {
				Event::Start(e) => Node::Open(element(&e, false, position)?),
				Event::Empty(e) => Node::Open(element(&e, true, position)?),
				Event::End(_) => Node::Close,
				Event::Text(e) => Node::Text(e.decode().map_err(|err| xml_error(&err, position))?.into_owned()),
				Event::CData(e) => Node::Text(e.decode().map_err(|err| xml_error(&err, position))?.into_owned()),
				Event::GeneralRef(e) => Node::Text(resolve_reference(&e, position)?),
				Event::Eof => Node::Eof,
				_ => continue,
			});
		}
	}

	fn premature_end(&self, expected: &str) -> anyhow::Error {
		GeometryError::parse(expected, "end of document", self.reader.buffer_position() as usize).into()
	}

	/// Skips forward to the next geometry element at any depth.
	fn next_geometry_element(&mut self) -> Result<Option<Element>> {
		loop {
			match self.next_node()? {
				Node::Open(element) if is_geometry_element(&element.name) => return Ok(Some(element)),
				Node::Eof => return Ok(None),
				_ => {}
			}
		}
	}

	/// Calls `visit` for every child element; `visit` must consume the child completely.
	fn for_each_child(&mut self, parent: &Element, visit: &mut dyn FnMut(&mut Self, Element) -> Result<()>) -> Result<()> {
		if parent.empty {
			return Ok(());
		}
		loop {
			match self.next_node()? {
				Node::Open(child) => visit(self, child)?,
				Node::Text(_) => {}
				Node::Close => return Ok(()),
				Node::Eof => return Err(self.premature_end(&format!("end of {}", parent.name))),
			}
		}
	}

	/// Consumes everything up to the end of `element`.
	fn skip(&mut self, element: &Element) -> Result<()> {
		if element.empty {
			return Ok(());
		}
		let mut open = 1_usize;
		while open > 0 {
			match self.next_node()? {
				Node::Open(child) if !child.empty => open += 1,
				Node::Close => open -= 1,
				Node::Eof => return Err(self.premature_end(&format!("end of {}", element.name))),
				_ => {}
			}
		}
		Ok(())
	}

	/// Concatenated text of an element; nested elements are ignored.
	fn text_content(&mut self, element: &Element) -> Result<String> {
		let mut text = String::new();
		if element.empty {
			return Ok(text);
		}
		loop {
			match self.next_node()? {
				Node::Open(child) => self.skip(&child)?,
				Node::Text(part) => text.push_str(&part),
				Node::Close => return Ok(text),
				Node::Eof => return Err(self.premature_end(&format!("end of {}", element.name))),
			}
		}
	}

	/// Builds the geometry tree below `element` and sets its coordinate type from the ordinates found.
	fn parse_root(&mut self, element: Element) -> Result<Option<Geometry>> {
		let Some(mut geometry) = self.parse_geometry(element)? else {
			return Ok(None);
		};
		let (mut has_z, mut has_m) = (false, false);
		geometry.apply_coordinate_filter(&mut |c| {
			has_z |= c.z.is_some();
			has_m |= c.m.is_some();
		});
		let coordinate_type = CoordinateType::from_flags(has_z, has_m);
		if coordinate_type != self.factory.coordinate_type {
			geometry.set_factory_recursive(self.factory.with_coordinate_type(coordinate_type));
		}
		Ok(Some(geometry))
	}

	fn parse_geometry(&mut self, element: Element) -> Result<Option<Geometry>> {
		GeometryError::check_depth(self.depth, element.position)?;
		self.depth += 1;
		let geometry = self.parse_geometry_element(element);
		self.depth -= 1;
		geometry
	}

	fn parse_geometry_element(&mut self, element: Element) -> Result<Option<Geometry>> {
		let factory = self.factory;
		let geometry: Option<Geometry> = match element.name.as_str() {
			"Point" => {
				let coordinates = self.parse_coordinates(&element)?;
				coordinates.into_iter().next().map(|c| factory.create_point(c).into())
			}
			"LineString" => {
				let coordinates = self.parse_coordinates(&element)?;
				if coordinates.len() < 2 {
					None
				} else {
					Some(factory.create_line_string(coordinates).into())
				}
			}
			"LinearRing" => self.parse_ring(&element)?.map(Geometry::from),
			"Polygon" => self.parse_polygon(&element)?.map(Geometry::from),
			"MultiPoint" => {
				let points = self.parse_members::<Point>(&element, "pointMember", "Point")?;
				Some(factory.create_multi_point(points).into())
			}
			"MultiLineString" => {
				let lines = self.parse_members::<LineString>(&element, "lineStringMember", "LineString")?;
				Some(factory.create_multi_line_string(lines).into())
			}
			"MultiPolygon" => {
				let polygons = self.parse_members::<Polygon>(&element, "polygonMember", "Polygon")?;
				Some(factory.create_multi_polygon(polygons).into())
			}
			"MultiGeometry" => {
				let geometries = self.parse_members::<Geometry>(&element, "geometryMember", "geometry")?;
				Some(factory.create_geometry_collection(geometries).into())
			}
			_ => {
				self.skip(&element)?;
				None
			}
		};

		let Some(mut geometry) = geometry else {
			log::trace!("discarding incomplete GML {} at position {}", element.name, element.position);
			return Ok(None);
		};
		if let Some(srid) = element.attribute("srsName").and_then(parse_srs_name) {
			geometry.set_srid(Some(srid));
		}
		if let Some(gid) = element.attribute("gid") {
			geometry.set_gid(Some(gid.to_string()));
		}
		Ok(Some(geometry))
	}

	fn parse_ring(&mut self, element: &Element) -> Result<Option<LinearRing>> {
		let coordinates = self.parse_coordinates(element)?;
		if coordinates.len() < 4 {
			log::trace!(
				"discarding GML LinearRing with {} coordinates at position {}",
				coordinates.len(),
				element.position
			);
			return Ok(None);
		}
		self.factory.create_linear_ring(coordinates).map(Some)
	}

	fn parse_polygon(&mut self, element: &Element) -> Result<Option<Polygon>> {
		let mut shell = None;
		let mut holes = Vec::new();
		self.for_each_child(element, &mut |parser, boundary| {
			let is_outer = match boundary.name.as_str() {
				"outerBoundaryIs" => true,
				"innerBoundaryIs" => false,
				_ => return parser.skip(&boundary),
			};
			parser.for_each_child(&boundary, &mut |parser, ring| {
				if ring.name != "LinearRing" {
					return parser.skip(&ring);
				}
				if let Some(ring) = parser.parse_ring(&ring)? {
					if is_outer {
						shell = Some(ring);
					} else {
						holes.push(ring);
					}
				}
				Ok(())
			})
		})?;
		match shell {
			Some(shell) => self.factory.create_polygon(shell, holes).map(Some),
			None => Ok(None),
		}
	}

	/// Geometries inside `<member>` wrappers, converted to the collection's member type.
	fn parse_members<T: TryFrom<Geometry>>(&mut self, element: &Element, member: &str, expected: &str) -> Result<Vec<T>> {
		let mut members = Vec::new();
		self.for_each_child(element, &mut |parser, wrapper| {
			if wrapper.name != member {
				return parser.skip(&wrapper);
			}
			parser.for_each_child(&wrapper, &mut |parser, child| {
				let (name, position) = (child.name.clone(), child.position);
				if !is_geometry_element(&name) {
					return parser.skip(&child);
				}
				if let Some(geometry) = parser.parse_geometry(child)? {
					let member = T::try_from(geometry).map_err(|_| GeometryError::parse(expected, name, position))?;
					members.push(member);
				}
				Ok(())
			})
		})?;
		Ok(members)
	}

	/// All coordinates of the `<coord>` and `<coordinates>` children, in document order.
	fn parse_coordinates(&mut self, element: &Element) -> Result<Vec<Coordinate>> {
		let mut coordinates = Vec::new();
		self.for_each_child(element, &mut |parser, child| {
			match child.name.as_str() {
				"coord" => coordinates.push(parser.parse_coord(&child)?),
				"coordinates" => coordinates.extend(parser.parse_coordinates_text(&child)?),
				_ => parser.skip(&child)?,
			}
			Ok(())
		})?;
		let factory = self.factory;
		for c in &mut coordinates {
			factory.apply_precision(c);
		}
		Ok(coordinates)
	}

	/// `<coord><X>1</X><Y>2</Y>[<Z>3</Z>][<M>4</M>]</coord>`
	fn parse_coord(&mut self, element: &Element) -> Result<Coordinate> {
		let mut ordinates: [Option<f64>; 4] = [None; 4];
		self.for_each_child(element, &mut |parser, child| {
			let index = match child.name.as_str() {
				"X" => 0,
				"Y" => 1,
				"Z" => 2,
				"M" => 3,
				_ => return parser.skip(&child),
			};
			let text = parser.text_content(&child)?;
			ordinates[index] = Some(parse_number(&text, child.position)?);
			Ok(())
		})?;
		match ordinates {
			[Some(x), Some(y), z, m] => Ok(Coordinate { x, y, z, m }),
			_ => Err(GeometryError::parse("X and Y ordinates", "incomplete coord", element.position).into()),
		}
	}

	/// `<coordinates cs="," ts=" " decimal=".">1,2 3,4</coordinates>`
	fn parse_coordinates_text(&mut self, element: &Element) -> Result<Vec<Coordinate>> {
		let ordinate_separator = element
			.attribute("cs")
			.unwrap_or(&self.options.ordinate_separator)
			.to_string();
		let tuple_separator = element
			.attribute("ts")
			.unwrap_or(&self.options.tuple_separator)
			.to_string();
		let decimal = element.attribute("decimal").unwrap_or(".").to_string();
		let position = element.position;

		let mut text = self.text_content(element)?;
		if decimal != "." {
			text = text.replace(&decimal, ".");
		}

		let tuples: Vec<&str> = if tuple_separator.trim().is_empty() {
			text.split_whitespace().collect()
		} else {
			text.split(tuple_separator.as_str()).map(str::trim).filter(|t| !t.is_empty()).collect()
		};

		tuples
			.into_iter()
			.map(|tuple| {
				let values = tuple
					.split(ordinate_separator.as_str())
					.map(|v| parse_number(v, position))
					.collect::<Result<Vec<f64>>>()?;
				match values.as_slice() {
					[x, y] => Ok(Coordinate::new(*x, *y)),
					[x, y, z] => Ok(Coordinate::new_z(*x, *y, *z)),
					_ => Err(GeometryError::parse("2 or 3 ordinates", format!("'{tuple}'"), position).into()),
				}
			})
			.collect()
	}
}

fn element(start: &BytesStart, empty: bool, position: usize) -> Result<Element> {
	let mut attributes = Vec::new();
	for attribute in start.attributes() {
		let attribute = attribute.map_err(|err| GeometryError::parse("attribute", err.to_string(), position))?;
		let value = attribute.unescape_value().map_err(|err| xml_error(&err, position))?;
		attributes.push((
			String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned(),
			value.into_owned(),
		));
	}
	Ok(Element {
		name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
		attributes,
		empty,
		position,
	})
}

fn xml_error(err: &dyn std::error::Error, position: usize) -> anyhow::Error {
	GeometryError::parse("well-formed XML", err.to_string(), position).into()
}

/// Text of a character reference or one of the five predefined entities.
fn resolve_reference(reference: &BytesRef, position: usize) -> Result<String> {
	if let Some(ch) = reference.resolve_char_ref().map_err(|err| xml_error(&err, position))? {
		return Ok(ch.to_string());
	}
	let name = reference.decode().map_err(|err| xml_error(&err, position))?;
	match resolve_predefined_entity(&name) {
		Some(text) => Ok(text.to_string()),
		None => Err(GeometryError::parse("predefined entity", format!("'&{name};'"), position).into()),
	}
}

fn parse_number(text: &str, position: usize) -> Result<f64> {
	let text = text.trim();
	text
		.parse()
		.map_err(|_| GeometryError::parse("number", format!("'{text}'"), position).into())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeometryType, MAX_NESTING_DEPTH, PrecisionModel, wkt::to_wkt};
	use rstest::rstest;

	fn read(xml: &str) -> Option<Geometry> {
		GmlReader::default().read(xml).unwrap()
	}

	fn read_wkt(xml: &str) -> String {
		to_wkt(&read(xml).unwrap()).unwrap()
	}

	#[rstest]
	#[case("http://www.opengis.net/gml/srs/epsg.xml#4326", Some(4326))]
	#[case("EPSG:4326", Some(4326))]
	#[case("epsg:31467", Some(31467))]
	#[case("4326", Some(4326))]
	#[case("urn:ogc:def:crs:OGC:1.3:CRS84", None)]
	#[case("", None)]
	fn srs_names(#[case] value: &str, #[case] expected: Option<i32>) {
		assert_eq!(parse_srs_name(value), expected);
	}

	#[test]
	fn srs_name_forms_agree() {
		let url = read(r#"<Point srsName="http://www.opengis.net/gml/srs/epsg.xml#4326"><coordinates>1,2</coordinates></Point>"#);
		let epsg = read(r#"<Point srsName="EPSG:4326"><coordinates>1,2</coordinates></Point>"#);
		assert_eq!(url.unwrap().srid(), Some(4326));
		assert_eq!(epsg.unwrap().srid(), Some(4326));
	}

	#[test]
	fn point_with_coord_and_gid() {
		let g = read(
			r#"<gml:Point xmlns:gml="http://www.opengis.net/gml" gid="p.1">
				<gml:coord><gml:X>1.5</gml:X><gml:Y>-2</gml:Y><gml:Z>7</gml:Z></gml:coord>
			</gml:Point>"#,
		)
		.unwrap();
		assert_eq!(g.gid(), Some("p.1"));
		assert_eq!(g.coordinate_type(), CoordinateType::Xyz);
		assert_eq!(to_wkt(&g).unwrap(), "POINT (1.5 -2 7)");
	}

	#[test]
	fn measured_coord() {
		let g = read("<Point><coord><X>1</X><Y>2</Y><M>9</M></coord></Point>").unwrap();
		assert_eq!(g.coordinate_type(), CoordinateType::Xym);
		assert_eq!(to_wkt(&g).unwrap(), "POINTM (1 2 9)");
	}

	#[test]
	fn line_string_coordinates() {
		assert_eq!(
			read_wkt("<gml:LineString><gml:coordinates>0,0 1,1\n 2,0</gml:coordinates></gml:LineString>"),
			"LINESTRING (0 0, 1 1, 2 0)"
		);
	}

	#[test]
	fn custom_separators() {
		let xml = r#"<LineString><coordinates cs=" " ts=";" decimal=",">0,5 1;2 3,25</coordinates></LineString>"#;
		assert_eq!(read_wkt(xml), "LINESTRING (0.5 1, 2 3.25)");

		let reader = GmlReader::new(
			GeometryFactory::default(),
			GmlReaderOptions {
				tuple_separator: String::from("|"),
				ordinate_separator: String::from(":"),
			},
		);
		let g = reader
			.read("<LineString><coordinates>0:0|4:4</coordinates></LineString>")
			.unwrap()
			.unwrap();
		assert_eq!(to_wkt(&g).unwrap(), "LINESTRING (0 0, 4 4)");
	}

	#[test]
	fn polygon_with_hole() {
		let xml = "<Polygon>
			<outerBoundaryIs><LinearRing><coordinates>0,0 10,0 10,10 0,10 0,0</coordinates></LinearRing></outerBoundaryIs>
			<innerBoundaryIs><LinearRing><coordinates>2,2 2,4 4,4 2,2</coordinates></LinearRing></innerBoundaryIs>
		</Polygon>";
		assert_eq!(
			read_wkt(xml),
			"POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 2 4, 4 4, 2 2))"
		);
	}

	#[test]
	fn multi_geometries() {
		let xml = "<MultiPoint srsName=\"EPSG:3857\">
			<pointMember><Point><coordinates>1,2</coordinates></Point></pointMember>
			<pointMember><Point><coordinates>3,4</coordinates></Point></pointMember>
		</MultiPoint>";
		let g = read(xml).unwrap();
		assert_eq!(g.srid(), Some(3857));
		assert_eq!(to_wkt(&g).unwrap(), "SRID=3857;MULTIPOINT ((1 2), (3 4))");

		let xml = "<MultiGeometry>
			<geometryMember><Point><coordinates>1,2</coordinates></Point></geometryMember>
			<geometryMember><LineString><coordinates>0,0 1,1</coordinates></LineString></geometryMember>
		</MultiGeometry>";
		assert_eq!(read_wkt(xml), "GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))");
	}

	#[rstest]
	#[case("<LineString><coordinates>1,2</coordinates></LineString>")]
	#[case("<Point/>")]
	#[case("<Polygon><innerBoundaryIs><LinearRing><coordinates>0,0 1,0 1,1 0,0</coordinates></LinearRing></innerBoundaryIs></Polygon>")]
	#[case("<Feature><name>none</name></Feature>")]
	fn discarded(#[case] xml: &str) {
		assert!(read(xml).is_none());
	}

	#[rstest]
	#[case("<LinearRing><coordinates>0,0 1,0 0,0</coordinates></LinearRing>")]
	#[case("<Polygon><outerBoundaryIs><LinearRing><coordinates>0,0 1,1</coordinates></LinearRing></outerBoundaryIs></Polygon>")]
	fn short_rings_are_discarded(#[case] xml: &str) {
		assert!(read(xml).is_none());
	}

	#[test]
	fn short_holes_are_dropped() {
		let xml = "<Polygon>
			<outerBoundaryIs><LinearRing><coordinates>0,0 4,0 4,4 0,0</coordinates></LinearRing></outerBoundaryIs>
			<innerBoundaryIs><LinearRing><coordinates>1,1 2,1 1,1</coordinates></LinearRing></innerBoundaryIs>
		</Polygon>";
		assert_eq!(read_wkt(xml), "POLYGON ((0 0, 4 0, 4 4, 0 0))");
	}

	#[rstest]
	#[case("<Point><coordinates>1&#44;2</coordinates></Point>", "POINT (1 2)")]
	#[case("<Point><coordinates>1&#x2C;2&#32;</coordinates></Point>", "POINT (1 2)")]
	#[case("<LineString><coordinates>0,0&#10;1,&#49;</coordinates></LineString>", "LINESTRING (0 0, 1 1)")]
	#[case(r#"<LineString><coordinates cs="&amp;" ts="&#59;">0&amp;0;2&amp;3</coordinates></LineString>"#, "LINESTRING (0 0, 2 3)")]
	#[case("<Point><coordinates><![CDATA[5,6]]></coordinates></Point>", "POINT (5 6)")]
	fn escaped_text(#[case] xml: &str, #[case] wkt: &str) {
		assert_eq!(read_wkt(xml), wkt);
	}

	#[test]
	fn escaped_attribute_values() {
		let g = read(r#"<Point gid="a&amp;b" srsName="EPSG&#58;4326"><coordinates>1,2</coordinates></Point>"#).unwrap();
		assert_eq!(g.gid(), Some("a&b"));
		assert_eq!(g.srid(), Some(4326));
	}

	fn nested_multi_geometries(depth: usize) -> String {
		format!(
			"{}<Point><coordinates>1,2</coordinates></Point>{}",
			"<MultiGeometry><geometryMember>".repeat(depth),
			"</geometryMember></MultiGeometry>".repeat(depth)
		)
	}

	#[test]
	fn nesting_up_to_the_limit() {
		let g = read(&nested_multi_geometries(MAX_NESTING_DEPTH)).unwrap();
		assert_eq!(g.num_points(), 1);
	}

	#[rstest]
	#[case(MAX_NESTING_DEPTH + 1)]
	#[case(10_000)]
	fn nesting_too_deep(#[case] depth: usize) {
		let err = GmlReader::default().read(&nested_multi_geometries(depth)).unwrap_err();
		match crate::geometry_error(&err) {
			Some(GeometryError::Parse { found, .. }) => {
				assert_eq!(found, &format!("nesting depth {}", MAX_NESTING_DEPTH + 1));
			}
			other => panic!("unexpected error {other:?}"),
		}
	}

	#[test]
	fn skips_deeply_nested_foreign_elements() {
		let xml = format!(
			"<Point>{}{}<coordinates>1,2</coordinates></Point>",
			"<x>".repeat(100_000),
			"</x>".repeat(100_000)
		);
		assert_eq!(read_wkt(&xml), "POINT (1 2)");
	}

	#[test]
	fn discarded_members_are_dropped() {
		let xml = "<MultiLineString>
			<lineStringMember><LineString><coordinates>1,2</coordinates></LineString></lineStringMember>
			<lineStringMember><LineString><coordinates>0,0 1,1</coordinates></LineString></lineStringMember>
		</MultiLineString>";
		assert_eq!(read_wkt(xml), "MULTILINESTRING ((0 0, 1 1))");
	}

	#[test]
	fn read_all_feature_members() {
		let xml = r#"<wfs:FeatureCollection xmlns:wfs="http://www.opengis.net/wfs" xmlns:gml="http://www.opengis.net/gml">
			<gml:featureMember><road><geom><gml:LineString><gml:coordinates>0,0 1,1</gml:coordinates></gml:LineString></geom></road></gml:featureMember>
			<gml:featureMember><road><geom><gml:LineString><gml:coordinates>5,5</gml:coordinates></gml:LineString></geom></road></gml:featureMember>
			<gml:featureMember><city><pos><gml:Point><gml:coordinates>3,4</gml:coordinates></gml:Point></pos></city></gml:featureMember>
		</wfs:FeatureCollection>"#;
		let geometries = GmlReader::default().read_all(xml).unwrap();
		let types: Vec<GeometryType> = geometries.iter().map(GeometryTrait::geometry_type).collect();
		assert_eq!(types, vec![GeometryType::LineString, GeometryType::Point]);
	}

	#[test]
	fn precision_applied() {
		let reader = GmlReader::new(
			GeometryFactory::new(PrecisionModel::fixed(10.0), CoordinateType::Xy),
			GmlReaderOptions::default(),
		);
		let g = reader.read("<Point><coordinates>1.26,2.04</coordinates></Point>").unwrap().unwrap();
		assert_eq!(g.coordinates()[0], Coordinate::new(1.3, 2.0));
	}

	#[rstest]
	#[case(
		"<Point><coordinates>1,x</coordinates></Point>",
		"while parsing GML: parse error at position 7: expected number, found 'x'"
	)]
	#[case(
		"<Point><coord><X>1</X></coord></Point>",
		"while parsing GML: parse error at position 7: expected X and Y ordinates, found incomplete coord"
	)]
	#[case(
		"<MultiPoint><pointMember><LineString><coordinates>0,0 1,1</coordinates></LineString></pointMember></MultiPoint>",
		"while parsing GML: parse error at position 25: expected Point, found LineString"
	)]
	#[case(
		"<Point><coordinates>1,2 3</coordinates></Point>",
		"while parsing GML: parse error at position 7: expected 2 or 3 ordinates, found '3'"
	)]
	fn malformed(#[case] xml: &str, #[case] message: &str) {
		let err = GmlReader::default().read(xml).unwrap_err();
		assert_eq!(format!("{err:#}"), message);
	}

	#[test]
	fn unknown_entity() {
		let err = GmlReader::default().read("<Point><coordinates>1&nbsp;2</coordinates></Point>").unwrap_err();
		assert!(format!("{err:#}").contains("expected predefined entity, found '&nbsp;'"));
	}

	#[test]
	fn unterminated_document() {
		let err = GmlReader::default().read("<Point><coordinates>1,2</coordinates>").unwrap_err();
		assert!(crate::geometry_error(&err).is_some());
	}
}
