use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point,
	LineString,
	LinearRing,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryType {
	/// The OGC WKB type code. Linear rings share the code of line strings.
	#[must_use]
	pub fn wkb_code(self) -> u32 {
		match self {
			GeometryType::Point => 1,
			GeometryType::LineString | GeometryType::LinearRing => 2,
			GeometryType::Polygon => 3,
			GeometryType::MultiPoint => 4,
			GeometryType::MultiLineString => 5,
			GeometryType::MultiPolygon => 6,
			GeometryType::GeometryCollection => 7,
		}
	}

	#[must_use]
	pub fn from_wkb_code(code: u32) -> Option<Self> {
		Some(match code {
			1 => GeometryType::Point,
			2 => GeometryType::LineString,
			3 => GeometryType::Polygon,
			4 => GeometryType::MultiPoint,
			5 => GeometryType::MultiLineString,
			6 => GeometryType::MultiPolygon,
			7 => GeometryType::GeometryCollection,
			_ => return None,
		})
	}

	/// Upper-case WKT tag without dimension suffix.
	#[must_use]
	pub fn wkt_tag(self) -> &'static str {
		match self {
			GeometryType::Point => "POINT",
			GeometryType::LineString => "LINESTRING",
			GeometryType::LinearRing => "LINEARRING",
			GeometryType::Polygon => "POLYGON",
			GeometryType::MultiPoint => "MULTIPOINT",
			GeometryType::MultiLineString => "MULTILINESTRING",
			GeometryType::MultiPolygon => "MULTIPOLYGON",
			GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
		}
	}

	#[must_use]
	pub fn from_wkt_tag(tag: &str) -> Option<Self> {
		Some(match tag {
			"POINT" => GeometryType::Point,
			"LINESTRING" => GeometryType::LineString,
			"LINEARRING" => GeometryType::LinearRing,
			"POLYGON" => GeometryType::Polygon,
			"MULTIPOINT" => GeometryType::MultiPoint,
			"MULTILINESTRING" => GeometryType::MultiLineString,
			"MULTIPOLYGON" => GeometryType::MultiPolygon,
			"GEOMETRYCOLLECTION" => GeometryType::GeometryCollection,
			_ => return None,
		})
	}

	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::LineString => "LineString",
			GeometryType::LinearRing => "LinearRing",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::MultiPolygon => "MultiPolygon",
			GeometryType::GeometryCollection => "GeometryCollection",
		}
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
