use super::{WKB_M_FLAG, WKB_SRID_FLAG, WKB_Z_FLAG, WkbFormat};
use crate::{Coordinate, CoordinateType, Geometry, GeometryError, GeometryTrait, GeometryType, Point, Polygon};
use anyhow::Result;
use serde::Deserialize;
use sfkit_core::{
	Blob,
	io::{ByteOrder, ValueWriter, ValueWriterBlob},
};

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WkbWriterOptions {
	/// `None` picks the dialect per geometry with [`WkbFormat::detect`].
	pub format: Option<WkbFormat>,
	pub byte_order: ByteOrder,
}

/// Encodes geometries as WKB.
///
/// ```
/// use sfkit_geometry::{Coordinate, GeometryFactory, wkb::WkbWriter};
///
/// let point = GeometryFactory::default().create_point(Coordinate::new(10.0, -20.0));
/// let hex = WkbWriter::default().write_hex(&point.into()).unwrap();
/// assert_eq!(hex, "0101000000000000000000244000000000000034C0");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct WkbWriter {
	options: WkbWriterOptions,
}

/// Settings shared by all records of one geometry tree.
struct Encoding {
	format: WkbFormat,
	order: ByteOrder,
	coordinate_type: CoordinateType,
}

impl WkbWriter {
	pub fn new(options: WkbWriterOptions) -> Self {
		Self { options }
	}

	pub fn with_format(format: WkbFormat) -> Self {
		Self::new(WkbWriterOptions {
			format: Some(format),
			..WkbWriterOptions::default()
		})
	}

	pub fn options(&self) -> &WkbWriterOptions {
		&self.options
	}

	/// Encodes `geometry`. On failure nothing is returned, not even a partial record.
	pub fn write(&self, geometry: &Geometry) -> Result<Blob> {
		let format = self.options.format.unwrap_or_else(|| WkbFormat::detect(geometry));
		if format == WkbFormat::Custom {
			return Err(GeometryError::unsupported(format.name(), geometry.geometry_type()).into());
		}

		let encoding = Encoding {
			format,
			order: self.options.byte_order,
			coordinate_type: geometry.coordinate_type(),
		};
		if format == WkbFormat::Standard && encoding.coordinate_type != CoordinateType::Xy {
			log::debug!(
				"standard WKB has no room for {} coordinates, writing x and y only",
				encoding.coordinate_type
			);
		}

		let mut writer = ValueWriterBlob::new(encoding.order);
		if let Err(err) = write_geometry(&mut writer, geometry, &encoding) {
			writer.reset();
			return Err(err);
		}
		Ok(writer.into_blob())
	}

	/// Encodes `geometry` as upper-case hex.
	pub fn write_hex(&self, geometry: &Geometry) -> Result<String> {
		Ok(self.write(geometry)?.as_hex())
	}
}

fn type_word(geometry_type: GeometryType, srid: Option<i32>, encoding: &Encoding) -> u32 {
	let mut word = geometry_type.wkb_code();
	let coordinate_type = encoding.coordinate_type;
	match encoding.format {
		WkbFormat::Standard | WkbFormat::Custom => {}
		WkbFormat::Proposed => {
			if coordinate_type.has_z() {
				word |= WKB_Z_FLAG;
			}
		}
		WkbFormat::PostGis => {
			if coordinate_type.has_z() {
				word |= WKB_Z_FLAG;
			}
			if coordinate_type.is_measured() {
				word |= WKB_M_FLAG;
			}
			if srid.is_some() {
				word |= WKB_SRID_FLAG;
			}
		}
	}
	word
}

/// Order byte, type word and, for PostGIS, the SRID if one is set and positive.
fn write_header(
	writer: &mut ValueWriterBlob,
	geometry_type: GeometryType,
	srid: Option<i32>,
	encoding: &Encoding,
) -> Result<()> {
	let srid = srid.filter(|srid| *srid > 0 && encoding.format == WkbFormat::PostGis);
	writer.write_u8(encoding.order.as_wkb_byte())?;
	writer.write_u32(type_word(geometry_type, srid, encoding))?;
	if let Some(srid) = srid {
		writer.write_i32(srid)?;
	}
	Ok(())
}

fn write_geometry(writer: &mut ValueWriterBlob, geometry: &Geometry, encoding: &Encoding) -> Result<()> {
	match geometry {
		Geometry::Point(point) => write_point(writer, point, encoding),
		Geometry::LineString(line) => {
			write_header(writer, GeometryType::LineString, line.srid(), encoding)?;
			write_coordinates(writer, line.as_slice(), encoding)
		}
		Geometry::LinearRing(ring) => {
			write_header(writer, GeometryType::LinearRing, ring.srid(), encoding)?;
			write_coordinates(writer, ring.as_slice(), encoding)
		}
		Geometry::Polygon(polygon) => write_polygon(writer, polygon, encoding),
		Geometry::MultiPoint(g) => {
			write_header(writer, GeometryType::MultiPoint, g.srid(), encoding)?;
			write_count(writer, g.num_geometries())?;
			g.iter().try_for_each(|point| write_point(writer, point, encoding))
		}
		Geometry::MultiLineString(g) => {
			write_header(writer, GeometryType::MultiLineString, g.srid(), encoding)?;
			write_count(writer, g.num_geometries())?;
			g.iter().try_for_each(|line| {
				write_header(writer, GeometryType::LineString, line.srid(), encoding)?;
				write_coordinates(writer, line.as_slice(), encoding)
			})
		}
		Geometry::MultiPolygon(g) => {
			write_header(writer, GeometryType::MultiPolygon, g.srid(), encoding)?;
			write_count(writer, g.num_geometries())?;
			g.iter().try_for_each(|polygon| write_polygon(writer, polygon, encoding))
		}
		Geometry::GeometryCollection(g) => {
			write_header(writer, GeometryType::GeometryCollection, g.srid(), encoding)?;
			write_count(writer, g.num_geometries())?;
			g.iter().try_for_each(|member| write_geometry(writer, member, encoding))
		}
	}
}

/// An empty point is written with NaN ordinates.
fn write_point(writer: &mut ValueWriterBlob, point: &Point, encoding: &Encoding) -> Result<()> {
	write_header(writer, GeometryType::Point, point.srid(), encoding)?;
	let empty = Coordinate::new(f64::NAN, f64::NAN);
	write_coordinate(writer, point.coordinate().unwrap_or(&empty), encoding)
}

fn write_polygon(writer: &mut ValueWriterBlob, polygon: &Polygon, encoding: &Encoding) -> Result<()> {
	write_header(writer, GeometryType::Polygon, polygon.srid(), encoding)?;
	// zero holes is written as a ring count of 0, the shell still follows
	let holes = polygon.interior_rings();
	write_count(writer, if holes.is_empty() { 0 } else { holes.len() + 1 })?;
	write_coordinates(writer, polygon.exterior_ring().as_slice(), encoding)?;
	holes
		.iter()
		.try_for_each(|hole| write_coordinates(writer, hole.as_slice(), encoding))
}

fn write_count(writer: &mut ValueWriterBlob, count: usize) -> Result<()> {
	writer.write_u32(u32::try_from(count)?)
}

fn write_coordinates(writer: &mut ValueWriterBlob, coordinates: &[Coordinate], encoding: &Encoding) -> Result<()> {
	write_count(writer, coordinates.len())?;
	for c in coordinates {
		write_coordinate(writer, c, encoding)?;
	}
	Ok(())
}

/// Absent ordinates the dialect needs are written as NaN.
fn write_coordinate(writer: &mut ValueWriterBlob, c: &Coordinate, encoding: &Encoding) -> Result<()> {
	writer.write_f64(c.x)?;
	writer.write_f64(c.y)?;
	let (write_z, write_m) = match encoding.format {
		WkbFormat::Standard | WkbFormat::Custom => (false, false),
		WkbFormat::Proposed => (encoding.coordinate_type.has_z(), false),
		WkbFormat::PostGis => (encoding.coordinate_type.has_z(), encoding.coordinate_type.is_measured()),
	};
	if write_z {
		writer.write_f64(c.z.unwrap_or(f64::NAN))?;
	}
	if write_m {
		writer.write_f64(c.m.unwrap_or(f64::NAN))?;
	}
	Ok(())
}
