use super::{WKB_M_FLAG, WKB_SRID_FLAG, WKB_Z_FLAG};
use crate::{
	Coordinate, CoordinateType, Geometry, GeometryError, GeometryFactory, GeometryTrait, GeometryType, LinearRing,
	Point, Polygon,
};
use anyhow::Result;
use sfkit_core::{
	Blob,
	io::{ByteOrder, ValueReader, ValueReaderSlice},
};
use sfkit_derive::context;

/// Decodes WKB written in any of the three dialects.
///
/// Every record's own order byte is honoured, so collections may mix byte orders.
/// Type words are understood with PostGIS flags as well as ISO 1000/2000/3000 offsets.
#[derive(Clone, Copy, Debug, Default)]
pub struct WkbReader {
	factory: GeometryFactory,
}

struct Header {
	geometry_type: GeometryType,
	factory: GeometryFactory,
	srid: Option<i32>,
}

impl WkbReader {
	pub fn new(factory: GeometryFactory) -> Self {
		Self { factory }
	}

	#[context("while reading WKB")]
	pub fn read(&self, bytes: &[u8]) -> Result<Geometry> {
		let mut reader = ValueReaderSlice::new(bytes, ByteOrder::default());
		let geometry = self.read_geometry(&mut reader, 0)?;
		if reader.has_remaining() {
			let position = reader.position();
			return Err(GeometryError::parse(
				"end of WKB",
				format!("{} trailing bytes", reader.remaining()),
				position as usize,
			)
			.into());
		}
		Ok(geometry)
	}

	pub fn read_hex(&self, hex: &str) -> Result<Geometry> {
		self.read(Blob::from_hex(hex)?.as_slice())
	}

	fn read_header(&self, reader: &mut ValueReaderSlice) -> Result<Header> {
		let order = ByteOrder::from_wkb_byte(reader.read_u8()?)?;
		reader.set_order(order);

		let position = reader.position();
		let word = reader.read_u32()?;
		let base = word & 0x0FFF_FFFF;
		let (iso_z, iso_m) = match base / 1000 {
			0 => (false, false),
			1 => (true, false),
			2 => (false, true),
			3 => (true, true),
			_ => (false, false),
		};
		let geometry_type = match GeometryType::from_wkb_code(base % 1000) {
			Some(geometry_type) if base < 4000 => geometry_type,
			_ => {
				return Err(
					GeometryError::parse("WKB geometry type", format!("type word {word:#010x}"), position as usize).into(),
				);
			}
		};
		let has_z = iso_z || word & WKB_Z_FLAG != 0;
		let has_m = iso_m || word & WKB_M_FLAG != 0;
		let srid = if word & WKB_SRID_FLAG == 0 {
			None
		} else {
			Some(reader.read_i32()?)
		};

		Ok(Header {
			geometry_type,
			factory: self.factory.with_coordinate_type(CoordinateType::from_flags(has_z, has_m)),
			srid,
		})
	}

	/// `depth` counts the enclosing collections.
	fn read_geometry(&self, reader: &mut ValueReaderSlice, depth: usize) -> Result<Geometry> {
		GeometryError::check_depth(depth, reader.position() as usize)?;
		let header = self.read_header(reader)?;
		let factory = header.factory;
		let mut geometry: Geometry = match header.geometry_type {
			GeometryType::Point => read_point_body(reader, &factory)?.into(),
			GeometryType::LineString | GeometryType::LinearRing => {
				factory.create_line_string(read_coordinates(reader, &factory)?).into()
			}
			GeometryType::Polygon => read_polygon_body(reader, &factory)?.into(),
			GeometryType::MultiPoint => factory.create_multi_point(self.read_members(reader, depth)?).into(),
			GeometryType::MultiLineString => factory.create_multi_line_string(self.read_members(reader, depth)?).into(),
			GeometryType::MultiPolygon => factory.create_multi_polygon(self.read_members(reader, depth)?).into(),
			GeometryType::GeometryCollection => {
				factory.create_geometry_collection(self.read_members::<Geometry>(reader, depth)?).into()
			}
		};
		if header.srid.is_some() {
			geometry.set_srid(header.srid);
		}
		Ok(geometry)
	}

	/// A count followed by that many complete records of the member type `T`.
	fn read_members<T: TryFrom<Geometry>>(&self, reader: &mut ValueReaderSlice, depth: usize) -> Result<Vec<T>> {
		let count = reader.read_u32()?;
		let mut members = Vec::new();
		for _ in 0..count {
			let position = reader.position();
			let member = self.read_geometry(reader, depth + 1)?;
			let found = member.geometry_type();
			let member = T::try_from(member)
				.map_err(|_| GeometryError::parse("member of matching type", found.name(), position as usize))?;
			members.push(member);
		}
		Ok(members)
	}
}

/// All-NaN coordinates are the empty point.
fn read_point_body(reader: &mut ValueReaderSlice, factory: &GeometryFactory) -> Result<Point> {
	let c = read_coordinate(reader, factory)?;
	if c.x.is_nan() && c.y.is_nan() {
		Ok(factory.create_point_empty())
	} else {
		Ok(factory.create_point(c))
	}
}

/// A ring count of 0 means the shell alone; otherwise shell plus `count - 1` holes.
fn read_polygon_body(reader: &mut ValueReaderSlice, factory: &GeometryFactory) -> Result<Polygon> {
	let ring_count = reader.read_u32()?.max(1);
	let shell = read_ring(reader, factory)?;
	let holes = (1..ring_count)
		.map(|_| read_ring(reader, factory))
		.collect::<Result<Vec<_>>>()?;
	factory.create_polygon(shell, holes)
}

fn read_ring(reader: &mut ValueReaderSlice, factory: &GeometryFactory) -> Result<LinearRing> {
	factory.create_linear_ring(read_coordinates(reader, factory)?)
}

fn read_coordinates(reader: &mut ValueReaderSlice, factory: &GeometryFactory) -> Result<Vec<Coordinate>> {
	let count = reader.read_u32()? as u64;
	let width = factory.coordinate_type.ordinate_count() as u64 * 8;
	// a count larger than the remaining bytes is rejected before allocating
	reader.ensure_remaining(count * width)?;
	(0..count).map(|_| read_coordinate(reader, factory)).collect()
}

/// NaN `z` and `m` values are read as absent.
fn read_coordinate(reader: &mut ValueReaderSlice, factory: &GeometryFactory) -> Result<Coordinate> {
	let x = reader.read_f64()?;
	let y = reader.read_f64()?;
	let mut c = Coordinate::new(x, y);
	if factory.coordinate_type.has_z() {
		c.z = Some(reader.read_f64()?).filter(|z| !z.is_nan());
	}
	if factory.coordinate_type.is_measured() {
		c.m = Some(reader.read_f64()?).filter(|m| !m.is_nan());
	}
	Ok(c)
}
