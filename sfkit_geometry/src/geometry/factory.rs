use super::*;
use anyhow::Result;

/// Creates geometries that share one precision model and coordinate type.
///
/// Every geometry keeps a copy of the factory it was built with, so derived
/// geometries (boundaries, polygonizer output) are created with the same settings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeometryFactory {
	pub precision_model: PrecisionModel,
	pub coordinate_type: CoordinateType,
}

impl GeometryFactory {
	#[must_use]
	pub fn new(precision_model: PrecisionModel, coordinate_type: CoordinateType) -> Self {
		Self {
			precision_model,
			coordinate_type,
		}
	}

	#[must_use]
	pub fn with_coordinate_type(self, coordinate_type: CoordinateType) -> Self {
		Self {
			coordinate_type,
			..self
		}
	}

	/// Snaps `x` and `y` to the precision model.
	pub fn apply_precision(&self, coordinate: &mut Coordinate) {
		self.precision_model.make_precise_coordinate(coordinate);
	}

	pub fn create_point(&self, coordinate: Coordinate) -> Point {
		Point::new(*self, Some(coordinate))
	}

	pub fn create_point_empty(&self) -> Point {
		Point::new(*self, None)
	}

	pub fn create_line_string(&self, coordinates: Vec<Coordinate>) -> LineString {
		LineString::new(*self, coordinates)
	}

	/// Fails unless the coordinates are empty, or closed with at least four points.
	pub fn create_linear_ring(&self, coordinates: Vec<Coordinate>) -> Result<LinearRing> {
		LinearRing::validate(&coordinates)?;
		Ok(LinearRing::new(*self, coordinates))
	}

	/// Fails when `holes` contains non-empty rings but `shell` is empty.
	pub fn create_polygon(&self, shell: LinearRing, holes: Vec<LinearRing>) -> Result<Polygon> {
		Polygon::validate(&shell, &holes)?;
		Ok(Polygon::new(*self, shell, holes))
	}

	/// Like [`create_polygon`](Self::create_polygon) for inputs that may have gaps:
	/// a missing shell becomes the empty ring, a missing hole is an error.
	pub fn create_polygon_checked(&self, shell: Option<LinearRing>, holes: Vec<Option<LinearRing>>) -> Result<Polygon> {
		let shell = shell.unwrap_or_else(|| LinearRing::new(*self, vec![]));
		let holes = holes
			.into_iter()
			.enumerate()
			.map(|(index, hole)| {
				hole.ok_or_else(|| GeometryError::invalid(format!("hole {index} of polygon is missing")).into())
			})
			.collect::<Result<Vec<_>>>()?;
		self.create_polygon(shell, holes)
	}

	pub fn create_polygon_empty(&self) -> Polygon {
		Polygon::new(*self, LinearRing::new(*self, vec![]), vec![])
	}

	pub fn create_multi_point(&self, points: Vec<Point>) -> MultiPoint {
		MultiPoint::new(*self, points)
	}

	pub fn create_multi_line_string(&self, lines: Vec<LineString>) -> MultiLineString {
		MultiLineString::new(*self, lines)
	}

	pub fn create_multi_polygon(&self, polygons: Vec<Polygon>) -> MultiPolygon {
		MultiPolygon::new(*self, polygons)
	}

	pub fn create_geometry_collection(&self, geometries: Vec<Geometry>) -> GeometryCollection {
		GeometryCollection::new(*self, geometries)
	}

	/// The empty geometry of the given type.
	pub fn create_empty(&self, geometry_type: GeometryType) -> Geometry {
		match geometry_type {
			GeometryType::Point => self.create_point_empty().into(),
			GeometryType::LineString => self.create_line_string(vec![]).into(),
			GeometryType::LinearRing => LinearRing::new(*self, vec![]).into(),
			GeometryType::Polygon => self.create_polygon_empty().into(),
			GeometryType::MultiPoint => self.create_multi_point(vec![]).into(),
			GeometryType::MultiLineString => self.create_multi_line_string(vec![]).into(),
			GeometryType::MultiPolygon => self.create_multi_polygon(vec![]).into(),
			GeometryType::GeometryCollection => self.create_geometry_collection(vec![]).into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(GeometryType::Point)]
	#[case(GeometryType::LineString)]
	#[case(GeometryType::LinearRing)]
	#[case(GeometryType::Polygon)]
	#[case(GeometryType::MultiPoint)]
	#[case(GeometryType::MultiLineString)]
	#[case(GeometryType::MultiPolygon)]
	#[case(GeometryType::GeometryCollection)]
	fn create_empty(#[case] geometry_type: GeometryType) {
		let g = GeometryFactory::default().create_empty(geometry_type);
		assert_eq!(g.geometry_type(), geometry_type);
		assert!(g.is_empty());
		assert_eq!(g.num_points(), 0);
		assert_eq!(g.envelope(), None);
	}

	#[test]
	fn geometries_remember_their_factory() {
		let factory = GeometryFactory::new(PrecisionModel::fixed(10.0), CoordinateType::Xyz);
		let line = factory.create_line_string(vec![Coordinate::new_z(0.0, 0.0, 1.0), Coordinate::new_z(1.0, 0.0, 1.0)]);
		assert_eq!(line.factory(), &factory);
		assert_eq!(line.coordinate_type(), CoordinateType::Xyz);
		let boundary = line.boundary().unwrap();
		assert_eq!(boundary.factory(), &factory);
	}

	#[test]
	fn apply_precision_rounds_xy() {
		let factory = GeometryFactory::new(PrecisionModel::fixed(100.0), CoordinateType::Xyz);
		let mut c = Coordinate::new_z(1.23456, -7.891, 0.123456);
		factory.apply_precision(&mut c);
		assert_eq!(c, Coordinate::new_z(1.23, -7.89, 0.123456));
	}
}
