use super::*;
use anyhow::Result;
use std::fmt::Debug;

/// Any geometry of the object model. Codecs dispatch on the variant with an exhaustive `match`.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(Point),
	LineString(LineString),
	LinearRing(LinearRing),
	Polygon(Polygon),
	MultiPoint(MultiPoint),
	MultiLineString(MultiLineString),
	MultiPolygon(MultiPolygon),
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	pub fn as_trait(&self) -> &dyn GeometryTrait {
		match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::LinearRing(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		}
	}

	pub fn as_trait_mut(&mut self) -> &mut dyn GeometryTrait {
		match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::LinearRing(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		}
	}

	/// Members of multi-geometries and collections; `None` for single geometries.
	pub fn num_geometries(&self) -> Option<usize> {
		match self {
			Geometry::MultiPoint(g) => Some(g.num_geometries()),
			Geometry::MultiLineString(g) => Some(g.num_geometries()),
			Geometry::MultiPolygon(g) => Some(g.num_geometries()),
			Geometry::GeometryCollection(g) => Some(g.num_geometries()),
			_ => None,
		}
	}

	/// Replaces the factory of this geometry and all its components.
	pub(crate) fn set_factory_recursive(&mut self, factory: GeometryFactory) {
		fn set<T: HasAttributes>(g: &mut T, factory: GeometryFactory) {
			g.attributes_mut().set_factory(factory);
		}
		match self {
			Geometry::Point(g) => set(g, factory),
			Geometry::LineString(g) => set(g, factory),
			Geometry::LinearRing(g) => set(g, factory),
			Geometry::Polygon(g) => {
				set(g, factory);
				g.rings_mut().for_each(|r| set(r, factory));
			}
			Geometry::MultiPoint(g) => {
				set(g, factory);
				g.iter_mut().for_each(|p| set(p, factory));
			}
			Geometry::MultiLineString(g) => {
				set(g, factory);
				g.iter_mut().for_each(|l| set(l, factory));
			}
			Geometry::MultiPolygon(g) => {
				set(g, factory);
				for polygon in g.iter_mut() {
					set(polygon, factory);
					polygon.rings_mut().for_each(|r| set(r, factory));
				}
			}
			Geometry::GeometryCollection(g) => {
				set(g, factory);
				g.iter_mut().for_each(|member| member.set_factory_recursive(factory));
			}
		}
	}
}

impl HasAttributes for Geometry {
	fn attributes(&self) -> &GeometryAttributes {
		self.as_trait().attributes()
	}

	fn attributes_mut(&mut self) -> &mut GeometryAttributes {
		self.as_trait_mut().attributes_mut()
	}
}

impl GeometryTrait for Geometry {
	fn geometry_type(&self) -> GeometryType {
		self.as_trait().geometry_type()
	}

	fn num_points(&self) -> usize {
		self.as_trait().num_points()
	}

	fn coordinates(&self) -> Vec<Coordinate> {
		self.as_trait().coordinates()
	}

	fn is_empty(&self) -> bool {
		self.as_trait().is_empty()
	}

	fn dimension(&self) -> u8 {
		self.as_trait().dimension()
	}

	fn area(&self) -> f64 {
		self.as_trait().area()
	}

	fn length(&self) -> f64 {
		self.as_trait().length()
	}

	fn boundary(&self) -> Result<Geometry> {
		self.as_trait().boundary()
	}

	fn compute_envelope(&self) -> Option<Envelope> {
		self.as_trait().compute_envelope()
	}

	fn envelope(&self) -> Option<Envelope> {
		self.as_trait().envelope()
	}

	fn apply_coordinate_filter(&self, filter: &mut dyn FnMut(&Coordinate)) {
		self.as_trait().apply_coordinate_filter(filter);
	}

	fn apply_coordinate_filter_mut(&mut self, filter: &mut dyn FnMut(&mut Coordinate)) {
		self.as_trait_mut().apply_coordinate_filter_mut(filter);
	}

	fn apply_component_filter(&self, filter: &mut dyn FnMut(&dyn GeometryTrait)) {
		self.as_trait().apply_component_filter(filter);
	}

	fn geometry_changed(&mut self) {
		self.as_trait_mut().geometry_changed();
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::LinearRing(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.geometry_type().name()).field(inner).finish()
	}
}

macro_rules! impl_from_variant {
	($($variant:ident),*) => {$(
		impl From<$variant> for Geometry {
			fn from(value: $variant) -> Self {
				Geometry::$variant(value)
			}
		}

		/// Unwraps the variant, handing the geometry back unchanged on mismatch.
		impl TryFrom<Geometry> for $variant {
			type Error = Geometry;
			fn try_from(value: Geometry) -> Result<Self, Geometry> {
				match value {
					Geometry::$variant(inner) => Ok(inner),
					other => Err(other),
				}
			}
		}
	)*};
}

impl_from_variant!(
	Point,
	LineString,
	LinearRing,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection
);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dispatch_and_debug() {
		let f = GeometryFactory::default();
		let g: Geometry = f
			.create_line_string(vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)])
			.into();
		assert_eq!(g.geometry_type(), GeometryType::LineString);
		assert_eq!(g.num_points(), 2);
		assert_eq!(g.num_geometries(), None);
		assert_eq!(format!("{g:?}"), "LineString([[1.0, 2.0], [3.0, 4.0]])");
	}

	#[test]
	fn equality_ignores_properties() {
		let f = GeometryFactory::default();
		let a: Geometry = f.create_point(Coordinate::new(1.0, 2.0)).into();
		let mut b = a.clone();
		b.set_srid(Some(4326));
		assert_eq!(a, b);
		assert_eq!(b.srid(), Some(4326));
		assert_ne!(a, Geometry::from(f.create_point(Coordinate::new(1.0, 3.0))));
	}

	#[test]
	fn set_factory_reaches_members() {
		let f = GeometryFactory::default();
		let mut g: Geometry = f
			.create_geometry_collection(vec![
				f.create_point(Coordinate::new_z(1.0, 2.0, 3.0)).into(),
				f.create_multi_point(vec![f.create_point(Coordinate::new_z(1.0, 2.0, 3.0))]).into(),
			])
			.into();
		let xyz = f.with_coordinate_type(CoordinateType::Xyz);
		g.set_factory_recursive(xyz);
		let mut types = Vec::new();
		g.apply_component_filter(&mut |c| types.push(c.coordinate_type()));
		assert_eq!(types, vec![CoordinateType::Xyz; 4]);
	}
}
