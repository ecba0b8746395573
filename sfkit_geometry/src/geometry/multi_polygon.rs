use super::*;
use anyhow::Result;

crate::define_multi_geometry!(
	/// An ordered set of polygons.
	MultiPolygon,
	Polygon
);

impl GeometryTrait for MultiPolygon {
	crate::impl_multi_delegation!();

	fn geometry_type(&self) -> GeometryType {
		GeometryType::MultiPolygon
	}

	fn dimension(&self) -> u8 {
		2
	}

	fn area(&self) -> f64 {
		self.iter().map(GeometryTrait::area).sum()
	}

	fn length(&self) -> f64 {
		self.iter().map(GeometryTrait::length).sum()
	}

	/// All rings of all members as a multi-line-string.
	fn boundary(&self) -> Result<Geometry> {
		let factory = self.factory();
		let lines = self
			.iter()
			.filter(|polygon| !polygon.is_empty())
			.flat_map(Polygon::rings)
			.map(|ring| factory.create_line_string(ring.coordinates()))
			.collect();
		Ok(factory.create_multi_line_string(lines).into())
	}
}
