use super::*;
use anyhow::Result;

crate::define_multi_geometry!(
	/// A heterogeneous, ordered set of geometries of any kind, including nested collections.
	GeometryCollection,
	Geometry
);

impl GeometryTrait for GeometryCollection {
	crate::impl_multi_delegation!();

	fn geometry_type(&self) -> GeometryType {
		GeometryType::GeometryCollection
	}

	/// Highest dimension of the members; 0 when empty.
	fn dimension(&self) -> u8 {
		self.iter().map(GeometryTrait::dimension).max().unwrap_or(0)
	}

	fn area(&self) -> f64 {
		self.iter().map(GeometryTrait::area).sum()
	}

	fn length(&self) -> f64 {
		self.iter().map(GeometryTrait::length).sum()
	}

	fn boundary(&self) -> Result<Geometry> {
		Err(GeometryError::unsupported("boundary", GeometryType::GeometryCollection).into())
	}
}
