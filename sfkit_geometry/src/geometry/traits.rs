use super::{
	CoordinateType, Coordinate, Envelope, Geometry, GeometryAttributes, GeometryFactory, GeometryProperties,
	GeometryType, GID_KEY, PropertyValue, SRID_KEY,
};
use anyhow::Result;
use std::fmt::Debug;

/// Access to the [`GeometryAttributes`] every geometry carries.
pub trait HasAttributes {
	fn attributes(&self) -> &GeometryAttributes;
	fn attributes_mut(&mut self) -> &mut GeometryAttributes;
}

/// The interface every geometry variant supplies.
///
/// The trait is object safe, so tree walks hand out `&dyn GeometryTrait` for each
/// component regardless of its concrete type.
pub trait GeometryTrait: Debug + HasAttributes {
	fn geometry_type(&self) -> GeometryType;

	/// Total number of coordinates, counting all components.
	fn num_points(&self) -> usize;

	/// All coordinates in order, flattened over components and rings.
	fn coordinates(&self) -> Vec<Coordinate>;

	fn is_empty(&self) -> bool;

	/// Topological dimension: 0 for points, 1 for lines, 2 for polygons.
	/// A collection reports the highest dimension of its members.
	fn dimension(&self) -> u8;

	/// Area; zero for points and lines.
	fn area(&self) -> f64 {
		0.0
	}

	/// Length of all line work, including polygon rings; zero for points.
	fn length(&self) -> f64 {
		0.0
	}

	/// The combinatorial boundary. Fails for heterogeneous collections, whose boundary is undefined.
	fn boundary(&self) -> Result<Geometry>;

	/// Computes the envelope from scratch, bypassing the cache.
	fn compute_envelope(&self) -> Option<Envelope>;

	/// Calls `filter` for each coordinate, in order.
	fn apply_coordinate_filter(&self, filter: &mut dyn FnMut(&Coordinate));

	/// Calls `filter` for each coordinate, allowing it to change values.
	/// Afterwards every envelope in the tree is marked stale.
	fn apply_coordinate_filter_mut(&mut self, filter: &mut dyn FnMut(&mut Coordinate));

	/// Calls `filter` for this geometry and, recursively, for every component,
	/// including the rings of polygons.
	fn apply_component_filter(&self, filter: &mut dyn FnMut(&dyn GeometryTrait));

	/// Must be called after coordinates were changed in place, so the cached envelope is recomputed.
	fn geometry_changed(&mut self) {
		self.attributes_mut().reset_envelope();
	}

	/// The bounding box, computed on first access and cached until [`GeometryTrait::geometry_changed`].
	fn envelope(&self) -> Option<Envelope> {
		self.attributes().envelope_or_compute(|| self.compute_envelope())
	}

	fn factory(&self) -> &GeometryFactory {
		self.attributes().factory()
	}

	fn coordinate_type(&self) -> CoordinateType {
		self.factory().coordinate_type
	}

	fn properties(&self) -> Option<&GeometryProperties> {
		self.attributes().properties()
	}

	fn properties_mut(&mut self) -> &mut GeometryProperties {
		self.attributes_mut().properties_mut()
	}

	fn srid(&self) -> Option<i32> {
		self
			.properties()
			.and_then(|p| p.get(SRID_KEY))
			.and_then(PropertyValue::as_int)
			.and_then(|v| i32::try_from(v).ok())
	}

	/// Sets or, with `None`, removes the SRID.
	fn set_srid(&mut self, srid: Option<i32>) {
		match srid {
			Some(srid) => self.properties_mut().insert(SRID_KEY, srid),
			None => {
				if self.properties().is_some() {
					self.properties_mut().remove(SRID_KEY);
				}
			}
		}
	}

	fn gid(&self) -> Option<&str> {
		self.properties().and_then(|p| p.get(GID_KEY)).and_then(PropertyValue::as_str)
	}

	fn set_gid(&mut self, gid: Option<String>) {
		match gid {
			Some(gid) => self.properties_mut().insert(GID_KEY, gid),
			None => {
				if self.properties().is_some() {
					self.properties_mut().remove(GID_KEY);
				}
			}
		}
	}
}

/// Implements [`HasAttributes`] for structs with an `attributes` field.
#[macro_export]
macro_rules! impl_has_attributes {
	($($t:ty),*) => {$(
		impl $crate::geometry::HasAttributes for $t {
			fn attributes(&self) -> &$crate::geometry::GeometryAttributes {
				&self.attributes
			}
			fn attributes_mut(&mut self) -> &mut $crate::geometry::GeometryAttributes {
				&mut self.attributes
			}
		}
	)*}
}
