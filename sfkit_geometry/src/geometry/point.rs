use super::*;
use anyhow::Result;
use std::fmt::Debug;

/// A single position, or the empty point.
#[derive(Clone)]
pub struct Point {
	pub(crate) attributes: GeometryAttributes,
	coordinate: Option<Coordinate>,
}

impl Point {
	pub(crate) fn new(factory: GeometryFactory, coordinate: Option<Coordinate>) -> Self {
		Self {
			attributes: GeometryAttributes::new(factory),
			coordinate,
		}
	}

	pub fn coordinate(&self) -> Option<&Coordinate> {
		self.coordinate.as_ref()
	}

	/// Mutable access to the position. Call [`GeometryTrait::geometry_changed`] after changing it.
	pub fn coordinate_mut(&mut self) -> Option<&mut Coordinate> {
		self.coordinate.as_mut()
	}

	pub fn x(&self) -> Option<f64> {
		self.coordinate.map(|c| c.x)
	}

	pub fn y(&self) -> Option<f64> {
		self.coordinate.map(|c| c.y)
	}
}

impl GeometryTrait for Point {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::Point
	}

	fn num_points(&self) -> usize {
		usize::from(self.coordinate.is_some())
	}

	fn coordinates(&self) -> Vec<Coordinate> {
		self.coordinate.into_iter().collect()
	}

	fn is_empty(&self) -> bool {
		self.coordinate.is_none()
	}

	fn dimension(&self) -> u8 {
		0
	}

	fn boundary(&self) -> Result<Geometry> {
		Ok(self.factory().create_geometry_collection(vec![]).into())
	}

	fn compute_envelope(&self) -> Option<Envelope> {
		self.coordinate.as_ref().map(Envelope::from_coordinate)
	}

	fn apply_coordinate_filter(&self, filter: &mut dyn FnMut(&Coordinate)) {
		if let Some(c) = &self.coordinate {
			filter(c);
		}
	}

	fn apply_coordinate_filter_mut(&mut self, filter: &mut dyn FnMut(&mut Coordinate)) {
		if let Some(c) = &mut self.coordinate {
			filter(c);
		}
		self.geometry_changed();
	}

	fn apply_component_filter(&self, filter: &mut dyn FnMut(&dyn GeometryTrait)) {
		filter(self);
	}
}

impl PartialEq for Point {
	fn eq(&self, other: &Self) -> bool {
		self.coordinate == other.coordinate
	}
}

impl Debug for Point {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.coordinate {
			Some(c) => c.fmt(f),
			None => f.write_str("EMPTY"),
		}
	}
}

crate::impl_has_attributes!(Point);
