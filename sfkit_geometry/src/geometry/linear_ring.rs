use super::*;
use anyhow::Result;
use std::fmt::Debug;

/// Smallest number of coordinates of a non-empty ring: three corners plus the closing point.
pub const MINIMUM_RING_SIZE: usize = 4;

/// A closed line string used as polygon shell or hole.
///
/// Either empty, or at least [`MINIMUM_RING_SIZE`] coordinates with the last
/// equal to the first. The factory enforces this on construction.
#[derive(Clone)]
pub struct LinearRing {
	pub(crate) attributes: GeometryAttributes,
	coordinates: Vec<Coordinate>,
}

impl LinearRing {
	pub(crate) fn new(factory: GeometryFactory, coordinates: Vec<Coordinate>) -> Self {
		Self {
			attributes: GeometryAttributes::new(factory),
			coordinates,
		}
	}

	pub(crate) fn validate(coordinates: &[Coordinate]) -> Result<()> {
		if coordinates.is_empty() {
			return Ok(());
		}
		if !line_string::is_closed(coordinates) {
			return Err(GeometryError::invalid("points of LinearRing do not form a closed linestring").into());
		}
		if coordinates.len() < MINIMUM_RING_SIZE {
			return Err(GeometryError::invalid(format!(
				"invalid number of points in LinearRing (found {} - must be 0 or >= {MINIMUM_RING_SIZE})",
				coordinates.len()
			))
			.into());
		}
		Ok(())
	}

	pub fn as_slice(&self) -> &[Coordinate] {
		&self.coordinates
	}

	/// Mutable access to the coordinate values. Keep the ring closed and call
	/// [`GeometryTrait::geometry_changed`] afterwards.
	pub fn as_mut_slice(&mut self) -> &mut [Coordinate] {
		&mut self.coordinates
	}

	pub fn into_coordinates(self) -> Vec<Coordinate> {
		self.coordinates
	}

	pub fn coordinate_n(&self, index: usize) -> Result<&Coordinate> {
		line_string::checked_get(&self.coordinates, index)
	}

	/// Shoelace area, positive when counter-clockwise.
	pub fn signed_area(&self) -> f64 {
		algorithm::signed_area(&self.coordinates)
	}

	pub fn is_ccw(&self) -> bool {
		algorithm::is_ccw(&self.coordinates)
	}

	/// Converts the ring into a plain line string with the same coordinates and attributes.
	pub fn into_line_string(self) -> LineString {
		let mut line = LineString::new(*self.factory(), self.coordinates);
		line.attributes = self.attributes;
		line
	}
}

impl GeometryTrait for LinearRing {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::LinearRing
	}

	fn num_points(&self) -> usize {
		self.coordinates.len()
	}

	fn coordinates(&self) -> Vec<Coordinate> {
		self.coordinates.clone()
	}

	fn is_empty(&self) -> bool {
		self.coordinates.is_empty()
	}

	fn dimension(&self) -> u8 {
		1
	}

	fn length(&self) -> f64 {
		algorithm::length(&self.coordinates)
	}

	fn boundary(&self) -> Result<Geometry> {
		Ok(self.factory().create_multi_point(vec![]).into())
	}

	fn compute_envelope(&self) -> Option<Envelope> {
		Envelope::from_coordinates(&self.coordinates)
	}

	fn apply_coordinate_filter(&self, filter: &mut dyn FnMut(&Coordinate)) {
		self.coordinates.iter().for_each(filter);
	}

	fn apply_coordinate_filter_mut(&mut self, filter: &mut dyn FnMut(&mut Coordinate)) {
		self.coordinates.iter_mut().for_each(filter);
		self.geometry_changed();
	}

	fn apply_component_filter(&self, filter: &mut dyn FnMut(&dyn GeometryTrait)) {
		filter(self);
	}
}

impl PartialEq for LinearRing {
	fn eq(&self, other: &Self) -> bool {
		self.coordinates == other.coordinates
	}
}

impl Debug for LinearRing {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.coordinates).finish()
	}
}

crate::impl_has_attributes!(LinearRing);
