use super::*;
use anyhow::Result;
use std::fmt::Debug;

/// An ordered run of coordinates. Any length is allowed, including zero.
#[derive(Clone)]
pub struct LineString {
	pub(crate) attributes: GeometryAttributes,
	coordinates: Vec<Coordinate>,
}

impl LineString {
	pub(crate) fn new(factory: GeometryFactory, coordinates: Vec<Coordinate>) -> Self {
		Self {
			attributes: GeometryAttributes::new(factory),
			coordinates,
		}
	}

	pub fn as_slice(&self) -> &[Coordinate] {
		&self.coordinates
	}

	/// Mutable access to the coordinate values; the number of coordinates is fixed.
	/// Call [`GeometryTrait::geometry_changed`] after changing them.
	pub fn as_mut_slice(&mut self) -> &mut [Coordinate] {
		&mut self.coordinates
	}

	pub fn into_coordinates(self) -> Vec<Coordinate> {
		self.coordinates
	}

	pub fn coordinate_n(&self, index: usize) -> Result<&Coordinate> {
		checked_get(&self.coordinates, index)
	}

	pub fn start_point(&self) -> Option<&Coordinate> {
		self.coordinates.first()
	}

	pub fn end_point(&self) -> Option<&Coordinate> {
		self.coordinates.last()
	}

	/// True for non-empty lines whose first and last coordinates coincide in 2D.
	pub fn is_closed(&self) -> bool {
		is_closed(&self.coordinates)
	}
}

pub(crate) fn is_closed(coordinates: &[Coordinate]) -> bool {
	match (coordinates.first(), coordinates.last()) {
		(Some(first), Some(last)) => first.equals_2d(last),
		_ => false,
	}
}

pub(crate) fn checked_get<T>(items: &[T], index: usize) -> Result<&T> {
	items.get(index).ok_or_else(|| {
		GeometryError::IndexOutOfBounds {
			index,
			len: items.len(),
		}
		.into()
	})
}

impl GeometryTrait for LineString {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::LineString
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

	/// The two end points, or an empty multi-point for empty and closed lines.
	fn boundary(&self) -> Result<Geometry> {
		let factory = self.factory();
		if self.is_empty() || self.is_closed() {
			return Ok(factory.create_multi_point(vec![]).into());
		}
		let points = [self.start_point(), self.end_point()]
			.into_iter()
			.flatten()
			.map(|c| factory.create_point(*c))
			.collect();
		Ok(factory.create_multi_point(points).into())
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

impl PartialEq for LineString {
	fn eq(&self, other: &Self) -> bool {
		self.coordinates == other.coordinates
	}
}

impl Debug for LineString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.coordinates).finish()
	}
}

crate::impl_has_attributes!(LineString);

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn line(values: &[[f64; 2]]) -> LineString {
		GeometryFactory::default().create_line_string(values.iter().map(Coordinate::from).collect())
	}

	#[test]
	fn measures() {
		let l = line(&[[0.0, 0.0], [3.0, 4.0], [3.0, 10.0]]);
		assert_eq!(l.num_points(), 3);
		assert_relative_eq!(l.length(), 11.0);
		assert_relative_eq!(l.area(), 0.0);
		assert_eq!(l.dimension(), 1);
		assert_eq!(l.envelope().unwrap().as_array(), [0.0, 0.0, 3.0, 10.0]);
		assert!(!l.is_closed());
	}

	#[test]
	fn coordinate_access_is_bounds_checked() {
		let l = line(&[[0.0, 0.0], [1.0, 1.0]]);
		assert_eq!(l.coordinate_n(1).unwrap(), &Coordinate::new(1.0, 1.0));
		let err = l.coordinate_n(2).unwrap_err();
		assert_eq!(
			err.downcast_ref::<GeometryError>(),
			Some(&GeometryError::IndexOutOfBounds { index: 2, len: 2 })
		);
	}

	#[test]
	fn boundary() {
		let open = line(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]);
		let boundary = open.boundary().unwrap();
		assert_eq!(boundary.geometry_type(), GeometryType::MultiPoint);
		assert_eq!(boundary.coordinates(), vec![Coordinate::new(0.0, 0.0), Coordinate::new(2.0, 0.0)]);

		let closed = line(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0], [0.0, 0.0]]);
		assert!(closed.is_closed());
		assert!(closed.boundary().unwrap().is_empty());
	}

	#[test]
	fn empty_line() {
		let l = line(&[]);
		assert!(l.is_empty());
		assert_eq!(l.envelope(), None);
		assert_eq!(l.start_point(), None);
	}

	#[test]
	fn in_place_changes_need_notification() {
		let mut l = line(&[[0.0, 0.0], [1.0, 1.0]]);
		assert_eq!(l.envelope().unwrap().max_x, 1.0);
		l.as_mut_slice()[1].x = 5.0;
		assert_eq!(l.envelope().unwrap().max_x, 1.0);
		l.geometry_changed();
		assert_eq!(l.envelope().unwrap().max_x, 5.0);
	}
}
