use super::*;
use anyhow::Result;
use std::fmt::Debug;

/// One shell plus zero or more holes. An empty shell is the empty polygon.
#[derive(Clone)]
pub struct Polygon {
	pub(crate) attributes: GeometryAttributes,
	shell: LinearRing,
	holes: Vec<LinearRing>,
}

impl Polygon {
	pub(crate) fn new(factory: GeometryFactory, shell: LinearRing, holes: Vec<LinearRing>) -> Self {
		Self {
			attributes: GeometryAttributes::new(factory),
			shell,
			holes,
		}
	}

	pub(crate) fn validate(shell: &LinearRing, holes: &[LinearRing]) -> Result<()> {
		if shell.is_empty() && holes.iter().any(|hole| !hole.is_empty()) {
			return Err(GeometryError::invalid("shell is empty but holes are not").into());
		}
		Ok(())
	}

	pub fn exterior_ring(&self) -> &LinearRing {
		&self.shell
	}

	pub fn num_interior_rings(&self) -> usize {
		self.holes.len()
	}

	pub fn interior_ring_n(&self, index: usize) -> Result<&LinearRing> {
		line_string::checked_get(&self.holes, index)
	}

	pub fn interior_rings(&self) -> &[LinearRing] {
		&self.holes
	}

	/// Shell followed by holes.
	pub fn rings(&self) -> impl Iterator<Item = &LinearRing> {
		std::iter::once(&self.shell).chain(self.holes.iter())
	}

	pub(crate) fn rings_mut(&mut self) -> impl Iterator<Item = &mut LinearRing> {
		std::iter::once(&mut self.shell).chain(self.holes.iter_mut())
	}

	pub fn into_rings(self) -> (LinearRing, Vec<LinearRing>) {
		(self.shell, self.holes)
	}
}

impl GeometryTrait for Polygon {
	fn geometry_type(&self) -> GeometryType {
		GeometryType::Polygon
	}

	fn num_points(&self) -> usize {
		self.rings().map(GeometryTrait::num_points).sum()
	}

	fn coordinates(&self) -> Vec<Coordinate> {
		self.rings().flat_map(|ring| ring.as_slice().iter().copied()).collect()
	}

	fn is_empty(&self) -> bool {
		self.shell.is_empty()
	}

	fn dimension(&self) -> u8 {
		2
	}

	fn area(&self) -> f64 {
		let holes: f64 = self.holes.iter().map(|hole| hole.signed_area().abs()).sum();
		self.shell.signed_area().abs() - holes
	}

	fn length(&self) -> f64 {
		self.rings().map(GeometryTrait::length).sum()
	}

	/// The shell ring when there are no holes, otherwise a multi-line-string of all rings.
	fn boundary(&self) -> Result<Geometry> {
		let factory = self.factory();
		if self.is_empty() {
			return Ok(factory.create_multi_line_string(vec![]).into());
		}
		if self.holes.is_empty() {
			return Ok(factory.create_linear_ring(self.shell.coordinates())?.into());
		}
		let lines = self
			.rings()
			.map(|ring| factory.create_line_string(ring.coordinates()))
			.collect();
		Ok(factory.create_multi_line_string(lines).into())
	}

	fn compute_envelope(&self) -> Option<Envelope> {
		self.shell.compute_envelope()
	}

	fn apply_coordinate_filter(&self, filter: &mut dyn FnMut(&Coordinate)) {
		for ring in self.rings() {
			ring.apply_coordinate_filter(&mut *filter);
		}
	}

	fn apply_coordinate_filter_mut(&mut self, filter: &mut dyn FnMut(&mut Coordinate)) {
		self.shell.apply_coordinate_filter_mut(&mut *filter);
		for hole in &mut self.holes {
			hole.apply_coordinate_filter_mut(&mut *filter);
		}
		self.attributes.reset_envelope();
	}

	fn apply_component_filter(&self, filter: &mut dyn FnMut(&dyn GeometryTrait)) {
		filter(self);
		for ring in self.rings() {
			ring.apply_component_filter(&mut *filter);
		}
	}

	fn geometry_changed(&mut self) {
		self.shell.geometry_changed();
		for hole in &mut self.holes {
			hole.geometry_changed();
		}
		self.attributes.reset_envelope();
	}
}

impl PartialEq for Polygon {
	fn eq(&self, other: &Self) -> bool {
		self.shell == other.shell && self.holes == other.holes
	}
}

impl Debug for Polygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.rings()).finish()
	}
}

crate::impl_has_attributes!(Polygon);

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn ring(values: &[[f64; 2]]) -> LinearRing {
		GeometryFactory::default()
			.create_linear_ring(values.iter().map(Coordinate::from).collect())
			.unwrap()
	}

	fn square(min: f64, max: f64) -> LinearRing {
		ring(&[[min, min], [max, min], [max, max], [min, max], [min, min]])
	}

	#[test]
	fn area_subtracts_holes() {
		let factory = GeometryFactory::default();
		let polygon = factory.create_polygon(square(0.0, 10.0), vec![square(2.0, 4.0), square(6.0, 7.0)]).unwrap();
		assert_relative_eq!(polygon.area(), 100.0 - 4.0 - 1.0);
		assert_relative_eq!(polygon.length(), 40.0 + 8.0 + 4.0);
		assert_eq!(polygon.num_points(), 15);
		assert_eq!(polygon.num_interior_rings(), 2);
		assert_eq!(polygon.interior_ring_n(1).unwrap(), &square(6.0, 7.0));
		assert!(polygon.interior_ring_n(2).is_err());
		assert_eq!(polygon.dimension(), 2);
		assert_eq!(polygon.envelope().unwrap().as_array(), [0.0, 0.0, 10.0, 10.0]);
	}

	#[test]
	fn boundary_without_holes_is_shell() {
		let polygon = GeometryFactory::default().create_polygon(square(0.0, 1.0), vec![]).unwrap();
		let boundary = polygon.boundary().unwrap();
		assert_eq!(boundary.geometry_type(), GeometryType::LinearRing);
		assert_eq!(boundary.coordinates(), square(0.0, 1.0).coordinates());
	}

	#[test]
	fn boundary_with_holes_is_multi_line_string() {
		let polygon = GeometryFactory::default()
			.create_polygon(square(0.0, 10.0), vec![square(2.0, 4.0)])
			.unwrap();
		let boundary = polygon.boundary().unwrap();
		assert_eq!(boundary.geometry_type(), GeometryType::MultiLineString);
		assert_eq!(boundary.num_points(), 10);
	}

	#[test]
	fn empty_polygon() {
		let polygon = GeometryFactory::default().create_polygon_empty();
		assert!(polygon.is_empty());
		assert_eq!(polygon.exterior_ring().num_points(), 0);
		assert_relative_eq!(polygon.area(), 0.0);
		assert_eq!(polygon.boundary().unwrap().geometry_type(), GeometryType::MultiLineString);
	}

	#[test]
	fn holes_on_empty_shell_are_rejected() {
		let factory = GeometryFactory::default();
		let empty_shell = factory.create_linear_ring(vec![]).unwrap();
		let err = factory.create_polygon(empty_shell, vec![square(0.0, 1.0)]).unwrap_err();
		assert_eq!(
			err.downcast_ref::<GeometryError>(),
			Some(&GeometryError::invalid("shell is empty but holes are not"))
		);
	}

	#[test]
	fn null_hole_is_rejected() {
		let factory = GeometryFactory::default();
		let err = factory
			.create_polygon_checked(Some(square(0.0, 10.0)), vec![Some(square(1.0, 2.0)), None])
			.unwrap_err();
		assert_eq!(
			err.to_string(),
			"invalid geometry structure: hole 1 of polygon is missing"
		);
		let polygon = factory.create_polygon_checked(None, vec![]).unwrap();
		assert!(polygon.is_empty());
	}

	#[test]
	fn component_filter_visits_rings() {
		let polygon = GeometryFactory::default()
			.create_polygon(square(0.0, 10.0), vec![square(2.0, 4.0)])
			.unwrap();
		let mut types = Vec::new();
		polygon.apply_component_filter(&mut |g| types.push(g.geometry_type()));
		assert_eq!(
			types,
			vec![GeometryType::Polygon, GeometryType::LinearRing, GeometryType::LinearRing]
		);
	}

	#[test]
	fn coordinate_filter_mut_invalidates_envelopes() {
		let mut polygon = GeometryFactory::default().create_polygon(square(0.0, 1.0), vec![]).unwrap();
		assert_eq!(polygon.envelope().unwrap().max_x, 1.0);
		assert_eq!(polygon.exterior_ring().envelope().unwrap().max_x, 1.0);
		polygon.apply_coordinate_filter_mut(&mut |c| c.x *= 3.0);
		assert_eq!(polygon.envelope().unwrap().max_x, 3.0);
		assert_eq!(polygon.exterior_ring().envelope().unwrap().max_x, 3.0);
	}
}
