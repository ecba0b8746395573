use super::*;
use anyhow::Result;
use std::collections::BTreeMap;

crate::define_multi_geometry!(
	/// An ordered set of line strings.
	MultiLineString,
	LineString
);

impl MultiLineString {
	/// True when non-empty and every member is closed.
	pub fn is_closed(&self) -> bool {
		!self.is_empty() && self.iter().all(LineString::is_closed)
	}
}

impl GeometryTrait for MultiLineString {
	crate::impl_multi_delegation!();

	fn geometry_type(&self) -> GeometryType {
		GeometryType::MultiLineString
	}

	fn dimension(&self) -> u8 {
		1
	}

	fn length(&self) -> f64 {
		self.iter().map(GeometryTrait::length).sum()
	}

	/// End points that occur an odd number of times over all members (mod-2 rule), sorted.
	fn boundary(&self) -> Result<Geometry> {
		let factory = self.factory();
		let mut counts: BTreeMap<(u64, u64), (Coordinate, usize)> = BTreeMap::new();
		for line in self.iter() {
			if line.is_empty() {
				continue;
			}
			for c in [line.start_point(), line.end_point()].into_iter().flatten() {
				counts.entry((c.x.to_bits(), c.y.to_bits())).or_insert((*c, 0)).1 += 1;
			}
		}
		let mut points: Vec<Coordinate> = counts
			.into_values()
			.filter(|(_, count)| count % 2 == 1)
			.map(|(c, _)| c)
			.collect();
		points.sort_by(Coordinate::compare_2d);
		Ok(factory
			.create_multi_point(points.into_iter().map(|c| factory.create_point(c)).collect())
			.into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn multi_line(lines: &[&[[f64; 2]]]) -> MultiLineString {
		let factory = GeometryFactory::default();
		factory.create_multi_line_string(
			lines
				.iter()
				.map(|l| factory.create_line_string(l.iter().map(Coordinate::from).collect()))
				.collect(),
		)
	}

	#[test]
	fn length_and_points() {
		let ml = multi_line(&[&[[0.0, 0.0], [0.0, 3.0]], &[[1.0, 1.0], [4.0, 5.0]]]);
		assert_relative_eq!(ml.length(), 8.0);
		assert_eq!(ml.num_points(), 4);
		assert_eq!(ml.dimension(), 1);
		assert!(!ml.is_closed());
		assert!(ml.geometry_n(3).is_err());
	}

	#[test]
	fn boundary_uses_mod_2_rule() {
		// two lines meeting at (1 0): the shared end point is interior
		let ml = multi_line(&[&[[0.0, 0.0], [1.0, 0.0]], &[[1.0, 0.0], [2.0, 0.0]]]);
		assert_eq!(
			ml.boundary().unwrap().coordinates(),
			vec![Coordinate::new(0.0, 0.0), Coordinate::new(2.0, 0.0)]
		);

		// three lines meeting at (1 0): odd again
		let ml = multi_line(&[
			&[[0.0, 0.0], [1.0, 0.0]],
			&[[1.0, 0.0], [2.0, 0.0]],
			&[[1.0, 0.0], [1.0, 1.0]],
		]);
		assert_eq!(ml.boundary().unwrap().num_points(), 4);
	}

	#[test]
	fn closed_lines_have_empty_boundary() {
		let ml = multi_line(&[&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]);
		assert!(ml.is_closed());
		assert!(ml.boundary().unwrap().is_empty());
	}
}
