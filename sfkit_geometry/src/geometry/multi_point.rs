use super::*;
use anyhow::Result;

crate::define_multi_geometry!(
	/// An ordered set of points.
	MultiPoint,
	Point
);

impl GeometryTrait for MultiPoint {
	crate::impl_multi_delegation!();

	fn geometry_type(&self) -> GeometryType {
		GeometryType::MultiPoint
	}

	fn dimension(&self) -> u8 {
		0
	}

	fn boundary(&self) -> Result<Geometry> {
		Ok(self.factory().create_geometry_collection(vec![]).into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn multi_point(values: &[[f64; 2]]) -> MultiPoint {
		let factory = GeometryFactory::default();
		factory.create_multi_point(
			values
				.iter()
				.map(|v| factory.create_point(Coordinate::from(v)))
				.collect(),
		)
	}

	#[test]
	fn indexing() {
		let mp = multi_point(&[[1.0, 2.0], [3.0, 4.0]]);
		assert_eq!(mp.num_geometries(), 2);
		assert_eq!(mp.geometry_n(1).unwrap().x(), Some(3.0));
		assert_eq!(
			mp.geometry_n(2).unwrap_err().downcast_ref::<GeometryError>(),
			Some(&GeometryError::IndexOutOfBounds { index: 2, len: 2 })
		);
		assert_eq!(mp.num_points(), 2);
		assert_eq!(mp.envelope().unwrap().as_array(), [1.0, 2.0, 3.0, 4.0]);
		assert_eq!(format!("{mp:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
	}

	#[test]
	fn empty_members() {
		let factory = GeometryFactory::default();
		let mp = factory.create_multi_point(vec![factory.create_point_empty()]);
		assert!(mp.is_empty());
		assert_eq!(mp.envelope(), None);
		assert!(multi_point(&[]).is_empty());
	}

	#[test]
	fn filter_mut_resets_member_envelopes() {
		let mut mp = multi_point(&[[1.0, 2.0], [3.0, 4.0]]);
		assert_eq!(mp.envelope().unwrap().max_y, 4.0);
		mp.apply_coordinate_filter_mut(&mut |c| c.y = -c.y);
		assert_eq!(mp.envelope().unwrap().as_array(), [1.0, -4.0, 3.0, -2.0]);
		assert_eq!(mp.geometry_n(0).unwrap().envelope().unwrap().max_y, -2.0);
	}
}
