/// Defines a homogeneous or heterogeneous multi-geometry struct holding `Vec<$item>`,
/// with indexed access, equality on members and a list-style `Debug`.
#[macro_export]
macro_rules! define_multi_geometry {
	($(#[$meta:meta])* $name:ident, $item:ty) => {
		$(#[$meta])*
		#[derive(Clone)]
		pub struct $name {
			pub(crate) attributes: $crate::geometry::GeometryAttributes,
			members: Vec<$item>,
		}

		impl $name {
			pub(crate) fn new(factory: $crate::geometry::GeometryFactory, members: Vec<$item>) -> Self {
				Self {
					attributes: $crate::geometry::GeometryAttributes::new(factory),
					members,
				}
			}

			pub fn num_geometries(&self) -> usize {
				self.members.len()
			}

			/// Member at `index`, failing with [`GeometryError::IndexOutOfBounds`](crate::GeometryError) past the end.
			pub fn geometry_n(&self, index: usize) -> anyhow::Result<&$item> {
				$crate::geometry::line_string::checked_get(&self.members, index)
			}

			pub fn iter(&self) -> std::slice::Iter<'_, $item> {
				self.members.iter()
			}

			pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, $item> {
				self.members.iter_mut()
			}

			pub fn into_inner(self) -> Vec<$item> {
				self.members
			}
		}

		impl<'a> IntoIterator for &'a $name {
			type Item = &'a $item;
			type IntoIter = std::slice::Iter<'a, $item>;
			fn into_iter(self) -> Self::IntoIter {
				self.members.iter()
			}
		}

		impl PartialEq for $name {
			fn eq(&self, other: &Self) -> bool {
				self.members == other.members
			}
		}

		impl std::fmt::Debug for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_list().entries(&self.members).finish()
			}
		}

		$crate::impl_has_attributes!($name);
	};
}

/// The parts of [`GeometryTrait`](crate::GeometryTrait) that only delegate to the members.
#[macro_export]
macro_rules! impl_multi_delegation {
	() => {
		fn num_points(&self) -> usize {
			self.iter().map(|g| g.num_points()).sum()
		}

		fn coordinates(&self) -> Vec<$crate::geometry::Coordinate> {
			self.iter().flat_map(|g| g.coordinates()).collect()
		}

		fn is_empty(&self) -> bool {
			self.iter().all(|g| g.is_empty())
		}

		fn compute_envelope(&self) -> Option<$crate::geometry::Envelope> {
			self
				.iter()
				.fold(None, |acc, g| $crate::geometry::Envelope::merge(acc, g.envelope()))
		}

		fn apply_coordinate_filter(&self, filter: &mut dyn FnMut(&$crate::geometry::Coordinate)) {
			for g in self.iter() {
				g.apply_coordinate_filter(&mut *filter);
			}
		}

		fn apply_coordinate_filter_mut(&mut self, filter: &mut dyn FnMut(&mut $crate::geometry::Coordinate)) {
			for g in self.iter_mut() {
				g.apply_coordinate_filter_mut(&mut *filter);
			}
			self.attributes.reset_envelope();
		}

		fn apply_component_filter(&self, filter: &mut dyn FnMut(&dyn $crate::geometry::GeometryTrait)) {
			filter(self);
			for g in self.iter() {
				g.apply_component_filter(&mut *filter);
			}
		}

		fn geometry_changed(&mut self) {
			for g in self.iter_mut() {
				g.geometry_changed();
			}
			self.attributes.reset_envelope();
		}
	};
}
