use std::{cmp::Ordering, fmt::Debug};

/// A planar position with optional elevation (`z`) and measure (`m`).
///
/// Equality and ordering look at `x`, `y` and `z`; the measure is carried along but
/// never compared.
#[derive(Clone, Copy, Default)]
pub struct Coordinate {
	pub x: f64,
	pub y: f64,
	pub z: Option<f64>,
	pub m: Option<f64>,
}

impl Coordinate {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: None, m: None }
	}

	#[must_use]
	pub fn new_z(x: f64, y: f64, z: f64) -> Self {
		Self {
			x,
			y,
			z: Some(z),
			m: None,
		}
	}

	#[must_use]
	pub fn new_m(x: f64, y: f64, m: f64) -> Self {
		Self {
			x,
			y,
			z: None,
			m: Some(m),
		}
	}

	#[must_use]
	pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
		Self {
			x,
			y,
			z: Some(z),
			m: Some(m),
		}
	}

	#[must_use]
	pub fn equals_2d(&self, other: &Coordinate) -> bool {
		self.x == other.x && self.y == other.y
	}

	/// Euclidean distance in the plane.
	#[must_use]
	pub fn distance(&self, other: &Coordinate) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}

	/// Lexicographic order on (x, y, z). An absent `z` sorts before any present one.
	#[must_use]
	pub fn compare(&self, other: &Coordinate) -> Ordering {
		self
			.compare_2d(other)
			.then_with(|| match (self.z, other.z) {
				(None, None) => Ordering::Equal,
				(None, Some(_)) => Ordering::Less,
				(Some(_), None) => Ordering::Greater,
				(Some(a), Some(b)) => a.total_cmp(&b),
			})
	}

	/// Lexicographic order on (x, y).
	#[must_use]
	pub fn compare_2d(&self, other: &Coordinate) -> Ordering {
		self.x.total_cmp(&other.x).then_with(|| self.y.total_cmp(&other.y))
	}
}

impl PartialEq for Coordinate {
	fn eq(&self, other: &Self) -> bool {
		self.x == other.x && self.y == other.y && self.z == other.z
	}
}

impl PartialOrd for Coordinate {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.compare(other))
	}
}

impl From<[f64; 2]> for Coordinate {
	fn from(value: [f64; 2]) -> Self {
		Coordinate::new(value[0], value[1])
	}
}

impl From<&[f64; 2]> for Coordinate {
	fn from(value: &[f64; 2]) -> Self {
		Coordinate::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Coordinate {
	fn from(value: [f64; 3]) -> Self {
		Coordinate::new_z(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Coordinate {
	fn from(value: (f64, f64)) -> Self {
		Coordinate::new(value.0, value.1)
	}
}

impl From<geo::Coord> for Coordinate {
	fn from(value: geo::Coord) -> Self {
		Coordinate::new(value.x, value.y)
	}
}

impl From<Coordinate> for geo::Coord {
	fn from(value: Coordinate) -> Self {
		geo::Coord { x: value.x, y: value.y }
	}
}

impl From<&Coordinate> for geo::Coord {
	fn from(value: &Coordinate) -> Self {
		geo::Coord { x: value.x, y: value.y }
	}
}

impl Debug for Coordinate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut list = f.debug_list();
		list.entry(&self.x).entry(&self.y);
		if let Some(z) = self.z {
			list.entry(&z);
		}
		if let Some(m) = self.m {
			list.entry(&format_args!("m={m:?}"));
		}
		list.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn equality_ignores_measure() {
		assert_eq!(Coordinate::new_m(1.0, 2.0, 5.0), Coordinate::new(1.0, 2.0));
		assert_ne!(Coordinate::new_z(1.0, 2.0, 3.0), Coordinate::new(1.0, 2.0));
		assert!(Coordinate::new_z(1.0, 2.0, 3.0).equals_2d(&Coordinate::new(1.0, 2.0)));
	}

	#[test]
	fn ordering() {
		let a = Coordinate::new(1.0, 2.0);
		let b = Coordinate::new(1.0, 3.0);
		let c = Coordinate::new_z(1.0, 2.0, 0.0);
		assert_eq!(a.compare(&b), Ordering::Less);
		assert_eq!(b.compare(&a), Ordering::Greater);
		assert_eq!(a.compare(&c), Ordering::Less);
		assert_eq!(a.compare(&a), Ordering::Equal);
		assert!(Coordinate::new(0.0, 9.0) < a);
	}

	#[test]
	fn distance() {
		assert_relative_eq!(Coordinate::new(0.0, 0.0).distance(&Coordinate::new(3.0, 4.0)), 5.0);
	}

	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", Coordinate::new(1.0, 2.5)), "[1.0, 2.5]");
		assert_eq!(
			format!("{:?}", Coordinate::new_zm(1.0, 2.0, 3.0, 4.0)),
			"[1.0, 2.0, 3.0, m=4.0]"
		);
	}

	#[test]
	fn geo_conversion() {
		let coord: geo::Coord = Coordinate::new_z(1.0, 2.0, 3.0).into();
		assert_eq!(coord, geo::Coord { x: 1.0, y: 2.0 });
		assert_eq!(Coordinate::from(coord), Coordinate::new(1.0, 2.0));
	}
}
