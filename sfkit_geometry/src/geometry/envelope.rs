use super::Coordinate;
use std::fmt::Debug;

/// Axis-aligned bounding box. Empty geometries have no envelope, so this type
/// is always non-empty and appears as `Option<Envelope>`.
#[derive(Clone, Copy, PartialEq)]
pub struct Envelope {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

impl Envelope {
	/// Envelope spanned by two corner coordinates in any order.
	#[must_use]
	pub fn new(a: &Coordinate, b: &Coordinate) -> Self {
		Self {
			min_x: a.x.min(b.x),
			min_y: a.y.min(b.y),
			max_x: a.x.max(b.x),
			max_y: a.y.max(b.y),
		}
	}

	#[must_use]
	pub fn from_coordinate(c: &Coordinate) -> Self {
		Self {
			min_x: c.x,
			min_y: c.y,
			max_x: c.x,
			max_y: c.y,
		}
	}

	/// Envelope of a set of coordinates, `None` if the set is empty.
	pub fn from_coordinates<'a>(coordinates: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
		let mut iter = coordinates.into_iter();
		let mut envelope = Envelope::from_coordinate(iter.next()?);
		for c in iter {
			envelope.expand_to_include(c);
		}
		Some(envelope)
	}

	pub fn expand_to_include(&mut self, c: &Coordinate) {
		self.min_x = self.min_x.min(c.x);
		self.min_y = self.min_y.min(c.y);
		self.max_x = self.max_x.max(c.x);
		self.max_y = self.max_y.max(c.y);
	}

	pub fn expand_to_include_envelope(&mut self, other: &Envelope) {
		self.min_x = self.min_x.min(other.min_x);
		self.min_y = self.min_y.min(other.min_y);
		self.max_x = self.max_x.max(other.max_x);
		self.max_y = self.max_y.max(other.max_y);
	}

	/// Merges two optional envelopes.
	#[must_use]
	pub fn merge(a: Option<Envelope>, b: Option<Envelope>) -> Option<Envelope> {
		match (a, b) {
			(Some(mut a), Some(b)) => {
				a.expand_to_include_envelope(&b);
				Some(a)
			}
			(a, None) => a,
			(None, b) => b,
		}
	}

	/// True if `other` lies inside this envelope, boundaries included.
	#[must_use]
	pub fn contains_envelope(&self, other: &Envelope) -> bool {
		other.min_x >= self.min_x && other.max_x <= self.max_x && other.min_y >= self.min_y && other.max_y <= self.max_y
	}

	#[must_use]
	pub fn contains_coordinate(&self, c: &Coordinate) -> bool {
		c.x >= self.min_x && c.x <= self.max_x && c.y >= self.min_y && c.y <= self.max_y
	}

	#[must_use]
	pub fn intersects(&self, other: &Envelope) -> bool {
		!(other.min_x > self.max_x || other.max_x < self.min_x || other.min_y > self.max_y || other.max_y < self.min_y)
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	#[must_use]
	pub fn area(&self) -> f64 {
		self.width() * self.height()
	}

	#[must_use]
	pub fn center(&self) -> Coordinate {
		Coordinate::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.min_x, self.min_y, self.max_x, self.max_y]
	}
}

impl Debug for Envelope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Envelope{:?}", self.as_array())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn c(x: f64, y: f64) -> Coordinate {
		Coordinate::new(x, y)
	}

	#[test]
	fn from_coordinates() {
		assert_eq!(Envelope::from_coordinates(&Vec::<Coordinate>::new()), None);
		let envelope = Envelope::from_coordinates(&[c(3.0, -1.0), c(-2.0, 4.0), c(0.0, 0.0)]).unwrap();
		assert_eq!(envelope.as_array(), [-2.0, -1.0, 3.0, 4.0]);
		assert_relative_eq!(envelope.width(), 5.0);
		assert_relative_eq!(envelope.height(), 5.0);
		assert_relative_eq!(envelope.area(), 25.0);
		assert_eq!(envelope.center(), c(0.5, 1.5));
	}

	#[test]
	fn containment_and_intersection() {
		let outer = Envelope::new(&c(0.0, 0.0), &c(10.0, 10.0));
		let inner = Envelope::new(&c(8.0, 2.0), &c(2.0, 8.0));
		let apart = Envelope::new(&c(11.0, 0.0), &c(12.0, 1.0));
		assert!(outer.contains_envelope(&inner));
		assert!(outer.contains_envelope(&outer));
		assert!(!inner.contains_envelope(&outer));
		assert!(outer.contains_coordinate(&c(10.0, 0.0)));
		assert!(outer.intersects(&inner));
		assert!(!outer.intersects(&apart));
	}

	#[test]
	fn merge() {
		let a = Envelope::from_coordinate(&c(0.0, 0.0));
		let b = Envelope::from_coordinate(&c(2.0, 3.0));
		assert_eq!(Envelope::merge(Some(a), None), Some(a));
		assert_eq!(Envelope::merge(None, Some(b)), Some(b));
		assert_eq!(Envelope::merge(Some(a), Some(b)).unwrap().as_array(), [0.0, 0.0, 2.0, 3.0]);
		assert_eq!(format!("{:?}", a), "Envelope[0.0, 0.0, 0.0, 0.0]");
	}
}
