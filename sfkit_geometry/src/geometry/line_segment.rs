use super::{Coordinate, algorithm};
use geo::algorithm::line_intersection::{LineIntersection, line_intersection};
use std::{cmp::Ordering, fmt::Debug};

/// Two coordinates forming a directed segment `p0 -> p1`.
///
/// A plain value used by the polygonizer and distance computations; it is not a geometry.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct LineSegment {
	pub p0: Coordinate,
	pub p1: Coordinate,
}

impl LineSegment {
	#[must_use]
	pub fn new(p0: Coordinate, p1: Coordinate) -> Self {
		Self { p0, p1 }
	}

	pub fn length(&self) -> f64 {
		self.p0.distance(&self.p1)
	}

	pub fn is_horizontal(&self) -> bool {
		self.p0.y == self.p1.y
	}

	pub fn is_vertical(&self) -> bool {
		self.p0.x == self.p1.x
	}

	pub fn reverse(&mut self) {
		std::mem::swap(&mut self.p0, &mut self.p1);
	}

	/// Orders the end points so that `p0 <= p1`.
	pub fn normalize(&mut self) {
		if self.p1.compare(&self.p0) == Ordering::Less {
			self.reverse();
		}
	}

	/// Angle of the segment against the positive x axis, in radians within `(-pi, pi]`.
	pub fn angle(&self) -> f64 {
		(self.p1.y - self.p0.y).atan2(self.p1.x - self.p0.x)
	}

	pub fn mid_point(&self) -> Coordinate {
		Coordinate::new((self.p0.x + self.p1.x) / 2.0, (self.p0.y + self.p1.y) / 2.0)
	}

	/// `1` if `c` is left of the segment, `-1` if right, `0` if collinear.
	pub fn orientation_index_of(&self, c: &Coordinate) -> i32 {
		algorithm::orientation_index(&self.p0, &self.p1, c)
	}

	/// Where `other` lies relative to this segment's line:
	/// `1` when it is wholly on the left, `-1` when wholly on the right,
	/// and `0` when it crosses the line or is collinear with it.
	/// Touching the line with one end point counts as the side of the other end point.
	pub fn orientation_index(&self, other: &LineSegment) -> i32 {
		let orient0 = self.orientation_index_of(&other.p0);
		let orient1 = self.orientation_index_of(&other.p1);
		if orient0 >= 0 && orient1 >= 0 {
			return orient0.max(orient1);
		}
		if orient0 <= 0 && orient1 <= 0 {
			return orient0.min(orient1);
		}
		0
	}

	/// Position of the projection of `c` along the segment: 0 at `p0`, 1 at `p1`, outside `[0, 1]` beyond the ends.
	pub fn projection_factor(&self, c: &Coordinate) -> f64 {
		if c.equals_2d(&self.p0) {
			return 0.0;
		}
		if c.equals_2d(&self.p1) {
			return 1.0;
		}
		let dx = self.p1.x - self.p0.x;
		let dy = self.p1.y - self.p0.y;
		let len2 = dx * dx + dy * dy;
		if len2 == 0.0 {
			return 0.0;
		}
		((c.x - self.p0.x) * dx + (c.y - self.p0.y) * dy) / len2
	}

	/// Projection of `c` onto the infinite line through the segment.
	pub fn project(&self, c: &Coordinate) -> Coordinate {
		if c.equals_2d(&self.p0) || c.equals_2d(&self.p1) {
			return *c;
		}
		let r = self.projection_factor(c);
		Coordinate::new(
			self.p0.x + r * (self.p1.x - self.p0.x),
			self.p0.y + r * (self.p1.y - self.p0.y),
		)
	}

	/// The point of the segment nearest to `c`.
	pub fn closest_point(&self, c: &Coordinate) -> Coordinate {
		let factor = self.projection_factor(c);
		if factor > 0.0 && factor < 1.0 {
			return self.project(c);
		}
		if self.p0.distance(c) < self.p1.distance(c) {
			self.p0
		} else {
			self.p1
		}
	}

	pub fn distance_to_coordinate(&self, c: &Coordinate) -> f64 {
		self.closest_point(c).distance(c)
	}

	/// Shortest distance between the two segments; zero when they intersect.
	pub fn distance_to_segment(&self, other: &LineSegment) -> f64 {
		if self.intersection(other).is_some() {
			return 0.0;
		}
		[
			self.distance_to_coordinate(&other.p0),
			self.distance_to_coordinate(&other.p1),
			other.distance_to_coordinate(&self.p0),
			other.distance_to_coordinate(&self.p1),
		]
		.into_iter()
		.fold(f64::INFINITY, f64::min)
	}

	/// A point shared by both segments, if any. For collinear overlaps the start of the overlap is returned.
	pub fn intersection(&self, other: &LineSegment) -> Option<Coordinate> {
		let a = geo::Line::new(geo::Coord::from(&self.p0), geo::Coord::from(&self.p1));
		let b = geo::Line::new(geo::Coord::from(&other.p0), geo::Coord::from(&other.p1));
		match line_intersection(a, b)? {
			LineIntersection::SinglePoint { intersection, .. } => Some(intersection.into()),
			LineIntersection::Collinear { intersection } => Some(intersection.start.into()),
		}
	}

	/// Orders by `p0`, then by `p1`.
	pub fn compare(&self, other: &LineSegment) -> Ordering {
		self.p0.compare(&other.p0).then_with(|| self.p1.compare(&other.p1))
	}
}

impl Debug for LineSegment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "LineSegment({:?} -> {:?})", self.p0, self.p1)
	}
}
