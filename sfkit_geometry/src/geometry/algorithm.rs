//! Small computational-geometry helpers shared by the geometry types and the polygonizer.

use super::Coordinate;
use geo::algorithm::kernels::{Kernel, Orientation, RobustKernel};

/// Orientation of `q` relative to the directed line `p1 -> p2`:
/// `1` when `q` lies to the left (counter-clockwise turn), `-1` to the right, `0` when collinear.
///
/// Uses the robust orientation predicate, so the sign is exact for all finite inputs.
#[must_use]
pub fn orientation_index(p1: &Coordinate, p2: &Coordinate, q: &Coordinate) -> i32 {
	let (p1, p2, q): (geo::Coord, geo::Coord, geo::Coord) = (p1.into(), p2.into(), q.into());
	match RobustKernel::orient2d(p1, p2, q) {
		Orientation::CounterClockwise => 1,
		Orientation::Clockwise => -1,
		Orientation::Collinear => 0,
	}
}

/// Shoelace area of a ring, positive for counter-clockwise rings and negative for clockwise ones.
///
/// The ring is treated as closed whether or not the last coordinate repeats the first.
#[must_use]
pub fn signed_area(ring: &[Coordinate]) -> f64 {
	if ring.len() < 3 {
		return 0.0;
	}
	let x0 = ring[0].x;
	let mut sum = 0.0;
	let mut previous = &ring[ring.len() - 1];
	for current in ring {
		// shifting by x0 keeps the products small for rings far from the origin
		sum += (previous.x - x0) * current.y - (current.x - x0) * previous.y;
		previous = current;
	}
	sum / 2.0
}

/// True if the ring runs counter-clockwise. Degenerate rings are not counter-clockwise.
#[must_use]
pub fn is_ccw(ring: &[Coordinate]) -> bool {
	signed_area(ring) > 0.0
}

/// Even-odd test of whether `point` lies inside `ring`. Points on the boundary may go either way.
#[must_use]
pub fn point_in_ring(point: &Coordinate, ring: &[Coordinate]) -> bool {
	if ring.len() < 3 {
		return false;
	}
	let (x, y) = (point.x, point.y);
	let mut inside = false;
	let mut j = ring.len() - 1;
	for i in 0..ring.len() {
		let (xi, yi) = (ring[i].x, ring[i].y);
		let (xj, yj) = (ring[j].x, ring[j].y);
		if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
			inside = !inside;
		}
		j = i;
	}
	inside
}

/// Drops consecutive coordinates that are equal in 2D.
#[must_use]
pub fn remove_repeated_points(coordinates: &[Coordinate]) -> Vec<Coordinate> {
	let mut result: Vec<Coordinate> = Vec::with_capacity(coordinates.len());
	for c in coordinates {
		if result.last().is_none_or(|last| !last.equals_2d(c)) {
			result.push(*c);
		}
	}
	result
}

/// Sum of the segment lengths of a coordinate run.
#[must_use]
pub fn length(coordinates: &[Coordinate]) -> f64 {
	coordinates.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
