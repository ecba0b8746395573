use crate::{
	Coordinate, Envelope,
	geometry::algorithm::{is_ccw, point_in_ring, signed_area},
};

/// A closed ring traced through the polygonizer graph.
pub(super) struct EdgeRing {
	pub coordinates: Vec<Coordinate>,
	pub envelope: Option<Envelope>,
	/// Holes assigned to this ring when it is a shell.
	pub holes: Vec<usize>,
}

impl EdgeRing {
	pub fn new(coordinates: Vec<Coordinate>) -> Self {
		let envelope = Envelope::from_coordinates(&coordinates);
		Self {
			coordinates,
			envelope,
			holes: Vec::new(),
		}
	}

	/// A ring needs four coordinates and a non-zero area to become part of a polygon.
	pub fn is_valid(&self) -> bool {
		self.coordinates.len() >= 4 && signed_area(&self.coordinates) != 0.0
	}

	/// Rings traced counter-clockwise enclose a face from outside and become holes.
	pub fn is_hole(&self) -> bool {
		is_ccw(&self.coordinates)
	}
}

/// First coordinate of `test` that is not a vertex of `ring`.
fn point_not_in(test: &[Coordinate], ring: &[Coordinate]) -> Option<Coordinate> {
	test.iter().find(|c| !ring.iter().any(|r| r.equals_2d(c))).copied()
}

/// Index of the smallest shell containing `hole`.
///
/// A candidate's envelope must contain the hole's envelope without being equal to it,
/// and the shell must contain a vertex of the hole that is not also a shell vertex.
pub(super) fn find_containing_shell(hole: &EdgeRing, shells: &[EdgeRing]) -> Option<usize> {
	let hole_envelope = hole.envelope?;
	let mut best: Option<(usize, Envelope)> = None;
	for (index, shell) in shells.iter().enumerate() {
		let Some(shell_envelope) = shell.envelope else {
			continue;
		};
		if shell_envelope == hole_envelope || !shell_envelope.contains_envelope(&hole_envelope) {
			continue;
		}
		let Some(test_point) = point_not_in(&hole.coordinates, &shell.coordinates) else {
			continue;
		};
		if !point_in_ring(&test_point, &shell.coordinates) {
			continue;
		}
		if best.is_none_or(|(_, best_envelope)| best_envelope.contains_envelope(&shell_envelope)) {
			best = Some((index, shell_envelope));
		}
	}
	best.map(|(index, _)| index)
}
