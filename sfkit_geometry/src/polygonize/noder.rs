//! Brute-force noding: splits lines wherever they touch or cross each other.

use crate::{Coordinate, Envelope, GeometryTrait, LineSegment, LineString};
use std::collections::HashSet;

/// Splits every line at all points it shares with another line (or with a
/// non-adjacent part of itself) and drops duplicate pieces.
///
/// Every segment pair is tested, so this is quadratic in the total segment count.
pub fn node_lines(lines: &[LineString]) -> Vec<LineString> {
	let segments: Vec<(usize, usize, LineSegment)> = lines
		.iter()
		.enumerate()
		.flat_map(|(line, l)| {
			l.as_slice()
				.windows(2)
				.enumerate()
				.map(move |(index, w)| (line, index, LineSegment::new(w[0], w[1])))
		})
		.collect();

	let mut splits: Vec<Vec<Coordinate>> = vec![Vec::new(); segments.len()];
	for a in 0..segments.len() {
		let (line_a, index_a, sa) = segments[a];
		let envelope_a = Envelope::new(&sa.p0, &sa.p1);
		for b in (a + 1)..segments.len() {
			let (line_b, index_b, sb) = segments[b];
			if line_a == line_b && index_b == index_a + 1 {
				continue;
			}
			if !envelope_a.intersects(&Envelope::new(&sb.p0, &sb.p1)) {
				continue;
			}
			if let Some(p) = sa.intersection(&sb) {
				splits[a].push(p);
				splits[b].push(p);
			}
			// collinear overlaps report a single point; their endpoints are nodes too
			for p in [sb.p0, sb.p1] {
				if sa.distance_to_coordinate(&p) == 0.0 {
					splits[a].push(p);
				}
			}
			for p in [sa.p0, sa.p1] {
				if sb.distance_to_coordinate(&p) == 0.0 {
					splits[b].push(p);
				}
			}
		}
	}

	let mut result = Vec::new();
	let mut seen = HashSet::new();
	let mut emit = |piece: Vec<Coordinate>, line: &LineString| {
		if piece.len() >= 2 && seen.insert(piece_key(&piece)) {
			result.push(line.factory().create_line_string(piece));
		}
	};

	let mut segment = 0;
	for line in lines {
		let coordinates = line.as_slice();
		let Some(first) = coordinates.first() else {
			continue;
		};
		let mut current = vec![*first];
		for _ in coordinates.windows(2) {
			let (_, _, s) = segments[segment];
			let mut points = std::mem::take(&mut splits[segment]);
			segment += 1;

			points.sort_by(|a, b| s.projection_factor(a).total_cmp(&s.projection_factor(b)));
			points.dedup_by(|a, b| a.equals_2d(b));

			let mut split_at_end = false;
			for p in points {
				if p.equals_2d(&s.p0) {
					if current.len() >= 2 {
						emit(std::mem::replace(&mut current, vec![s.p0]), line);
					}
				} else if p.equals_2d(&s.p1) {
					split_at_end = true;
				} else {
					current.push(p);
					emit(std::mem::replace(&mut current, vec![p]), line);
				}
			}
			current.push(s.p1);
			if split_at_end {
				emit(std::mem::replace(&mut current, vec![s.p1]), line);
			}
		}
		emit(current, line);
	}
	result
}

/// Identity of a piece regardless of its direction.
fn piece_key(piece: &[Coordinate]) -> Vec<(u64, u64)> {
	let forward: Vec<(u64, u64)> = piece.iter().map(|c| ((c.x + 0.0).to_bits(), (c.y + 0.0).to_bits())).collect();
	let mut backward = forward.clone();
	backward.reverse();
	forward.min(backward)
}
