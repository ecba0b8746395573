//! Planar graph of the polygonizer, held in index-based arenas.
//!
//! Every input line becomes one [`Edge`] with two [`DirectedEdge`]s, one per direction.
//! Each [`Node`] keeps its outgoing directed edges sorted counter-clockwise by angle,
//! which is all the ring tracing below relies on.

use crate::{Coordinate, GeometryError, LineString, geometry::algorithm::remove_repeated_points};
use anyhow::Result;
use std::collections::HashMap;

pub(super) struct Node {
	pub coordinate: Coordinate,
	/// Outgoing directed edges, counter-clockwise.
	pub out_edges: Vec<usize>,
}

pub(super) struct DirectedEdge {
	pub from: usize,
	pub to: usize,
	pub sym: usize,
	pub edge: usize,
	/// Whether this direction follows the line's own coordinate order.
	pub forward: bool,
	angle: f64,
	/// Deleted as a dangle or cut edge.
	pub marked: bool,
	pub next: Option<usize>,
	pub label: Option<usize>,
	pub ring: Option<usize>,
}

pub(super) struct Edge {
	/// Index of the input line.
	pub line: usize,
	/// The line without repeated points.
	pub coordinates: Vec<Coordinate>,
}

#[derive(Default)]
pub(super) struct PolygonizeGraph {
	pub nodes: Vec<Node>,
	pub directed: Vec<DirectedEdge>,
	pub edges: Vec<Edge>,
}

/// Exact 2D identity of a node; `+ 0.0` folds `-0.0` into `0.0`.
fn node_key(c: &Coordinate) -> (u64, u64) {
	((c.x + 0.0).to_bits(), (c.y + 0.0).to_bits())
}

fn angle(from: &Coordinate, to: &Coordinate) -> f64 {
	(to.y - from.y).atan2(to.x - from.x)
}

impl PolygonizeGraph {
	/// Lines with fewer than two distinct points are left out.
	pub fn new(lines: &[LineString]) -> Self {
		let mut graph = PolygonizeGraph::default();
		let mut index: HashMap<(u64, u64), usize> = HashMap::new();

		for (line, input) in lines.iter().enumerate() {
			let points = remove_repeated_points(input.as_slice());
			let n = points.len();
			if n < 2 {
				continue;
			}
			let start = graph.node(&mut index, points[0]);
			let end = graph.node(&mut index, points[n - 1]);
			let edge = graph.edges.len();
			let forward = graph.directed.len();
			let backward = forward + 1;
			graph.directed.push(DirectedEdge::new(start, end, backward, edge, true, angle(&points[0], &points[1])));
			graph.directed.push(DirectedEdge::new(
				end,
				start,
				forward,
				edge,
				false,
				angle(&points[n - 1], &points[n - 2]),
			));
			graph.nodes[start].out_edges.push(forward);
			graph.nodes[end].out_edges.push(backward);
			graph.edges.push(Edge {
				line,
				coordinates: points,
			});
		}

		let directed = &graph.directed;
		for node in &mut graph.nodes {
			node.out_edges.sort_by(|a, b| directed[*a].angle.total_cmp(&directed[*b].angle));
		}
		graph
	}

	fn node(&mut self, index: &mut HashMap<(u64, u64), usize>, coordinate: Coordinate) -> usize {
		*index.entry(node_key(&coordinate)).or_insert_with(|| {
			self.nodes.push(Node {
				coordinate,
				out_edges: Vec::new(),
			});
			self.nodes.len() - 1
		})
	}

	/// Number of outgoing directed edges that are not deleted.
	fn degree(&self, node: usize) -> usize {
		self.nodes[node]
			.out_edges
			.iter()
			.filter(|&&de| !self.directed[de].marked)
			.count()
	}

	fn mark(&mut self, de: usize) {
		let sym = self.directed[de].sym;
		self.directed[de].marked = true;
		self.directed[sym].marked = true;
	}

	/// Removes edges hanging off degree-1 nodes, repeatedly, and returns their edge indices.
	pub fn delete_dangles(&mut self) -> Vec<usize> {
		let mut stack: Vec<usize> = (0..self.nodes.len()).filter(|&n| self.degree(n) == 1).collect();
		let mut dangles = Vec::new();
		while let Some(node) = stack.pop() {
			for i in 0..self.nodes[node].out_edges.len() {
				let de = self.nodes[node].out_edges[i];
				if self.directed[de].marked {
					continue;
				}
				self.mark(de);
				dangles.push(self.directed[de].edge);
				let to = self.directed[de].to;
				if self.degree(to) == 1 {
					stack.push(to);
				}
			}
		}
		dangles
	}

	/// Removes edges that have the same face on both sides and returns their edge indices.
	pub fn delete_cut_edges(&mut self) -> Result<Vec<usize>> {
		self.compute_next_cw_edges();
		self.find_labeled_edge_rings()?;

		let mut cut_edges = Vec::new();
		for de in 0..self.directed.len() {
			if self.directed[de].marked {
				continue;
			}
			let sym = self.directed[de].sym;
			if self.directed[de].label == self.directed[sym].label {
				self.mark(de);
				cut_edges.push(self.directed[de].edge);
			}
		}
		Ok(cut_edges)
	}

	/// Traces the minimal rings of the remaining graph, each as its list of directed edges.
	pub fn edge_rings(&mut self) -> Result<Vec<Vec<usize>>> {
		self.compute_next_cw_edges();
		for de in &mut self.directed {
			de.label = None;
		}
		let maximal_rings = self.find_labeled_edge_rings()?;
		self.convert_maximal_to_minimal_rings(&maximal_rings)?;

		let mut rings = Vec::new();
		for start in 0..self.directed.len() {
			if self.directed[start].marked || self.directed[start].ring.is_some() {
				continue;
			}
			let edges = self.ring_edges(start)?;
			for &de in &edges {
				if self.directed[de].ring.is_some() {
					return Err(GeometryError::invalid("directed edge found in two polygonizer rings").into());
				}
				self.directed[de].ring = Some(rings.len());
			}
			rings.push(edges);
		}
		Ok(rings)
	}

	/// Links each incoming edge to the next outgoing edge counter-clockwise around its node,
	/// which traces every face clockwise.
	fn compute_next_cw_edges(&mut self) {
		for node in 0..self.nodes.len() {
			let active: Vec<usize> = self.nodes[node]
				.out_edges
				.iter()
				.copied()
				.filter(|&de| !self.directed[de].marked)
				.collect();
			for (i, &de) in active.iter().enumerate() {
				let sym = self.directed[de].sym;
				self.directed[sym].next = Some(active[(i + 1) % active.len()]);
			}
		}
	}

	/// Gives every ring formed by `next` links its own label; returns one start edge per ring.
	fn find_labeled_edge_rings(&mut self) -> Result<Vec<usize>> {
		let mut starts = Vec::new();
		for start in 0..self.directed.len() {
			if self.directed[start].marked || self.directed[start].label.is_some() {
				continue;
			}
			let label = starts.len();
			for de in self.ring_edges(start)? {
				self.directed[de].label = Some(label);
			}
			starts.push(start);
		}
		Ok(starts)
	}

	fn ring_edges(&self, start: usize) -> Result<Vec<usize>> {
		let mut edges = Vec::new();
		let mut de = start;
		loop {
			edges.push(de);
			de = self.directed[de]
				.next
				.ok_or_else(|| GeometryError::invalid("polygonizer ring has an unlinked directed edge"))?;
			if de == start {
				return Ok(edges);
			}
			if edges.len() > self.directed.len() {
				return Err(GeometryError::invalid("polygonizer ring does not close").into());
			}
		}
	}

	/// A maximal ring that passes through a node more than once is relinked there,
	/// so that it splits into minimal rings.
	fn convert_maximal_to_minimal_rings(&mut self, starts: &[usize]) -> Result<()> {
		for &start in starts {
			let label = self.directed[start].label;
			let mut nodes: Vec<usize> = Vec::new();
			for de in self.ring_edges(start)? {
				let node = self.directed[de].from;
				if !nodes.contains(&node) && self.degree_with_label(node, label) > 1 {
					nodes.push(node);
				}
			}
			for node in nodes {
				self.compute_next_ccw_edges(node, label)?;
			}
		}
		Ok(())
	}

	fn degree_with_label(&self, node: usize, label: Option<usize>) -> usize {
		self.nodes[node]
			.out_edges
			.iter()
			.filter(|&&de| self.directed[de].label == label)
			.count()
	}

	fn compute_next_ccw_edges(&mut self, node: usize, label: Option<usize>) -> Result<()> {
		let mut first_out = None;
		let mut previous_in: Option<usize> = None;
		for i in (0..self.nodes[node].out_edges.len()).rev() {
			let de = self.nodes[node].out_edges[i];
			let sym = self.directed[de].sym;
			let out_de = (self.directed[de].label == label).then_some(de);
			let in_de = (self.directed[sym].label == label).then_some(sym);
			if in_de.is_some() {
				previous_in = in_de;
			}
			if let Some(out_de) = out_de {
				if let Some(previous) = previous_in.take() {
					self.directed[previous].next = Some(out_de);
				}
				first_out.get_or_insert(out_de);
			}
		}
		if let Some(previous) = previous_in {
			let first = first_out.ok_or_else(|| GeometryError::invalid("polygonizer node has no outgoing ring edge"))?;
			self.directed[previous].next = Some(first);
		}
		Ok(())
	}

	/// Closed coordinate sequence along a ring of directed edges.
	pub fn ring_coordinates(&self, edges: &[usize]) -> Vec<Coordinate> {
		let mut coordinates: Vec<Coordinate> = Vec::new();
		let mut push = |c: &Coordinate| {
			if coordinates.last().is_none_or(|last| !last.equals_2d(c)) {
				coordinates.push(*c);
			}
		};
		for &de in edges {
			let directed = &self.directed[de];
			let line = &self.edges[directed.edge].coordinates;
			if directed.forward {
				line.iter().for_each(&mut push);
			} else {
				line.iter().rev().for_each(&mut push);
			}
		}
		if let (Some(&first), Some(last)) = (coordinates.first(), coordinates.last())
			&& !first.equals_2d(last)
		{
			coordinates.push(first);
		}
		coordinates
	}
}

impl DirectedEdge {
	fn new(from: usize, to: usize, sym: usize, edge: usize, forward: bool, angle: f64) -> Self {
		Self {
			from,
			to,
			sym,
			edge,
			forward,
			angle,
			marked: false,
			next: None,
			label: None,
			ring: None,
		}
	}
}
