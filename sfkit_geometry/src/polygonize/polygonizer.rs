use super::{
	edge_ring::{EdgeRing, find_containing_shell},
	graph::PolygonizeGraph,
	node_lines,
};
use crate::{Geometry, GeometryFactory, GeometryTrait, GeometryType, LineString, Polygon};
use anyhow::Result;

/// Assembles polygons from a set of line edges.
///
/// Lines must be correctly noded, i.e. touch only at their endpoints, unless
/// [`Polygonizer::node_input`] is switched on.
///
/// ```
/// use sfkit_geometry::{polygonize::Polygonizer, wkt::parse_wkt};
///
/// let mut polygonizer = Polygonizer::new();
/// polygonizer.add(&parse_wkt("LINESTRING (0 0, 1 0, 1 1)").unwrap());
/// polygonizer.add(&parse_wkt("LINESTRING (1 1, 0 1, 0 0)").unwrap());
/// let result = polygonizer.polygonize().unwrap();
/// assert_eq!(result.polygons.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Polygonizer {
	lines: Vec<LineString>,
	node_input: bool,
}

/// The outcome of [`Polygonizer::polygonize`]. Each input edge ends up in at most one of the line lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonizeResult {
	pub polygons: Vec<Polygon>,
	/// Edges with a free end, directly or after other dangles were removed.
	pub dangles: Vec<LineString>,
	/// Edges with the same face on both sides.
	pub cut_edges: Vec<LineString>,
	/// Closed rings that cannot bound a polygon, such as rings with zero area.
	pub invalid_ring_lines: Vec<LineString>,
}

impl Polygonizer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Splits the input lines at their mutual intersections before building the graph.
	pub fn node_input(mut self, node_input: bool) -> Self {
		self.node_input = node_input;
		self
	}

	/// Adds every linear component of `geometry`, including polygon rings.
	pub fn add(&mut self, geometry: &Geometry) {
		let lines = &mut self.lines;
		geometry.apply_component_filter(&mut |component| {
			if matches!(component.geometry_type(), GeometryType::LineString | GeometryType::LinearRing) {
				lines.push(component.factory().create_line_string(component.coordinates()));
			}
		});
	}

	pub fn add_line_string(&mut self, line: LineString) {
		self.lines.push(line);
	}

	pub fn num_lines(&self) -> usize {
		self.lines.len()
	}

	/// Builds the planar graph, extracts polygons and classifies the leftover edges.
	pub fn polygonize(&self) -> Result<PolygonizeResult> {
		let factory: GeometryFactory = self.lines.first().map(|l| *l.factory()).unwrap_or_default();
		let noded;
		let lines = if self.node_input {
			noded = node_lines(&self.lines);
			log::debug!("noded {} input lines into {} edges", self.lines.len(), noded.len());
			&noded
		} else {
			&self.lines
		};

		let mut graph = PolygonizeGraph::new(lines);
		log::debug!(
			"polygonizer graph has {} nodes and {} edges",
			graph.nodes.len(),
			graph.edges.len()
		);

		let to_lines = |graph: &PolygonizeGraph, edges: Vec<usize>| -> Vec<LineString> {
			edges.into_iter().map(|edge| lines[graph.edges[edge].line].clone()).collect()
		};
		let dangle_edges = graph.delete_dangles();
		let cut_edge_edges = graph.delete_cut_edges()?;
		let dangles = to_lines(&graph, dangle_edges);
		let cut_edges = to_lines(&graph, cut_edge_edges);

		let mut shells = Vec::new();
		let mut holes = Vec::new();
		let mut invalid_ring_lines = Vec::new();
		for ring in graph.edge_rings()? {
			let ring = EdgeRing::new(graph.ring_coordinates(&ring));
			if !ring.is_valid() {
				invalid_ring_lines.push(factory.create_line_string(ring.coordinates));
			} else if ring.is_hole() {
				holes.push(ring);
			} else {
				shells.push(ring);
			}
		}
		log::trace!(
			"found {} shells, {} holes and {} invalid rings",
			shells.len(),
			holes.len(),
			invalid_ring_lines.len()
		);

		for (index, hole) in holes.iter().enumerate() {
			if let Some(shell) = find_containing_shell(hole, &shells) {
				shells[shell].holes.push(index);
			}
		}

		let mut polygons = Vec::with_capacity(shells.len());
		for shell in shells {
			let rings = shell
				.holes
				.iter()
				.map(|&index| factory.create_linear_ring(holes[index].coordinates.clone()))
				.collect::<Result<Vec<_>>>()?;
			polygons.push(factory.create_polygon(factory.create_linear_ring(shell.coordinates)?, rings)?);
		}

		log::debug!(
			"polygonized into {} polygons, {} dangles, {} cut edges, {} invalid rings",
			polygons.len(),
			dangles.len(),
			cut_edges.len(),
			invalid_ring_lines.len()
		);
		Ok(PolygonizeResult {
			polygons,
			dangles,
			cut_edges,
			invalid_ring_lines,
		})
	}
}
