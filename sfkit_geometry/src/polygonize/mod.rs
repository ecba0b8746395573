//! Polygon assembly from an unordered set of line edges.
//!
//! The lines are turned into a planar graph. Edges with a free end (dangles) and
//! edges bordering the same face on both sides (cut edges) are removed, the
//! remaining graph is traced into minimal rings, and clockwise rings become
//! shells that collect the counter-clockwise rings lying inside them as holes.

mod edge_ring;
mod graph;
mod noder;
mod polygonizer;

pub use noder::node_lines;
pub use polygonizer::{PolygonizeResult, Polygonizer};
