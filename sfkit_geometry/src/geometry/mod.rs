//! The geometry object model.
//!
//! Every variant is a struct holding [`GeometryAttributes`] plus its payload and
//! implements [`GeometryTrait`]; [`Geometry`] is the closed enum over all of them.
//! Geometries are built through a [`GeometryFactory`], which validates structure.

pub mod algorithm;
mod attributes;
mod collection;
mod coordinate;
mod coordinate_type;
mod envelope;
mod factory;
#[allow(clippy::module_inception)]
mod geometry;
mod geometry_type;
mod line_segment;
mod line_string;
mod linear_ring;
mod macros;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod precision;
mod properties;
mod traits;

use crate::GeometryError;

pub use attributes::*;
pub use collection::*;
pub use coordinate::*;
pub use coordinate_type::*;
pub use envelope::*;
pub use factory::*;
pub use geometry::*;
pub use geometry_type::*;
pub use line_segment::*;
pub use line_string::LineString;
pub use linear_ring::*;
pub use multi_line_string::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use precision::*;
pub use properties::*;
pub use traits::*;
