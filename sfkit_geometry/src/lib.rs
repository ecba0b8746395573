//! Planar simple-features geometry kernel.
//!
//! - [`geometry`]: coordinates, precision model, the [`Geometry`] object model and its factory
//! - [`wkt`]: Well-Known Text reader and writer
//! - [`wkb`]: Well-Known Binary writer (Standard, Proposed and PostGIS dialects) and reader
//! - [`gml`]: GML 2 reader and writer
//! - [`polygonize`]: polygon assembly from a soup of line edges

mod error;
pub mod geometry;
pub mod gml;
pub mod polygonize;
pub mod wkb;
pub mod wkt;

pub use error::*;
pub use geometry::*;
