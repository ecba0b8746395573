//! GML 2 geometry encoding, read with a pull parser and written with an event writer.

mod reader;
mod writer;

pub use reader::{GmlReader, GmlReaderOptions, parse_srs_name};
pub use writer::{GmlVersion, GmlWriter, GmlWriterOptions};

pub const GML_NAMESPACE: &str = "http://www.opengis.net/gml";

/// Prefix of the EPSG form of `srsName`; the code follows the `#`.
pub const EPSG_URL_PREFIX: &str = "http://www.opengis.net/gml/srs/epsg.xml#";
