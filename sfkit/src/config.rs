//! Codec settings read from an optional YAML file.
//!
//! ```yaml
//! precision:
//!   type: fixed
//!   scale: 1000
//! wkt:
//!   pretty: true
//! wkb:
//!   format: postgis
//!   byte_order: be
//! gml:
//!   read:
//!     tuple_separator: " "
//!   write:
//!     use_coord: true
//!     prefix: gml
//! ```

use anyhow::Result;
use serde::Deserialize;
use sfkit_derive::context;
use sfkit_geometry::{
	GeometryFactory, PrecisionModel,
	gml::{GmlReaderOptions, GmlWriterOptions},
	wkb::WkbWriterOptions,
	wkt::WktWriter,
};
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Rounding applied to every coordinate read from input
	#[serde(default)]
	pub precision: PrecisionModel,

	#[serde(default)]
	pub wkt: WktWriter,

	#[serde(default)]
	pub wkb: WkbWriterOptions,

	#[serde(default)]
	pub gml: GmlConfig,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GmlConfig {
	#[serde(default)]
	pub read: GmlReaderOptions,

	#[serde(default)]
	pub write: GmlWriterOptions,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	#[context("while reading config file {path:?}")]
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path)?;
		Config::from_reader(BufReader::new(file))
	}

	/// The file at `path`, or the defaults when there is none.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		match path {
			Some(path) => Config::from_path(path),
			None => Ok(Config::default()),
		}
	}

	pub fn factory(&self) -> GeometryFactory {
		GeometryFactory {
			precision_model: self.precision,
			..GeometryFactory::default()
		}
	}
}
