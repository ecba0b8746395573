//! Reading and writing geometry files in the supported text and binary formats.

use crate::config::Config;
use anyhow::{Context, Result, bail, ensure};
use lazy_static::lazy_static;
use regex::Regex;
use sfkit_geometry::{
	Geometry,
	gml::{GmlReader, GmlWriter},
	wkb::{WkbReader, WkbWriter},
	wkt::WktReader,
};
use std::{
	fs,
	io::{self, Read, Write},
	path::Path,
};

lazy_static! {
	static ref HEX_CONTENT: Regex = Regex::new(r"^[0-9A-Fa-f\s]+$").unwrap();
	static ref WKT_CONTENT: Regex = Regex::new(r"^\s*(SRID=-?\d+;\s*)?[A-Za-z]+\s*[(\s]").unwrap();
}

/// A geometry file format.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
	/// Well-Known Text
	Wkt,
	/// Well-Known Binary
	Wkb,
	/// Well-Known Binary as hexadecimal text, one geometry per line
	WkbHex,
	/// GML 2
	Gml,
}

impl Format {
	pub fn from_extension(path: &str) -> Option<Self> {
		let extension = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
		Some(match extension.as_str() {
			"wkt" => Format::Wkt,
			"wkb" => Format::Wkb,
			"hex" => Format::WkbHex,
			"gml" | "xml" => Format::Gml,
			_ => return None,
		})
	}

	/// Guesses the format from the first bytes of the content.
	pub fn sniff(content: &[u8]) -> Self {
		let Ok(text) = std::str::from_utf8(content) else {
			return Format::Wkb;
		};
		if text.trim_start().starts_with('<') {
			Format::Gml
		} else if HEX_CONTENT.is_match(text) {
			Format::WkbHex
		} else if WKT_CONTENT.is_match(text) {
			Format::Wkt
		} else {
			Format::Wkb
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Format::Wkt => "WKT",
			Format::Wkb => "WKB",
			Format::WkbHex => "hex WKB",
			Format::Gml => "GML",
		}
	}
}

/// Reads `path` (`-` for stdin). The format is `format`, else taken from the
/// file extension, else guessed from the content.
pub fn read_geometries(path: &str, format: Option<Format>, config: &Config) -> Result<Vec<Geometry>> {
	let content = if path == "-" {
		let mut buffer = Vec::new();
		io::stdin().read_to_end(&mut buffer).context("while reading stdin")?;
		buffer
	} else {
		fs::read(path).with_context(|| format!("while reading {path:?}"))?
	};

	let format = format
		.or_else(|| Format::from_extension(path))
		.unwrap_or_else(|| Format::sniff(&content));
	log::debug!("reading {} bytes of {} from {path:?}", content.len(), format.name());

	parse_geometries(&content, format, config).with_context(|| format!("while reading {} from {path:?}", format.name()))
}

pub fn parse_geometries(content: &[u8], format: Format, config: &Config) -> Result<Vec<Geometry>> {
	let factory = config.factory();
	match format {
		Format::Wkb => Ok(vec![WkbReader::new(factory).read(content)?]),
		Format::Wkt => {
			let reader = WktReader::new(factory);
			split_wkt(std::str::from_utf8(content)?)
				.into_iter()
				.map(|text| reader.read(text))
				.collect()
		}
		Format::WkbHex => {
			let reader = WkbReader::new(factory);
			std::str::from_utf8(content)?
				.lines()
				.map(str::trim)
				.filter(|line| !line.is_empty())
				.map(|line| reader.read_hex(line))
				.collect()
		}
		Format::Gml => {
			let text = std::str::from_utf8(content)?;
			GmlReader::new(factory, config.gml.read.clone()).read_all(text)
		}
	}
}

/// Splits text into geometries at line breaks outside of parentheses.
fn split_wkt(text: &str) -> Vec<&str> {
	let mut parts = Vec::new();
	let mut depth = 0_i32;
	let mut start = 0;
	for (index, c) in text.char_indices() {
		match c {
			'(' => depth += 1,
			')' => depth -= 1,
			'\n' if depth <= 0 => {
				parts.push(&text[start..index]);
				start = index + 1;
			}
			_ => {}
		}
	}
	parts.push(&text[start..]);
	parts.into_iter().map(str::trim).filter(|part| !part.is_empty()).collect()
}

/// Encodes all geometries. Text formats end every geometry with a line break; binary WKB holds exactly one.
pub fn encode_geometries(geometries: &[Geometry], format: Format, config: &Config) -> Result<Vec<u8>> {
	let mut text = String::new();
	match format {
		Format::Wkb => {
			ensure!(
				geometries.len() == 1,
				"binary WKB holds exactly one geometry, but there are {}",
				geometries.len()
			);
			return Ok(WkbWriter::new(config.wkb).write(&geometries[0])?.into_vec());
		}
		Format::Wkt => {
			for geometry in geometries {
				text.push_str(&config.wkt.write(geometry)?);
				text.push('\n');
			}
		}
		Format::WkbHex => {
			let writer = WkbWriter::new(config.wkb);
			for geometry in geometries {
				text.push_str(&writer.write_hex(geometry)?);
				text.push('\n');
			}
		}
		Format::Gml => {
			let writer = GmlWriter::new(config.gml.write.clone());
			for geometry in geometries {
				text.push_str(&writer.write(geometry)?);
				text.push('\n');
			}
		}
	}
	Ok(text.into_bytes())
}

/// Writes to `path`, or to stdout when it is `-`.
pub fn write_output(path: &str, content: &[u8]) -> Result<()> {
	if path == "-" {
		let mut stdout = io::stdout().lock();
		stdout.write_all(content)?;
		stdout.flush()?;
	} else {
		fs::write(path, content).with_context(|| format!("while writing {path:?}"))?;
	}
	Ok(())
}

/// The output format: `format`, else the extension of `path`, else WKT.
pub fn output_format(path: &str, format: Option<Format>) -> Result<Format> {
	if let Some(format) = format {
		return Ok(format);
	}
	if path == "-" {
		return Ok(Format::Wkt);
	}
	match Format::from_extension(path) {
		Some(format) => Ok(format),
		None => bail!("cannot tell the output format from {path:?}, use --to"),
	}
}
