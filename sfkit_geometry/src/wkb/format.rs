use crate::{Geometry, GeometryTrait};
use anyhow::{Result, bail};
use serde::Deserialize;
use std::fmt::Display;

/// Type-word flag: coordinates carry `z`.
pub const WKB_Z_FLAG: u32 = 0x8000_0000;
/// Type-word flag: coordinates carry a measure.
pub const WKB_M_FLAG: u32 = 0x4000_0000;
/// Type-word flag: a 4-byte SRID follows the type word.
pub const WKB_SRID_FLAG: u32 = 0x2000_0000;

/// The WKB dialects.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WkbFormat {
	/// OGC type codes 1-7, always two ordinates; `z` and `m` are dropped.
	Standard,
	/// Sets [`WKB_Z_FLAG`] for 3D geometries and writes `z`. No SRID.
	Proposed,
	/// PostGIS extended WKB with [`WKB_Z_FLAG`], [`WKB_M_FLAG`] and [`WKB_SRID_FLAG`].
	#[serde(rename = "postgis")]
	PostGis,
	/// Placeholder for application-specific encodings; writing always fails.
	Custom,
}

impl WkbFormat {
	/// Picks a dialect that can hold everything the geometry carries:
	/// measured or with a positive SRID → PostGIS, 3D → Proposed, otherwise Standard.
	pub fn detect(geometry: &Geometry) -> Self {
		let coordinate_type = geometry.coordinate_type();
		if coordinate_type.is_measured() || geometry.srid() > Some(0) {
			WkbFormat::PostGis
		} else if coordinate_type.has_z() {
			WkbFormat::Proposed
		} else {
			WkbFormat::Standard
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			WkbFormat::Standard => "WKB Standard",
			WkbFormat::Proposed => "WKB Proposed",
			WkbFormat::PostGis => "WKB PostGIS",
			WkbFormat::Custom => "WKB Custom",
		}
	}

	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.to_ascii_lowercase().as_str() {
			"standard" | "ogc" => WkbFormat::Standard,
			"proposed" => WkbFormat::Proposed,
			"postgis" | "ewkb" => WkbFormat::PostGis,
			"custom" => WkbFormat::Custom,
			_ => bail!("unknown WKB format '{value}', expected 'standard', 'proposed' or 'postgis'"),
		})
	}
}

impl Display for WkbFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
