use serde::Deserialize;
use std::fmt::Display;

/// Which ordinates the coordinates of a geometry carry.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateType {
	#[default]
	Xy,
	Xyz,
	Xym,
	Xyzm,
}

impl CoordinateType {
	#[must_use]
	pub fn from_flags(has_z: bool, has_m: bool) -> Self {
		match (has_z, has_m) {
			(false, false) => CoordinateType::Xy,
			(true, false) => CoordinateType::Xyz,
			(false, true) => CoordinateType::Xym,
			(true, true) => CoordinateType::Xyzm,
		}
	}

	/// Spatial dimension: 3 when `z` is present, else 2. The measure does not count.
	#[must_use]
	pub fn dimension(self) -> u8 {
		if self.has_z() { 3 } else { 2 }
	}

	#[must_use]
	pub fn has_z(self) -> bool {
		matches!(self, CoordinateType::Xyz | CoordinateType::Xyzm)
	}

	#[must_use]
	pub fn is_measured(self) -> bool {
		matches!(self, CoordinateType::Xym | CoordinateType::Xyzm)
	}

	/// Number of ordinates per coordinate.
	#[must_use]
	pub fn ordinate_count(self) -> usize {
		2 + usize::from(self.has_z()) + usize::from(self.is_measured())
	}
}

impl Display for CoordinateType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			CoordinateType::Xy => "XY",
			CoordinateType::Xyz => "XYZ",
			CoordinateType::Xym => "XYM",
			CoordinateType::Xyzm => "XYZM",
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(false, false, CoordinateType::Xy, 2, 2)]
	#[case(true, false, CoordinateType::Xyz, 3, 3)]
	#[case(false, true, CoordinateType::Xym, 2, 3)]
	#[case(true, true, CoordinateType::Xyzm, 3, 4)]
	fn flags(
		#[case] has_z: bool,
		#[case] has_m: bool,
		#[case] expected: CoordinateType,
		#[case] dimension: u8,
		#[case] ordinates: usize,
	) {
		let coordinate_type = CoordinateType::from_flags(has_z, has_m);
		assert_eq!(coordinate_type, expected);
		assert_eq!(coordinate_type.dimension(), dimension);
		assert_eq!(coordinate_type.ordinate_count(), ordinates);
		assert_eq!(coordinate_type.has_z(), has_z);
		assert_eq!(coordinate_type.is_measured(), has_m);
	}
}
