//! Rounding policy applied to ingested coordinates and to number formatting.

use super::Coordinate;
use serde::Deserialize;

/// Either full double precision or a fixed grid of `1 / scale`.
///
/// ```
/// use sfkit_geometry::PrecisionModel;
///
/// let model = PrecisionModel::Fixed { scale: 100.0 };
/// assert_eq!(model.make_precise(1.23456), 1.23);
/// assert_eq!(model.maximum_significant_digits(), 3);
/// assert_eq!(model.format_number(2.5), "2.5");
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PrecisionModel {
	#[default]
	Floating,
	Fixed {
		scale: f64,
	},
}

impl PrecisionModel {
	#[must_use]
	pub fn fixed(scale: f64) -> Self {
		PrecisionModel::Fixed { scale }
	}

	#[must_use]
	pub fn is_floating(&self) -> bool {
		matches!(self, PrecisionModel::Floating)
	}

	/// Snaps a value to the model's grid.
	#[must_use]
	pub fn make_precise(&self, value: f64) -> f64 {
		match self {
			PrecisionModel::Floating => value,
			PrecisionModel::Fixed { scale } => {
				if value.is_finite() {
					(value * scale).round() / scale
				} else {
					value
				}
			}
		}
	}

	/// Snaps `x` and `y`; `z` and `m` are kept as they are.
	pub fn make_precise_coordinate(&self, coordinate: &mut Coordinate) {
		coordinate.x = self.make_precise(coordinate.x);
		coordinate.y = self.make_precise(coordinate.y);
	}

	/// Number of decimal places the text writers may emit.
	#[must_use]
	pub fn maximum_significant_digits(&self) -> usize {
		match self {
			PrecisionModel::Floating => 16,
			PrecisionModel::Fixed { scale } => {
				let digits = 1.0 + scale.log10().ceil();
				if digits.is_finite() && digits > 0.0 {
					digits as usize
				} else {
					0
				}
			}
		}
	}

	/// Formats a number for WKT and GML output.
	///
	/// Scientific notation is never used and trailing zeros are trimmed. A floating
	/// model prints the shortest representation that reads back to the same value.
	#[must_use]
	pub fn format_number(&self, value: f64) -> String {
		if value == 0.0 {
			return String::from("0");
		}
		match self {
			PrecisionModel::Floating => format!("{value}"),
			PrecisionModel::Fixed { .. } => {
				let text = format!("{:.*}", self.maximum_significant_digits(), value);
				let text = if text.contains('.') {
					text.trim_end_matches('0').trim_end_matches('.')
				} else {
					text.as_str()
				};
				if text == "-0" { String::from("0") } else { text.to_string() }
			}
		}
	}
}
