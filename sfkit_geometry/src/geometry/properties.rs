use std::{
	collections::{BTreeMap, btree_map},
	fmt::{Debug, Display},
};

/// Property key holding the spatial reference identifier.
pub const SRID_KEY: &str = "SRID";
/// Property key holding the feature identifier read from GML `gid` attributes.
pub const GID_KEY: &str = "GID";

#[derive(Clone, PartialEq)]
pub enum PropertyValue {
	Int(i64),
	Double(f64),
	String(String),
	Bool(bool),
}

impl PropertyValue {
	pub fn as_int(&self) -> Option<i64> {
		match self {
			PropertyValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			PropertyValue::String(v) => Some(v),
			_ => None,
		}
	}
}

impl From<i64> for PropertyValue {
	fn from(value: i64) -> Self {
		PropertyValue::Int(value)
	}
}

impl From<i32> for PropertyValue {
	fn from(value: i32) -> Self {
		PropertyValue::Int(i64::from(value))
	}
}

impl From<f64> for PropertyValue {
	fn from(value: f64) -> Self {
		PropertyValue::Double(value)
	}
}

impl From<&str> for PropertyValue {
	fn from(value: &str) -> Self {
		PropertyValue::String(value.to_string())
	}
}

impl From<String> for PropertyValue {
	fn from(value: String) -> Self {
		PropertyValue::String(value)
	}
}

impl From<bool> for PropertyValue {
	fn from(value: bool) -> Self {
		PropertyValue::Bool(value)
	}
}

impl Display for PropertyValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			PropertyValue::Int(v) => write!(f, "{v}"),
			PropertyValue::Double(v) => write!(f, "{v}"),
			PropertyValue::String(v) => write!(f, "{v}"),
			PropertyValue::Bool(v) => write!(f, "{v}"),
		}
	}
}

impl Debug for PropertyValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			PropertyValue::String(v) => write!(f, "{v:?}"),
			_ => write!(f, "{self}"),
		}
	}
}

/// Key/value bag attached to a geometry.
#[derive(Clone, Default, PartialEq)]
pub struct GeometryProperties {
	properties: BTreeMap<String, PropertyValue>,
}

impl GeometryProperties {
	pub fn new() -> GeometryProperties {
		GeometryProperties::default()
	}
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
		self.properties.insert(key.into(), value.into());
	}
	pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
		self.properties.remove(key)
	}
	pub fn get(&self, key: &str) -> Option<&PropertyValue> {
		self.properties.get(key)
	}
	pub fn contains_key(&self, key: &str) -> bool {
		self.properties.contains_key(key)
	}
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, PropertyValue> {
		self.properties.iter()
	}
}

impl Debug for GeometryProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
