use super::{Envelope, GeometryFactory, GeometryProperties};
use std::sync::OnceLock;

/// State shared by every geometry variant: the factory it was built with, the
/// lazily computed envelope and the lazily created property bag.
#[derive(Clone, Default)]
pub struct GeometryAttributes {
	factory: GeometryFactory,
	envelope: OnceLock<Option<Envelope>>,
	properties: Option<GeometryProperties>,
}

impl GeometryAttributes {
	#[must_use]
	pub fn new(factory: GeometryFactory) -> Self {
		Self {
			factory,
			envelope: OnceLock::new(),
			properties: None,
		}
	}

	pub fn factory(&self) -> &GeometryFactory {
		&self.factory
	}

	pub fn set_factory(&mut self, factory: GeometryFactory) {
		self.factory = factory;
	}

	/// Returns the cached envelope, computing it on first access.
	pub fn envelope_or_compute(&self, compute: impl FnOnce() -> Option<Envelope>) -> Option<Envelope> {
		*self.envelope.get_or_init(compute)
	}

	pub fn is_envelope_cached(&self) -> bool {
		self.envelope.get().is_some()
	}

	/// Marks the cached envelope as stale.
	pub fn reset_envelope(&mut self) {
		self.envelope.take();
	}

	pub fn properties(&self) -> Option<&GeometryProperties> {
		self.properties.as_ref()
	}

	pub fn properties_mut(&mut self) -> &mut GeometryProperties {
		self.properties.get_or_insert_with(GeometryProperties::new)
	}
}
