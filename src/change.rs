//! What changed since the last known state of a client resource.
//!
//! The engine knows whether a resource is being created and which attributes differ from the
//! persisted state; [`ChangeSet`] carries exactly the parts of that knowledge the expanders
//! consult. Build one explicitly with [`ChangeSet::builder`] or derive it from a prior state
//! snapshot and the planned configuration with [`ChangeSet::between`].

// self
use crate::{
	api::Metadata,
	config::{AddonsConfig, ClientConfig},
};

/// Prior and new snapshots of the free-form metadata attribute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetadataChange {
	/// Metadata as last persisted.
	pub prior: Metadata,
	/// Metadata as planned.
	pub new: Metadata,
}
impl MetadataChange {
	/// Pairs two metadata snapshots.
	pub fn new(prior: Metadata, new: Metadata) -> Self {
		Self { prior, new }
	}

	/// Returns `true` when the snapshots differ.
	pub fn has_changed(&self) -> bool {
		self.prior != self.new
	}

	/// Keys present in the prior snapshot but missing from the new one.
	pub fn removed_keys(&self) -> impl Iterator<Item = &str> {
		removed_keys(&self.prior, &self.new)
	}
}

/// Change summary consulted while expanding a client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChangeSet {
	/// Whether the resource is being created rather than updated.
	pub is_new_resource: bool,
	/// Whether the `addons` attribute differs from the last known state.
	pub addons_changed: bool,
	/// Metadata snapshots used for deletion tracking.
	pub metadata: MetadataChange,
}
impl ChangeSet {
	/// Creates a new builder with every flag cleared.
	pub fn builder() -> ChangeSetBuilder {
		ChangeSetBuilder::default()
	}

	/// Derives the change summary from the last persisted state and the planned configuration.
	///
	/// A missing prior state marks the resource as new, and any declared `addons` block then
	/// counts as changed. Otherwise both `addons` blocks are compared in their
	/// [normalized](AddonsConfig::normalized) form, since a flattened state never keeps blank
	/// families. Absent metadata on either side counts as an empty map.
	pub fn between(prior: Option<&ClientConfig>, planned: &ClientConfig) -> Self {
		let addons_changed = match prior {
			None => planned.addons.is_some(),
			Some(state) => normalized_addons(state) != normalized_addons(planned),
		};
		let prior_metadata =
			prior.and_then(|state| state.client_metadata.clone()).unwrap_or_default();
		let new_metadata = planned.client_metadata.clone().unwrap_or_default();

		Self {
			is_new_resource: prior.is_none(),
			addons_changed,
			metadata: MetadataChange::new(prior_metadata, new_metadata),
		}
	}
}

/// Builder for [`ChangeSet`] values.
#[derive(Debug, Default)]
pub struct ChangeSetBuilder {
	is_new_resource: bool,
	addons_changed: bool,
	metadata: MetadataChange,
}
impl ChangeSetBuilder {
	/// Marks the resource as being created.
	pub fn new_resource(mut self, is_new_resource: bool) -> Self {
		self.is_new_resource = is_new_resource;

		self
	}

	/// Records whether the `addons` attribute changed.
	pub fn addons_changed(mut self, changed: bool) -> Self {
		self.addons_changed = changed;

		self
	}

	/// Sets the prior and new metadata snapshots.
	pub fn metadata(mut self, prior: Metadata, new: Metadata) -> Self {
		self.metadata = MetadataChange::new(prior, new);

		self
	}

	/// Consumes the builder.
	pub fn build(self) -> ChangeSet {
		ChangeSet {
			is_new_resource: self.is_new_resource,
			addons_changed: self.addons_changed,
			metadata: self.metadata,
		}
	}
}

fn normalized_addons(config: &ClientConfig) -> Option<AddonsConfig> {
	config.addons.as_ref().and_then(AddonsConfig::normalized)
}

pub(crate) fn removed_keys<'a>(
	prior: &'a Metadata,
	new: &'a Metadata,
) -> impl Iterator<Item = &'a str> {
	prior.keys().filter(|key| !new.contains_key(*key)).map(String::as_str)
}
