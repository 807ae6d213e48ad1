//! Free-form metadata expander.
//!
//! The API merges metadata: a key left out of the request is kept as-is remotely. Deleting a
//! key therefore requires sending it explicitly with a `null` value.

// self
use crate::{
	_prelude::*,
	api::Metadata,
	change,
	obs::{self, ExpandGroup, GroupOutcome},
};

/// Builds the metadata payload, marking keys dropped since `prior` with `null`.
///
/// Returns `None` when the attribute did not change or when the result would be empty.
pub fn expand_client_metadata(
	has_changed: bool,
	prior: &Metadata,
	new: &Metadata,
) -> Option<Metadata> {
	const GROUP: ExpandGroup = ExpandGroup::ClientMetadata;

	if !has_changed {
		obs::observe_group(GROUP, GroupOutcome::Unchanged);

		return None;
	}

	let mut metadata = new.clone();

	for key in change::removed_keys(prior, new) {
		metadata.insert(key.to_owned(), Value::Null);
	}

	if metadata.is_empty() {
		obs::observe_group(GROUP, GroupOutcome::Collapsed);

		return None;
	}

	obs::observe_group(GROUP, GroupOutcome::Sent);

	Some(metadata)
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn metadata(value: Value) -> Metadata {
		match value {
			Value::Object(map) => map,
			other => panic!("Metadata fixture must be an object, got {other}."),
		}
	}

	#[test]
	fn removed_keys_become_null() {
		let prior = metadata(json!({ "a": "1", "b": "2" }));
		let new = metadata(json!({ "a": "1" }));
		let expanded = expand_client_metadata(true, &prior, &new)
			.expect("Changed metadata should be sent.");

		assert_eq!(Value::Object(expanded), json!({ "a": "1", "b": null }));
	}

	#[test]
	fn unchanged_metadata_is_skipped() {
		let prior = metadata(json!({ "a": "1" }));

		assert_eq!(expand_client_metadata(false, &prior, &Metadata::new()), None);
	}

	#[test]
	fn clearing_everything_sends_only_tombstones() {
		let prior = metadata(json!({ "a": "1", "b": "2" }));
		let expanded = expand_client_metadata(true, &prior, &Metadata::new())
			.expect("Deleting keys should be sent.");

		assert_eq!(Value::Object(expanded), json!({ "a": null, "b": null }));
	}

	#[test]
	fn empty_result_collapses() {
		assert_eq!(expand_client_metadata(true, &Metadata::new(), &Metadata::new()), None);
	}

	#[test]
	fn new_values_override_prior_ones() {
		let prior = metadata(json!({ "a": "1" }));
		let new = metadata(json!({ "a": "2", "c": "3" }));
		let expanded = expand_client_metadata(true, &prior, &new)
			.expect("Changed metadata should be sent.");

		assert_eq!(Value::Object(expanded), json!({ "a": "2", "c": "3" }));
	}
}
