//! Serde adapter for singleton nested blocks.
//!
//! The engine encodes a nested block as a list holding at most one element. Decoding accepts
//! that form as well as a bare object: `null`, a missing key and `[]` mean the block is absent,
//! `{..}` and `[{..}]` mean it is present. With more than one element the last one wins.
//! Encoding always produces the list form.

// crates.io
use serde::{Deserializer, Serializer};
// self
use crate::_prelude::*;

#[derive(Deserialize)]
#[serde(untagged)]
enum Slot<T> {
	List(Vec<T>),
	Block(T),
}

/// Encodes an optional block as a zero- or one-element list.
pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
	T: Serialize,
	S: Serializer,
{
	serializer.collect_seq(value.iter())
}

/// Decodes an optional block from its list or object form.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
	T: Deserialize<'de>,
	D: Deserializer<'de>,
{
	let block = match Option::<Slot<T>>::deserialize(deserializer)? {
		Some(Slot::List(blocks)) => blocks.into_iter().last(),
		Some(Slot::Block(block)) => Some(block),
		None => None,
	};

	Ok(block)
}
