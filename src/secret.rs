//! Credential strings carried by the Azure and Firebase add-ons.

// self
use crate::_prelude::*;

/// Add-on credential (storage keys, SAS keys, Firebase keys).
///
/// On the wire it is a plain JSON string. `Debug` and `Display` print `<redacted>` so that a
/// logged [`Client`](crate::api::Client) never contains key material.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret(String);
impl Secret {
	/// Wraps a credential.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Borrows the raw credential.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Secret").field(&"<redacted>").finish()
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
