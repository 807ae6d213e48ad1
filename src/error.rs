//! Error types for the decode and encode boundaries around the mapping layer.
//!
//! Expansion and flattening never fail; only turning JSON into a [`ClientConfig`] and a
//! [`Client`] back into JSON can.
//!
//! [`ClientConfig`]: crate::config::ClientConfig
//! [`Client`]: crate::api::Client

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Configuration JSON did not match the client schema.
	#[error("Client configuration is invalid at `{path}`.")]
	Decode {
		/// Attribute path reported by the decoder (`.` when the root itself is malformed).
		path: String,
		/// Underlying JSON failure.
		#[source]
		source: serde_json::Error,
	},
	/// A client object could not be rendered as JSON.
	#[error("Client object could not be encoded as JSON.")]
	Encode(#[from] serde_json::Error),
}
impl Error {
	/// Wraps a path-aware decode failure.
	pub fn decode(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Decode { path, source: e.into_inner() }
	}
}
impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::decode(e)
	}
}
