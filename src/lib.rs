//! Typed config-to-request mapping for OAuth/OIDC client resources: expand a declarative
//! configuration tree into the identity-management API's client object, flatten the API object
//! back into state, and detect when an update carries anything worth sending.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod change;
pub mod config;
pub mod error;
pub mod expand;
pub mod flatten;
pub mod obs;
pub mod secret;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
	};

	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;

	pub use crate::error::{Error, Result};
}

pub use api::Client;
pub use change::{ChangeSet, MetadataChange};
pub use config::ClientConfig;
pub use expand::expand_client;
pub use flatten::flatten_client;
#[cfg(test)] use color_eyre as _;
