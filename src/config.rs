//! Declarative configuration tree for a single client resource.
//!
//! [`ClientConfig`] is the statically-typed view of what the user wrote. Every attribute is an
//! [`Option`]: `None` means the attribute was never set, which is distinct from an explicit empty
//! string, list, map, or block. Nested blocks are decoded through [`block`], which understands the
//! engine's one-element-list encoding.

pub mod addons;
pub mod block;
pub mod nested;

pub use addons::*;
pub use nested::*;

// self
use crate::{_prelude::*, api::Metadata};

/// User-declared configuration of a client resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// Display name.
	pub name: Option<String>,
	/// Free-text description.
	pub description: Option<String>,
	/// Application type (`native`, `spa`, `regular_web`, `non_interactive`, ...).
	pub app_type: Option<String>,
	/// URL of the application logo.
	pub logo_uri: Option<String>,
	/// Whether the client is first-party.
	pub is_first_party: Option<bool>,
	/// Whether the token endpoint trusts forwarded IP headers.
	pub is_token_endpoint_ip_header_trusted: Option<bool>,
	/// Whether the client follows strict OIDC conformance.
	pub oidc_conformant: Option<bool>,
	/// Alternative client identifiers.
	pub client_aliases: Option<Vec<String>>,
	/// Allowed callback URLs.
	pub callbacks: Option<Vec<String>>,
	/// Allowed post-logout redirect URLs.
	pub allowed_logout_urls: Option<Vec<String>>,
	/// Allowed CORS origins.
	pub allowed_origins: Option<Vec<String>>,
	/// Clients allowed to delegate to this one.
	pub allowed_clients: Option<Vec<String>>,
	/// Enabled grant types.
	pub grant_types: Option<Vec<String>>,
	/// Organization usage policy.
	pub organization_usage: Option<String>,
	/// Behavior when an organization is required.
	pub organization_require_behavior: Option<String>,
	/// Allowed web origins.
	pub web_origins: Option<Vec<String>>,
	/// Whether SSO is handled by the identity provider.
	pub sso: Option<bool>,
	/// Whether SSO is disabled.
	pub sso_disabled: Option<bool>,
	/// Whether cross-origin authentication is allowed.
	pub cross_origin_auth: Option<bool>,
	/// Cross-origin verification fallback location.
	pub cross_origin_loc: Option<String>,
	/// Whether the custom login page is enabled.
	pub custom_login_page_on: Option<bool>,
	/// Custom login page HTML.
	pub custom_login_page: Option<String>,
	/// Form template used for WS-Federation.
	pub form_template: Option<String>,
	/// Token endpoint authentication method.
	pub token_endpoint_auth_method: Option<String>,
	/// Third-party login initiation URI.
	pub initiate_login_uri: Option<String>,
	/// Encryption key settings.
	pub encryption_key: Option<BTreeMap<String, String>>,
	/// OIDC back-channel logout URLs.
	pub oidc_backchannel_logout_urls: Option<Vec<String>>,
	/// Free-form metadata as recorded in state.
	///
	/// Expansion reads metadata from the [`ChangeSet`](crate::change::ChangeSet), not from here;
	/// this attribute exists so a flattened state and a planned config carry the snapshots that
	/// [`ChangeSet::between`](crate::change::ChangeSet::between) compares.
	pub client_metadata: Option<Metadata>,
	/// Refresh token policy.
	#[serde(with = "block")]
	pub refresh_token: Option<RefreshTokenConfig>,
	/// JWT signing configuration.
	#[serde(with = "block")]
	pub jwt_configuration: Option<JwtConfig>,
	/// Third-party integration add-ons.
	#[serde(with = "block")]
	pub addons: Option<AddonsConfig>,
	/// Native social login toggles.
	#[serde(with = "block")]
	pub native_social_login: Option<NativeSocialLoginConfig>,
	/// Mobile platform settings.
	#[serde(with = "block")]
	pub mobile: Option<MobileConfig>,
}
impl ClientConfig {
	/// Decodes a configuration tree from JSON text, reporting the failing attribute path.
	pub fn from_json_str(json: &str) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_str(json);
		let config = serde_path_to_error::deserialize(&mut de)?;

		de.end().map_err(|source| Error::Decode { path: ".".into(), source })?;

		Ok(config)
	}

	/// Decodes a configuration tree from an already-parsed JSON value.
	pub fn from_json_value(value: Value) -> Result<Self> {
		Ok(serde_path_to_error::deserialize(value)?)
	}
}
