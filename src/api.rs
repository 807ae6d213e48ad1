//! Client object as exchanged with the identity-management API.
//!
//! Every field is optional and skipped when `None`, so a partially populated [`Client`] only
//! touches the remote attributes it names. Grouped settings (refresh token, JWT, add-ons, ...)
//! live in their own sub-objects; each implements [`Blank`] so expanders can tell an
//! all-unset group from one carrying at least one value.

/// Implements [`Blank`] by comparing against the all-`None` default.
macro_rules! impl_blank {
	($($ty:ty),+ $(,)?) => {
		$(
			impl $crate::api::Blank for $ty {
				fn is_blank(&self) -> bool {
					*self == Self::default()
				}
			}
		)+
	};
}

pub mod addons;
pub mod nested;

pub use addons::*;
pub use nested::*;

// self
use crate::_prelude::*;

/// Free-form client metadata. A `null` value asks the API to delete that key.
pub type Metadata = Map<String, Value>;

/// Reports whether an API sub-object carries no value at all.
pub trait Blank {
	/// Returns `true` when every field is unset.
	fn is_blank(&self) -> bool;
}

/// Client create/update payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
	/// Display name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Free-text description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Application type.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub app_type: Option<String>,
	/// URL of the application logo.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub logo_uri: Option<String>,
	/// Whether the client is first-party.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_first_party: Option<bool>,
	/// Whether the token endpoint trusts forwarded IP headers.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_token_endpoint_ip_header_trusted: Option<bool>,
	/// Whether the client follows strict OIDC conformance.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub oidc_conformant: Option<bool>,
	/// Alternative client identifiers.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_aliases: Option<Vec<String>>,
	/// Allowed callback URLs.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub callbacks: Option<Vec<String>>,
	/// Allowed post-logout redirect URLs.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub allowed_logout_urls: Option<Vec<String>>,
	/// Allowed CORS origins.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub allowed_origins: Option<Vec<String>>,
	/// Clients allowed to delegate to this one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub allowed_clients: Option<Vec<String>>,
	/// Enabled grant types.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub grant_types: Option<Vec<String>>,
	/// Organization usage policy.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub organization_usage: Option<String>,
	/// Behavior when an organization is required.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub organization_require_behavior: Option<String>,
	/// Allowed web origins.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub web_origins: Option<Vec<String>>,
	/// Whether SSO is handled by the identity provider.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sso: Option<bool>,
	/// Whether SSO is disabled.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sso_disabled: Option<bool>,
	/// Whether cross-origin authentication is allowed.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cross_origin_auth: Option<bool>,
	/// Cross-origin verification fallback location.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cross_origin_loc: Option<String>,
	/// Whether the custom login page is enabled.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub custom_login_page_on: Option<bool>,
	/// Custom login page HTML.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub custom_login_page: Option<String>,
	/// Form template used for WS-Federation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub form_template: Option<String>,
	/// Token endpoint authentication method.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token_endpoint_auth_method: Option<String>,
	/// Third-party login initiation URI.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub initiate_login_uri: Option<String>,
	/// Encryption key settings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub encryption_key: Option<BTreeMap<String, String>>,
	/// OIDC back-channel logout settings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub oidc_backchannel_logout: Option<OidcBackchannelLogout>,
	/// Free-form metadata, including `null` deletion markers.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_metadata: Option<Metadata>,
	/// Refresh token policy.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<ClientRefreshToken>,
	/// JWT signing configuration.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jwt_configuration: Option<ClientJwtConfiguration>,
	/// Third-party integration add-ons.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub addons: Option<ClientAddons>,
	/// Native social login toggles.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub native_social_login: Option<ClientNativeSocialLogin>,
	/// Mobile platform settings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mobile: Option<ClientMobile>,
}
impl Client {
	/// Renders the payload exactly as it would be sent.
	pub fn to_json_value(&self) -> Result<Value> {
		Ok(serde_json::to_value(self)?)
	}

	/// Returns `true` when the payload serializes to anything other than `{}`.
	///
	/// Callers use this to skip update calls that would not change the remote client.
	pub fn has_meaningful_change(&self) -> Result<bool> {
		Ok(self.to_json_value()? != Value::Object(Map::new()))
	}
}
impl Display for Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;

		f.write_str(&json)
	}
}
