//! Grouped client settings: back-channel logout, refresh token, JWT, native social login and
//! mobile.

// self
use crate::_prelude::*;

/// OIDC back-channel logout settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OidcBackchannelLogout {
	/// Logout notification endpoints.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub backchannel_logout_urls: Option<Vec<String>>,
}

/// Refresh token policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRefreshToken {
	/// `rotating` or `non-rotating`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rotation_type: Option<String>,
	/// `expiring` or `non-expiring`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expiration_type: Option<String>,
	/// Reuse grace period in seconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub leeway: Option<i64>,
	/// Absolute lifetime in seconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token_lifetime: Option<i64>,
	/// Whether the absolute lifetime is unlimited.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub infinite_token_lifetime: Option<bool>,
	/// Whether the idle lifetime is unlimited.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub infinite_idle_token_lifetime: Option<bool>,
	/// Idle lifetime in seconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub idle_token_lifetime: Option<i64>,
}

/// JWT signing configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientJwtConfiguration {
	/// Token lifetime in seconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub lifetime_in_seconds: Option<i64>,
	/// Whether the client secret is base64-encoded. Immutable after creation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secret_encoded: Option<bool>,
	/// Scope-to-claim settings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scopes: Option<BTreeMap<String, String>>,
	/// Signing algorithm.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub alg: Option<String>,
}

/// Native social login toggles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientNativeSocialLogin {
	/// Sign in with Apple.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub apple: Option<NativeSocialLoginSupport>,
	/// Facebook native login.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub facebook: Option<NativeSocialLoginSupport>,
}

/// Per-provider native social login toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeSocialLoginSupport {
	/// Whether the provider is enabled.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub enabled: Option<bool>,
}

/// Mobile platform settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMobile {
	/// Android settings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub android: Option<ClientMobileAndroid>,
	/// iOS settings.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ios: Option<ClientMobileIos>,
}

/// Android settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMobileAndroid {
	/// Application package name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub app_package_name: Option<String>,
	/// SHA-256 signing certificate fingerprints.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sha256_cert_fingerprints: Option<Vec<String>>,
}

/// iOS settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMobileIos {
	/// Apple team identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub team_id: Option<String>,
	/// Application bundle identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub app_bundle_identifier: Option<String>,
}

impl_blank!(
	OidcBackchannelLogout,
	ClientRefreshToken,
	ClientJwtConfiguration,
	ClientNativeSocialLogin,
	NativeSocialLoginSupport,
	ClientMobile,
	ClientMobileAndroid,
	ClientMobileIos,
);

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::api::Blank;

	#[test]
	fn zero_values_are_not_blank() {
		assert!(ClientRefreshToken::default().is_blank());
		assert!(!ClientRefreshToken { leeway: Some(0), ..Default::default() }.is_blank());
		assert!(
			!NativeSocialLoginSupport { enabled: Some(false) }.is_blank(),
			"An explicit false is still a value."
		);
	}

	#[test]
	fn nested_blank_children_keep_parent_non_blank() {
		let mobile = ClientMobile { android: Some(ClientMobileAndroid::default()), ios: None };

		assert!(!mobile.is_blank());
	}
}
