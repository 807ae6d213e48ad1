//! Singleton blocks nested directly under the client: refresh token, JWT, native social login
//! and mobile settings.

// self
use crate::_prelude::*;

/// `refresh_token` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshTokenConfig {
	/// `rotating` or `non-rotating`.
	pub rotation_type: Option<String>,
	/// `expiring` or `non-expiring`.
	pub expiration_type: Option<String>,
	/// Reuse grace period in seconds.
	pub leeway: Option<i64>,
	/// Absolute lifetime in seconds.
	pub token_lifetime: Option<i64>,
	/// Whether the absolute lifetime is unlimited.
	pub infinite_token_lifetime: Option<bool>,
	/// Whether the idle lifetime is unlimited.
	pub infinite_idle_token_lifetime: Option<bool>,
	/// Idle lifetime in seconds.
	pub idle_token_lifetime: Option<i64>,
}

/// `jwt_configuration` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
	/// Token lifetime in seconds.
	pub lifetime_in_seconds: Option<i64>,
	/// Whether the client secret is base64-encoded. Only honored on creation.
	pub secret_encoded: Option<bool>,
	/// Scope-to-claim settings.
	pub scopes: Option<BTreeMap<String, String>>,
	/// Signing algorithm.
	pub alg: Option<String>,
}

/// `native_social_login` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeSocialLoginConfig {
	/// Sign in with Apple.
	#[serde(with = "crate::config::block")]
	pub apple: Option<SupportEnabledConfig>,
	/// Facebook native login.
	#[serde(with = "crate::config::block")]
	pub facebook: Option<SupportEnabledConfig>,
}

/// Single `enabled` toggle used by each native social login provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportEnabledConfig {
	/// Whether the provider is enabled.
	pub enabled: Option<bool>,
}

/// `mobile` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileConfig {
	/// Android settings.
	#[serde(with = "crate::config::block")]
	pub android: Option<AndroidConfig>,
	/// iOS settings.
	#[serde(with = "crate::config::block")]
	pub ios: Option<IosConfig>,
}

/// `mobile.android` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidConfig {
	/// Application package name.
	pub app_package_name: Option<String>,
	/// SHA-256 signing certificate fingerprints.
	pub sha256_cert_fingerprints: Option<Vec<String>>,
}

/// `mobile.ios` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IosConfig {
	/// Apple team identifier.
	pub team_id: Option<String>,
	/// Application bundle identifier.
	pub app_bundle_identifier: Option<String>,
}
