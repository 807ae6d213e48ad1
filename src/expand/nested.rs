//! Expanders for singleton blocks: refresh token, JWT configuration, native social login and
//! mobile.
//!
//! Every expander follows the same steps: an absent block yields `None`, present sub-fields are
//! copied as-is, and a result with no value at all collapses back to `None`.

// self
use crate::{
	api::{
		ClientJwtConfiguration, ClientMobile, ClientMobileAndroid, ClientMobileIos,
		ClientNativeSocialLogin, ClientRefreshToken, NativeSocialLoginSupport,
	},
	config::{
		AndroidConfig, IosConfig, JwtConfig, MobileConfig, NativeSocialLoginConfig,
		RefreshTokenConfig, SupportEnabledConfig,
	},
	expand::{collapse, present},
	obs::ExpandGroup,
};

/// Expands the `refresh_token` block.
pub fn expand_refresh_token(config: Option<&RefreshTokenConfig>) -> Option<ClientRefreshToken> {
	const GROUP: ExpandGroup = ExpandGroup::RefreshToken;

	let config = present(GROUP, config)?;

	collapse(
		GROUP,
		ClientRefreshToken {
			rotation_type: config.rotation_type.clone(),
			expiration_type: config.expiration_type.clone(),
			leeway: config.leeway,
			token_lifetime: config.token_lifetime,
			infinite_token_lifetime: config.infinite_token_lifetime,
			infinite_idle_token_lifetime: config.infinite_idle_token_lifetime,
			idle_token_lifetime: config.idle_token_lifetime,
		},
	)
}

/// Expands the `jwt_configuration` block.
///
/// `secret_encoded` cannot be changed after creation, so it is only copied when
/// `is_new_resource` is set.
pub fn expand_jwt_configuration(
	config: Option<&JwtConfig>,
	is_new_resource: bool,
) -> Option<ClientJwtConfiguration> {
	const GROUP: ExpandGroup = ExpandGroup::JwtConfiguration;

	let config = present(GROUP, config)?;
	let secret_encoded = if is_new_resource { config.secret_encoded } else { None };

	collapse(
		GROUP,
		ClientJwtConfiguration {
			lifetime_in_seconds: config.lifetime_in_seconds,
			secret_encoded,
			scopes: config.scopes.clone(),
			alg: config.alg.clone(),
		},
	)
}

/// Expands the `native_social_login` block.
pub fn expand_native_social_login(
	config: Option<&NativeSocialLoginConfig>,
) -> Option<ClientNativeSocialLogin> {
	const GROUP: ExpandGroup = ExpandGroup::NativeSocialLogin;

	let config = present(GROUP, config)?;

	collapse(
		GROUP,
		ClientNativeSocialLogin {
			apple: expand_support_enabled(
				ExpandGroup::NativeSocialLoginApple,
				config.apple.as_ref(),
			),
			facebook: expand_support_enabled(
				ExpandGroup::NativeSocialLoginFacebook,
				config.facebook.as_ref(),
			),
		},
	)
}

fn expand_support_enabled(
	group: ExpandGroup,
	config: Option<&SupportEnabledConfig>,
) -> Option<NativeSocialLoginSupport> {
	let config = present(group, config)?;

	collapse(group, NativeSocialLoginSupport { enabled: config.enabled })
}

/// Expands the `mobile` block.
pub fn expand_mobile(config: Option<&MobileConfig>) -> Option<ClientMobile> {
	const GROUP: ExpandGroup = ExpandGroup::Mobile;

	let config = present(GROUP, config)?;

	collapse(
		GROUP,
		ClientMobile {
			android: expand_mobile_android(config.android.as_ref()),
			ios: expand_mobile_ios(config.ios.as_ref()),
		},
	)
}

fn expand_mobile_android(config: Option<&AndroidConfig>) -> Option<ClientMobileAndroid> {
	const GROUP: ExpandGroup = ExpandGroup::MobileAndroid;

	let config = present(GROUP, config)?;

	collapse(
		GROUP,
		ClientMobileAndroid {
			app_package_name: config.app_package_name.clone(),
			sha256_cert_fingerprints: config.sha256_cert_fingerprints.clone(),
		},
	)
}

fn expand_mobile_ios(config: Option<&IosConfig>) -> Option<ClientMobileIos> {
	const GROUP: ExpandGroup = ExpandGroup::MobileIos;

	let config = present(GROUP, config)?;

	collapse(
		GROUP,
		ClientMobileIos {
			team_id: config.team_id.clone(),
			app_bundle_identifier: config.app_bundle_identifier.clone(),
		},
	)
}
