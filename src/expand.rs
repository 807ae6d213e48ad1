//! Configuration-to-request expansion.
//!
//! [`expand_client`] copies every top-level attribute verbatim and hands grouped attributes to
//! the dedicated expanders in [`nested`], [`addons`] and [`metadata`]. Presence is preserved
//! end to end: an unset attribute yields an unset field, and a group that ends up with no value
//! at all is omitted instead of being sent as an empty object the API could read as "clear".

pub mod addons;
pub mod metadata;
pub mod nested;

pub use addons::*;
pub use metadata::*;
pub use nested::*;

// self
use crate::{
	api::{Blank, Client, OidcBackchannelLogout},
	change::ChangeSet,
	config::ClientConfig,
	obs::{self, ExpandGroup, ExpandSpan, GroupOutcome},
};

/// Builds the create/update payload for a client resource.
///
/// `changes.is_new_resource` gates immutable fields, `changes.addons_changed` gates the add-on
/// family, and `changes.metadata` supplies the snapshots used to mark deleted metadata keys.
pub fn expand_client(config: &ClientConfig, changes: &ChangeSet) -> Client {
	let _span = ExpandSpan::new(ExpandGroup::Client, "expand_client").entered();

	Client {
		name: config.name.clone(),
		description: config.description.clone(),
		app_type: config.app_type.clone(),
		logo_uri: config.logo_uri.clone(),
		is_first_party: config.is_first_party,
		is_token_endpoint_ip_header_trusted: config.is_token_endpoint_ip_header_trusted,
		oidc_conformant: config.oidc_conformant,
		client_aliases: config.client_aliases.clone(),
		callbacks: config.callbacks.clone(),
		allowed_logout_urls: config.allowed_logout_urls.clone(),
		allowed_origins: config.allowed_origins.clone(),
		allowed_clients: config.allowed_clients.clone(),
		grant_types: config.grant_types.clone(),
		organization_usage: config.organization_usage.clone(),
		organization_require_behavior: config.organization_require_behavior.clone(),
		web_origins: config.web_origins.clone(),
		sso: config.sso,
		sso_disabled: config.sso_disabled,
		cross_origin_auth: config.cross_origin_auth,
		cross_origin_loc: config.cross_origin_loc.clone(),
		custom_login_page_on: config.custom_login_page_on,
		custom_login_page: config.custom_login_page.clone(),
		form_template: config.form_template.clone(),
		token_endpoint_auth_method: config.token_endpoint_auth_method.clone(),
		initiate_login_uri: config.initiate_login_uri.clone(),
		encryption_key: config.encryption_key.clone(),
		oidc_backchannel_logout: expand_oidc_backchannel_logout(config),
		client_metadata: expand_client_metadata(
			changes.metadata.has_changed(),
			&changes.metadata.prior,
			&changes.metadata.new,
		),
		refresh_token: expand_refresh_token(config.refresh_token.as_ref()),
		jwt_configuration: expand_jwt_configuration(
			config.jwt_configuration.as_ref(),
			changes.is_new_resource,
		),
		addons: expand_addons(changes.addons_changed, config.addons.as_ref()),
		native_social_login: expand_native_social_login(config.native_social_login.as_ref()),
		mobile: expand_mobile(config.mobile.as_ref()),
	}
}

/// Wraps the back-channel logout URL list; present iff the list attribute is set.
pub fn expand_oidc_backchannel_logout(config: &ClientConfig) -> Option<OidcBackchannelLogout> {
	const GROUP: ExpandGroup = ExpandGroup::OidcBackchannelLogout;

	let Some(urls) = config.oidc_backchannel_logout_urls.as_ref() else {
		obs::observe_group(GROUP, GroupOutcome::Absent);

		return None;
	};

	obs::observe_group(GROUP, GroupOutcome::Sent);

	Some(OidcBackchannelLogout { backchannel_logout_urls: Some(urls.clone()) })
}

/// Records the outcome for an extracted group and drops it when it carries no value.
pub(crate) fn collapse<T>(group: ExpandGroup, value: T) -> Option<T>
where
	T: Blank,
{
	if value.is_blank() {
		obs::observe_group(group, GroupOutcome::Collapsed);

		None
	} else {
		obs::observe_group(group, GroupOutcome::Sent);

		Some(value)
	}
}

/// Records an absent group and passes the block through.
pub(crate) fn present<T>(group: ExpandGroup, block: Option<T>) -> Option<T> {
	if block.is_none() {
		obs::observe_group(group, GroupOutcome::Absent);
	}

	block
}
