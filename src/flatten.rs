//! API-to-state flattening, the inverse direction of [`expand`](crate::expand).
//!
//! The result has the shape of a [`ClientConfig`] so the engine can persist it as state. Any
//! grouped sub-object without a value, including the empty add-on objects the API echoes back,
//! flattens to an absent block, matching a configuration that never declared it.

// self
use crate::{
	api::{
		Blank, Client, ClientAddons, ClientJwtConfiguration, ClientMobile,
		ClientNativeSocialLogin, ClientRefreshToken, Metadata, NativeSocialLoginSupport,
	},
	config::{
		AddonsConfig, AndroidConfig, AwsAddonConfig, AzureBlobAddonConfig, AzureSbAddonConfig,
		ClientConfig, DomainAddonConfig, FirebaseAddonConfig, IosConfig, JwtConfig, MobileConfig,
		NativeSocialLoginConfig, NewRelicAddonConfig, Office365AddonConfig, RefreshTokenConfig,
		SentryAddonConfig, SlackAddonConfig, SupportEnabledConfig, UrlAddonConfig,
	},
	obs::{ExpandGroup, ExpandSpan},
};

/// Maps a client object returned by the API back into configuration shape.
pub fn flatten_client(client: &Client) -> ClientConfig {
	let _span = ExpandSpan::new(ExpandGroup::Client, "flatten_client").entered();

	ClientConfig {
		name: client.name.clone(),
		description: client.description.clone(),
		app_type: client.app_type.clone(),
		logo_uri: client.logo_uri.clone(),
		is_first_party: client.is_first_party,
		is_token_endpoint_ip_header_trusted: client.is_token_endpoint_ip_header_trusted,
		oidc_conformant: client.oidc_conformant,
		client_aliases: client.client_aliases.clone(),
		callbacks: client.callbacks.clone(),
		allowed_logout_urls: client.allowed_logout_urls.clone(),
		allowed_origins: client.allowed_origins.clone(),
		allowed_clients: client.allowed_clients.clone(),
		grant_types: client.grant_types.clone(),
		organization_usage: client.organization_usage.clone(),
		organization_require_behavior: client.organization_require_behavior.clone(),
		web_origins: client.web_origins.clone(),
		sso: client.sso,
		sso_disabled: client.sso_disabled,
		cross_origin_auth: client.cross_origin_auth,
		cross_origin_loc: client.cross_origin_loc.clone(),
		custom_login_page_on: client.custom_login_page_on,
		custom_login_page: client.custom_login_page.clone(),
		form_template: client.form_template.clone(),
		token_endpoint_auth_method: client.token_endpoint_auth_method.clone(),
		initiate_login_uri: client.initiate_login_uri.clone(),
		encryption_key: client.encryption_key.clone(),
		oidc_backchannel_logout_urls: client
			.oidc_backchannel_logout
			.as_ref()
			.and_then(|logout| logout.backchannel_logout_urls.clone()),
		client_metadata: client.client_metadata.as_ref().map(flatten_client_metadata),
		refresh_token: non_blank(client.refresh_token.as_ref()).map(flatten_refresh_token),
		jwt_configuration: non_blank(client.jwt_configuration.as_ref())
			.map(flatten_jwt_configuration),
		addons: non_blank(client.addons.as_ref()).and_then(flatten_addons),
		native_social_login: client
			.native_social_login
			.as_ref()
			.and_then(flatten_native_social_login),
		mobile: client.mobile.as_ref().and_then(flatten_mobile),
	}
}

fn non_blank<T>(value: Option<&T>) -> Option<&T>
where
	T: Blank,
{
	value.filter(|value| !value.is_blank())
}

// Deletion markers only mean something in a request.
fn flatten_client_metadata(metadata: &Metadata) -> Metadata {
	metadata
		.iter()
		.filter(|(_, value)| !value.is_null())
		.map(|(key, value)| (key.clone(), value.clone()))
		.collect()
}

fn flatten_refresh_token(refresh_token: &ClientRefreshToken) -> RefreshTokenConfig {
	RefreshTokenConfig {
		rotation_type: refresh_token.rotation_type.clone(),
		expiration_type: refresh_token.expiration_type.clone(),
		leeway: refresh_token.leeway,
		token_lifetime: refresh_token.token_lifetime,
		infinite_token_lifetime: refresh_token.infinite_token_lifetime,
		infinite_idle_token_lifetime: refresh_token.infinite_idle_token_lifetime,
		idle_token_lifetime: refresh_token.idle_token_lifetime,
	}
}

fn flatten_jwt_configuration(jwt: &ClientJwtConfiguration) -> JwtConfig {
	JwtConfig {
		lifetime_in_seconds: jwt.lifetime_in_seconds,
		secret_encoded: jwt.secret_encoded,
		scopes: jwt.scopes.clone(),
		alg: jwt.alg.clone(),
	}
}

fn flatten_native_social_login(
	native_social_login: &ClientNativeSocialLogin,
) -> Option<NativeSocialLoginConfig> {
	let support = |support: &NativeSocialLoginSupport| SupportEnabledConfig {
		enabled: support.enabled,
	};
	let config = NativeSocialLoginConfig {
		apple: non_blank(native_social_login.apple.as_ref()).map(support),
		facebook: non_blank(native_social_login.facebook.as_ref()).map(support),
	};

	(config != NativeSocialLoginConfig::default()).then_some(config)
}

fn flatten_mobile(mobile: &ClientMobile) -> Option<MobileConfig> {
	let config = MobileConfig {
		android: non_blank(mobile.android.as_ref()).map(|android| AndroidConfig {
			app_package_name: android.app_package_name.clone(),
			sha256_cert_fingerprints: android.sha256_cert_fingerprints.clone(),
		}),
		ios: non_blank(mobile.ios.as_ref()).map(|ios| IosConfig {
			team_id: ios.team_id.clone(),
			app_bundle_identifier: ios.app_bundle_identifier.clone(),
		}),
	};

	(config != MobileConfig::default()).then_some(config)
}

fn flatten_addons(addons: &ClientAddons) -> Option<AddonsConfig> {
	let config = AddonsConfig {
		aws: non_blank(addons.aws.as_ref()).map(|aws| AwsAddonConfig {
			principal: aws.principal.clone(),
			role: aws.role.clone(),
			lifetime_in_seconds: aws.lifetime_in_seconds,
		}),
		azure_blob: non_blank(addons.azure_blob.as_ref()).map(|azure| AzureBlobAddonConfig {
			account_name: azure.account_name.clone(),
			storage_access_key: azure.storage_access_key.clone(),
			container_name: azure.container_name.clone(),
			blob_name: azure.blob_name.clone(),
			expiration: azure.expiration,
			signed_identifier: azure.signed_identifier.clone(),
			blob_read: azure.blob_read,
			blob_write: azure.blob_write,
			blob_delete: azure.blob_delete,
			container_read: azure.container_read,
			container_write: azure.container_write,
			container_delete: azure.container_delete,
			container_list: azure.container_list,
		}),
		azure_sb: non_blank(addons.azure_sb.as_ref()).map(|azure| AzureSbAddonConfig {
			namespace: azure.namespace.clone(),
			sas_key_name: azure.sas_key_name.clone(),
			sas_key: azure.sas_key.clone(),
			entity_path: azure.entity_path.clone(),
			expiration: azure.expiration,
		}),
		rms: non_blank(addons.rms.as_ref()).map(|rms| UrlAddonConfig { url: rms.url.clone() }),
		mscrm: non_blank(addons.mscrm.as_ref())
			.map(|mscrm| UrlAddonConfig { url: mscrm.url.clone() }),
		slack: non_blank(addons.slack.as_ref())
			.map(|slack| SlackAddonConfig { team: slack.team.clone() }),
		sentry: non_blank(addons.sentry.as_ref()).map(|sentry| SentryAddonConfig {
			org_slug: sentry.org_slug.clone(),
			base_url: sentry.base_url.clone(),
		}),
		echosign: non_blank(addons.echosign.as_ref())
			.map(|echosign| DomainAddonConfig { domain: echosign.domain.clone() }),
		egnyte: non_blank(addons.egnyte.as_ref())
			.map(|egnyte| DomainAddonConfig { domain: egnyte.domain.clone() }),
		firebase: non_blank(addons.firebase.as_ref()).map(|firebase| FirebaseAddonConfig {
			secret: firebase.secret.clone(),
			private_key_id: firebase.private_key_id.clone(),
			private_key: firebase.private_key.clone(),
			client_email: firebase.client_email.clone(),
			lifetime_in_seconds: firebase.lifetime_in_seconds,
		}),
		newrelic: non_blank(addons.newrelic.as_ref())
			.map(|newrelic| NewRelicAddonConfig { account: newrelic.account.clone() }),
		office365: non_blank(addons.office365.as_ref()).map(|office365| Office365AddonConfig {
			domain: office365.domain.clone(),
			connection: office365.connection.clone(),
		}),
	};

	(config != AddonsConfig::default()).then_some(config)
}
