// std
use std::collections::BTreeMap;
// crates.io
use color_eyre::Result;
use serde_json::{Map, Value, json};
// self
use client_expander::{
	ChangeSet, ClientConfig,
	api::{
		Client, ClientJwtConfiguration, ClientMobile, ClientMobileAndroid, ClientMobileIos,
		ClientNativeSocialLogin, ClientRefreshToken, Metadata, NativeSocialLoginSupport,
		OidcBackchannelLogout,
	},
	expand_client,
};

fn metadata(value: Value) -> Metadata {
	match value {
		Value::Object(map) => map,
		other => panic!("Metadata fixture must be an object, got {other}."),
	}
}

fn full_config() -> Result<ClientConfig> {
	let config = ClientConfig::from_json_value(json!({
		"name": "storefront",
		"description": "",
		"app_type": "spa",
		"logo_uri": "https://cdn.example.com/logo.png",
		"is_first_party": false,
		"is_token_endpoint_ip_header_trusted": true,
		"oidc_conformant": true,
		"client_aliases": [],
		"callbacks": ["https://app.example.com/callback"],
		"allowed_logout_urls": ["https://app.example.com/logged-out"],
		"allowed_origins": ["https://origin.example.com"],
		"allowed_clients": ["other-client"],
		"grant_types": ["authorization_code", "refresh_token"],
		"organization_usage": "allow",
		"organization_require_behavior": "pre_login_prompt",
		"web_origins": ["https://web.example.com"],
		"sso": true,
		"sso_disabled": false,
		"cross_origin_auth": true,
		"cross_origin_loc": "https://app.example.com/cross-origin",
		"custom_login_page_on": false,
		"custom_login_page": "<html>login</html>",
		"form_template": "<form>wsfed</form>",
		"token_endpoint_auth_method": "none",
		"initiate_login_uri": "https://app.example.com/login",
		"encryption_key": { "pub": "-----BEGIN PUBLIC KEY-----" },
		"oidc_backchannel_logout_urls": ["https://app.example.com/bcl"],
		"refresh_token": [{
			"rotation_type": "rotating",
			"expiration_type": "expiring",
			"leeway": 0,
			"token_lifetime": 2592000,
			"infinite_token_lifetime": false,
			"infinite_idle_token_lifetime": true,
			"idle_token_lifetime": 1296000
		}],
		"jwt_configuration": [{
			"lifetime_in_seconds": 36000,
			"secret_encoded": true,
			"scopes": { "foo": "bar" },
			"alg": "RS256"
		}],
		"native_social_login": [{
			"apple": [{ "enabled": true }],
			"facebook": [{ "enabled": false }]
		}],
		"mobile": [{
			"android": [{
				"app_package_name": "com.example.app",
				"sha256_cert_fingerprints": ["DE:AD:BE:EF"]
			}],
			"ios": [{ "team_id": "9JA89QQLNQ", "app_bundle_identifier": "com.example.ios" }]
		}]
	}))?;

	Ok(config)
}

fn strings(values: &[&str]) -> Option<Vec<String>> {
	Some(values.iter().map(|value| (*value).to_owned()).collect())
}

#[test]
fn every_attribute_is_copied_into_its_own_field() -> Result<()> {
	let config = full_config()?;
	let client = expand_client(&config, &ChangeSet::builder().new_resource(true).build());
	let expected = Client {
		name: Some("storefront".into()),
		description: Some(String::new()),
		app_type: Some("spa".into()),
		logo_uri: Some("https://cdn.example.com/logo.png".into()),
		is_first_party: Some(false),
		is_token_endpoint_ip_header_trusted: Some(true),
		oidc_conformant: Some(true),
		client_aliases: Some(Vec::new()),
		callbacks: strings(&["https://app.example.com/callback"]),
		allowed_logout_urls: strings(&["https://app.example.com/logged-out"]),
		allowed_origins: strings(&["https://origin.example.com"]),
		allowed_clients: strings(&["other-client"]),
		grant_types: strings(&["authorization_code", "refresh_token"]),
		organization_usage: Some("allow".into()),
		organization_require_behavior: Some("pre_login_prompt".into()),
		web_origins: strings(&["https://web.example.com"]),
		sso: Some(true),
		sso_disabled: Some(false),
		cross_origin_auth: Some(true),
		cross_origin_loc: Some("https://app.example.com/cross-origin".into()),
		custom_login_page_on: Some(false),
		custom_login_page: Some("<html>login</html>".into()),
		form_template: Some("<form>wsfed</form>".into()),
		token_endpoint_auth_method: Some("none".into()),
		initiate_login_uri: Some("https://app.example.com/login".into()),
		encryption_key: Some(BTreeMap::from([(
			"pub".to_owned(),
			"-----BEGIN PUBLIC KEY-----".to_owned(),
		)])),
		oidc_backchannel_logout: Some(OidcBackchannelLogout {
			backchannel_logout_urls: strings(&["https://app.example.com/bcl"]),
		}),
		client_metadata: None,
		refresh_token: Some(ClientRefreshToken {
			rotation_type: Some("rotating".into()),
			expiration_type: Some("expiring".into()),
			leeway: Some(0),
			token_lifetime: Some(2592000),
			infinite_token_lifetime: Some(false),
			infinite_idle_token_lifetime: Some(true),
			idle_token_lifetime: Some(1296000),
		}),
		jwt_configuration: Some(ClientJwtConfiguration {
			lifetime_in_seconds: Some(36000),
			secret_encoded: Some(true),
			scopes: Some(BTreeMap::from([("foo".to_owned(), "bar".to_owned())])),
			alg: Some("RS256".into()),
		}),
		addons: None,
		native_social_login: Some(ClientNativeSocialLogin {
			apple: Some(NativeSocialLoginSupport { enabled: Some(true) }),
			facebook: Some(NativeSocialLoginSupport { enabled: Some(false) }),
		}),
		mobile: Some(ClientMobile {
			android: Some(ClientMobileAndroid {
				app_package_name: Some("com.example.app".into()),
				sha256_cert_fingerprints: strings(&["DE:AD:BE:EF"]),
			}),
			ios: Some(ClientMobileIos {
				team_id: Some("9JA89QQLNQ".into()),
				app_bundle_identifier: Some("com.example.ios".into()),
			}),
		}),
	};

	assert_eq!(client, expected);

	Ok(())
}

#[test]
fn each_attribute_set_alone_is_sent_alone() -> Result<()> {
	let attributes = [
		("name", json!("name")),
		("description", json!("description")),
		("app_type", json!("app_type")),
		("logo_uri", json!("logo_uri")),
		("is_first_party", json!(true)),
		("is_token_endpoint_ip_header_trusted", json!(true)),
		("oidc_conformant", json!(true)),
		("client_aliases", json!(["client_aliases"])),
		("callbacks", json!(["callbacks"])),
		("allowed_logout_urls", json!(["allowed_logout_urls"])),
		("allowed_origins", json!(["allowed_origins"])),
		("allowed_clients", json!(["allowed_clients"])),
		("grant_types", json!(["grant_types"])),
		("organization_usage", json!("organization_usage")),
		("organization_require_behavior", json!("organization_require_behavior")),
		("web_origins", json!(["web_origins"])),
		("sso", json!(true)),
		("sso_disabled", json!(true)),
		("cross_origin_auth", json!(true)),
		("cross_origin_loc", json!("cross_origin_loc")),
		("custom_login_page_on", json!(true)),
		("custom_login_page", json!("custom_login_page")),
		("form_template", json!("form_template")),
		("token_endpoint_auth_method", json!("token_endpoint_auth_method")),
		("initiate_login_uri", json!("initiate_login_uri")),
		("encryption_key", json!({ "pub": "encryption_key" })),
	];

	for (attribute, value) in attributes {
		let mut object = Map::new();

		object.insert(attribute.to_owned(), value);

		let object = Value::Object(object);
		let config = ClientConfig::from_json_value(object.clone())?;
		let client = expand_client(&config, &ChangeSet::default());

		assert_eq!(client.to_json_value()?, object, "`{attribute}` must map onto itself only.");
	}

	Ok(())
}

#[test]
fn unset_fields_stay_unset() -> Result<()> {
	let config = ClientConfig::from_json_str(r#"{"name":"only-name"}"#)?;
	let client = expand_client(&config, &ChangeSet::default());

	assert_eq!(
		client,
		Client { name: Some("only-name".into()), ..Default::default() },
		"Nothing but the name may be sent."
	);
	assert_eq!(client.to_json_value()?, json!({ "name": "only-name" }));

	Ok(())
}

#[test]
fn blank_blocks_are_not_sent() -> Result<()> {
	let config = ClientConfig::from_json_str(
		r#"{
			"refresh_token": [{}],
			"jwt_configuration": [{ "secret_encoded": true }],
			"native_social_login": [{ "apple": [{}], "facebook": [] }],
			"mobile": [{ "android": [{}], "ios": [{}] }],
			"addons": [{}]
		}"#,
	)?;
	let client = expand_client(&config, &ChangeSet::default());

	assert_eq!(client.refresh_token, None);
	assert_eq!(client.jwt_configuration, None, "Only the create-only field was set.");
	assert_eq!(client.native_social_login, None);
	assert_eq!(client.mobile, None);
	assert_eq!(client.addons, None, "Add-ons did not change.");
	assert!(!client.has_meaningful_change()?);

	Ok(())
}

#[test]
fn secret_encoded_is_create_only() -> Result<()> {
	let config = full_config()?;
	let created = expand_client(&config, &ChangeSet::builder().new_resource(true).build());
	let updated = expand_client(&config, &ChangeSet::builder().new_resource(false).build());

	assert_eq!(created.jwt_configuration.and_then(|jwt| jwt.secret_encoded), Some(true));

	let jwt = updated.jwt_configuration.expect("Other JWT fields keep the group alive.");

	assert_eq!(jwt.secret_encoded, None);
	assert_eq!(jwt.lifetime_in_seconds, Some(36000));

	Ok(())
}

#[test]
fn removed_metadata_keys_are_sent_as_null() -> Result<()> {
	let changes = ChangeSet::builder()
		.metadata(metadata(json!({ "a": "1", "b": "2" })), metadata(json!({ "a": "1" })))
		.build();
	let client = expand_client(&ClientConfig::default(), &changes);

	assert_eq!(client.to_json_value()?, json!({ "client_metadata": { "a": "1", "b": null } }));

	Ok(())
}

#[test]
fn unchanged_metadata_is_omitted() -> Result<()> {
	let snapshot = metadata(json!({ "a": "1" }));
	let changes = ChangeSet::builder().metadata(snapshot.clone(), snapshot).build();
	let client = expand_client(&ClientConfig::default(), &changes);

	assert_eq!(client.client_metadata, None);

	Ok(())
}

#[test]
fn expansion_is_deterministic() -> Result<()> {
	let config = full_config()?;
	let changes = ChangeSet::builder()
		.new_resource(true)
		.addons_changed(true)
		.metadata(Metadata::new(), metadata(json!({ "tier": "gold" })))
		.build();
	let first = expand_client(&config, &changes);
	let second = expand_client(&config, &changes);

	assert_eq!(first, second);
	assert_eq!(serde_json::to_string(&first)?, serde_json::to_string(&second)?);

	Ok(())
}

#[test]
fn nested_groups_use_api_field_names() -> Result<()> {
	let config = full_config()?;
	let client = expand_client(&config, &ChangeSet::default());
	let json = client.to_json_value()?;

	assert_eq!(
		json["mobile"],
		json!({
			"android": {
				"app_package_name": "com.example.app",
				"sha256_cert_fingerprints": ["DE:AD:BE:EF"]
			},
			"ios": { "team_id": "9JA89QQLNQ", "app_bundle_identifier": "com.example.ios" }
		})
	);
	assert_eq!(
		json["native_social_login"],
		json!({ "apple": { "enabled": true }, "facebook": { "enabled": false } })
	);
	assert_eq!(
		json["jwt_configuration"],
		json!({ "lifetime_in_seconds": 36000, "scopes": { "foo": "bar" }, "alg": "RS256" })
	);
	assert_eq!(
		json["oidc_backchannel_logout"],
		json!({ "backchannel_logout_urls": ["https://app.example.com/bcl"] })
	);

	Ok(())
}
