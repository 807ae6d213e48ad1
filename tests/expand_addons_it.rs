// crates.io
use color_eyre::Result;
use serde_json::json;
// self
use client_expander::{
	ChangeSet, ClientConfig,
	api::{AddonFamily, AwsClientAddon, NewRelicClientAddon, SentryClientAddon},
	expand_client,
};

fn addons_changed() -> ChangeSet {
	ChangeSet::builder().addons_changed(true).build()
}

#[test]
fn add_ons_are_skipped_unless_changed() -> Result<()> {
	let config = ClientConfig::from_json_value(json!({
		"addons": [{ "slack": [{ "team": "eng" }] }]
	}))?;

	assert_eq!(expand_client(&config, &ChangeSet::default()).addons, None);
	assert!(expand_client(&config, &addons_changed()).addons.is_some());

	Ok(())
}

#[test]
fn absent_add_ons_block_is_not_sent() -> Result<()> {
	let config = ClientConfig::from_json_value(json!({ "name": "app", "addons": [] }))?;
	let client = expand_client(&config, &addons_changed());

	assert_eq!(client.addons, None);

	Ok(())
}

#[test]
fn single_family_keeps_the_non_collapsing_ones_as_empty_objects() -> Result<()> {
	let config = ClientConfig::from_json_value(json!({
		"addons": [{ "newrelic": [{ "account": "123456" }] }]
	}))?;
	let addons =
		expand_client(&config, &addons_changed()).addons.expect("Changed add-ons should be sent.");

	assert_eq!(addons.newrelic, Some(NewRelicClientAddon { account: Some("123456".into()) }));
	assert_eq!(addons.rms, None);
	assert_eq!(addons.mscrm, None);
	assert_eq!(addons.slack, None);
	assert_eq!(addons.aws, Some(AwsClientAddon::default()));
	assert_eq!(addons.sentry, Some(SentryClientAddon::default()));

	for family in AddonFamily::ALL {
		assert_eq!(
			addons.contains(family),
			!family.collapses_when_blank(),
			"Unexpected presence for {family}."
		);
	}

	Ok(())
}

#[test]
fn add_on_wire_shape_matches_the_api() -> Result<()> {
	let config = ClientConfig::from_json_value(json!({
		"addons": [{
			"azure_sb": [{
				"namespace": "bus",
				"sas_key_name": "send",
				"sas_key": "c2VjcmV0",
				"entity_path": "orders",
				"expiration": 10
			}],
			"slack": [{ "team": "eng" }],
			"rms": [{ "url": "https://rms.example.com" }]
		}]
	}))?;
	let json = expand_client(&config, &addons_changed()).to_json_value()?;
	let addons = &json["addons"];

	assert_eq!(
		addons["azure_sb"],
		json!({
			"namespace": "bus",
			"sasKeyName": "send",
			"sasKey": "c2VjcmV0",
			"entityPath": "orders",
			"expiration": 10
		})
	);
	assert_eq!(addons["slack"], json!({ "team": "eng" }));
	assert_eq!(addons["rms"], json!({ "url": "https://rms.example.com" }));
	assert_eq!(addons["aws"], json!({}));
	assert!(addons.get("mscrm").is_none(), "Blank CRM add-on must be omitted.");

	Ok(())
}

#[test]
fn add_on_secrets_stay_out_of_debug_output() -> Result<()> {
	let config = ClientConfig::from_json_value(json!({
		"addons": [{ "firebase": [{ "secret": "very-secret", "client_email": "svc@example.com" }] }]
	}))?;
	let client = expand_client(&config, &addons_changed());
	let rendered = format!("{client:?}");

	assert!(!rendered.contains("very-secret"));
	assert!(rendered.contains("svc@example.com"));
	assert!(client.to_json_value()?.to_string().contains("very-secret"), "The request carries it.");

	Ok(())
}

#[test]
fn add_on_changes_are_derived_from_prior_state() -> Result<()> {
	let prior = ClientConfig::from_json_value(json!({
		"addons": [{ "slack": [{ "team": "eng" }] }]
	}))?;
	let planned = ClientConfig::from_json_value(json!({
		"addons": [{ "slack": [{ "team": "ops" }] }]
	}))?;

	assert_eq!(expand_client(&prior, &ChangeSet::between(Some(&prior), &prior)).addons, None);

	let addons = expand_client(&planned, &ChangeSet::between(Some(&prior), &planned))
		.addons
		.expect("Edited add-ons should be sent.");

	assert_eq!(addons.slack.and_then(|slack| slack.team), Some("ops".into()));

	Ok(())
}
