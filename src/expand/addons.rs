//! Add-on family expanders.
//!
//! The family as a whole is only sent when the `addons` attribute changed. Inside it, every
//! integration gets its own field-copy function. An unset integration becomes an empty
//! sub-object, except for the families whose [`AddonFamily::collapses_when_blank`] is set: those
//! are dropped when they carry no value.

// self
use crate::{
	api::{
		AddonFamily, AwsClientAddon, AzureBlobClientAddon, AzureSbClientAddon, Blank,
		ClientAddons, EchoSignClientAddon, EgnyteClientAddon, FirebaseClientAddon,
		MscrmClientAddon, NewRelicClientAddon, Office365ClientAddon, RmsClientAddon,
		SentryClientAddon, SlackClientAddon,
	},
	config::{
		AddonsConfig, AwsAddonConfig, AzureBlobAddonConfig, AzureSbAddonConfig,
		DomainAddonConfig, FirebaseAddonConfig, NewRelicAddonConfig, Office365AddonConfig,
		SentryAddonConfig, SlackAddonConfig, UrlAddonConfig,
	},
	expand::{collapse, present},
	obs::{self, ExpandGroup, GroupOutcome},
};

/// Expands the `addons` block, or skips it entirely when it did not change.
pub fn expand_addons(
	has_addons_changed: bool,
	config: Option<&AddonsConfig>,
) -> Option<ClientAddons> {
	const GROUP: ExpandGroup = ExpandGroup::Addons;

	if !has_addons_changed {
		obs::observe_group(GROUP, GroupOutcome::Unchanged);

		return None;
	}

	let config = present(GROUP, config)?;

	collapse(
		GROUP,
		ClientAddons {
			aws: expand_aws_addon(config.aws.as_ref()),
			azure_blob: expand_azure_blob_addon(config.azure_blob.as_ref()),
			azure_sb: expand_azure_sb_addon(config.azure_sb.as_ref()),
			rms: expand_rms_addon(config.rms.as_ref()),
			mscrm: expand_mscrm_addon(config.mscrm.as_ref()),
			slack: expand_slack_addon(config.slack.as_ref()),
			sentry: expand_sentry_addon(config.sentry.as_ref()),
			echosign: expand_echosign_addon(config.echosign.as_ref()),
			egnyte: expand_egnyte_addon(config.egnyte.as_ref()),
			firebase: expand_firebase_addon(config.firebase.as_ref()),
			newrelic: expand_newrelic_addon(config.newrelic.as_ref()),
			office365: expand_office365_addon(config.office365.as_ref()),
		},
	)
}

/// Expands `addons.aws`.
pub fn expand_aws_addon(config: Option<&AwsAddonConfig>) -> Option<AwsClientAddon> {
	expand_family(AddonFamily::Aws, config, |aws| AwsClientAddon {
		principal: aws.principal.clone(),
		role: aws.role.clone(),
		lifetime_in_seconds: aws.lifetime_in_seconds,
	})
}

/// Expands `addons.azure_blob`.
pub fn expand_azure_blob_addon(
	config: Option<&AzureBlobAddonConfig>,
) -> Option<AzureBlobClientAddon> {
	expand_family(AddonFamily::AzureBlob, config, |azure| AzureBlobClientAddon {
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
	})
}

/// Expands `addons.azure_sb`.
pub fn expand_azure_sb_addon(config: Option<&AzureSbAddonConfig>) -> Option<AzureSbClientAddon> {
	expand_family(AddonFamily::AzureSb, config, |azure| AzureSbClientAddon {
		namespace: azure.namespace.clone(),
		sas_key_name: azure.sas_key_name.clone(),
		sas_key: azure.sas_key.clone(),
		entity_path: azure.entity_path.clone(),
		expiration: azure.expiration,
	})
}

/// Expands `addons.rms`.
pub fn expand_rms_addon(config: Option<&UrlAddonConfig>) -> Option<RmsClientAddon> {
	expand_family(AddonFamily::Rms, config, |rms| RmsClientAddon { url: rms.url.clone() })
}

/// Expands `addons.mscrm`.
pub fn expand_mscrm_addon(config: Option<&UrlAddonConfig>) -> Option<MscrmClientAddon> {
	expand_family(AddonFamily::Mscrm, config, |mscrm| MscrmClientAddon { url: mscrm.url.clone() })
}

/// Expands `addons.slack`.
pub fn expand_slack_addon(config: Option<&SlackAddonConfig>) -> Option<SlackClientAddon> {
	expand_family(AddonFamily::Slack, config, |slack| SlackClientAddon { team: slack.team.clone() })
}

/// Expands `addons.sentry`.
pub fn expand_sentry_addon(config: Option<&SentryAddonConfig>) -> Option<SentryClientAddon> {
	expand_family(AddonFamily::Sentry, config, |sentry| SentryClientAddon {
		org_slug: sentry.org_slug.clone(),
		base_url: sentry.base_url.clone(),
	})
}

/// Expands `addons.echosign`.
pub fn expand_echosign_addon(config: Option<&DomainAddonConfig>) -> Option<EchoSignClientAddon> {
	expand_family(AddonFamily::Echosign, config, |echosign| EchoSignClientAddon {
		domain: echosign.domain.clone(),
	})
}

/// Expands `addons.egnyte`.
pub fn expand_egnyte_addon(config: Option<&DomainAddonConfig>) -> Option<EgnyteClientAddon> {
	expand_family(AddonFamily::Egnyte, config, |egnyte| EgnyteClientAddon {
		domain: egnyte.domain.clone(),
	})
}

/// Expands `addons.firebase`.
pub fn expand_firebase_addon(config: Option<&FirebaseAddonConfig>) -> Option<FirebaseClientAddon> {
	expand_family(AddonFamily::Firebase, config, |firebase| FirebaseClientAddon {
		secret: firebase.secret.clone(),
		private_key_id: firebase.private_key_id.clone(),
		private_key: firebase.private_key.clone(),
		client_email: firebase.client_email.clone(),
		lifetime_in_seconds: firebase.lifetime_in_seconds,
	})
}

/// Expands `addons.newrelic`.
pub fn expand_newrelic_addon(config: Option<&NewRelicAddonConfig>) -> Option<NewRelicClientAddon> {
	expand_family(AddonFamily::Newrelic, config, |newrelic| NewRelicClientAddon {
		account: newrelic.account.clone(),
	})
}

/// Expands `addons.office365`.
pub fn expand_office365_addon(
	config: Option<&Office365AddonConfig>,
) -> Option<Office365ClientAddon> {
	expand_family(AddonFamily::Office365, config, |office365| Office365ClientAddon {
		domain: office365.domain.clone(),
		connection: office365.connection.clone(),
	})
}

fn expand_family<C, A>(
	family: AddonFamily,
	config: Option<&C>,
	copy: impl FnOnce(&C) -> A,
) -> Option<A>
where
	A: Blank + Default,
{
	let addon = config.map(copy).unwrap_or_default();

	if family.collapses_when_blank() && addon.is_blank() {
		#[cfg(feature = "tracing")]
		tracing::debug!(family = family.as_str(), "blank add-on omitted");

		return None;
	}

	Some(addon)
}
