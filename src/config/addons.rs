//! `addons` block: one optional nested block per third-party integration.

// self
use crate::{_prelude::*, secret::Secret};

/// `addons` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonsConfig {
	/// AWS federation.
	#[serde(with = "crate::config::block")]
	pub aws: Option<AwsAddonConfig>,
	/// Azure Blob Storage SAS signing.
	#[serde(with = "crate::config::block")]
	pub azure_blob: Option<AzureBlobAddonConfig>,
	/// Azure Service Bus SAS signing.
	#[serde(with = "crate::config::block")]
	pub azure_sb: Option<AzureSbAddonConfig>,
	/// Active Directory Rights Management Service.
	#[serde(with = "crate::config::block")]
	pub rms: Option<UrlAddonConfig>,
	/// Dynamics CRM.
	#[serde(with = "crate::config::block")]
	pub mscrm: Option<UrlAddonConfig>,
	/// Slack team.
	#[serde(with = "crate::config::block")]
	pub slack: Option<SlackAddonConfig>,
	/// Sentry organization.
	#[serde(with = "crate::config::block")]
	pub sentry: Option<SentryAddonConfig>,
	/// Adobe Sign (EchoSign).
	#[serde(with = "crate::config::block")]
	pub echosign: Option<DomainAddonConfig>,
	/// Egnyte file sync.
	#[serde(with = "crate::config::block")]
	pub egnyte: Option<DomainAddonConfig>,
	/// Firebase token minting.
	#[serde(with = "crate::config::block")]
	pub firebase: Option<FirebaseAddonConfig>,
	/// New Relic APM.
	#[serde(with = "crate::config::block")]
	pub newrelic: Option<NewRelicAddonConfig>,
	/// Office 365.
	#[serde(with = "crate::config::block")]
	pub office365: Option<Office365AddonConfig>,
}
impl AddonsConfig {
	/// Drops family blocks that carry no value, returning `None` when nothing is left.
	///
	/// Two blocks with the same normalized form expand to requests with the same effect.
	pub fn normalized(&self) -> Option<Self> {
		fn keep<T>(block: &Option<T>) -> Option<T>
		where
			T: Clone + Default + PartialEq,
		{
			block.as_ref().filter(|block| **block != T::default()).cloned()
		}

		let addons = Self {
			aws: keep(&self.aws),
			azure_blob: keep(&self.azure_blob),
			azure_sb: keep(&self.azure_sb),
			rms: keep(&self.rms),
			mscrm: keep(&self.mscrm),
			slack: keep(&self.slack),
			sentry: keep(&self.sentry),
			echosign: keep(&self.echosign),
			egnyte: keep(&self.egnyte),
			firebase: keep(&self.firebase),
			newrelic: keep(&self.newrelic),
			office365: keep(&self.office365),
		};

		(addons != Self::default()).then_some(addons)
	}
}

/// `addons.aws` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsAddonConfig {
	/// SAML provider ARN.
	pub principal: Option<String>,
	/// Role ARN.
	pub role: Option<String>,
	/// Token lifetime in seconds.
	pub lifetime_in_seconds: Option<i64>,
}

/// `addons.azure_blob` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureBlobAddonConfig {
	/// Storage account name.
	pub account_name: Option<String>,
	/// Storage access key.
	pub storage_access_key: Option<Secret>,
	/// Container name.
	pub container_name: Option<String>,
	/// Blob name.
	pub blob_name: Option<String>,
	/// Expiration in minutes.
	pub expiration: Option<i64>,
	/// Shared access policy identifier.
	pub signed_identifier: Option<String>,
	/// Grant blob read.
	pub blob_read: Option<bool>,
	/// Grant blob write.
	pub blob_write: Option<bool>,
	/// Grant blob delete.
	pub blob_delete: Option<bool>,
	/// Grant container read.
	pub container_read: Option<bool>,
	/// Grant container write.
	pub container_write: Option<bool>,
	/// Grant container delete.
	pub container_delete: Option<bool>,
	/// Grant container list.
	pub container_list: Option<bool>,
}

/// `addons.azure_sb` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureSbAddonConfig {
	/// Service Bus namespace.
	pub namespace: Option<String>,
	/// SAS key name.
	pub sas_key_name: Option<String>,
	/// SAS key.
	pub sas_key: Option<Secret>,
	/// Entity path (queue or topic).
	pub entity_path: Option<String>,
	/// Expiration in minutes.
	pub expiration: Option<i64>,
}

/// Add-on block carrying a single `url` (`rms`, `mscrm`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlAddonConfig {
	/// Service URL.
	pub url: Option<String>,
}

/// `addons.slack` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackAddonConfig {
	/// Slack team name.
	pub team: Option<String>,
}

/// `addons.sentry` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentryAddonConfig {
	/// Organization slug.
	pub org_slug: Option<String>,
	/// Base URL for self-hosted installations.
	pub base_url: Option<String>,
}

/// Add-on block carrying a single `domain` (`echosign`, `egnyte`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainAddonConfig {
	/// Tenant domain.
	pub domain: Option<String>,
}

/// `addons.firebase` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirebaseAddonConfig {
	/// Legacy secret.
	pub secret: Option<Secret>,
	/// Service account private key ID.
	pub private_key_id: Option<String>,
	/// Service account private key.
	pub private_key: Option<Secret>,
	/// Service account email.
	pub client_email: Option<String>,
	/// Token lifetime in seconds.
	pub lifetime_in_seconds: Option<i64>,
}

/// `addons.newrelic` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewRelicAddonConfig {
	/// Account number.
	pub account: Option<String>,
}

/// `addons.office365` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Office365AddonConfig {
	/// Tenant domain.
	pub domain: Option<String>,
	/// Connection name.
	pub connection: Option<String>,
}
