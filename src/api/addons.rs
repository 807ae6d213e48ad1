//! Third-party integration add-ons attached to a client.
//!
//! Families differ in how an all-blank sub-object is sent: [`AddonFamily::collapses_when_blank`]
//! records which ones are dropped and which are sent as `{}`. The API ignores an empty
//! sub-object for the families that keep it, so the split is preserved as-is rather than
//! unified.

// self
use crate::{_prelude::*, secret::Secret};

/// Closed set of integration kinds understood by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddonFamily {
	/// AWS federation.
	Aws,
	/// Azure Blob Storage SAS signing.
	AzureBlob,
	/// Azure Service Bus SAS signing.
	AzureSb,
	/// Active Directory Rights Management Service.
	Rms,
	/// Dynamics CRM.
	Mscrm,
	/// Slack.
	Slack,
	/// Sentry.
	Sentry,
	/// Adobe Sign (EchoSign).
	Echosign,
	/// Egnyte.
	Egnyte,
	/// Firebase.
	Firebase,
	/// New Relic.
	Newrelic,
	/// Office 365.
	Office365,
}
impl AddonFamily {
	/// Every family, in wire order.
	pub const ALL: [AddonFamily; 12] = [
		AddonFamily::Aws,
		AddonFamily::AzureBlob,
		AddonFamily::AzureSb,
		AddonFamily::Rms,
		AddonFamily::Mscrm,
		AddonFamily::Slack,
		AddonFamily::Sentry,
		AddonFamily::Echosign,
		AddonFamily::Egnyte,
		AddonFamily::Firebase,
		AddonFamily::Newrelic,
		AddonFamily::Office365,
	];

	/// Returns the attribute name used both in configuration and on the wire.
	pub const fn as_str(self) -> &'static str {
		match self {
			AddonFamily::Aws => "aws",
			AddonFamily::AzureBlob => "azure_blob",
			AddonFamily::AzureSb => "azure_sb",
			AddonFamily::Rms => "rms",
			AddonFamily::Mscrm => "mscrm",
			AddonFamily::Slack => "slack",
			AddonFamily::Sentry => "sentry",
			AddonFamily::Echosign => "echosign",
			AddonFamily::Egnyte => "egnyte",
			AddonFamily::Firebase => "firebase",
			AddonFamily::Newrelic => "newrelic",
			AddonFamily::Office365 => "office365",
		}
	}

	/// Returns `true` when an all-blank sub-object of this family is omitted instead of sent
	/// as `{}`.
	pub const fn collapses_when_blank(self) -> bool {
		matches!(self, AddonFamily::Rms | AddonFamily::Mscrm | AddonFamily::Slack)
	}
}
impl Display for AddonFamily {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Add-on settings, one optional sub-object per [`AddonFamily`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientAddons {
	/// AWS federation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub aws: Option<AwsClientAddon>,
	/// Azure Blob Storage SAS signing.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub azure_blob: Option<AzureBlobClientAddon>,
	/// Azure Service Bus SAS signing.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub azure_sb: Option<AzureSbClientAddon>,
	/// Active Directory Rights Management Service.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rms: Option<RmsClientAddon>,
	/// Dynamics CRM.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mscrm: Option<MscrmClientAddon>,
	/// Slack.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub slack: Option<SlackClientAddon>,
	/// Sentry.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sentry: Option<SentryClientAddon>,
	/// Adobe Sign (EchoSign).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub echosign: Option<EchoSignClientAddon>,
	/// Egnyte.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub egnyte: Option<EgnyteClientAddon>,
	/// Firebase.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub firebase: Option<FirebaseClientAddon>,
	/// New Relic.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub newrelic: Option<NewRelicClientAddon>,
	/// Office 365.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub office365: Option<Office365ClientAddon>,
}
impl ClientAddons {
	/// Returns `true` when the sub-object for `family` is present, blank or not.
	pub fn contains(&self, family: AddonFamily) -> bool {
		match family {
			AddonFamily::Aws => self.aws.is_some(),
			AddonFamily::AzureBlob => self.azure_blob.is_some(),
			AddonFamily::AzureSb => self.azure_sb.is_some(),
			AddonFamily::Rms => self.rms.is_some(),
			AddonFamily::Mscrm => self.mscrm.is_some(),
			AddonFamily::Slack => self.slack.is_some(),
			AddonFamily::Sentry => self.sentry.is_some(),
			AddonFamily::Echosign => self.echosign.is_some(),
			AddonFamily::Egnyte => self.egnyte.is_some(),
			AddonFamily::Firebase => self.firebase.is_some(),
			AddonFamily::Newrelic => self.newrelic.is_some(),
			AddonFamily::Office365 => self.office365.is_some(),
		}
	}

	/// Iterates over the families whose sub-object is present.
	pub fn families(&self) -> impl Iterator<Item = AddonFamily> {
		AddonFamily::ALL.into_iter().filter(|family| self.contains(*family))
	}
}

/// AWS federation add-on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsClientAddon {
	/// SAML provider ARN.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub principal: Option<String>,
	/// Role ARN.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub role: Option<String>,
	/// Token lifetime in seconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub lifetime_in_seconds: Option<i64>,
}

/// Azure Blob Storage add-on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzureBlobClientAddon {
	/// Storage account name.
	#[serde(rename = "accountName", skip_serializing_if = "Option::is_none")]
	pub account_name: Option<String>,
	/// Storage access key.
	#[serde(rename = "storageAccessKey", skip_serializing_if = "Option::is_none")]
	pub storage_access_key: Option<Secret>,
	/// Container name.
	#[serde(rename = "containerName", skip_serializing_if = "Option::is_none")]
	pub container_name: Option<String>,
	/// Blob name.
	#[serde(rename = "blobName", skip_serializing_if = "Option::is_none")]
	pub blob_name: Option<String>,
	/// Expiration in minutes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expiration: Option<i64>,
	/// Shared access policy identifier.
	#[serde(rename = "signedIdentifier", skip_serializing_if = "Option::is_none")]
	pub signed_identifier: Option<String>,
	/// Grant blob read.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub blob_read: Option<bool>,
	/// Grant blob write.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub blob_write: Option<bool>,
	/// Grant blob delete.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub blob_delete: Option<bool>,
	/// Grant container read.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub container_read: Option<bool>,
	/// Grant container write.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub container_write: Option<bool>,
	/// Grant container delete.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub container_delete: Option<bool>,
	/// Grant container list.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub container_list: Option<bool>,
}

/// Azure Service Bus add-on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzureSbClientAddon {
	/// Service Bus namespace.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub namespace: Option<String>,
	/// SAS key name.
	#[serde(rename = "sasKeyName", skip_serializing_if = "Option::is_none")]
	pub sas_key_name: Option<String>,
	/// SAS key.
	#[serde(rename = "sasKey", skip_serializing_if = "Option::is_none")]
	pub sas_key: Option<Secret>,
	/// Entity path (queue or topic).
	#[serde(rename = "entityPath", skip_serializing_if = "Option::is_none")]
	pub entity_path: Option<String>,
	/// Expiration in minutes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expiration: Option<i64>,
}

/// Rights Management Service add-on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RmsClientAddon {
	/// Service URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}

/// Dynamics CRM add-on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MscrmClientAddon {
	/// Service URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}

/// Slack add-on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackClientAddon {
	/// Slack team name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub team: Option<String>,
}

/// Sentry add-on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentryClientAddon {
	/// Organization slug.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub org_slug: Option<String>,
	/// Base URL for self-hosted installations.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub base_url: Option<String>,
}

/// Adobe Sign (EchoSign) add-on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoSignClientAddon {
	/// Tenant domain.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub domain: Option<String>,
}

/// Egnyte add-on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EgnyteClientAddon {
	/// Tenant domain.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub domain: Option<String>,
}

/// Firebase add-on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirebaseClientAddon {
	/// Legacy secret.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secret: Option<Secret>,
	/// Service account private key ID.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub private_key_id: Option<String>,
	/// Service account private key.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub private_key: Option<Secret>,
	/// Service account email.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub client_email: Option<String>,
	/// Token lifetime in seconds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub lifetime_in_seconds: Option<i64>,
}

/// New Relic add-on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRelicClientAddon {
	/// Account number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account: Option<String>,
}

/// Office 365 add-on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office365ClientAddon {
	/// Tenant domain.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub domain: Option<String>,
	/// Connection name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub connection: Option<String>,
}

impl_blank!(
	ClientAddons,
	AwsClientAddon,
	AzureBlobClientAddon,
	AzureSbClientAddon,
	RmsClientAddon,
	MscrmClientAddon,
	SlackClientAddon,
	SentryClientAddon,
	EchoSignClientAddon,
	EgnyteClientAddon,
	FirebaseClientAddon,
	NewRelicClientAddon,
	Office365ClientAddon,
);

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn only_rms_mscrm_and_slack_collapse() {
		let collapsing = AddonFamily::ALL
			.into_iter()
			.filter(|family| family.collapses_when_blank())
			.collect::<Vec<_>>();

		assert_eq!(collapsing, [AddonFamily::Rms, AddonFamily::Mscrm, AddonFamily::Slack]);
	}

	#[test]
	fn family_labels_match_wire_keys() {
		let addons = ClientAddons {
			azure_sb: Some(AzureSbClientAddon::default()),
			office365: Some(Office365ClientAddon::default()),
			..Default::default()
		};
		let json = serde_json::to_value(&addons).expect("Add-ons should encode.");
		let keys = json.as_object().expect("Add-ons should encode as an object.");

		for family in addons.families() {
			assert!(keys.contains_key(family.as_str()), "Missing wire key for {family}.");
		}

		assert_eq!(addons.families().count(), 2);
	}

	#[test]
	fn azure_fields_use_camel_case_on_the_wire() {
		let blob = AzureBlobClientAddon {
			account_name: Some("acme".into()),
			storage_access_key: Some(Secret::new("key")),
			blob_read: Some(true),
			..Default::default()
		};

		assert_eq!(
			serde_json::to_value(&blob).expect("Azure blob add-on should encode."),
			serde_json::json!({ "accountName": "acme", "storageAccessKey": "key", "blob_read": true })
		);
	}
}
