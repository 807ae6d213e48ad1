//! Optional observability helpers for the expanders.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run each mapping inside a span named `client_expander.map` with the
//!   `group` and `stage` fields, and to emit a `debug` event for every group decision.
//! - Enable `metrics` to increment the `client_expander_group_total` counter for every group
//!   decision, labeled by `group` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Groups of client attributes that are expanded as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpandGroup {
	/// The top-level client object.
	Client,
	/// `oidc_backchannel_logout`.
	OidcBackchannelLogout,
	/// `client_metadata`.
	ClientMetadata,
	/// `refresh_token`.
	RefreshToken,
	/// `jwt_configuration`.
	JwtConfiguration,
	/// `native_social_login`.
	NativeSocialLogin,
	/// `native_social_login.apple`.
	NativeSocialLoginApple,
	/// `native_social_login.facebook`.
	NativeSocialLoginFacebook,
	/// `mobile`.
	Mobile,
	/// `mobile.android`.
	MobileAndroid,
	/// `mobile.ios`.
	MobileIos,
	/// `addons`.
	Addons,
}
impl ExpandGroup {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ExpandGroup::Client => "client",
			ExpandGroup::OidcBackchannelLogout => "oidc_backchannel_logout",
			ExpandGroup::ClientMetadata => "client_metadata",
			ExpandGroup::RefreshToken => "refresh_token",
			ExpandGroup::JwtConfiguration => "jwt_configuration",
			ExpandGroup::NativeSocialLogin => "native_social_login",
			ExpandGroup::NativeSocialLoginApple => "native_social_login.apple",
			ExpandGroup::NativeSocialLoginFacebook => "native_social_login.facebook",
			ExpandGroup::Mobile => "mobile",
			ExpandGroup::MobileAndroid => "mobile.android",
			ExpandGroup::MobileIos => "mobile.ios",
			ExpandGroup::Addons => "addons",
		}
	}
}
impl Display for ExpandGroup {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// What an expander decided to do with a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupOutcome {
	/// The group is not present in the configuration.
	Absent,
	/// The group did not change since the last known state and was skipped.
	Unchanged,
	/// The group was present but carried no value, so it was omitted.
	Collapsed,
	/// The group will be sent.
	Sent,
}
impl GroupOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			GroupOutcome::Absent => "absent",
			GroupOutcome::Unchanged => "unchanged",
			GroupOutcome::Collapsed => "collapsed",
			GroupOutcome::Sent => "sent",
		}
	}
}
impl Display for GroupOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Reports a group decision through every enabled backend.
pub fn observe_group(group: ExpandGroup, outcome: GroupOutcome) {
	trace_group_outcome(group, outcome);
	record_group_outcome(group, outcome);
}
