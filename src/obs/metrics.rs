// self
use crate::obs::{ExpandGroup, GroupOutcome};

/// Bumps `client_expander_group_total` for one group decision.
///
/// Without the `metrics` feature this does nothing.
pub fn record_group_outcome(group: ExpandGroup, outcome: GroupOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"client_expander_group_total",
			"group" => group.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (group, outcome);
	}
}
