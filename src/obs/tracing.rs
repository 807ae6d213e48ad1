// self
use crate::{
	_prelude::*,
	obs::{ExpandGroup, GroupOutcome},
};

/// Span opened around one `expand_client` or `flatten_client` call.
#[derive(Clone, Debug)]
pub struct ExpandSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ExpandSpan {
	/// Opens the span for `group`, labeling the calling function as `stage`.
	pub fn new(group: ExpandGroup, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("client_expander.map", group = group.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (group, stage);

			Self {}
		}
	}

	/// Enters the span until the returned guard drops.
	pub fn entered(self) -> ExpandSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ExpandSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ExpandSpanGuard {}
		}
	}
}

/// Keeps an [`ExpandSpan`] entered.
pub struct ExpandSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ExpandSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ExpandSpanGuard(..)")
	}
}

/// Logs one group decision at `debug` level under the `tracing` feature.
pub fn trace_group_outcome(group: ExpandGroup, outcome: GroupOutcome) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(group = group.as_str(), outcome = outcome.as_str(), "group expanded");
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = (group, outcome);
	}
}
