// self
use crate::{obs::CallOutcome, request::SecurityMode};

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(security: SecurityMode, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"sanbod_call_total",
			"security" => security.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (security, outcome);
	}
}
