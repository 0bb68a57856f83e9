//! Optional observability helpers for API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `sanbod.call` with the `path` and
//!   `security` fields, plus debug events when a client's debug flag is set.
//! - Enable `metrics` to increment the `sanbod_call_total` counter for every
//!   attempt/outcome, labeled by `security` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to the dispatcher.
	Attempt,
	/// Success payload decoded.
	Success,
	/// Remote service returned a structured error.
	ApiError,
	/// Transport failed (including cancellation and deadlines).
	TransportError,
	/// Response body did not match the expected shape.
	DecodeError,
	/// Request could not be built locally.
	ConfigError,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::ApiError => "api_error",
			CallOutcome::TransportError => "transport_error",
			CallOutcome::DecodeError => "decode_error",
			CallOutcome::ConfigError => "config_error",
		}
	}

	/// Classifies a call result.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => CallOutcome::Success,
			Err(Error::Api(_)) => CallOutcome::ApiError,
			Err(Error::Transport(_)) => CallOutcome::TransportError,
			Err(Error::Decode(_)) => CallOutcome::DecodeError,
			Err(Error::Config(_)) => CallOutcome::ConfigError,
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Emits a `tracing::debug!` event when the `tracing` feature is on and `$enabled` is true.
macro_rules! debug_event {
	($enabled:expr, $($arg:tt)+) => {{
		#[cfg(feature = "tracing")]
		if $enabled {
			::tracing::debug!($($arg)+);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = $enabled;
		}
	}};
}
/// Emits a `tracing::warn!` event when the `tracing` feature is on.
macro_rules! warn_event {
	($($arg:tt)+) => {{
		#[cfg(feature = "tracing")]
		::tracing::warn!($($arg)+);
	}};
}
pub(crate) use {debug_event, warn_event};
