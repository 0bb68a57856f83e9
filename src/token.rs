//! Token cache and redacted token secrets.

pub mod cache;
pub mod secret;

pub use cache::*;
pub use secret::*;

// self
use crate::_prelude::*;

/// Keys the [`TokenCache`] stores values under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKey {
	/// Bearer credential attached to resource endpoints.
	AccessToken,
	/// Credential exchanged for a new access/refresh pair.
	RefreshToken,
}
impl TokenKey {
	/// Returns the wire/cache label (`access_token` or `refresh_token`).
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenKey::AccessToken => "access_token",
			TokenKey::RefreshToken => "refresh_token",
		}
	}
}
impl Display for TokenKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
