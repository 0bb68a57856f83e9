//! Endpoint catalog.
//!
//! Every type here implements [`Endpoint`](crate::endpoint::Endpoint) and is executed with
//! [`Client::call`](crate::client::Client::call) or
//! [`Client::execute`](crate::client::Client::execute). Resource endpoints share the
//! [`ApiResponse`] envelope; token endpoints return their own payloads.

pub mod account;
pub mod bank;
pub mod conversion;
pub mod inquiry;
pub mod matching;

pub use account::{
	IssueToken, RefreshTokens, RefreshedTokens, RevokeResult, RevokeToken, TokenGrant,
};
pub use bank::Bank;
pub use conversion::{
	CardDeposit, CardIban, CardToDeposit, CardToIban, DepositIban, DepositToIban, IbanToDeposit,
};
pub use inquiry::{
	AccountOwner, IbanDetails, IbanInquiry, PersonalInquiry, PersonalInquiryWithImage,
	PersonalProfile, ProfileImage, ProfileWithImages,
};
pub use matching::{CardNationalIdMatch, MatchResult, MobileNationalIdMatch};

// self
use crate::{
	_prelude::*,
	request::{ParamValue, Params},
};

/// Success envelope shared by resource endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<M> {
	/// Provider-side error flag; false on success.
	pub error: bool,
	/// Endpoint-specific payload.
	pub message: M,
	/// Provider result code.
	pub result_number: i64,
	/// Provider trace identifier echoed back.
	#[serde(default)]
	pub trace_id: String,
}

pub(crate) fn json_params<const N: usize>(pairs: [(&str, ParamValue); N]) -> Params {
	pairs.into_iter().map(|(key, value)| (key.to_owned(), value)).collect()
}
