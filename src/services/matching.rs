//! National-ID matching against mobile and card numbers.

// self
use crate::{
	_prelude::*,
	endpoint::Endpoint,
	request::{RequestDescriptor, SecurityMode},
	services::{ApiResponse, json_params},
	token::TokenCache,
};

/// Checks that a mobile number is registered to a national ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MobileNationalIdMatch {
	/// Mobile number.
	pub mobile_number: String,
	/// National identifier.
	pub national_id: String,
}
impl MobileNationalIdMatch {
	/// Creates the check.
	pub fn new(mobile_number: impl Into<String>, national_id: impl Into<String>) -> Self {
		Self { mobile_number: mobile_number.into(), national_id: national_id.into() }
	}
}
impl Endpoint for MobileNationalIdMatch {
	type Output = ApiResponse<MatchResult>;

	const PATH: &'static str = "/sanboom/v1/infomatching/mobilenationalid";
	const SECURITY: SecurityMode = SecurityMode::BearerToken;

	fn fill(&self, request: &mut RequestDescriptor, _: &TokenCache) {
		request.set_json_params(json_params([
			("mobileNumber", (&self.mobile_number).into()),
			("nationalId", (&self.national_id).into()),
		]));
	}
}

/// Checks that a card belongs to a national ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardNationalIdMatch {
	/// Mobile number.
	pub mobile_number: String,
	/// National identifier.
	pub national_id: String,
	/// Card number.
	pub card_number: String,
}
impl CardNationalIdMatch {
	/// Creates the check.
	pub fn new(
		mobile_number: impl Into<String>,
		national_id: impl Into<String>,
		card_number: impl Into<String>,
	) -> Self {
		Self {
			mobile_number: mobile_number.into(),
			national_id: national_id.into(),
			card_number: card_number.into(),
		}
	}
}
impl Endpoint for CardNationalIdMatch {
	type Output = ApiResponse<MatchResult>;

	const PATH: &'static str = "/sanboom/v1/infomatching/cardnationalid";
	const SECURITY: SecurityMode = SecurityMode::BearerToken;

	fn fill(&self, request: &mut RequestDescriptor, _: &TokenCache) {
		request.set_json_params(json_params([
			("mobileNumber", (&self.mobile_number).into()),
			("nationalId", (&self.national_id).into()),
			("cardNumber", (&self.card_number).into()),
		]));
	}
}

/// Match verdict.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
	/// True when the pair matches.
	#[serde(rename = "ismatched")]
	pub is_matched: bool,
}
