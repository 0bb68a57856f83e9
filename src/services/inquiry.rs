//! Personal and IBAN inquiries.

// self
use crate::{
	_prelude::*,
	endpoint::Endpoint,
	request::{RequestDescriptor, SecurityMode},
	services::{ApiResponse, json_params},
	token::TokenCache,
};

/// Civil-registry profile lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonalInquiry {
	/// National identifier.
	pub national_id: String,
	/// Birth date in the provider's calendar format.
	pub birth_date: String,
}
impl PersonalInquiry {
	/// Creates the lookup.
	pub fn new(national_id: impl Into<String>, birth_date: impl Into<String>) -> Self {
		Self { national_id: national_id.into(), birth_date: birth_date.into() }
	}
}
impl Endpoint for PersonalInquiry {
	type Output = ApiResponse<PersonalProfile>;

	const PATH: &'static str = "/sanboom/v1/infoinquiry/personal";
	const SECURITY: SecurityMode = SecurityMode::BearerToken;

	fn fill(&self, request: &mut RequestDescriptor, _: &TokenCache) {
		fill_profile_lookup(request, &self.national_id, &self.birth_date);
	}
}

/// Civil-registry profile lookup including stored images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonalInquiryWithImage {
	/// National identifier.
	pub national_id: String,
	/// Birth date in the provider's calendar format.
	pub birth_date: String,
}
impl PersonalInquiryWithImage {
	/// Creates the lookup.
	pub fn new(national_id: impl Into<String>, birth_date: impl Into<String>) -> Self {
		Self { national_id: national_id.into(), birth_date: birth_date.into() }
	}
}
impl Endpoint for PersonalInquiryWithImage {
	type Output = ApiResponse<ProfileWithImages>;

	const PATH: &'static str = "/sanboom/v1/infoinquiry/personalwithimage";
	const SECURITY: SecurityMode = SecurityMode::BearerToken;

	fn fill(&self, request: &mut RequestDescriptor, _: &TokenCache) {
		fill_profile_lookup(request, &self.national_id, &self.birth_date);
	}
}

/// Civil-registry profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalProfile {
	/// Given name.
	pub first_name: String,
	/// Family name.
	pub last_name: String,
	/// Birth certificate number.
	pub register_no: String,
	/// Birth certificate series.
	pub register_series: String,
	/// Birth certificate serial.
	pub register_serial: String,
	/// National identifier.
	pub national_id: String,
	/// Birth date.
	pub birth_date: String,
	/// Birth place.
	pub birth_place: String,
	/// Death status.
	pub death_status: String,
	/// Gender.
	pub gender: String,
	/// Father's name.
	pub father_name: String,
}

/// Profile plus its stored images.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileWithImages {
	/// Profile fields.
	#[serde(flatten)]
	pub profile: PersonalProfile,
	/// Stored images.
	pub images: Vec<ProfileImage>,
}

/// One stored image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImage {
	/// Image kind.
	#[serde(rename = "type")]
	pub kind: String,
	/// Encoded image; absent when the registry has none.
	#[serde(default)]
	pub image: Option<String>,
}

/// IBAN ownership and status inquiry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IbanInquiry {
	/// IBAN.
	pub iban: String,
}
impl IbanInquiry {
	/// Creates the inquiry.
	pub fn new(iban: impl Into<String>) -> Self {
		Self { iban: iban.into() }
	}
}
impl Endpoint for IbanInquiry {
	type Output = ApiResponse<IbanDetails>;

	const PATH: &'static str = "/sanboom/v1/banksinquiry/ibaninquiry";
	const SECURITY: SecurityMode = SecurityMode::BearerToken;

	fn fill(&self, request: &mut RequestDescriptor, _: &TokenCache) {
		request.set_json_params(json_params([("iban", (&self.iban).into())]));
	}
}

/// Account behind an IBAN.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IbanDetails {
	/// IBAN.
	pub iban: String,
	/// Bank display name.
	pub bank_name: String,
	/// Deposit (account) number.
	pub deposit_number: String,
	/// Deposit status code.
	pub deposit_status: String,
	/// Deposit status description.
	pub deposit_description: String,
	/// Free-form comment.
	pub deposit_comment: String,
	/// Account holders.
	pub owners_info: Vec<AccountOwner>,
}

/// Account holder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOwner {
	/// Given name.
	pub first_name: String,
	/// Family name.
	pub last_name: String,
}

fn fill_profile_lookup(request: &mut RequestDescriptor, national_id: &str, birth_date: &str) {
	request.set_json_params(json_params([
		("nationalId", national_id.into()),
		("birthDate", birth_date.into()),
	]));
}
