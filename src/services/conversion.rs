//! Card, deposit, and IBAN conversions.

// self
use crate::{
	_prelude::*,
	endpoint::Endpoint,
	request::{RequestDescriptor, SecurityMode},
	services::{ApiResponse, Bank, json_params},
	token::TokenCache,
};

/// Looks up the deposit number behind a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardToDeposit {
	/// Card number.
	pub card_number: String,
}
impl CardToDeposit {
	/// Creates the lookup.
	pub fn new(card_number: impl Into<String>) -> Self {
		Self { card_number: card_number.into() }
	}
}
impl Endpoint for CardToDeposit {
	type Output = ApiResponse<CardDeposit>;

	const PATH: &'static str = "/sanboom/v1/banksinquiry/cardtodeposit";
	const SECURITY: SecurityMode = SecurityMode::BearerToken;

	fn fill(&self, request: &mut RequestDescriptor, _: &TokenCache) {
		request.set_json_params(json_params([("cardNumber", (&self.card_number).into())]));
	}
}

/// Card and its deposit number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDeposit {
	/// Card number.
	pub card_number: String,
	/// Deposit (account) number.
	pub deposit_number: String,
}

/// Looks up the IBAN behind a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardToIban {
	/// Card number.
	pub card_number: String,
}
impl CardToIban {
	/// Creates the lookup.
	pub fn new(card_number: impl Into<String>) -> Self {
		Self { card_number: card_number.into() }
	}
}
impl Endpoint for CardToIban {
	type Output = ApiResponse<CardIban>;

	const PATH: &'static str = "/sanboom/v1/banksinquiry/cardtoiban";
	const SECURITY: SecurityMode = SecurityMode::BearerToken;

	fn fill(&self, request: &mut RequestDescriptor, _: &TokenCache) {
		request.set_json_params(json_params([("cardNumber", (&self.card_number).into())]));
	}
}

/// Card and its IBAN.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardIban {
	/// Card number.
	pub card_number: String,
	/// IBAN.
	pub iban: String,
}

/// Converts a deposit number at `provider` into an IBAN.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepositToIban {
	/// Bank holding the deposit.
	pub provider: Bank,
	/// Deposit number.
	pub deposit_number: String,
}
impl DepositToIban {
	/// Creates the conversion.
	pub fn new(provider: Bank, deposit_number: impl Into<String>) -> Self {
		Self { provider, deposit_number: deposit_number.into() }
	}
}
impl Endpoint for DepositToIban {
	type Output = ApiResponse<DepositIban>;

	const PATH: &'static str = "/sanboom/v1/banksinquiry/deposittoiban";
	const SECURITY: SecurityMode = SecurityMode::BearerToken;

	fn fill(&self, request: &mut RequestDescriptor, _: &TokenCache) {
		request.set_json_params(json_params([
			("provider", self.provider.into()),
			("depositNumber", (&self.deposit_number).into()),
		]));
	}
}

/// Converts an IBAN into its deposit number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IbanToDeposit {
	/// IBAN.
	pub iban: String,
}
impl IbanToDeposit {
	/// Creates the conversion.
	pub fn new(iban: impl Into<String>) -> Self {
		Self { iban: iban.into() }
	}
}
impl Endpoint for IbanToDeposit {
	type Output = ApiResponse<DepositIban>;

	const PATH: &'static str = "/banks/v1/ibantodeposit";
	const SECURITY: SecurityMode = SecurityMode::BearerToken;

	fn fill(&self, request: &mut RequestDescriptor, _: &TokenCache) {
		request.set_json_params(json_params([("iban", (&self.iban).into())]));
	}
}

/// Deposit number and its IBAN.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositIban {
	/// Deposit (account) number.
	pub deposit_number: String,
	/// IBAN.
	pub iban: String,
}
