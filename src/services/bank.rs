//! Bank provider codes.

// self
use crate::{_prelude::*, request::ParamValue};

/// Bank or credit institution, as identified on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bank {
	/// Central Bank of the Islamic Republic of Iran.
	Markazi,
	/// Bank of Industry and Mine.
	SanatVaMadan,
	/// Bank Mellat.
	Mellat,
	/// Refah Kargaran Bank.
	Refah,
	/// Bank Maskan.
	Maskan,
	/// Bank Sepah.
	Sepah,
	/// Bank Keshavarzi Iran.
	Keshavarzi,
	/// Bank Melli Iran.
	Melli,
	/// Tejarat Bank.
	Tejarat,
	/// Bank Saderat Iran.
	Saderat,
	/// Export Development Bank of Iran.
	ToseahSaderat,
	/// Post Bank Iran.
	Post,
	/// Tose'e Ta'avon Bank.
	ToseahTaavon,
	/// Karafarin Bank.
	Karafarin,
	/// Parsian Bank.
	Parsian,
	/// Eghtesad Novin Bank.
	EghtesadNovin,
	/// Saman Bank.
	Saman,
	/// Pasargad Bank.
	Pasargad,
	/// Sarmayeh Bank.
	Sarmayeh,
	/// Sina Bank.
	Sina,
	/// Gharzolhasane Mehr Iran Bank.
	MehrIran,
	/// Shahr Bank.
	Shahr,
	/// Ayandeh Bank.
	Ayandeh,
	/// Tourism Bank.
	Gardeshgari,
	/// Day Bank.
	Day,
	/// Iran Zamin Bank.
	Iranzamin,
	/// Resalat Gharzolhasane Bank.
	Resalat,
	/// Melal Credit Institution.
	Melal,
	/// Middle East Bank.
	Khavarmianeh,
	/// Noor Credit Institution.
	Noor,
	/// Iran-Venezuela Bi-National Bank.
	IranVenezuela,
	/// Unrecognized code.
	#[serde(other)]
	Unknown,
}
impl Bank {
	/// Every known code, in provider order.
	pub const ALL: [Bank; 32] = [
		Bank::Markazi,
		Bank::SanatVaMadan,
		Bank::Mellat,
		Bank::Refah,
		Bank::Maskan,
		Bank::Sepah,
		Bank::Keshavarzi,
		Bank::Melli,
		Bank::Tejarat,
		Bank::Saderat,
		Bank::ToseahSaderat,
		Bank::Post,
		Bank::ToseahTaavon,
		Bank::Karafarin,
		Bank::Parsian,
		Bank::EghtesadNovin,
		Bank::Saman,
		Bank::Pasargad,
		Bank::Sarmayeh,
		Bank::Sina,
		Bank::MehrIran,
		Bank::Shahr,
		Bank::Ayandeh,
		Bank::Gardeshgari,
		Bank::Day,
		Bank::Iranzamin,
		Bank::Resalat,
		Bank::Melal,
		Bank::Khavarmianeh,
		Bank::Noor,
		Bank::IranVenezuela,
		Bank::Unknown,
	];

	/// Returns the wire code.
	pub const fn as_str(self) -> &'static str {
		match self {
			Bank::Markazi => "MARKAZI",
			Bank::SanatVaMadan => "SANAT_VA_MADAN",
			Bank::Mellat => "MELLAT",
			Bank::Refah => "REFAH",
			Bank::Maskan => "MASKAN",
			Bank::Sepah => "SEPAH",
			Bank::Keshavarzi => "KESHAVARZI",
			Bank::Melli => "MELLI",
			Bank::Tejarat => "TEJARAT",
			Bank::Saderat => "SADERAT",
			Bank::ToseahSaderat => "TOSEAH_SADERAT",
			Bank::Post => "POST",
			Bank::ToseahTaavon => "TOSEAH_TAAVON",
			Bank::Karafarin => "KARAFARIN",
			Bank::Parsian => "PARSIAN",
			Bank::EghtesadNovin => "EGHTESAD_NOVIN",
			Bank::Saman => "SAMAN",
			Bank::Pasargad => "PASARGAD",
			Bank::Sarmayeh => "SARMAYEH",
			Bank::Sina => "SINA",
			Bank::MehrIran => "MEHR_IRAN",
			Bank::Shahr => "SHAHR",
			Bank::Ayandeh => "AYANDEH",
			Bank::Gardeshgari => "GARDESHGARI",
			Bank::Day => "DAY",
			Bank::Iranzamin => "IRANZAMIN",
			Bank::Resalat => "RESALAT",
			Bank::Melal => "MELAL",
			Bank::Khavarmianeh => "KHAVARMIANEH",
			Bank::Noor => "NOOR",
			Bank::IranVenezuela => "IRAN_VENEZUELA",
			Bank::Unknown => "UNKNOWN",
		}
	}
}
impl Display for Bank {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<Bank> for ParamValue {
	fn from(value: Bank) -> Self {
		ParamValue::String(value.as_str().to_owned())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn serde_codes_match_wire_codes() {
		for bank in Bank::ALL {
			let encoded = serde_json::to_value(bank).expect("Bank codes should serialize.");

			assert_eq!(encoded, bank.as_str(), "{bank:?} serialized to an unexpected code.");

			let decoded: Bank =
				serde_json::from_value(encoded).expect("Bank codes should deserialize.");

			assert_eq!(decoded, bank);
		}
	}

	#[test]
	fn unrecognized_codes_decode_as_unknown() {
		let bank: Bank =
			serde_json::from_str(r#""NEW_BANK""#).expect("Unknown codes should still decode.");

		assert_eq!(bank, Bank::Unknown);
	}
}
