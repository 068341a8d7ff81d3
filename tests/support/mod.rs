#![allow(dead_code)]

pub mod fake_backend;
pub mod stub_backend;

use banklink_page::domain::payment_request::Beneficiary;

pub fn demo_beneficiary() -> Beneficiary {
	Beneficiary {
		name:               "Demo user".to_string(),
		sort_code:          "102030".to_string(),
		account_number:     "12345678".to_string(),
		remitter_reference: "re reference".to_string(),
		currency:           "GBP".to_string(),
		currency_symbol:    "£".to_string(),
	}
}
