use serde::{Deserialize, Serialize};

use crate::domain::payment::Payment;

/// Payee details sent with every payment initiation.
#[derive(Debug, Clone, PartialEq)]
pub struct Beneficiary {
	pub name:               String,
	pub sort_code:          String,
	pub account_number:     String,
	pub remitter_reference: String,
	pub currency:           String,
	pub currency_symbol:    String,
}

impl Beneficiary {
	/// Sort code followed by account number, as shown on the page.
	pub fn display_account(&self) -> String {
		format!("{}{}", self.sort_code, self.account_number)
	}
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PaymentRequest {
	pub uuid:                       String,
	pub amount:                     i64,
	pub currency:                   String,
	pub beneficiary_name:           String,
	pub beneficiary_reference:      String,
	pub beneficiary_sort_code:      String,
	pub beneficiary_account_number: String,
	pub remitter_reference:         String,
	pub remitter_provider_id:       String,
}

impl PaymentRequest {
	pub fn for_bank(
		payment_id: &str,
		payment: &Payment,
		beneficiary: &Beneficiary,
		bank_id: &str,
	) -> Self {
		Self {
			uuid:                       payment_id.to_string(),
			amount:                     payment.amount,
			currency:                   beneficiary.currency.clone(),
			beneficiary_name:           beneficiary.name.clone(),
			beneficiary_reference:      payment.receiver_id.clone(),
			beneficiary_sort_code:      beneficiary.sort_code.clone(),
			beneficiary_account_number: beneficiary.account_number.clone(),
			remitter_reference:         beneficiary.remitter_reference.clone(),
			remitter_provider_id:       bank_id.to_string(),
		}
	}
}

/// Answer of the backend to a payment initiation.
#[derive(Debug, Deserialize, Clone)]
pub struct PaymentInitiation {
	pub url: String,
}
