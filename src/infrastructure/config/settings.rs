use std::time::Duration;

use serde::Deserialize;

use crate::domain::payment_request::Beneficiary;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub backend_url:                String,
	pub server_host:                String,
	pub server_port:                u16,
	pub request_timeout_secs:       u64,
	pub currency:                   String,
	pub currency_symbol:            String,
	pub beneficiary_name:           String,
	pub beneficiary_sort_code:      String,
	pub beneficiary_account_number: String,
	pub remitter_reference:         String,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("backend_url", "http://localhost:3000")?
			.set_default("server_host", "0.0.0.0")?
			.set_default("server_port", 80)?
			.set_default("request_timeout_secs", 20)?
			.set_default("currency", "GBP")?
			.set_default("currency_symbol", "£")?
			.set_default("beneficiary_name", "Demo user")?
			.set_default("beneficiary_sort_code", "102030")?
			.set_default("beneficiary_account_number", "12345678")?
			.set_default("remitter_reference", "re reference")?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}

	pub fn beneficiary(&self) -> Beneficiary {
		Beneficiary {
			name:               self.beneficiary_name.clone(),
			sort_code:          self.beneficiary_sort_code.clone(),
			account_number:     self.beneficiary_account_number.clone(),
			remitter_reference: self.remitter_reference.clone(),
			currency:           self.currency.clone(),
			currency_symbol:    self.currency_symbol.clone(),
		}
	}

	pub fn request_timeout(&self) -> Duration {
		Duration::from_secs(self.request_timeout_secs)
	}
}
