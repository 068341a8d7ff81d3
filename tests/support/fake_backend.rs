use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use banklink_page::domain::backend::PaymentBackend;
use banklink_page::domain::bank::{Bank, BankList};
use banklink_page::domain::errors::PageError;
use banklink_page::domain::payment::{Payment, PaymentStatus};
use banklink_page::domain::payment_request::PaymentRequest;

#[derive(Default)]
struct FakeState {
	payments:           HashMap<String, Payment>,
	banks:              Vec<Bank>,
	redirect_url:       Option<String>,
	fetched_payments:   Vec<String>,
	bank_list_calls:    usize,
	initiated_requests: Vec<PaymentRequest>,
}

/// In-memory backend recording every call made through it.
#[derive(Clone, Default)]
pub struct FakeBackend {
	state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_payment(self, payment: Payment) -> Self {
		self.state
			.lock()
			.unwrap()
			.payments
			.insert(payment.uuid.clone(), payment);
		self
	}

	pub fn with_banks(self, ids: &[&str]) -> Self {
		self.state.lock().unwrap().banks = ids
			.iter()
			.map(|id| Bank {
				id:           id.to_string(),
				logo:         format!("https://cdn.example/{id}.svg"),
				display_name: None,
			})
			.collect();
		self
	}

	pub fn with_redirect(self, url: &str) -> Self {
		self.state.lock().unwrap().redirect_url = Some(url.to_string());
		self
	}

	pub fn fetched_payments(&self) -> Vec<String> {
		self.state.lock().unwrap().fetched_payments.clone()
	}

	pub fn bank_list_calls(&self) -> usize {
		self.state.lock().unwrap().bank_list_calls
	}

	pub fn initiated_requests(&self) -> Vec<PaymentRequest> {
		self.state.lock().unwrap().initiated_requests.clone()
	}
}

pub fn payment(uuid: &str, status: PaymentStatus) -> Payment {
	Payment {
		uuid: uuid.to_string(),
		receiver_id: "shop-42".to_string(),
		amount: 123456,
		status,
	}
}

#[async_trait]
impl PaymentBackend for FakeBackend {
	async fn get_payment(&self, payment_id: &str) -> Result<Payment, PageError> {
		let mut state = self.state.lock().unwrap();
		state.fetched_payments.push(payment_id.to_string());
		state
			.payments
			.get(payment_id)
			.cloned()
			.ok_or_else(|| PageError::Backend {
				status:  400,
				message: "sql: no rows in result set".to_string(),
			})
	}

	async fn list_banks(&self) -> Result<BankList, PageError> {
		let mut state = self.state.lock().unwrap();
		state.bank_list_calls += 1;
		Ok(BankList {
			results: state.banks.clone(),
		})
	}

	async fn initiate_payment(
		&self,
		request: &PaymentRequest,
	) -> Result<String, PageError> {
		let mut state = self.state.lock().unwrap();
		state.initiated_requests.push(request.clone());
		state
			.redirect_url
			.clone()
			.ok_or(PageError::MissingRedirectUrl)
	}
}
