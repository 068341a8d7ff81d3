use async_trait::async_trait;

use crate::domain::bank::BankList;
use crate::domain::errors::PageError;
use crate::domain::payment::Payment;
use crate::domain::payment_request::PaymentRequest;

#[async_trait]
pub trait PaymentBackend: Send + Sync + 'static {
	async fn get_payment(&self, payment_id: &str) -> Result<Payment, PageError>;
	async fn list_banks(&self) -> Result<BankList, PageError>;
	/// Submits a payment initiation and returns the URL to send the payer to.
	async fn initiate_payment(
		&self,
		request: &PaymentRequest,
	) -> Result<String, PageError>;
}
