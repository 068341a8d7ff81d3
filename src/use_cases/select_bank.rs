use log::info;

use crate::domain::backend::PaymentBackend;
use crate::domain::errors::PageError;
use crate::domain::page::Page;
use crate::domain::payment_request::{Beneficiary, PaymentRequest};
use crate::domain::query::PageQuery;

#[derive(Clone)]
pub struct SelectBankUseCase<B: PaymentBackend> {
	backend:     B,
	beneficiary: Beneficiary,
}

impl<B: PaymentBackend> SelectBankUseCase<B> {
	pub fn new(backend: B, beneficiary: Beneficiary) -> Self {
		Self {
			backend,
			beneficiary,
		}
	}

	pub async fn execute<P: Page>(
		&self,
		query: &PageQuery,
		bank_id: &str,
		page: &mut P,
	) -> Result<String, PageError> {
		let payment_id = query.payment_id();
		let payment = self.backend.get_payment(payment_id).await?;

		let request = PaymentRequest::for_bank(
			payment_id,
			&payment,
			&self.beneficiary,
			bank_id,
		);
		let url = self.backend.initiate_payment(&request).await?;
		info!("url: {url}");

		page.redirect(&url);
		info!("Paying with {bank_id}");

		Ok(url)
	}
}
