use log::{info, warn};

use crate::domain::backend::PaymentBackend;
use crate::domain::errors::PageError;
use crate::domain::money::format_amount;
use crate::domain::page::{ElementId, Modal, Page};
use crate::domain::payment::PaymentStatus;
use crate::domain::payment_request::Beneficiary;
use crate::domain::query::PageQuery;
use crate::use_cases::load_banks::LoadBanksUseCase;

#[derive(Clone)]
pub struct LoadPaymentUseCase<B: PaymentBackend + Clone> {
	backend:     B,
	load_banks:  LoadBanksUseCase<B>,
	beneficiary: Beneficiary,
}

impl<B: PaymentBackend + Clone> LoadPaymentUseCase<B> {
	pub fn new(backend: B, beneficiary: Beneficiary) -> Self {
		Self {
			load_banks: LoadBanksUseCase::new(backend.clone()),
			backend,
			beneficiary,
		}
	}

	/// Renders the payment details and, unless the payment already went
	/// through, the list of banks to pay with.
	pub async fn execute<P: Page>(
		&self,
		query: &PageQuery,
		page: &mut P,
	) -> Result<PaymentStatus, PageError> {
		if query.uuid.is_none() {
			warn!("Payment page opened without a uuid");
		}

		let payment = self.backend.get_payment(query.payment_id()).await?;
		info!("Fetched payment {} ({})", payment.uuid, payment.status);

		page.append_text(ElementId::PaymentUuid, &payment.uuid);
		page.append_text(ElementId::ReceiverId, &payment.receiver_id);
		page.append_text(
			ElementId::PaymentAmount,
			&format_amount(&self.beneficiary.currency_symbol, payment.amount),
		);
		page.append_text(ElementId::PaymentCurrency, &self.beneficiary.currency);
		page.append_text(ElementId::ReceiverName, &self.beneficiary.name);
		page.append_text(
			ElementId::ReceiverAccount,
			&self.beneficiary.display_account(),
		);

		match payment.status {
			PaymentStatus::Executed => {
				page.remove(ElementId::BanksCard);
				if query.notify() {
					page.show_modal(Modal::Success);
				}
			}
			PaymentStatus::Cancelled if query.notify() => {
				page.show_modal(Modal::Cancelled);
			}
			_ => {}
		}

		if !payment.status.is_executed() {
			self.load_banks.execute(query, page).await?;
		}

		page.append_status(&payment.status);

		Ok(payment.status)
	}
}
