use log::info;

use crate::domain::backend::PaymentBackend;
use crate::domain::errors::PageError;
use crate::domain::page::{BankEntry, Page};
use crate::domain::query::PageQuery;

#[derive(Clone)]
pub struct LoadBanksUseCase<B: PaymentBackend> {
	backend: B,
}

impl<B: PaymentBackend> LoadBanksUseCase<B> {
	pub fn new(backend: B) -> Self {
		Self { backend }
	}

	/// Renders one selectable entry per bank into the banks list.
	pub async fn execute<P: Page>(
		&self,
		query: &PageQuery,
		page: &mut P,
	) -> Result<usize, PageError> {
		let banks = self.backend.list_banks().await?;
		info!("Fetched {} banks", banks.results.len());

		let payment_id = query.payment_id();
		let count = banks.results.len();

		for bank in banks.results {
			let href = BankEntry::link_for(payment_id, &bank.id);
			page.append_bank(BankEntry {
				label: bank.display_name.unwrap_or_else(|| bank.id.clone()),
				bank_id: bank.id,
				logo: bank.logo,
				href,
			});
		}

		Ok(count)
	}
}
