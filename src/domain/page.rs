use crate::domain::payment::PaymentStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
	PaymentUuid,
	ReceiverId,
	PaymentAmount,
	PaymentCurrency,
	ReceiverName,
	ReceiverAccount,
	PaymentStatus,
	BanksCard,
	BanksList,
}

impl ElementId {
	pub fn as_str(&self) -> &'static str {
		match self {
			ElementId::PaymentUuid => "payment-uuid",
			ElementId::ReceiverId => "receiver-id",
			ElementId::PaymentAmount => "payment-amount",
			ElementId::PaymentCurrency => "payment-currency",
			ElementId::ReceiverName => "receiver-name",
			ElementId::ReceiverAccount => "receiver-account",
			ElementId::PaymentStatus => "payment-status",
			ElementId::BanksCard => "banks-card",
			ElementId::BanksList => "banks-list",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
	Success,
	Cancelled,
}

impl Modal {
	pub fn element_id(&self) -> &'static str {
		match self {
			Modal::Success => "success-modal",
			Modal::Cancelled => "cancelled-modal",
		}
	}
}

/// A selectable bank in the banks list.
#[derive(Debug, Clone, PartialEq)]
pub struct BankEntry {
	pub bank_id: String,
	pub logo:    String,
	pub label:   String,
	pub href:    String,
}

impl BankEntry {
	pub fn link_for(payment_id: &str, bank_id: &str) -> String {
		format!(
			"/pay?uuid={}&bank={}",
			urlencoding::encode(payment_id),
			urlencoding::encode(bank_id)
		)
	}
}

/// The document a page controller renders into.
pub trait Page {
	fn append_text(&mut self, element: ElementId, text: &str);
	fn append_status(&mut self, status: &PaymentStatus);
	fn append_bank(&mut self, entry: BankEntry);
	fn remove(&mut self, element: ElementId);
	fn show_modal(&mut self, modal: Modal);
	fn redirect(&mut self, url: &str);
}
