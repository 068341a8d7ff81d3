use std::collections::{HashMap, HashSet};

use crate::domain::page::{BankEntry, ElementId, Modal, Page};
use crate::domain::payment::PaymentStatus;

/// In-memory payment page document. Controllers mutate it through [`Page`]
/// and the web layer renders it once they are done.
#[derive(Debug, Default)]
pub struct HtmlPage {
	fragments: HashMap<ElementId, Vec<String>>,
	removed:   HashSet<ElementId>,
	modals:    HashSet<Modal>,
	banks:     Vec<BankEntry>,
	location:  Option<String>,
}

impl HtmlPage {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inner HTML of an element.
	pub fn contents(&self, element: ElementId) -> String {
		if element == ElementId::BanksList {
			return self.banks.iter().map(render_bank).collect();
		}
		self.fragments
			.get(&element)
			.map(|parts| parts.concat())
			.unwrap_or_default()
	}

	pub fn banks(&self) -> &[BankEntry] {
		&self.banks
	}

	pub fn is_removed(&self, element: ElementId) -> bool {
		self.removed.contains(&element)
	}

	pub fn is_modal_shown(&self, modal: Modal) -> bool {
		self.modals.contains(&modal)
	}

	pub fn location(&self) -> Option<&str> {
		self.location.as_deref()
	}

	pub fn render(&self) -> String {
		let mut html = String::from(
			"<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta \
			 charset=\"utf-8\">\n<title>Payment</title>\n</head>\n<body>\n<div \
			 class=\"container\">\n<div class=\"card\" id=\"payment-card\">\n<dl \
			 class=\"card-body\">\n",
		);

		for (label, element) in [
			("Payment", ElementId::PaymentUuid),
			("Receiver", ElementId::ReceiverId),
			("Amount", ElementId::PaymentAmount),
			("Currency", ElementId::PaymentCurrency),
			("Receiver name", ElementId::ReceiverName),
			("Receiver account", ElementId::ReceiverAccount),
			("Status", ElementId::PaymentStatus),
		] {
			html.push_str(&format!(
				"<dt>{label}</dt><dd id=\"{}\">{}</dd>\n",
				element.as_str(),
				self.contents(element)
			));
		}
		html.push_str("</dl>\n</div>\n");

		if !self.is_removed(ElementId::BanksCard) {
			html.push_str(&format!(
				"<div class=\"card\" id=\"{}\">\n<div class=\"list-group\" \
				 id=\"{}\">{}</div>\n</div>\n",
				ElementId::BanksCard.as_str(),
				ElementId::BanksList.as_str(),
				self.contents(ElementId::BanksList)
			));
		}

		html.push_str(&self.render_modal(
			Modal::Success,
			"Payment completed",
			"Your payment was executed successfully.",
		));
		html.push_str(&self.render_modal(
			Modal::Cancelled,
			"Payment cancelled",
			"Your payment was cancelled. You can choose a bank to try again.",
		));

		html.push_str("</div>\n</body>\n</html>\n");
		html
	}

	fn render_modal(&self, modal: Modal, title: &str, body: &str) -> String {
		let (class, style) = if self.is_modal_shown(modal) {
			("modal show", "display:block")
		} else {
			("modal", "display:none")
		};

		format!(
			"<div class=\"{class}\" id=\"{}\" style=\"{style}\" \
			 role=\"dialog\"><div class=\"modal-dialog\"><div \
			 class=\"modal-content\"><h5 class=\"modal-title\">{title}</h5><p \
			 class=\"modal-body\">{body}</p></div></div></div>\n",
			modal.element_id()
		)
	}
}

impl Page for HtmlPage {
	fn append_text(&mut self, element: ElementId, text: &str) {
		self.fragments
			.entry(element)
			.or_default()
			.push(escape_html(text));
	}

	fn append_status(&mut self, status: &PaymentStatus) {
		self.fragments
			.entry(ElementId::PaymentStatus)
			.or_default()
			.push(format!(
				"<span style='color:{}'>{}</span>",
				status.color().as_str(),
				escape_html(status.as_str())
			));
	}

	fn append_bank(&mut self, entry: BankEntry) {
		self.banks.push(entry);
	}

	fn remove(&mut self, element: ElementId) {
		self.removed.insert(element);
	}

	fn show_modal(&mut self, modal: Modal) {
		self.modals.insert(modal);
	}

	fn redirect(&mut self, url: &str) {
		self.location = Some(url.to_string());
	}
}

fn render_bank(entry: &BankEntry) -> String {
	format!(
		"<a href='{}' class='bank list-group-item list-group-item-action \
		 border' data-bank-id='{}'><img src='{}' alt='{}' \
		 style='width:100px;height:100px'></a>",
		escape_html(&entry.href),
		escape_html(&entry.bank_id),
		escape_html(&entry.logo),
		escape_html(&entry.label)
	)
}

fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	escaped
}
