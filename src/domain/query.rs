use serde::Deserialize;

/// Value used in the payment path when the page was opened without a uuid.
pub const MISSING_PAYMENT_ID: &str = "undefined";

/// Query parameters the payment page was opened with.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct PageQuery {
	pub uuid:   Option<String>,
	pub notify: Option<String>,
}

impl PageQuery {
	pub fn new(uuid: impl Into<String>) -> Self {
		Self {
			uuid:   Some(uuid.into()),
			notify: None,
		}
	}

	pub fn notifying(mut self) -> Self {
		self.notify = Some("true".to_string());
		self
	}

	pub fn payment_id(&self) -> &str {
		self.uuid.as_deref().unwrap_or(MISSING_PAYMENT_ID)
	}

	pub fn notify(&self) -> bool {
		self.notify.as_deref() == Some("true")
	}
}
