use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Payment {
	pub uuid:        String,
	pub receiver_id: String,
	/// Amount in minor currency units (pence).
	pub amount:      i64,
	pub status:      PaymentStatus,
}

/// Server-authoritative state of a payment. Statuses the page does not know
/// about are kept verbatim so they can still be displayed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
	Pending,
	Executed,
	Cancelled,
	Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
	Orange,
	Green,
	Red,
}

impl StatusColor {
	pub fn as_str(&self) -> &'static str {
		match self {
			StatusColor::Orange => "orange",
			StatusColor::Green => "green",
			StatusColor::Red => "red",
		}
	}
}

impl PaymentStatus {
	pub fn as_str(&self) -> &str {
		match self {
			PaymentStatus::Pending => "pending",
			PaymentStatus::Executed => "executed",
			PaymentStatus::Cancelled => "cancelled",
			PaymentStatus::Other(raw) => raw,
		}
	}

	pub fn color(&self) -> StatusColor {
		match self {
			PaymentStatus::Executed => StatusColor::Green,
			PaymentStatus::Cancelled => StatusColor::Red,
			PaymentStatus::Pending | PaymentStatus::Other(_) => StatusColor::Orange,
		}
	}

	pub fn is_executed(&self) -> bool {
		matches!(self, PaymentStatus::Executed)
	}
}

impl From<String> for PaymentStatus {
	fn from(raw: String) -> Self {
		match raw.as_str() {
			"pending" => PaymentStatus::Pending,
			"executed" => PaymentStatus::Executed,
			"cancelled" => PaymentStatus::Cancelled,
			_ => PaymentStatus::Other(raw),
		}
	}
}

impl From<PaymentStatus> for String {
	fn from(status: PaymentStatus) -> Self {
		status.as_str().to_string()
	}
}

impl fmt::Display for PaymentStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
