use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Bank {
	pub id:           String,
	pub logo:         String,
	#[serde(default)]
	pub display_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BankList {
	pub results: Vec<Bank>,
}
