use serde::{Deserialize, Serialize};

use crate::domain::query::PageQuery;

/// Query of the bank selection link.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PayParams {
	pub uuid: Option<String>,
	pub bank: Option<String>,
}

impl PayParams {
	pub fn page_query(&self) -> PageQuery {
		PageQuery {
			uuid:   self.uuid.clone(),
			notify: None,
		}
	}
}
