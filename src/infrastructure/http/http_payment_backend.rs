use std::time::Duration;

use async_trait::async_trait;
use log::{error, info};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::backend::PaymentBackend;
use crate::domain::bank::BankList;
use crate::domain::errors::PageError;
use crate::domain::payment::Payment;
use crate::domain::payment_request::{PaymentInitiation, PaymentRequest};

/// Error body the backend answers non-2xx responses with.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
	message: String,
}

#[derive(Clone)]
pub struct HttpPaymentBackend {
	base_url:    String,
	http_client: Client,
}

impl HttpPaymentBackend {
	pub fn new(base_url: impl Into<String>, http_client: Client) -> Self {
		Self {
			base_url: base_url.into().trim_end_matches('/').to_string(),
			http_client,
		}
	}

	pub fn with_timeout(
		base_url: impl Into<String>,
		timeout: Duration,
	) -> Result<Self, PageError> {
		let http_client = Client::builder().timeout(timeout).build()?;
		Ok(Self::new(base_url, http_client))
	}

	async fn read_json<T: DeserializeOwned>(
		resp: Response,
	) -> Result<T, PageError> {
		let resp = Self::check_status(resp).await?;
		Ok(resp.json::<T>().await?)
	}

	async fn check_status(resp: Response) -> Result<Response, PageError> {
		let status = resp.status();
		if status.is_success() {
			return Ok(resp);
		}

		let body = resp.text().await?;
		let message = match serde_json::from_str::<BackendErrorBody>(&body) {
			Ok(error_body) => error_body.message,
			Err(_) => body.trim().to_string(),
		};

		error!("Backend returned non-success status {status}: {message}");

		Err(PageError::Backend {
			status: status.as_u16(),
			message,
		})
	}
}

#[async_trait]
impl PaymentBackend for HttpPaymentBackend {
	async fn get_payment(&self, payment_id: &str) -> Result<Payment, PageError> {
		let resp = self
			.http_client
			.get(format!(
				"{}/api/payment/{}",
				self.base_url,
				urlencoding::encode(payment_id)
			))
			.send()
			.await?;

		Self::read_json(resp).await
	}

	async fn list_banks(&self) -> Result<BankList, PageError> {
		let resp = self
			.http_client
			.get(format!("{}/api/banks", self.base_url))
			.send()
			.await?;

		Self::read_json(resp).await
	}

	async fn initiate_payment(
		&self,
		request: &PaymentRequest,
	) -> Result<String, PageError> {
		let resp = self
			.http_client
			.post(format!("{}/api/pay", self.base_url))
			.json(request)
			.send()
			.await?;

		let body = Self::check_status(resp).await?.text().await?;

		let json: serde_json::Value = match serde_json::from_str(&body) {
			Ok(json) => json,
			Err(e) => {
				error!("FAILED: {body}");
				return Err(PageError::InvalidResponse(e));
			}
		};
		info!("Success: {json}");

		serde_json::from_value::<PaymentInitiation>(json)
			.map(|initiation| initiation.url)
			.map_err(|_| PageError::MissingRedirectUrl)
	}
}

