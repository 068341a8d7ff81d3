use actix_web::{App, HttpServer, web};
use log::info;

use crate::adapters::web::handlers::configure;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::http::http_payment_backend::HttpPaymentBackend;
use crate::use_cases::load_payment::LoadPaymentUseCase;
use crate::use_cases::select_bank::SelectBankUseCase;

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

pub async fn run(config: Config) -> std::io::Result<()> {
	env_logger::init();

	let backend = HttpPaymentBackend::with_timeout(
		&config.backend_url,
		config.request_timeout(),
	)
	.map_err(std::io::Error::other)?;
	let beneficiary = config.beneficiary();

	let load_payment_use_case =
		LoadPaymentUseCase::new(backend.clone(), beneficiary.clone());
	let select_bank_use_case = SelectBankUseCase::new(backend, beneficiary);

	info!(
		"Starting payment page on {}:{} (backend {})...",
		config.server_host, config.server_port, config.backend_url
	);
	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(load_payment_use_case.clone()))
			.app_data(web::Data::new(select_bank_use_case.clone()))
			.configure(configure::<HttpPaymentBackend>)
	})
	.bind((config.server_host.as_str(), config.server_port))?
	.run()
	.await
}
