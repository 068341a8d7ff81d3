use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, Responder, ResponseError, web};
use log::{error, info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::PayParams;
use crate::domain::backend::PaymentBackend;
use crate::domain::query::PageQuery;
use crate::infrastructure::page::html_page::HtmlPage;
use crate::use_cases::load_payment::LoadPaymentUseCase;
use crate::use_cases::select_bank::SelectBankUseCase;

pub async fn payment_page<B: PaymentBackend + Clone>(
	query: web::Query<PageQuery>,
	load_payment_use_case: web::Data<LoadPaymentUseCase<B>>,
) -> impl Responder {
	let mut page = HtmlPage::new();

	match load_payment_use_case.execute(&query, &mut page).await {
		Ok(status) => {
			info!("Rendered payment page for {} ({status})", query.payment_id());
			HttpResponse::Ok()
				.content_type(ContentType::html())
				.body(page.render())
		}
		Err(e) => {
			error!("Failed to load payment {}: {e}", query.payment_id());
			ApiError::from(e).error_response()
		}
	}
}

pub async fn pay_with_bank<B: PaymentBackend>(
	params: web::Query<PayParams>,
	select_bank_use_case: web::Data<SelectBankUseCase<B>>,
) -> impl Responder {
	let Some(bank_id) = params.bank.as_deref() else {
		warn!("Bank selection without a bank id");
		return ApiError::BadClientDataError.error_response();
	};

	let query = params.page_query();
	let mut page = HtmlPage::new();

	if let Err(e) = select_bank_use_case
		.execute(&query, bank_id, &mut page)
		.await
	{
		error!("Failed to pay {} with {bank_id}: {e}", query.payment_id());
		return ApiError::from(e).error_response();
	}

	match page.location() {
		Some(location) => HttpResponse::Found()
			.insert_header((header::LOCATION, location))
			.finish(),
		None => ApiError::InternalServerError.error_response(),
	}
}

/// Registers the payment page routes for a given backend.
pub fn configure<B: PaymentBackend + Clone>(cfg: &mut web::ServiceConfig) {
	cfg.service(web::resource("/").route(web::get().to(payment_page::<B>)))
		.service(
			web::resource("/index.html").route(web::get().to(payment_page::<B>)),
		)
		.service(web::resource("/pay").route(web::get().to(pay_with_bank::<B>)));
}
