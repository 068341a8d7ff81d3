use std::collections::HashMap;
use std::sync::Mutex;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

struct StubState {
	payments:           HashMap<String, Value>,
	banks:              Value,
	pay_body:           String,
	requested_payments: Mutex<Vec<String>>,
	bank_list_calls:    Mutex<usize>,
	pay_requests:       Mutex<Vec<Value>>,
}

/// Payment backend served over HTTP on an ephemeral local port.
pub struct StubBackend {
	pub url: String,
	state:   web::Data<StubState>,
	handle:  ServerHandle,
}

impl StubBackend {
	pub fn requested_payments(&self) -> Vec<String> {
		self.state.requested_payments.lock().unwrap().clone()
	}

	pub fn bank_list_calls(&self) -> usize {
		*self.state.bank_list_calls.lock().unwrap()
	}

	pub fn pay_requests(&self) -> Vec<Value> {
		self.state.pay_requests.lock().unwrap().clone()
	}

	pub async fn stop(self) {
		self.handle.stop(false).await;
	}
}

pub fn payment_json(uuid: &str, status: &str) -> Value {
	json!({
		"uuid": uuid,
		"receiver_id": "shop-42",
		"amount": 123456,
		"status": status,
		"truelayer_payment_id": ""
	})
}

pub fn banks_json() -> Value {
	json!({
		"results": [
			{
				"id": "ob-natwest",
				"logo": "https://cdn.example/natwest.svg",
				"display_name": "NatWest"
			},
			{ "id": "ob-monzo", "logo": "https://cdn.example/monzo.svg" }
		]
	})
}

async fn stub_payment(
	path: web::Path<String>,
	state: web::Data<StubState>,
) -> HttpResponse {
	let uuid = path.into_inner();
	state.requested_payments.lock().unwrap().push(uuid.clone());

	match state.payments.get(&uuid) {
		Some(payment) => HttpResponse::Ok().json(payment),
		None => HttpResponse::BadRequest().json(json!({
			"message": "Unable to process getting payment data: sql: no rows in result set"
		})),
	}
}

async fn stub_banks(state: web::Data<StubState>) -> HttpResponse {
	*state.bank_list_calls.lock().unwrap() += 1;
	HttpResponse::Ok().json(&state.banks)
}

async fn stub_pay(
	body: web::Json<Value>,
	state: web::Data<StubState>,
) -> HttpResponse {
	state.pay_requests.lock().unwrap().push(body.into_inner());
	HttpResponse::Ok()
		.content_type("application/json")
		.body(state.pay_body.clone())
}

pub async fn start_stub_backend(payments: Vec<Value>, pay_body: &str) -> StubBackend {
	let state = web::Data::new(StubState {
		payments:           payments
			.into_iter()
			.map(|p| (p["uuid"].as_str().unwrap().to_string(), p))
			.collect(),
		banks:              banks_json(),
		pay_body:           pay_body.to_string(),
		requested_payments: Mutex::new(Vec::new()),
		bank_list_calls:    Mutex::new(0),
		pay_requests:       Mutex::new(Vec::new()),
	});

	let app_state = state.clone();
	let server = HttpServer::new(move || {
		App::new()
			.app_data(app_state.clone())
			.route("/api/payment/{uuid}", web::get().to(stub_payment))
			.route("/api/banks", web::get().to(stub_banks))
			.route("/api/pay", web::post().to(stub_pay))
	})
	.workers(1)
	.bind(("127.0.0.1", 0))
	.unwrap();

	let addr = server.addrs()[0];
	let server = server.run();
	let handle = server.handle();
	actix_web::rt::spawn(server);

	StubBackend {
		url: format!("http://{addr}"),
		state,
		handle,
	}
}
