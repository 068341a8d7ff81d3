pub mod backend;
pub mod bank;
pub mod errors;
pub mod money;
pub mod page;
pub mod payment;
pub mod payment_request;
pub mod query;
