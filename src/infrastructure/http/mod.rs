pub mod http_payment_backend;
