pub mod load_banks;
pub mod load_payment;
pub mod select_bank;
