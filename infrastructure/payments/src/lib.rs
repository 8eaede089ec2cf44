pub mod checkout_gateway;
pub mod client;
