//! Domain types and the ports the application layer depends on.

pub mod category;
pub mod currency;
pub mod customer;
pub mod ports;
pub mod tax;
pub mod transaction;
pub mod vehicle;
