//! Application layer containing the rental business rules.
//!
//! `RentalService` is the primary entry point. It wires the
//! `VehicleRepository` and `PricingEngine` into a `TransactionBuilder`, and
//! holds no mutable state of its own.

pub mod builder;
pub mod pricing;
pub mod repository;
pub mod service;
