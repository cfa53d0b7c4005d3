//! Adapters translating external request formats into domain values.

pub mod json;
