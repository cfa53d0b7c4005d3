use crate::domain::vehicle::VehicleId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RentalError>;

#[derive(Error, Debug)]
pub enum RentalError {
    /// Malformed or out-of-range request fields.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Well-formed input that the pricing rules refuse, e.g. an under-age customer.
    #[error("Business rule violation: {0}")]
    BusinessRuleViolation(String),
    #[error("Vehicle unavailable: {0}")]
    VehicleUnavailable(VehicleId),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RentalError {
    /// Whether the failure is the caller's fault rather than the service's.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RentalError::InvalidInput(_) | RentalError::BusinessRuleViolation(_)
        )
    }
}
