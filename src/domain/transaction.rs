use super::category::Category;
use super::customer::Customer;
use super::vehicle::Vehicle;
use crate::error::{RentalError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything needed to quote or rent: who, which category, for how long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub customer: Customer,
    #[serde(alias = "carCategory")]
    pub category: Category,
    pub number_of_days: u32,
}

impl RentalRequest {
    pub fn validate(&self) -> Result<()> {
        validate_rental(&self.customer, &self.category, self.number_of_days)
    }
}

/// Shape checks for a quote or rental, run before the store is touched.
///
/// Ages outside the tax table pass here; they are refused by pricing.
pub fn validate_rental(
    customer: &Customer,
    category: &Category,
    number_of_days: u32,
) -> Result<()> {
    category.validate()?;
    category.price()?;
    customer.validate()?;
    if number_of_days == 0 {
        return Err(RentalError::InvalidInput(
            "number of days must be positive".to_string(),
        ));
    }
    Ok(())
}

/// The outcome of a successful rental. Built per call and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub customer: Customer,
    pub car: Vehicle,
    /// Formatted with the same formatter as price quotes.
    pub amount: String,
    pub due_date: NaiveDate,
}
