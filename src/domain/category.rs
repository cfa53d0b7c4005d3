use super::vehicle::VehicleId;
use crate::error::{RentalError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named group of vehicles sharing one nightly base price.
///
/// The price is optional on the wire because a vehicle lookup does not need
/// it; pricing reads it through [`Category::price`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "carsIds")]
    pub car_ids: Vec<VehicleId>,
    #[serde(default, alias = "price", skip_serializing_if = "Option::is_none")]
    pub base_price_per_day: Option<Decimal>,
}

impl Category {
    /// Shape every operation relies on: an id and a non-empty id list.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(RentalError::InvalidInput(
                "category id is missing".to_string(),
            ));
        }
        if self.car_ids.is_empty() {
            return Err(RentalError::InvalidInput(format!(
                "category '{}' has no vehicles",
                self.id
            )));
        }
        Ok(())
    }

    /// Nightly base price, present and non-negative.
    pub fn price(&self) -> Result<Decimal> {
        match self.base_price_per_day {
            Some(price) if price >= Decimal::ZERO => Ok(price),
            Some(_) => Err(RentalError::InvalidInput(format!(
                "category '{}' has a negative price",
                self.id
            ))),
            None => Err(RentalError::InvalidInput(format!(
                "category '{}' has no price",
                self.id
            ))),
        }
    }
}
