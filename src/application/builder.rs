use super::pricing::PricingEngine;
use super::repository::VehicleRepository;
use crate::domain::category::Category;
use crate::domain::customer::Customer;
use crate::domain::ports::ClockBox;
use crate::domain::transaction::{Transaction, validate_rental};
use crate::error::{RentalError, Result};
use chrono::Days;

/// Assembles a rental `Transaction` from a vehicle lookup and a price quote.
///
/// Each `build` runs `validate -> fetch vehicle -> price -> assemble` once,
/// with no retries.
pub struct TransactionBuilder {
    repository: VehicleRepository,
    pricing: PricingEngine,
    clock: ClockBox,
}

impl TransactionBuilder {
    pub fn new(repository: VehicleRepository, pricing: PricingEngine, clock: ClockBox) -> Self {
        Self {
            repository,
            pricing,
            clock,
        }
    }

    pub fn repository(&self) -> &VehicleRepository {
        &self.repository
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    pub async fn build(
        &self,
        customer: &Customer,
        category: &Category,
        number_of_days: u32,
    ) -> Result<Transaction> {
        validate_rental(customer, category, number_of_days)?;

        let car = self.repository.find(category).await?;
        let quote = self.pricing.quote(customer, category, number_of_days)?;

        let today = self.clock.today();
        let due_date = today
            .checked_add_days(Days::new(u64::from(number_of_days)))
            .ok_or_else(|| {
                RentalError::InvalidInput(format!(
                    "{number_of_days} days from {today} is out of calendar range"
                ))
            })?;

        tracing::info!(
            customer = %customer.id,
            vehicle = %car.id,
            amount = %quote.amount,
            %due_date,
            "rental transaction built"
        );

        Ok(Transaction {
            customer: customer.clone(),
            car,
            amount: quote.formatted,
            due_date,
        })
    }
}
