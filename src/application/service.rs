use super::builder::TransactionBuilder;
use super::pricing::PricingEngine;
use super::repository::VehicleRepository;
use crate::domain::category::Category;
use crate::domain::customer::Customer;
use crate::domain::ports::{ClockBox, VehicleSelectorBox, VehicleStoreBox};
use crate::domain::transaction::Transaction;
use crate::domain::vehicle::Vehicle;
use crate::error::Result;

/// The entry point for quoting and renting vehicles.
///
/// `RentalService` owns its collaborators and keeps no state between calls,
/// so it can be shared behind an `Arc` and called concurrently. Concurrent
/// identical requests are not coordinated and may receive the same vehicle.
pub struct RentalService {
    builder: TransactionBuilder,
}

impl RentalService {
    /// Creates a new `RentalService`.
    ///
    /// # Arguments
    ///
    /// * `store` - Read access to vehicle records.
    /// * `selector` - Strategy choosing among a category's vehicles.
    /// * `pricing` - Engine holding the tax table.
    /// * `clock` - Source of the rental start date.
    pub fn new(
        store: VehicleStoreBox,
        selector: VehicleSelectorBox,
        pricing: PricingEngine,
        clock: ClockBox,
    ) -> Self {
        let repository = VehicleRepository::new(store, selector);
        Self {
            builder: TransactionBuilder::new(repository, pricing, clock),
        }
    }

    pub async fn get_available_vehicle(&self, category: &Category) -> Result<Vehicle> {
        self.builder.repository().find(category).await
    }

    pub async fn rent(
        &self,
        customer: &Customer,
        category: &Category,
        number_of_days: u32,
    ) -> Result<Transaction> {
        self.builder.build(customer, category, number_of_days).await
    }

    /// Formatted final price. Uses the same formatter as `rent`, so both
    /// agree on the amount string for identical inputs.
    pub fn calculate_final_price(
        &self,
        customer: &Customer,
        category: &Category,
        number_of_days: u32,
    ) -> Result<String> {
        let quote = self
            .builder
            .pricing()
            .quote(customer, category, number_of_days)?;
        Ok(quote.formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RentalError;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::in_memory::InMemoryVehicleStore;
    use crate::infrastructure::selection::UniformRandomSelector;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn vehicle(id: &str) -> Vehicle {
        Vehicle {
            id: id.into(),
            name: format!("car {id}"),
            release_year: 2022,
            available: true,
            gas_available: true,
            base_price_per_day: dec!(0),
        }
    }

    fn service() -> RentalService {
        RentalService::new(
            Box::new(InMemoryVehicleStore::with_vehicles([vehicle("a"), vehicle("b")])),
            Box::new(UniformRandomSelector),
            PricingEngine::default(),
            Box::new(FixedClock(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())),
        )
    }

    fn category(price: rust_decimal::Decimal) -> Category {
        Category {
            id: "compact".to_string(),
            name: "Compact".to_string(),
            car_ids: vec!["a".into(), "b".into()],
            base_price_per_day: Some(price),
        }
    }

    #[tokio::test]
    async fn test_rent_and_price_agree() {
        let service = service();
        let customer = Customer::new("c1", "Ana", 50);
        let category = category(dec!(37.6));

        let price = service.calculate_final_price(&customer, &category, 5).unwrap();
        let transaction = service.rent(&customer, &category, 5).await.unwrap();

        assert_eq!(price, "R$\u{a0}244,40");
        assert_eq!(transaction.amount, price);
        assert_eq!(transaction.due_date, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
    }

    #[tokio::test]
    async fn test_available_vehicle_is_category_member() {
        let service = service();
        let category = category(dec!(10));

        let vehicle = service.get_available_vehicle(&category).await.unwrap();
        assert!(category.car_ids.contains(&vehicle.id));
    }

    #[tokio::test]
    async fn test_lookup_needs_no_price() {
        let service = service();
        let mut unpriced = category(dec!(10));
        unpriced.base_price_per_day = None;

        let vehicle = service.get_available_vehicle(&unpriced).await.unwrap();
        assert!(unpriced.car_ids.contains(&vehicle.id));
    }

    #[test]
    fn test_price_for_minor_is_rejected() {
        let service = service();
        let customer = Customer::new("c3", "Teen", 12);

        let result = service.calculate_final_price(&customer, &category(dec!(37.6)), 5);
        assert!(matches!(result, Err(RentalError::BusinessRuleViolation(_))));
    }

    #[test]
    fn test_price_rejects_empty_category() {
        let service = service();
        let mut empty = category(dec!(37.6));
        empty.car_ids.clear();

        let result = service.calculate_final_price(&Customer::new("c1", "Ana", 40), &empty, 5);
        assert!(matches!(result, Err(RentalError::InvalidInput(_))));
    }
}
