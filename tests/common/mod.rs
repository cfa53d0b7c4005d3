#![allow(dead_code)]

use chrono::NaiveDate;
use rentcar::application::pricing::PricingEngine;
use rentcar::application::service::RentalService;
use rentcar::domain::category::Category;
use rentcar::domain::customer::Customer;
use rentcar::domain::ports::VehicleSelector;
use rentcar::domain::vehicle::Vehicle;
use rentcar::infrastructure::clock::FixedClock;
use rentcar::infrastructure::in_memory::InMemoryVehicleStore;
use rust_decimal::Decimal;

pub fn vehicle(id: &str, name: &str) -> Vehicle {
    Vehicle {
        id: id.into(),
        name: name.to_string(),
        release_year: 2020,
        available: true,
        gas_available: true,
        base_price_per_day: Decimal::ZERO,
    }
}

pub fn fleet() -> Vec<Vehicle> {
    vec![
        vehicle("pt-cruiser", "PT Cruiser"),
        vehicle("camaro", "Camaro"),
        vehicle("civic", "Civic"),
    ]
}

pub fn category(price: Decimal) -> Category {
    Category {
        id: "classic".to_string(),
        name: "Classic".to_string(),
        car_ids: fleet().into_iter().map(|v| v.id).collect(),
        base_price_per_day: Some(price),
    }
}

pub fn customer(age: u32) -> Customer {
    Customer::new("customer-1", "Maria Souza", age)
}

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()
}

pub fn service_with(
    store: InMemoryVehicleStore,
    selector: impl VehicleSelector + 'static,
) -> RentalService {
    RentalService::new(
        Box::new(store),
        Box::new(selector),
        PricingEngine::default(),
        Box::new(FixedClock(start_date())),
    )
}
