use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a vehicle record in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub String);

impl From<&str> for VehicleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for VehicleId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference data for a single rentable vehicle.
///
/// Records are loaded once from the store and never mutated; `available` is a
/// static attribute, not a reservation flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub release_year: u16,
    pub available: bool,
    #[serde(default)]
    pub gas_available: bool,
    #[serde(default, alias = "price")]
    pub base_price_per_day: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_vehicle_deserialization_from_store_record() {
        let json = r#"{
            "id": "1d4f8c",
            "name": "PT Cruiser",
            "releaseYear": 2009,
            "available": true,
            "gasAvailable": false
        }"#;

        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.id, VehicleId::from("1d4f8c"));
        assert_eq!(vehicle.release_year, 2009);
        assert!(vehicle.available);
        assert_eq!(vehicle.base_price_per_day, Decimal::ZERO);
    }

    #[test]
    fn test_vehicle_accepts_price_alias() {
        let json = r#"{"id":"a","name":"Gol","releaseYear":2020,"available":false,"price":"42.5"}"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(vehicle.base_price_per_day, dec!(42.5));
        assert!(!vehicle.gas_available);
    }
}
