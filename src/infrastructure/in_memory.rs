use crate::domain::ports::VehicleStore;
use crate::domain::vehicle::{Vehicle, VehicleId};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory vehicle store.
///
/// Uses `Arc<RwLock<HashMap<VehicleId, Vehicle>>>` so clones share the same
/// records. Seeding is the only write; the rental flow only reads.
#[derive(Default, Clone)]
pub struct InMemoryVehicleStore {
    vehicles: Arc<RwLock<HashMap<VehicleId, Vehicle>>>,
}

impl InMemoryVehicleStore {
    /// Creates a new, empty in-memory vehicle store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `vehicles`, keyed by id.
    pub fn with_vehicles(vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        let map = vehicles
            .into_iter()
            .map(|vehicle| (vehicle.id.clone(), vehicle))
            .collect();
        Self {
            vehicles: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn insert(&self, vehicle: Vehicle) {
        let mut vehicles = self.vehicles.write().await;
        vehicles.insert(vehicle.id.clone(), vehicle);
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn load_all(&self) -> Result<Vec<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        let mut all: Vec<Vehicle> = vehicles.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    async fn get(&self, id: &VehicleId) -> Result<Option<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn vehicle(id: &str) -> Vehicle {
        Vehicle {
            id: id.into(),
            name: format!("car {id}"),
            release_year: 2021,
            available: true,
            gas_available: true,
            base_price_per_day: Decimal::ZERO,
        }
    }

    #[tokio::test]
    async fn test_in_memory_vehicle_store() {
        let store = InMemoryVehicleStore::new();
        store.insert(vehicle("a")).await;

        let retrieved = store.get(&"a".into()).await.unwrap().unwrap();
        assert_eq!(retrieved, vehicle("a"));

        assert!(store.get(&"b".into()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_all_is_sorted_by_id() {
        let store = InMemoryVehicleStore::with_vehicles([vehicle("c"), vehicle("a"), vehicle("b")]);

        let ids: Vec<String> = store
            .load_all()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.id.0)
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let store = InMemoryVehicleStore::new();
        let clone = store.clone();
        clone.insert(vehicle("x")).await;

        assert!(store.get(&"x".into()).await.unwrap().is_some());
    }
}
